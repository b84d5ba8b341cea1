//! Data models for paddock.
//!
//! - [`Driver`]: a racing driver
//! - [`Race`]: a race and the id of the driver who won it

mod driver;
mod race;

pub use driver::Driver;
pub use race::Race;
