use crate::error::Result;
use crate::model::{Driver, Race};

/// Access to the driver and race collections.
///
/// Resolvers only see this trait, so a persistent backend can replace
/// [`MemoryStore`](super::MemoryStore) without touching the GraphQL layer.
/// Lookups return `Ok(None)` for unknown ids; only [`Store::remove_driver`]
/// treats an unknown id as an error.
pub trait Store: Send + Sync {
    /// All drivers in insertion order.
    fn list_drivers(&self) -> Result<Vec<Driver>>;

    fn get_driver(&self, id: i32) -> Result<Option<Driver>>;

    fn add_driver(&self, name: String) -> Result<Driver>;

    /// Remove the first driver with `id` and return it.
    ///
    /// Races won by the driver are left as they are.
    fn remove_driver(&self, id: i32) -> Result<Driver>;

    /// All races in insertion order.
    fn list_races(&self) -> Result<Vec<Race>>;

    fn get_race(&self, id: i32) -> Result<Option<Race>>;

    fn add_race(&self, location: String, winner_id: i32) -> Result<Race>;

    /// Races whose winner is `driver_id`, in insertion order.
    fn races_won_by(&self, driver_id: i32) -> Result<Vec<Race>> {
        let mut races = self.list_races()?;
        races.retain(|r| r.winner_id == driver_id);
        Ok(races)
    }
}
