use crate::model::{Driver, Race};

pub fn drivers() -> Vec<Driver> {
    vec![
        Driver::new(1, "Fernando Alonso"),
        Driver::new(2, "Max Verstappen"),
        Driver::new(3, "Charles Leclerc"),
    ]
}

pub fn races() -> Vec<Race> {
    vec![
        Race::new(1, "Brazil", 2),
        Race::new(2, "Texas", 3),
        Race::new(3, "Spa-Francorchamps", 2),
        Race::new(4, "Mexico", 2),
        Race::new(5, "Bahrain", 1),
        Race::new(6, "Austria", 3),
        Race::new(7, "Zandvoort", 2),
    ]
}
