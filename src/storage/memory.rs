use super::{Store, seed};
use crate::{
    config::{IdMode, StoreSettings},
    error::{PaddockError, Result},
    model::{Driver, Race},
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An ordered collection plus the highest id it has ever held.
struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Table<T> {
    fn new(rows: Vec<T>, id_of: impl Fn(&T) -> i32) -> Self {
        let last_id = rows.iter().map(id_of).max().unwrap_or(0);
        Self { rows, last_id }
    }

    fn next_id(&mut self, mode: IdMode) -> i32 {
        let id = match mode {
            IdMode::Count => self.rows.len() as i32 + 1,
            IdMode::Monotonic => self.last_id + 1,
        };
        self.last_id = self.last_id.max(id);
        id
    }
}

struct Tables {
    drivers: Table<Driver>,
    races: Table<Race>,
}

/// Process-local [`Store`] backed by two vectors. Nothing survives a restart.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    id_mode: IdMode,
    strict_winner: bool,
}

impl MemoryStore {
    pub fn new(settings: &StoreSettings) -> Self {
        let (drivers, races) = if settings.seed {
            (seed::drivers(), seed::races())
        } else {
            (Vec::new(), Vec::new())
        };
        tracing::debug!(
            drivers = drivers.len(),
            races = races.len(),
            id_mode = ?settings.id_mode,
            "Initializing in-memory store"
        );
        Self::with_data(drivers, races)
            .with_id_mode(settings.id_mode)
            .with_strict_winner(settings.strict_winner)
    }

    pub fn with_data(drivers: Vec<Driver>, races: Vec<Race>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                drivers: Table::new(drivers, |d| d.id),
                races: Table::new(races, |r| r.id),
            }),
            id_mode: IdMode::default(),
            strict_winner: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    pub fn with_id_mode(mut self, id_mode: IdMode) -> Self {
        self.id_mode = id_mode;
        self
    }

    pub fn with_strict_winner(mut self, strict_winner: bool) -> Self {
        self.strict_winner = strict_winner;
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| PaddockError::Storage("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| PaddockError::Storage("store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(&StoreSettings::default())
    }
}

impl Store for MemoryStore {
    fn list_drivers(&self) -> Result<Vec<Driver>> {
        Ok(self.read()?.drivers.rows.clone())
    }

    fn get_driver(&self, id: i32) -> Result<Option<Driver>> {
        let tables = self.read()?;
        Ok(tables.drivers.rows.iter().find(|d| d.id == id).cloned())
    }

    fn add_driver(&self, name: String) -> Result<Driver> {
        let mut tables = self.write()?;
        let id = tables.drivers.next_id(self.id_mode);
        let driver = Driver::new(id, name);
        tracing::info!(id = driver.id, name = %driver.name, "Adding driver");
        tables.drivers.rows.push(driver.clone());
        Ok(driver)
    }

    fn remove_driver(&self, id: i32) -> Result<Driver> {
        let mut tables = self.write()?;
        let Some(index) = tables.drivers.rows.iter().position(|d| d.id == id) else {
            tracing::debug!(id, "Driver to remove does not exist");
            return Err(PaddockError::driver_not_found(id));
        };
        let driver = tables.drivers.rows.remove(index);
        tracing::info!(id = driver.id, name = %driver.name, "Removed driver");
        Ok(driver)
    }

    fn list_races(&self) -> Result<Vec<Race>> {
        Ok(self.read()?.races.rows.clone())
    }

    fn get_race(&self, id: i32) -> Result<Option<Race>> {
        let tables = self.read()?;
        Ok(tables.races.rows.iter().find(|r| r.id == id).cloned())
    }

    fn add_race(&self, location: String, winner_id: i32) -> Result<Race> {
        let mut tables = self.write()?;
        if self.strict_winner && !tables.drivers.rows.iter().any(|d| d.id == winner_id) {
            return Err(PaddockError::Validation(format!(
                "winnerId {} does not reference an existing driver",
                winner_id
            )));
        }
        let id = tables.races.next_id(self.id_mode);
        let race = Race::new(id, location, winner_id);
        tracing::info!(id = race.id, location = %race.location, winner_id, "Adding race");
        tables.races.rows.push(race.clone());
        Ok(race)
    }

    fn races_won_by(&self, driver_id: i32) -> Result<Vec<Race>> {
        let tables = self.read()?;
        Ok(tables
            .races
            .rows
            .iter()
            .filter(|r| r.winner_id == driver_id)
            .cloned()
            .collect())
    }
}
