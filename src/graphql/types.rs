use crate::model;
use async_graphql::{ComplexObject, Context, ErrorExtensions, SimpleObject};

use super::schema::{nullable_list, store};

/// This represents a driver
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Driver {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Driver {
    /// This represents a race won by the driver
    async fn race_wins(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Race>>>> {
        let races = store(ctx)?
            .races_won_by(self.id)
            .map_err(|e| e.extend())?;
        Ok(Some(nullable_list(races)))
    }
}

impl From<model::Driver> for Driver {
    fn from(d: model::Driver) -> Self {
        Self {
            id: d.id,
            name: d.name,
        }
    }
}

/// This represents a race
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Race {
    pub id: i32,
    pub location: String,
    pub winner_id: i32,
}

#[ComplexObject]
impl Race {
    /// The driver who won the race, or null if they no longer exist
    async fn driver(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Driver>> {
        let driver = store(ctx)?
            .get_driver(self.winner_id)
            .map_err(|e| e.extend())?;
        if driver.is_none() {
            tracing::debug!(
                race = self.id,
                winner_id = self.winner_id,
                "Dangling winner reference"
            );
        }
        Ok(driver.map(Driver::from))
    }
}

impl From<model::Race> for Race {
    fn from(r: model::Race) -> Self {
        Self {
            id: r.id,
            location: r.location,
            winner_id: r.winner_id,
        }
    }
}
