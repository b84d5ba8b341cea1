use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::config::ServerSettings;
use crate::storage::SharedStore;

use super::types::*;

pub type PaddockSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` available to every resolver.
pub fn build_schema(store: SharedStore, settings: &ServerSettings) -> PaddockSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(settings.max_depth)
        .limit_complexity(settings.max_complexity)
        .finish()
}

/// Lists are exposed as `[T]`, nullable list and items.
pub(super) fn nullable_list<M, T: From<M>>(rows: Vec<M>) -> Vec<Option<T>> {
    rows.into_iter().map(|row| Some(T::from(row))).collect()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of Races
    async fn races(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Race>>>> {
        let races = store(ctx)?.list_races().map_err(|e| e.extend())?;
        Ok(Some(nullable_list(races)))
    }

    /// A Race
    async fn race(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Race>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let race = store(ctx)?.get_race(id).map_err(|e| e.extend())?;
        tracing::debug!(id, found = race.is_some(), "Race lookup");
        Ok(race.map(Race::from))
    }

    /// List of Drivers
    async fn drivers(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Driver>>>> {
        let drivers = store(ctx)?.list_drivers().map_err(|e| e.extend())?;
        Ok(Some(nullable_list(drivers)))
    }

    /// A Driver
    async fn driver(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Driver>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let driver = store(ctx)?.get_driver(id).map_err(|e| e.extend())?;
        tracing::debug!(id, found = driver.is_some(), "Driver lookup");
        Ok(driver.map(Driver::from))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a race
    async fn add_race(
        &self,
        ctx: &Context<'_>,
        location: String,
        winner_id: i32,
    ) -> async_graphql::Result<Option<Race>> {
        let race = store(ctx)?
            .add_race(location, winner_id)
            .map_err(|e| e.extend())?;
        Ok(Some(race.into()))
    }

    /// Add a driver
    async fn add_driver(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Driver>> {
        let driver = store(ctx)?.add_driver(name).map_err(|e| e.extend())?;
        Ok(Some(driver.into()))
    }

    /// Remove a driver
    async fn remove_driver(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<Option<Driver>> {
        let driver = store(ctx)?.remove_driver(id).map_err(|e| e.extend())?;
        Ok(Some(driver.into()))
    }
}
