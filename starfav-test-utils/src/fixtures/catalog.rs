//! Catalog row insertion utilities for characters and planets.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel},
    setup::TestSetup,
};

pub struct CatalogFixtures<'a> {
    pub(crate) setup: &'a TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a character with the given name and standard descriptive values.
    pub async fn insert_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        let now = Utc::now().naive_utc();

        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            gender: ActiveValue::Set(Some("male".to_string())),
            hair_color: ActiveValue::Set(Some("blond".to_string())),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(character.insert(&self.setup.db).await?)
    }

    /// Insert a planet with the given name and standard descriptive values.
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            diameter: ActiveValue::Set(Some(10465.0)),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set(Some("desert".to_string())),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(planet.insert(&self.setup.db).await?)
    }
}
