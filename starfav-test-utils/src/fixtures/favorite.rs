//! Favorite link row insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel},
    setup::TestSetup,
};

pub struct FavoriteFixtures<'a> {
    pub(crate) setup: &'a TestSetup,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite-character link. `character_id` may be `None` to
    /// produce a link without a target.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: Option<i32>,
    ) -> Result<FavoriteCharacterModel, TestError> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    /// Insert a favorite-planet link. `planet_id` may be `None` to produce a
    /// link without a target.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
    ) -> Result<FavoritePlanetModel, TestError> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }
}
