use sea_orm::DatabaseConnection;

use crate::{
    data::{
        favorite::{FavoriteCharacterRepository, FavoritePlanetRepository},
        user::UserRepository,
    },
    error::Error,
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto, FavoritesDto},
};

/// Service for managing and serializing a user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all favorites of a user, grouped by target kind.
    ///
    /// Links whose target was never set or has since been deleted appear with
    /// an explicit unresolved marker rather than failing.
    ///
    /// # Returns
    /// - `Ok(Some(FavoritesDto))` - User found; both collections present,
    ///   empty when the user has no favorites
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Storage failure
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Option<FavoritesDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        let characters = FavoriteCharacterRepository::new(self.db)
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(FavoriteCharacterDto::from)
            .collect();

        let planets = FavoritePlanetRepository::new(self.db)
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(FavoritePlanetDto::from)
            .collect();

        Ok(Some(FavoritesDto {
            characters,
            planets,
        }))
    }

    /// Marks a character as a favorite of the user.
    pub async fn favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        let favorite = favorite_repo.create(user_id, Some(character_id)).await?;

        tracing::info!(
            "user ID {} favorited character ID {}",
            user_id,
            character_id
        );

        // Re-read through the relation so the DTO carries the resolved target
        let favorites = favorite_repo.find_by_user(user_id).await?;
        let entry = favorites
            .into_iter()
            .find(|(link, _)| link.id == favorite.id)
            .map(FavoriteCharacterDto::from)
            .unwrap_or_else(|| FavoriteCharacterDto::from((favorite, None)));

        Ok(entry)
    }

    /// Marks a planet as a favorite of the user.
    pub async fn favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let favorite = favorite_repo.create(user_id, Some(planet_id)).await?;

        tracing::info!("user ID {} favorited planet ID {}", user_id, planet_id);

        let favorites = favorite_repo.find_by_user(user_id).await?;
        let entry = favorites
            .into_iter()
            .find(|(link, _)| link.id == favorite.id)
            .map(FavoritePlanetDto::from)
            .unwrap_or_else(|| FavoritePlanetDto::from((favorite, None)));

        Ok(entry)
    }

    /// Removes a user's favorite-character link.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one link was removed
    /// - `Ok(false)` - No matching link existed
    pub async fn unfavorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<bool, Error> {
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        let result = favorite_repo.remove(user_id, character_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a user's favorite-planet link.
    pub async fn unfavorite_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, Error> {
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let result = favorite_repo.remove(user_id, planet_id).await?;

        Ok(result.rows_affected > 0)
    }
}
