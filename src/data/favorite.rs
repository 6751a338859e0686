use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite-character link for a user
    ///
    /// `character_id` may be `None`; the link then has no target until one is
    /// assigned. Fails with a foreign-key violation when `user_id` does not
    /// reference an existing user.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: Option<i32>,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Returns all of a user's favorite-character links with their targets
    /// eagerly resolved; a deleted or unset target yields `None`
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::favorite_character::Model,
            Option<entity::character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::FavoriteCharacter::find()
            .find_also_related(entity::character::Entity)
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Removes a user's link(s) to the given character
    pub async fn remove(&self, user_id: i32, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await
    }
}

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite-planet link for a user
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Returns all of a user's favorite-planet links with their targets
    /// eagerly resolved
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::favorite_planet::Model,
            Option<entity::planet::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::FavoritePlanet::find()
            .find_also_related(entity::planet::Entity)
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Removes a user's link(s) to the given planet
    pub async fn remove(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }
}
