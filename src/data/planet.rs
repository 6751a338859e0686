use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet into the reference catalog
    pub async fn create(
        &self,
        name: String,
        diameter: Option<f64>,
        climate: Option<String>,
        terrain: Option<String>,
    ) -> Result<entity::planet::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            diameter: ActiveValue::Set(diameter),
            climate: ActiveValue::Set(climate),
            terrain: ActiveValue::Set(terrain),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces the descriptive fields wholesale and refreshes the edited
    /// timestamp; created is preserved
    pub async fn update(
        &self,
        planet_id: i32,
        name: String,
        diameter: Option<f64>,
        climate: Option<String>,
        terrain: Option<String>,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(name);
        planet_am.diameter = ActiveValue::Set(diameter);
        planet_am.climate = ActiveValue::Set(climate);
        planet_am.terrain = ActiveValue::Set(terrain);
        planet_am.edited = ActiveValue::Set(Utc::now().naive_utc());

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Fails with a foreign-key violation while favorite links still
    /// reference the planet.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use starfav_test_utils::prelude::*;

        use crate::data::planet::PlanetRepository;

        /// Expect the inserted row to carry the provided descriptive fields
        #[tokio::test]
        async fn creates_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo
                .create(
                    "Tatooine".to_string(),
                    Some(10465.0),
                    Some("arid".to_string()),
                    Some("desert".to_string()),
                )
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.name, "Tatooine");
            assert_eq!(created.diameter, Some(10465.0));
            assert_eq!(created.climate.as_deref(), Some("arid"));
            assert_eq!(created.terrain.as_deref(), Some("desert"));

            Ok(())
        }
    }

    mod get {
        use starfav_test_utils::prelude::*;

        use crate::data::planet::PlanetRepository;

        /// Expect Ok(Some(_)) for an existing planet
        #[tokio::test]
        async fn finds_existing_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let planet_model = test.catalog().insert_planet("Tatooine").await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo.get_by_id(planet_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) for a planet that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo.get_by_id(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect the full catalog ordered by name
        #[tokio::test]
        async fn lists_planets_by_name() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            test.catalog().insert_planet("Tatooine").await?;
            test.catalog().insert_planet("Alderaan").await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let planets = planet_repo.list().await?;

            let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["Alderaan", "Tatooine"]);

            Ok(())
        }
    }

    mod update {
        use starfav_test_utils::prelude::*;

        use crate::data::planet::PlanetRepository;

        /// Expect terrain to change, edited to refresh, and created to stay
        /// untouched
        #[tokio::test]
        async fn updates_terrain_and_refreshes_edited() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let planet_model = test.catalog().insert_planet("Tatooine").await?;

            // Ensure the refreshed timestamp is measurably later
            std::thread::sleep(std::time::Duration::from_millis(5));

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo
                .update(
                    planet_model.id,
                    planet_model.name.clone(),
                    planet_model.diameter,
                    planet_model.climate.clone(),
                    Some("canyons".to_string()),
                )
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.terrain.as_deref(), Some("canyons"));
            assert_eq!(updated.created, planet_model.created);
            assert!(updated.edited > planet_model.edited);

            Ok(())
        }

        /// Expect Ok(None) when the planet does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo
                .update(1, "Tatooine".to_string(), None, None, None)
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use starfav_test_utils::prelude::*;

        use crate::data::planet::PlanetRepository;

        /// Expect success when deleting an unreferenced planet
        #[tokio::test]
        async fn deletes_existing_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let planet_model = test.catalog().insert_planet("Tatooine").await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo.delete(planet_model.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            Ok(())
        }

        /// Expect Error while a favorite link still references the planet
        #[tokio::test]
        async fn blocked_while_favorites_reference_planet() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let user_model = test.user().insert_user("luke").await?;
            let planet_model = test.catalog().insert_planet("Tatooine").await?;
            test.favorite()
                .insert_favorite_planet(user_model.id, Some(planet_model.id))
                .await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo.delete(planet_model.id).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
