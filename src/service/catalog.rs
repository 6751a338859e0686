use sea_orm::DatabaseConnection;

use crate::{
    data::{character::CharacterRepository, planet::PlanetRepository},
    error::Error,
    model::catalog::{CharacterDto, PlanetDto},
};

/// Service for reading the reference catalog of characters and planets.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a character's external representation.
    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        Ok(character_repo
            .get_by_id(character_id)
            .await?
            .map(CharacterDto::from))
    }

    /// Lists the character catalog ordered by name.
    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        Ok(character_repo
            .list()
            .await?
            .into_iter()
            .map(CharacterDto::from)
            .collect())
    }

    /// Retrieves a planet's external representation.
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        Ok(planet_repo.get_by_id(planet_id).await?.map(PlanetDto::from))
    }

    /// Lists the planet catalog ordered by name.
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        Ok(planet_repo
            .list()
            .await?
            .into_iter()
            .map(PlanetDto::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {

    mod get_character {
        use starfav_test_utils::prelude::*;

        use crate::service::catalog::CatalogService;

        /// Expect the serialized record to carry all descriptive fields
        #[tokio::test]
        async fn serializes_descriptive_fields() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let character_model = test.catalog().insert_character("Luke Skywalker").await?;

            let catalog_service = CatalogService::new(&test.db);
            let dto = catalog_service
                .get_character(character_model.id)
                .await
                .unwrap()
                .unwrap();

            let value = serde_json::to_value(&dto).unwrap();
            assert_eq!(value["id"], character_model.id);
            assert_eq!(value["name"], "Luke Skywalker");
            assert_eq!(value["eye_color"], "blue");
            assert!(value.get("created").is_some());
            assert!(value.get("edited").is_some());

            Ok(())
        }

        /// Expect Ok(None) when the character does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let catalog_service = CatalogService::new(&test.db);
            let result = catalog_service.get_character(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_planet {
        use starfav_test_utils::prelude::*;

        use crate::service::catalog::CatalogService;

        /// Expect the serialized record to carry all descriptive fields
        #[tokio::test]
        async fn serializes_descriptive_fields() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let planet_model = test.catalog().insert_planet("Tatooine").await?;

            let catalog_service = CatalogService::new(&test.db);
            let dto = catalog_service
                .get_planet(planet_model.id)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(dto.name, "Tatooine");
            assert_eq!(dto.diameter, Some(10465.0));
            assert_eq!(dto.climate.as_deref(), Some("arid"));
            assert_eq!(dto.terrain.as_deref(), Some("desert"));

            Ok(())
        }
    }

    mod list {
        use starfav_test_utils::prelude::*;

        use crate::service::catalog::CatalogService;

        /// Expect both catalogs to list in name order
        #[tokio::test]
        async fn lists_catalog_in_name_order() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            test.catalog().insert_character("Luke Skywalker").await?;
            test.catalog().insert_character("Han Solo").await?;
            test.catalog().insert_planet("Tatooine").await?;

            let catalog_service = CatalogService::new(&test.db);

            let characters = catalog_service.list_characters().await.unwrap();
            let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Han Solo", "Luke Skywalker"]);

            let planets = catalog_service.list_planets().await.unwrap();
            assert_eq!(planets.len(), 1);

            Ok(())
        }
    }
}
