use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{catalog::CatalogFixtures, favorite::FavoriteFixtures, user::UserFixtures},
};

/// Shared test environment backed by an in-memory SQLite database.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helpers for user rows.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }

    /// Fixture helpers for catalog rows (characters and planets).
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }

    /// Fixture helpers for favorite link rows.
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_favorites_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
