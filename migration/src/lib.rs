pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_characters_table;
mod m20260810_000003_create_planets_table;
mod m20260810_000004_create_favorite_characters_table;
mod m20260810_000005_create_favorite_planets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_characters_table::Migration),
            Box::new(m20260810_000003_create_planets_table::Migration),
            Box::new(m20260810_000004_create_favorite_characters_table::Migration),
            Box::new(m20260810_000005_create_favorite_planets_table::Migration),
        ]
    }
}
