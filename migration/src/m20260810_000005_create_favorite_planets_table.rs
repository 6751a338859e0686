use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260810_000001_create_users_table::Users, m20260810_000003_create_planets_table::Planets,
};

static FK_FAVORITE_PLANETS_USER_ID: &str = "fk_favorite_planets_user_id";
static FK_FAVORITE_PLANETS_PLANET_ID: &str = "fk_favorite_planets_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer_null(FavoritePlanets::PlanetId))
                    .col(timestamp(FavoritePlanets::Created))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANETS_USER_ID)
                    .from_tbl(FavoritePlanets::Table)
                    .from_col(FavoritePlanets::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANETS_PLANET_ID)
                    .from_tbl(FavoritePlanets::Table)
                    .from_col(FavoritePlanets::PlanetId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANETS_USER_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
    Created,
}
