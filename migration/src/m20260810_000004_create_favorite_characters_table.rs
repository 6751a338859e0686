use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260810_000001_create_users_table::Users,
    m20260810_000002_create_characters_table::Characters,
};

static FK_FAVORITE_CHARACTERS_USER_ID: &str = "fk_favorite_characters_user_id";
static FK_FAVORITE_CHARACTERS_CHARACTER_ID: &str = "fk_favorite_characters_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer_null(FavoriteCharacters::CharacterId))
                    .col(timestamp(FavoriteCharacters::Created))
                    .to_owned(),
            )
            .await?;

        // No cascade action: deleting a user or character with surviving
        // links is blocked by the constraint.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTERS_USER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTERS_CHARACTER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::CharacterId)
                    .to_tbl(Characters::Table)
                    .to_col(Characters::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTERS_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTERS_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
    Created,
}
