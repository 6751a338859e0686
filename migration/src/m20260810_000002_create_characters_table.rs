use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string(Characters::Name))
                    .col(string_null(Characters::EyeColor))
                    .col(string_null(Characters::Gender))
                    .col(string_null(Characters::HairColor))
                    .col(timestamp(Characters::Created))
                    .col(timestamp(Characters::Edited))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    EyeColor,
    Gender,
    HairColor,
    Created,
    Edited,
}
