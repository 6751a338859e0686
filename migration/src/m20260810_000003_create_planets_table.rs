use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string(Planets::Name))
                    .col(double_null(Planets::Diameter))
                    .col(string_null(Planets::Climate))
                    .col(string_null(Planets::Terrain))
                    .col(timestamp(Planets::Created))
                    .col(timestamp(Planets::Edited))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    Climate,
    Terrain,
    Created,
    Edited,
}
