use sea_orm::entity::prelude::*;

/// A character from the reference catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
