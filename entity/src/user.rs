use sea_orm::entity::prelude::*;

/// A registered account that can mark characters and planets as favorites.
///
/// `password` is stored as provided by the route layer and is never part of
/// any serialized representation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
