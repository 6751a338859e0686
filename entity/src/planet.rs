use sea_orm::entity::prelude::*;

/// A planet from the reference catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<f64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
