use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// External representation of a catalog character.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            eye_color: character.eye_color,
            gender: character.gender,
            hair_color: character.hair_color,
            created: character.created,
            edited: character.edited,
        }
    }
}

/// External representation of a catalog planet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<f64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            climate: planet.climate,
            terrain: planet.terrain,
            created: planet.created,
            edited: planet.edited,
        }
    }
}
