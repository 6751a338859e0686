use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{CharacterDto, PlanetDto};

/// Resolution state of a favorite link's target.
///
/// Link rows carry a nullable foreign key, so a favorite can exist without a
/// live target (never set, or the target row was deleted since). Serialization
/// is total over both states: an absent target becomes an explicit
/// `unresolved` marker instead of a failure at dereference time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", content = "target", rename_all = "snake_case")]
pub enum FavoriteTarget<T> {
    Resolved(T),
    Unresolved,
}

impl<T> From<Option<T>> for FavoriteTarget<T> {
    fn from(target: Option<T>) -> Self {
        match target {
            Some(target) => Self::Resolved(target),
            None => Self::Unresolved,
        }
    }
}

/// A user's favorite-character link with its resolved target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub created: NaiveDateTime,
    pub character: FavoriteTarget<CharacterDto>,
}

impl From<(entity::favorite_character::Model, Option<entity::character::Model>)>
    for FavoriteCharacterDto
{
    fn from(
        (favorite, character): (
            entity::favorite_character::Model,
            Option<entity::character::Model>,
        ),
    ) -> Self {
        Self {
            id: favorite.id,
            created: favorite.created,
            character: character.map(CharacterDto::from).into(),
        }
    }
}

/// A user's favorite-planet link with its resolved target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub created: NaiveDateTime,
    pub planet: FavoriteTarget<PlanetDto>,
}

impl From<(entity::favorite_planet::Model, Option<entity::planet::Model>)> for FavoritePlanetDto {
    fn from(
        (favorite, planet): (
            entity::favorite_planet::Model,
            Option<entity::planet::Model>,
        ),
    ) -> Self {
        Self {
            id: favorite.id,
            created: favorite.created,
            planet: planet.map(PlanetDto::from).into(),
        }
    }
}

/// All favorites of one user, grouped by target kind.
///
/// Both collections are always present; a user without favorites serializes
/// to two empty arrays rather than nulls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoritesDto {
    pub characters: Vec<FavoriteCharacterDto>,
    pub planets: Vec<FavoritePlanetDto>,
}
