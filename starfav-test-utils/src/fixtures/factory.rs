//! Factory functions for in-memory entity models.
//!
//! These build model instances without touching the database, suitable for
//! unit tests of DTO conversion and serialization.

use chrono::Utc;

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME},
    model::{CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel},
};

/// Create a user model with standard test values.
pub fn mock_user_model(id: i32) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        email: Some(TEST_EMAIL.to_string()),
        created: now,
        edited: now,
    }
}

/// Create a character model with standard test values.
pub fn mock_character_model(id: i32) -> CharacterModel {
    let now = Utc::now().naive_utc();
    CharacterModel {
        id,
        name: "Test Character".to_string(),
        eye_color: Some("blue".to_string()),
        gender: None,
        hair_color: None,
        created: now,
        edited: now,
    }
}

/// Create a planet model with standard test values.
pub fn mock_planet_model(id: i32) -> PlanetModel {
    let now = Utc::now().naive_utc();
    PlanetModel {
        id,
        name: "Test Planet".to_string(),
        diameter: Some(12500.0),
        climate: Some("temperate".to_string()),
        terrain: None,
        created: now,
        edited: now,
    }
}

/// Create a favorite-character link model with an optional target.
pub fn mock_favorite_character_model(
    id: i32,
    user_id: i32,
    character_id: Option<i32>,
) -> FavoriteCharacterModel {
    FavoriteCharacterModel {
        id,
        user_id,
        character_id,
        created: Utc::now().naive_utc(),
    }
}

/// Create a favorite-planet link model with an optional target.
pub fn mock_favorite_planet_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
) -> FavoritePlanetModel {
    FavoritePlanetModel {
        id,
        user_id,
        planet_id,
        created: Utc::now().naive_utc(),
    }
}
