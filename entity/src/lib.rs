pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod prelude;
pub mod user;
