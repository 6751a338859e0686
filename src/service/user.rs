use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::Error, model::user::UserDto};

/// Service for user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user from route-layer-validated field values and returns its
    /// external representation.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User created; the DTO never carries the password
    /// - `Err(Error::DbErr)` - Storage failure, including uniqueness
    ///   violations on username or email
    pub async fn create_user(
        &self,
        username: String,
        password: String,
        email: Option<String>,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.create(username, password, email).await?;

        tracing::info!("created user ID {}", user.id);

        Ok(UserDto::from(user))
    }

    /// Retrieves a user's external representation.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Storage failure
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID existed
    /// - `Err(Error::DbErr)` - Storage failure, including the foreign-key
    ///   violation raised while favorite links still reference the user
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        let result = user_repo.delete(user_id).await?;

        Ok(result.rows_affected > 0)
    }
}
