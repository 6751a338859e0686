use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user from route-layer-validated values
    ///
    /// Fails with a uniqueness violation when the username, or a non-null
    /// email, is already taken.
    pub async fn create(
        &self,
        username: String,
        password: String,
        email: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password),
            email: ActiveValue::Set(email),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Replaces the user's email and refreshes the edited timestamp
    pub async fn update_email(
        &self,
        user_id: i32,
        email: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(email);
        user_am.edited = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; check the
    /// [`DeleteResult::rows_affected`] field to confirm the deletion. Fails
    /// with a foreign-key violation while favorite links still reference the
    /// user.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
