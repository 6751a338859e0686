//! User row insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, setup::TestSetup};

pub struct UserFixtures<'a> {
    pub(crate) setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the given username, no email, and the standard
    /// placeholder password hash.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert(username, None).await
    }

    /// Insert a user with the given username and email.
    pub async fn insert_user_with_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(username, Some(email.to_string())).await
    }

    async fn insert(&self, username: &str, email: Option<String>) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            email: ActiveValue::Set(email),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}
