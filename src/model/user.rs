use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// External representation of a user account.
///
/// Carries only the identifier, optional email, and timestamps. The password
/// column is write-only and must never reach an API response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub email: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created: user.created,
            edited: user.edited,
        }
    }
}

#[cfg(test)]
mod tests {
    use starfav_test_utils::prelude::*;

    use crate::model::user::UserDto;

    /// Serialized users must never expose the password column
    #[test]
    fn serialization_omits_password() {
        let user = factory::mock_user_model(1);

        let dto = UserDto::from(user);
        let value = serde_json::to_value(&dto).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("username"));
        assert!(object.contains_key("id"));
        assert!(object.contains_key("email"));
        assert!(object.contains_key("created"));
        assert!(object.contains_key("edited"));
    }
}
