use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character into the reference catalog
    pub async fn create(
        &self,
        name: String,
        eye_color: Option<String>,
        gender: Option<String>,
        hair_color: Option<String>,
    ) -> Result<entity::character::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            eye_color: ActiveValue::Set(eye_color),
            gender: ActiveValue::Set(gender),
            hair_color: ActiveValue::Set(hair_color),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces the descriptive fields wholesale and refreshes the edited
    /// timestamp; created is preserved
    pub async fn update(
        &self,
        character_id: i32,
        name: String,
        eye_color: Option<String>,
        gender: Option<String>,
        hair_color: Option<String>,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(name);
        character_am.eye_color = ActiveValue::Set(eye_color);
        character_am.gender = ActiveValue::Set(gender);
        character_am.hair_color = ActiveValue::Set(hair_color);
        character_am.edited = ActiveValue::Set(Utc::now().naive_utc());

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Fails with a foreign-key violation while favorite links still
    /// reference the character; links must clear or drop their target first.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use starfav_test_utils::prelude::*;

        use crate::data::character::CharacterRepository;

        /// Expect the inserted row to carry the provided descriptive fields
        #[tokio::test]
        async fn creates_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo
                .create(
                    "Luke Skywalker".to_string(),
                    Some("blue".to_string()),
                    None,
                    None,
                )
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.name, "Luke Skywalker");
            assert_eq!(created.eye_color.as_deref(), Some("blue"));
            assert_eq!(created.gender, None);
            assert_eq!(created.hair_color, None);
            assert_eq!(created.created, created.edited);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo
                .create("Luke Skywalker".to_string(), None, None, None)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use starfav_test_utils::prelude::*;

        use crate::data::character::CharacterRepository;

        /// Expect Ok(Some(_)) for an existing character
        #[tokio::test]
        async fn finds_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let character_model = test.catalog().insert_character("Luke Skywalker").await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.get_by_id(character_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) for a character that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.get_by_id(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect the full catalog ordered by name
        #[tokio::test]
        async fn lists_characters_by_name() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            test.catalog().insert_character("Luke Skywalker").await?;
            test.catalog().insert_character("Leia Organa").await?;

            let character_repo = CharacterRepository::new(&test.db);
            let characters = character_repo.list().await?;

            let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Leia Organa", "Luke Skywalker"]);

            Ok(())
        }
    }

    mod update {
        use starfav_test_utils::prelude::*;

        use crate::data::character::CharacterRepository;

        /// Expect descriptive fields to be replaced and edited refreshed
        #[tokio::test]
        async fn updates_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let character_model = test.catalog().insert_character("Luke Skywalker").await?;

            // Ensure the refreshed timestamp is measurably later
            std::thread::sleep(std::time::Duration::from_millis(5));

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo
                .update(
                    character_model.id,
                    "Luke Skywalker".to_string(),
                    Some("blue".to_string()),
                    Some("male".to_string()),
                    None,
                )
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.hair_color, None);
            assert_eq!(updated.created, character_model.created);
            assert!(updated.edited > character_model.edited);

            Ok(())
        }

        /// Expect Ok(None) when the character does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo
                .update(1, "Luke Skywalker".to_string(), None, None, None)
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use starfav_test_utils::prelude::*;

        use crate::data::character::CharacterRepository;

        /// Expect success when deleting an unreferenced character
        #[tokio::test]
        async fn deletes_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let character_model = test.catalog().insert_character("Luke Skywalker").await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.delete(character_model.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            Ok(())
        }

        /// Expect Error while a favorite link still references the character
        #[tokio::test]
        async fn blocked_while_favorites_reference_character() -> Result<(), TestError> {
            let test = test_setup_with_favorites_tables!()?;
            let user_model = test.user().insert_user("luke").await?;
            let character_model = test.catalog().insert_character("Luke Skywalker").await?;
            test.favorite()
                .insert_favorite_character(user_model.id, Some(character_model.id))
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.delete(character_model.id).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
