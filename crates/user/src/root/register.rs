use afisha_shared::user::Role;
use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{UserRow, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 64))]
    pub password: String,
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

impl super::Command {
    /// Registers a regular user account. Organizer rights come later,
    /// through the organizer-request workflow.
    pub async fn register(&self, input: RegisterInput) -> afisha_shared::Result<UserRow> {
        input.validate()?;

        if self.find_by_email(&input.email).await?.is_some() {
            afisha_shared::conflict!("user with this email already exists");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let row = UserRow {
            id: Ulid::new().to_string(),
            email: input.email,
            password: password_hash,
            full_name: input.full_name,
            avatar_url: None,
            phone: None,
            telegram: None,
            about: None,
            preferences: None,
            role: Text(Role::User),
            blocked: false,
            created_at: now,
            updated_at: now,
        };

        repository::create(&self.write_db, &row).await?;

        Ok(row)
    }
}
