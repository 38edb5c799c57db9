use argon2::{Argon2, PasswordHash, PasswordVerifier};
use serde::Deserialize;
use validator::Validate;

use crate::UserRow;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Verifies credentials and returns the account row. Token minting is
    /// the HTTP layer's job. The failure message never reveals whether the
    /// email exists.
    pub async fn login(&self, input: LoginInput) -> afisha_shared::Result<UserRow> {
        input.validate()?;

        let Some(user) = self.find_by_email(input.email).await? else {
            afisha_shared::bad_request!("invalid email or password");
        };

        let parsed_hash = PasswordHash::new(&user.password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            afisha_shared::bad_request!("invalid email or password");
        }

        if user.blocked {
            afisha_shared::forbidden!("account blocked");
        }

        Ok(user)
    }
}
