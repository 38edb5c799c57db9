use afisha_shared::Actor;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::{UserRow, repository};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
    #[validate(length(max = 512))]
    pub avatar_url: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 64))]
    pub telegram: Option<String>,
    #[validate(length(max = 2000))]
    pub about: Option<String>,
    #[validate(length(max = 2000))]
    pub preferences: Option<String>,
}

impl super::Command {
    pub async fn update_profile(
        &self,
        actor: &Actor,
        input: UpdateProfileInput,
    ) -> afisha_shared::Result<UserRow> {
        input.validate()?;

        let Some(mut user) = self.load(&actor.id).await? else {
            afisha_shared::not_found!("user not found");
        };

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut update = repository::UpdateInput::new(&actor.id, now);

        if let Some(full_name) = input.full_name {
            user.full_name = Some(full_name.to_owned());
            update.full_name = Some(full_name);
        }

        if let Some(avatar_url) = input.avatar_url {
            user.avatar_url = Some(avatar_url.to_owned());
            update.avatar_url = Some(avatar_url);
        }

        if let Some(phone) = input.phone {
            user.phone = Some(phone.to_owned());
            update.phone = Some(phone);
        }

        if let Some(telegram) = input.telegram {
            user.telegram = Some(telegram.to_owned());
            update.telegram = Some(telegram);
        }

        if let Some(about) = input.about {
            user.about = Some(about.to_owned());
            update.about = Some(about);
        }

        if let Some(preferences) = input.preferences {
            user.preferences = Some(preferences.to_owned());
            update.preferences = Some(preferences);
        }

        repository::update(&self.write_db, update).await?;
        user.updated_at = now;

        Ok(user)
    }
}
