use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{EventRow, Status, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventInput {
    #[validate(length(min = 3, max = 255))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub category_id: String,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    #[validate(length(max = 255))]
    pub address_text: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default = "default_is_free")]
    pub is_free: bool,
    #[validate(range(min = 0))]
    pub price_from: Option<i64>,
    #[validate(range(min = 1))]
    pub capacity: Option<i64>,
}

fn default_is_free() -> bool {
    true
}

impl super::Command {
    /// Creates an event as a draft; publication goes through moderation.
    pub async fn create(
        &self,
        actor: &Actor,
        input: CreateEventInput,
    ) -> afisha_shared::Result<EventRow> {
        if !actor.role.can_organize() {
            afisha_shared::forbidden!("organizer role required to create events");
        }

        input.validate()?;

        if let Some(ends_at) = input.ends_at {
            if ends_at < input.starts_at {
                afisha_shared::bad_request!("event cannot end before it starts");
            }
        }

        if repository::find_category(&self.read_db, &input.category_id)
            .await?
            .is_none()
        {
            afisha_shared::bad_request!("category does not exist");
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let row = EventRow {
            id: Ulid::new().to_string(),
            organizer_id: actor.id.to_owned(),
            category_id: input.category_id,
            title: input.title,
            description: input.description,
            status: Text(Status::Draft),
            moderation_comment: None,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            address_text: input.address_text,
            latitude: input.latitude,
            longitude: input.longitude,
            is_free: input.is_free,
            price_from: if input.is_free { None } else { input.price_from },
            capacity: input.capacity,
            created_at: now,
            updated_at: now,
        };

        repository::insert_event(&self.write_db, &row).await?;

        Ok(row)
    }
}
