use afisha_shared::Actor;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::{EventRow, repository};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEventInput {
    #[validate(length(min = 3, max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    #[validate(length(max = 255))]
    pub address_text: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    pub is_free: Option<bool>,
    #[validate(range(min = 0))]
    pub price_from: Option<i64>,
    #[validate(range(min = 1))]
    pub capacity: Option<i64>,
}

impl super::Command {
    /// Applies a partial update. Organizers may edit their own events while
    /// in draft or rejected; admins may edit any event in any status.
    pub async fn update(
        &self,
        actor: &Actor,
        id: impl Into<String>,
        input: UpdateEventInput,
    ) -> afisha_shared::Result<EventRow> {
        input.validate()?;

        let Some(mut event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !actor.can_manage(&event.organizer_id) {
            afisha_shared::forbidden!("cannot edit another organizer's event");
        }

        if !actor.is_admin() && !event.status.0.editable_by_owner() {
            afisha_shared::conflict!("only draft or rejected events can be edited");
        }

        if let Some(category_id) = input.category_id {
            if repository::find_category(&self.read_db, &category_id)
                .await?
                .is_none()
            {
                afisha_shared::bad_request!("category does not exist");
            }
            event.category_id = category_id;
        }

        if let Some(title) = input.title {
            event.title = title;
        }

        if let Some(description) = input.description {
            event.description = Some(description);
        }

        if let Some(starts_at) = input.starts_at {
            event.starts_at = starts_at;
        }

        if let Some(ends_at) = input.ends_at {
            event.ends_at = Some(ends_at);
        }

        if let Some(ends_at) = event.ends_at {
            if ends_at < event.starts_at {
                afisha_shared::bad_request!("event cannot end before it starts");
            }
        }

        if let Some(address_text) = input.address_text {
            event.address_text = Some(address_text);
        }

        if let Some(latitude) = input.latitude {
            event.latitude = latitude;
        }

        if let Some(longitude) = input.longitude {
            event.longitude = longitude;
        }

        if let Some(is_free) = input.is_free {
            event.is_free = is_free;
            if is_free {
                event.price_from = None;
            }
        }

        if let Some(price_from) = input.price_from {
            if !event.is_free {
                event.price_from = Some(price_from);
            }
        }

        if let Some(capacity) = input.capacity {
            event.capacity = Some(capacity);
        }

        event.updated_at = OffsetDateTime::now_utc().unix_timestamp();

        repository::update_event(&self.write_db, &event).await?;

        Ok(event)
    }
}
