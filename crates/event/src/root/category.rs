use afisha_shared::Actor;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::{CategoryRow, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 100))]
    pub slug: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl super::Command {
    pub async fn create_category(
        &self,
        actor: &Actor,
        input: CreateCategoryInput,
    ) -> afisha_shared::Result<CategoryRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        input.validate()?;

        if repository::category_name_or_slug_exists(&self.read_db, &input.name, &input.slug)
            .await?
        {
            afisha_shared::conflict!("category with this name or slug already exists");
        }

        let row = CategoryRow {
            id: Ulid::new().to_string(),
            name: input.name,
            slug: input.slug,
            description: input.description,
        };

        repository::insert_category(&self.write_db, &row).await?;

        Ok(row)
    }
}
