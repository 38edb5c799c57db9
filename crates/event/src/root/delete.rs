use afisha_shared::Actor;

use crate::repository;

impl super::Command {
    /// Hard delete. Organizers may remove their own drafts, rejected and
    /// archived events; admins may remove any event regardless of status.
    pub async fn delete(&self, actor: &Actor, id: impl Into<String>) -> afisha_shared::Result<()> {
        let Some(event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !actor.can_manage(&event.organizer_id) {
            afisha_shared::forbidden!("cannot delete another organizer's event");
        }

        if !actor.is_admin() && !event.status.0.deletable_by_owner() {
            afisha_shared::conflict!(
                "only draft, rejected or archived events can be deleted"
            );
        }

        repository::delete_event(&self.write_db, &event.id).await
    }
}
