use crate::user::Role;

/// Request-scoped caller identity, resolved by the auth middleware.
///
/// Blocked users never reach a handler, so an `Actor` is always an active
/// account. Unauthenticated (guest) callers have no `Actor` at all.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Owner-or-admin predicate used by every ownership-guarded operation.
    pub fn can_manage(&self, owner_id: &str) -> bool {
        self.is_admin() || self.id == owner_id
    }
}
