use afisha_shared::{Actor, user::Role};

/// Promote an existing account to admin. Operator tooling, so it acts as
/// a synthetic admin rather than an authenticated caller.
pub async fn promote(config: crate::config::Config, email: String) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let state = afisha_shared::State {
        read_db: pool.clone(),
        write_db: pool,
    };
    let command = afisha_user::Command::new(state);

    let Some(user) = command.find_by_email(&email).await? else {
        tracing::error!("user {email} not found");
        return Ok(());
    };

    let operator = Actor::new("system", Role::Admin);
    command.set_role(&operator, &user.id, Role::Admin).await?;

    tracing::info!("{email} now has admin access");

    Ok(())
}
