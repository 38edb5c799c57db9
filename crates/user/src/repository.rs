use afisha_db::table::User;
use afisha_shared::user::Role;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub about: Option<String>,
    pub preferences: Option<String>,
    pub role: sqlx::types::Text<Role>,
    pub blocked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

pub(crate) const USER_COLUMNS: [User; 13] = [
    User::Id,
    User::Email,
    User::Password,
    User::FullName,
    User::AvatarUrl,
    User::Phone,
    User::Telegram,
    User::About,
    User::Preferences,
    User::Role,
    User::Blocked,
    User::CreatedAt,
    User::UpdatedAt,
];

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> afisha_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns(USER_COLUMNS)
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(pool: &SqlitePool, row: &UserRow) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns(USER_COLUMNS)
        .values_panic([
            row.id.to_owned().into(),
            row.email.to_owned().into(),
            row.password.to_owned().into(),
            row.full_name.to_owned().into(),
            row.avatar_url.to_owned().into(),
            row.phone.to_owned().into(),
            row.telegram.to_owned().into(),
            row.about.to_owned().into(),
            row.preferences.to_owned().into(),
            row.role.0.to_string().into(),
            row.blocked.into(),
            row.created_at.into(),
            row.updated_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) struct UpdateInput {
    pub id: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub about: Option<String>,
    pub preferences: Option<String>,
    pub role: Option<Role>,
    pub blocked: Option<bool>,
    pub now: i64,
}

impl UpdateInput {
    pub fn new(id: impl Into<String>, now: i64) -> Self {
        Self {
            id: id.into(),
            full_name: None,
            avatar_url: None,
            phone: None,
            telegram: None,
            about: None,
            preferences: None,
            role: None,
            blocked: None,
            now,
        }
    }
}

pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> afisha_shared::Result<()> {
    let mut statement = Query::update()
        .table(User::Table)
        .and_where(Expr::col(User::Id).eq(input.id))
        .to_owned();

    if let Some(full_name) = input.full_name {
        statement.value(User::FullName, full_name);
    }

    if let Some(avatar_url) = input.avatar_url {
        statement.value(User::AvatarUrl, avatar_url);
    }

    if let Some(phone) = input.phone {
        statement.value(User::Phone, phone);
    }

    if let Some(telegram) = input.telegram {
        statement.value(User::Telegram, telegram);
    }

    if let Some(about) = input.about {
        statement.value(User::About, about);
    }

    if let Some(preferences) = input.preferences {
        statement.value(User::Preferences, preferences);
    }

    if let Some(role) = input.role {
        statement.value(User::Role, role.as_ref());
    }

    if let Some(blocked) = input.blocked {
        statement.value(User::Blocked, blocked);
    }

    statement.value(User::UpdatedAt, input.now);

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
