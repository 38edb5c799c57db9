use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Password,
    FullName,
    AvatarUrl,
    Phone,
    Telegram,
    About,
    Preferences,
    Role,
    Blocked,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Category {
    Table,
    Id,
    Name,
    Slug,
    Description,
}

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Id,
    OrganizerId,
    CategoryId,
    Title,
    Description,
    Status,
    ModerationComment,
    StartsAt,
    EndsAt,
    AddressText,
    Latitude,
    Longitude,
    IsFree,
    PriceFrom,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Rsvp {
    Table,
    Id,
    UserId,
    EventId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    EventId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum OrganizerRequest {
    Table,
    Id,
    UserId,
    Status,
    Message,
    AdminComment,
    CreatedAt,
    ResolvedAt,
}

#[derive(Iden, Clone)]
pub enum SupportTicket {
    Table,
    Id,
    UserId,
    Subject,
    Message,
    Status,
    AdminReply,
    CreatedAt,
    UpdatedAt,
}
