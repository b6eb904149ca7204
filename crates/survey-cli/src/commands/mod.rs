pub mod dispatch;
pub mod participants;
pub mod record;
pub mod schema;
pub mod show;
