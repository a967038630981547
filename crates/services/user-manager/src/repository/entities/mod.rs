//! Database row and entity mappings.

pub mod traffic_source;
pub mod user;
pub mod user_role;
pub mod users_view;
