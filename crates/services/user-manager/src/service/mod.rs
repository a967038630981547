//! Service layer - mode-selecting façade.

mod user_manager;

pub use user_manager::{ApiStatus, UserManager, UserService};
