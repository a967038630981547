//! Domain layer - User manager records and value objects.
//!
//! This crate contains the pure data model with no infrastructure dependencies.
//! Both the remote API client and the relational store map into these types.

pub mod condition;
pub mod constants;
pub mod error;
pub mod traffic_source;
pub mod user;

pub use condition::{Condition, FieldValue, Operator};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use traffic_source::TrafficSource;
pub use user::{LoginToken, User, UserRolePivot, ViewUser};
