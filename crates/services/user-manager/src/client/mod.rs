//! Client for the remote user manager API.

mod api_client;

pub use api_client::{build_http_client, ApiUserClient, UserApi};

#[cfg(any(test, feature = "test-utils"))]
pub use api_client::MockUserApi;
