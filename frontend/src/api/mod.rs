mod attendance;
mod auth;
pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use crate::{config::Backend, utils::storage::SessionStorage};

/// One client per backend, shared through Leptos context.
#[derive(Clone)]
pub struct ApiClients {
    pub auth: ApiClient,
    pub attendance: ApiClient,
}

impl ApiClients {
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            auth: ApiClient::new(Backend::Auth, storage.clone()),
            attendance: ApiClient::new(Backend::Attendance, storage),
        }
    }

    /// Both clients pointed at the same base URL; used against a mock server.
    pub fn with_base_url(base_url: &str, storage: SessionStorage) -> Self {
        Self {
            auth: ApiClient::new_with_base_url(Backend::Auth, base_url, storage.clone()),
            attendance: ApiClient::new_with_base_url(Backend::Attendance, base_url, storage),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
