pub mod role_handlers;

use std::sync::Arc;

use crate::api::{PrivilegeApi, RestClient, RoleApi};
use crate::config::AdminConfig;

/// Shared per-app data handed to every handler.
pub struct AppState {
    pub roles: Arc<dyn RoleApi>,
    pub privileges: Arc<dyn PrivilegeApi>,
    pub config: Arc<AdminConfig>,
}

impl AppState {
    pub fn new(
        roles: Arc<dyn RoleApi>,
        privileges: Arc<dyn PrivilegeApi>,
        config: Arc<AdminConfig>,
    ) -> Self {
        Self { roles, privileges, config }
    }

    /// One REST client serves both collections.
    pub fn with_client(client: RestClient, config: AdminConfig) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client, Arc::new(config))
    }
}
