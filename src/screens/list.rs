use std::sync::Arc;

use crate::api::{QueryParams, Role, RoleApi, View};
use crate::config::AdminConfig;
use crate::router::Route;

use super::services::{ConfirmPrompt, Confirmer, Notifier};

pub const PURGE_DIALOG_TEMPLATE: &str = "roles/purge.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Ready,
    Purging,
    /// Last load failed; whatever was loaded before is still shown.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Cancelled,
    Purged,
    Failed,
}

/// All roles, with edit navigation and purge-with-confirmation.
pub struct ListScreen<N: Notifier> {
    api: Arc<dyn RoleApi>,
    config: Arc<AdminConfig>,
    notifier: N,
    roles: Vec<Role>,
    state: ListState,
}

impl<N: Notifier> ListScreen<N> {
    pub fn new(api: Arc<dyn RoleApi>, config: Arc<AdminConfig>, notifier: N) -> Self {
        Self {
            api,
            config,
            notifier,
            roles: Vec::new(),
            state: ListState::Idle,
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_roles(self) -> Vec<Role> {
        self.roles
    }

    /// Fetch every role at the default view. On failure the previous list stays.
    pub async fn load(&mut self) -> bool {
        self.state = ListState::Loading;
        match self.api.query(&QueryParams::all(View::Default)).await {
            Ok(roles) => {
                self.roles = roles;
                self.state = ListState::Ready;
                true
            }
            Err(e) => {
                log::error!("Failed to load roles: {e}");
                self.notifier.error(&self.config.messages.load_roles_error);
                self.state = ListState::Error;
                false
            }
        }
    }

    pub fn edit(&self, role: &Role) -> Route {
        Route::edit(role.uuid.clone())
    }

    pub fn create(&self) -> Route {
        Route::Edit { role_uuid: None }
    }

    pub fn purge_prompt(&self, role: &Role) -> ConfirmPrompt {
        ConfirmPrompt {
            template: PURGE_DIALOG_TEMPLATE,
            message: self.config.messages.purge_prompt(&role.name),
            subject_uuid: role.uuid.clone(),
            subject_name: role.name.clone(),
        }
    }

    /// Ask for confirmation, then hard-delete the role and reload the list.
    pub async fn purge(&mut self, role: &Role, confirmer: &dyn Confirmer) -> PurgeOutcome {
        let outcome = self.confirm_and_delete(role, confirmer).await;
        if outcome == PurgeOutcome::Purged {
            self.load().await;
        }
        outcome
    }

    /// `purge` without the reload, for callers that redisplay the list
    /// themselves (the web layer redirects to it).
    pub async fn confirm_and_delete(&mut self, role: &Role, confirmer: &dyn Confirmer) -> PurgeOutcome {
        let prompt = self.purge_prompt(role);
        if !confirmer.confirm(&prompt).await {
            log::debug!("Purge of role {} cancelled", role.uuid);
            return PurgeOutcome::Cancelled;
        }

        let previous = self.state;
        self.state = ListState::Purging;
        let outcome = match self.api.delete(&role.uuid, true).await {
            Ok(()) => {
                log::info!("Purged role '{}' ({})", role.name, role.uuid);
                self.notifier.success(&self.config.messages.purge_success);
                PurgeOutcome::Purged
            }
            Err(e) => {
                log::error!("Failed to purge role {}: {e}", role.uuid);
                self.notifier.error(&self.config.messages.purge_error);
                PurgeOutcome::Failed
            }
        };
        self.state = previous;
        outcome
    }
}
