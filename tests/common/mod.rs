//! Shared test infrastructure.
//!
//! - `FakeRoleService` — in-memory role/privilege service with failure switches
//! - `RecordingNotifier` — collects success/error notifications
//! - `RecordingConfirmer` — answers confirmations and remembers the prompts
//! - `role()` / `privilege()` — fixture builders

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use role_admin::api::{
    ApiError, ApiResult, Privilege, PrivilegeApi, QueryParams, ResourceRef, Role, RoleApi, RoleForm,
};
use role_admin::config::AdminConfig;
use role_admin::screens::{ConfirmPrompt, Confirmer, Notifier};

// ============================================================================
// FIXTURES
// ============================================================================

pub fn role(uuid: &str, name: &str) -> Role {
    Role {
        uuid: uuid.to_string(),
        name: name.to_string(),
        ..Role::default()
    }
}

pub fn privilege(uuid: &str, name: &str) -> Privilege {
    Privilege {
        uuid: uuid.to_string(),
        name: name.to_string(),
        ..Privilege::default()
    }
}

pub fn refs(uuids: &[&str]) -> Vec<ResourceRef> {
    uuids.iter().map(|u| ResourceRef::new(*u)).collect()
}

pub fn uuids(refs: &[ResourceRef]) -> Vec<String> {
    let mut out: Vec<String> = refs.iter().map(|r| r.uuid.clone()).collect();
    out.sort();
    out
}

pub fn config() -> Arc<AdminConfig> {
    Arc::new(AdminConfig::default())
}

// ============================================================================
// FAKE REMOTE SERVICE
// ============================================================================

#[derive(Default)]
pub struct FakeRoleService {
    pub roles: Mutex<Vec<Role>>,
    pub privileges: Mutex<Vec<Privilege>>,
    pub saved: Mutex<Vec<RoleForm>>,
    pub deleted: Mutex<Vec<(String, bool)>>,
    pub role_queries: Mutex<Vec<QueryParams>>,
    pub fail_get: AtomicBool,
    pub fail_query: AtomicBool,
    pub fail_privileges: AtomicBool,
    pub fail_save: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FakeRoleService {
    pub fn new(roles: Vec<Role>, privileges: Vec<Privilege>) -> Arc<Self> {
        Arc::new(Self {
            roles: Mutex::new(roles),
            privileges: Mutex::new(privileges),
            ..Self::default()
        })
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<RoleForm> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<(String, bool)> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.lock().unwrap().iter().map(|r| r.name.clone()).collect()
    }
}

fn refused() -> ApiError {
    ApiError::Server("refused by test".to_string())
}

#[async_trait]
impl RoleApi for FakeRoleService {
    async fn query(&self, params: &QueryParams) -> ApiResult<Vec<Role>> {
        self.role_queries.lock().unwrap().push(*params);
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn get(&self, uuid: &str, _params: &QueryParams) -> ApiResult<Role> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(refused());
        }
        self.roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.uuid == uuid)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(uuid.to_string()))
    }

    async fn save(&self, form: &RoleForm) -> ApiResult<Role> {
        self.saved.lock().unwrap().push(form.clone());
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(refused());
        }

        let mut roles = self.roles.lock().unwrap();
        let uuid = form
            .uuid
            .clone()
            .unwrap_or_else(|| format!("generated-{}", roles.len() + 1));
        let saved = Role {
            uuid: uuid.clone(),
            name: form.name.clone(),
            description: form.description.clone(),
            inherited_roles: form.inherited_roles.clone(),
            privileges: form.privileges.clone(),
            ..Role::default()
        };
        match roles.iter_mut().find(|r| r.uuid == uuid) {
            Some(existing) => *existing = saved.clone(),
            None => roles.push(saved.clone()),
        }
        Ok(saved)
    }

    async fn delete(&self, uuid: &str, purge: bool) -> ApiResult<()> {
        self.deleted.lock().unwrap().push((uuid.to_string(), purge));
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(refused());
        }
        let mut roles = self.roles.lock().unwrap();
        let before = roles.len();
        roles.retain(|r| r.uuid != uuid);
        if roles.len() == before {
            return Err(ApiError::NotFound(uuid.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PrivilegeApi for FakeRoleService {
    async fn query(&self, _params: &QueryParams) -> ApiResult<Vec<Privilege>> {
        if self.fail_privileges.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(self.privileges.lock().unwrap().clone())
    }
}

// ============================================================================
// UI SERVICES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                Notice::Success(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error(message.to_string()));
    }
}

pub struct RecordingConfirmer {
    answer: bool,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl RecordingConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmer for RecordingConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer
    }
}
