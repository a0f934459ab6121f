use askama::Template;

use crate::api::{Privilege, ResourceRef, Role};
use crate::models::{InheritableRole, PrivilegeCheckbox};
use super::PageContext;

#[derive(Template)]
#[template(path = "roles/list.html")]
pub struct RoleListTemplate {
    pub ctx: PageContext,
    pub roles: Vec<Role>,
}

/// Create/edit form. `role.uuid` is empty when creating.
#[derive(Template)]
#[template(path = "roles/form.html")]
pub struct RoleFormTemplate {
    pub ctx: PageContext,
    pub form_title: String,
    pub role: Role,
    pub roles: Vec<InheritableRole>,
    pub dependant_roles: Vec<ResourceRef>,
    pub privileges: Vec<PrivilegeCheckbox>,
    /// Direct grants hidden behind a locked checkbox, posted as hidden fields
    pub held_grants: Vec<Privilege>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "roles/purge.html")]
pub struct PurgeConfirmTemplate {
    pub ctx: PageContext,
    pub role_uuid: String,
    pub role_name: String,
    pub message: String,
}
