use std::sync::Arc;

use crate::api::{Privilege, PrivilegeApi, QueryParams, ResourceRef, Role, RoleApi, RoleForm, View};
use crate::config::AdminConfig;
use crate::models::keyed::{refs, Keyed, KeyedSet};
use crate::models::{InheritableRole, PrivilegeCheckbox};
use crate::router::Route;

use super::services::Notifier;

/// Which step of the edit flow failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFailure {
    LoadRole,
    LoadRoles,
    LoadPrivileges,
    Save,
}

/// Idle → LoadingRole → LoadingRoles → LoadingPrivileges → Ready → Saving → Done,
/// with `Error` reachable from any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    LoadingRole,
    LoadingRoles,
    LoadingPrivileges,
    Ready,
    Saving,
    Done,
    Error(EditFailure),
}

/// Edits one role: name, description, inherited roles and direct privileges.
pub struct EditScreen<N: Notifier> {
    roles_api: Arc<dyn RoleApi>,
    privileges_api: Arc<dyn PrivilegeApi>,
    config: Arc<AdminConfig>,
    notifier: N,
    state: EditState,
    role: Role,
    roles: Vec<InheritableRole>,
    dependant_roles: KeyedSet<ResourceRef>,
    privileges: Vec<PrivilegeCheckbox>,
    inherited_privileges: KeyedSet<ResourceRef>,
}

impl<N: Notifier> EditScreen<N> {
    pub fn new(
        roles_api: Arc<dyn RoleApi>,
        privileges_api: Arc<dyn PrivilegeApi>,
        config: Arc<AdminConfig>,
        notifier: N,
    ) -> Self {
        Self {
            roles_api,
            privileges_api,
            config,
            notifier,
            state: EditState::Idle,
            role: Role::default(),
            roles: Vec::new(),
            dependant_roles: KeyedSet::new(),
            privileges: Vec::new(),
            inherited_privileges: KeyedSet::new(),
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Roles that may be selected as ancestors (self and dependants removed).
    pub fn roles(&self) -> &[InheritableRole] {
        &self.roles
    }

    pub fn dependant_roles(&self) -> &KeyedSet<ResourceRef> {
        &self.dependant_roles
    }

    pub fn privileges(&self) -> &[PrivilegeCheckbox] {
        &self.privileges
    }

    pub fn inherited_privileges(&self) -> &KeyedSet<ResourceRef> {
        &self.inherited_privileges
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run the three load phases in order, each only after the previous one
    /// succeeded. `None` starts a blank role.
    pub async fn load(&mut self, role_uuid: Option<&str>) -> bool {
        self.state = EditState::LoadingRole;
        self.role = match role_uuid.filter(|u| !u.is_empty()) {
            Some(uuid) => match self.roles_api.get(uuid, &QueryParams::all(View::Full)).await {
                Ok(role) => role,
                Err(e) => {
                    log::error!("Failed to load role {uuid}: {e}");
                    return self.fail(EditFailure::LoadRole);
                }
            },
            None => Role::default(),
        };

        self.state = EditState::LoadingRoles;
        let all_roles = match self.roles_api.query(&QueryParams::all(View::Full)).await {
            Ok(roles) => roles,
            Err(e) => {
                log::error!("Failed to load roles: {e}");
                return self.fail(EditFailure::LoadRoles);
            }
        };
        self.bind_roles(all_roles);

        self.state = EditState::LoadingPrivileges;
        let privileges = match self.privileges_api.query(&QueryParams::all(View::Default)).await {
            Ok(privileges) => privileges,
            Err(e) => {
                log::error!("Failed to load privileges: {e}");
                return self.fail(EditFailure::LoadPrivileges);
            }
        };
        self.bind_privileges(privileges);

        self.state = EditState::Ready;
        true
    }

    fn fail(&mut self, failure: EditFailure) -> bool {
        let messages = &self.config.messages;
        let message = match failure {
            EditFailure::LoadRole => &messages.load_role_error,
            EditFailure::LoadRoles => &messages.load_roles_error,
            EditFailure::LoadPrivileges => &messages.load_privileges_error,
            EditFailure::Save => &messages.save_error,
        };
        self.notifier.error(message);
        self.state = EditState::Error(failure);
        false
    }

    /// Drop self and dependants from the picker, then flag current ancestors.
    fn bind_roles(&mut self, all_roles: Vec<Role>) {
        let own_uuid = self.role.uuid.clone();

        self.dependant_roles = KeyedSet::new();
        if !self.role.is_new() {
            for candidate in &all_roles {
                if candidate.all_inherited_roles.iter().any(|r| r.key() == own_uuid) {
                    self.dependant_roles.insert(ResourceRef {
                        uuid: candidate.uuid.clone(),
                        display: None,
                        name: Some(candidate.name.clone()),
                    });
                }
            }
        }

        let inherited: KeyedSet<&ResourceRef> = self.role.inherited_roles.iter().collect();
        let mut seen = KeyedSet::new();
        self.roles = all_roles
            .into_iter()
            .filter(|r| r.uuid != own_uuid && !self.dependant_roles.contains(r))
            .filter(|r| seen.insert(r.uuid.clone()))
            .map(|role| InheritableRole {
                checked: inherited.contains(&role),
                role,
            })
            .collect();
    }

    fn bind_privileges(&mut self, privileges: Vec<Privilege>) {
        self.privileges = privileges
            .into_iter()
            .map(|privilege| PrivilegeCheckbox {
                privilege,
                inherited: false,
                granted: false,
            })
            .collect();
        self.recompute_privileges();
    }

    /// Full recompute of inherited privileges and every privilege flag.
    fn recompute_privileges(&mut self) {
        let inherited_roles: KeyedSet<&ResourceRef> = self.role.inherited_roles.iter().collect();

        let mut inherited = KeyedSet::new();
        for option in self.roles.iter().filter(|o| inherited_roles.contains(&o.role)) {
            inherited.extend(option.role.privileges.iter().map(|p| ResourceRef::new(p.uuid.clone())));
        }

        let direct: KeyedSet<&ResourceRef> = self.role.privileges.iter().collect();
        for checkbox in &mut self.privileges {
            checkbox.inherited = inherited.contains(&checkbox.privilege);
            checkbox.granted = checkbox.inherited || direct.contains(&checkbox.privilege);
        }

        self.inherited_privileges = inherited;
    }

    fn update_inherited_roles(&mut self) {
        self.role.inherited_roles = refs(self.roles.iter().filter(|o| o.checked).map(|o| &o.role));
    }

    /// Keep `role.privileges` in step with the checkboxes so a later
    /// recompute preserves the user's direct grants. A direct grant that is
    /// currently also inherited is kept.
    fn sync_direct_grants(&mut self) {
        let previous: KeyedSet<ResourceRef> = std::mem::take(&mut self.role.privileges)
            .into_iter()
            .collect();
        self.role.privileges = refs(
            self.privileges
                .iter()
                .filter(|c| c.explicit() || (c.locked() && previous.contains(&c.privilege)))
                .map(|c| &c.privilege),
        );
    }

    /// Inherited-role checkbox changed: rebuild the list, then recompute.
    pub fn select_inherited_role(&mut self) {
        self.update_inherited_roles();
        self.recompute_privileges();
    }

    pub fn set_inherited_role(&mut self, index: usize, checked: bool) {
        if let Some(option) = self.roles.get_mut(index) {
            option.checked = checked;
            self.select_inherited_role();
        }
    }

    /// Toggle a direct grant. Returns false (and changes nothing) for
    /// inherited privileges.
    pub fn set_privilege(&mut self, index: usize, checked: bool) -> bool {
        let Some(checkbox) = self.privileges.get_mut(index) else {
            return false;
        };
        if checkbox.locked() {
            return false;
        }
        checkbox.granted = checked;
        self.sync_direct_grants();
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.role.name = name.into();
    }

    /// An empty description is stored as absent.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.role.description = (!description.is_empty()).then_some(description);
    }

    /// Replace the whole checkbox selection at once, as a submitted form does.
    /// `privilege_uuids` is the direct grant set, including grants currently
    /// covered by inheritance (see `held_grants`). Inherited privileges stay
    /// granted whatever it says.
    pub fn apply_selection<S: AsRef<str>>(&mut self, inherited_role_uuids: &[S], privilege_uuids: &[S]) {
        let wanted_privileges: KeyedSet<&str> = privilege_uuids.iter().map(|s| s.as_ref()).collect();
        self.role.privileges = refs(
            self.privileges
                .iter()
                .map(|c| &c.privilege)
                .filter(|p| wanted_privileges.contains(*p)),
        );

        let wanted_roles: KeyedSet<&str> = inherited_role_uuids.iter().map(|s| s.as_ref()).collect();
        for option in &mut self.roles {
            option.checked = wanted_roles.contains(&option.role);
        }
        self.select_inherited_role();
        self.sync_direct_grants();
    }

    /// Direct grants that are locked because an inherited role also grants
    /// them. A form must carry these separately since locked checkboxes are
    /// not submitted.
    pub fn held_grants(&self) -> Vec<&Privilege> {
        let direct: KeyedSet<&ResourceRef> = self.role.privileges.iter().collect();
        self.privileges
            .iter()
            .filter(|c| c.locked() && direct.contains(&c.privilege))
            .map(|c| &c.privilege)
            .collect()
    }

    /// The body a save submits right now: checked roles, and granted
    /// privileges that are not inherited.
    pub fn form(&self) -> RoleForm {
        RoleForm {
            uuid: (!self.role.is_new()).then(|| self.role.uuid.clone()),
            name: self.role.name.clone(),
            description: self.role.description.clone(),
            inherited_roles: refs(self.roles.iter().filter(|o| o.checked).map(|o| &o.role)),
            privileges: refs(
                self.privileges
                    .iter()
                    .filter(|c| c.explicit())
                    .map(|c| &c.privilege),
            ),
        }
    }

    /// Submit the role. Returns the route to navigate to on success; on
    /// failure the screen and its in-memory edits stay as they are.
    pub async fn save(&mut self) -> Option<Route> {
        self.update_inherited_roles();

        self.state = EditState::Saving;
        let form = self.form();
        match self.roles_api.save(&form).await {
            Ok(saved) => {
                log::info!("Saved role '{}' ({})", saved.name, saved.uuid);
                self.notifier.success(&self.config.messages.save_success);
                self.state = EditState::Done;
                Some(Route::List)
            }
            Err(e) => {
                log::error!("Failed to save role '{}': {e}", form.name);
                self.fail(EditFailure::Save);
                None
            }
        }
    }
}
