use crate::api::{Privilege, Role};

/// A role offered in the inheritance picker, with its checked state.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritableRole {
    pub role: Role,
    pub checked: bool,
}

/// A privilege with its checked state for the role form.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivilegeCheckbox {
    pub privilege: Privilege,
    /// Granted through one of the selected inherited roles.
    pub inherited: bool,
    /// Rendered checked: inherited or directly granted.
    pub granted: bool,
}

impl PrivilegeCheckbox {
    /// Inherited privileges cannot be unchecked.
    pub fn locked(&self) -> bool {
        self.inherited
    }

    /// Directly granted and not already covered by inheritance.
    pub fn explicit(&self) -> bool {
        self.granted && !self.inherited
    }
}
