pub mod keyed;
pub mod role;

pub use keyed::{Keyed, KeyedSet};
pub use role::{InheritableRole, PrivilegeCheckbox};
