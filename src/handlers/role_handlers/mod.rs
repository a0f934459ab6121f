//! Role list, edit form and purge confirmation pages.

mod crud;
mod helpers;
mod list;
mod purge;

pub use crud::{edit_form, new_form, submit};
pub use helpers::{url_decode, FormParams};
pub use list::list;
pub use purge::{purge, purge_confirm, PurgeForm};
