// Template context structures for Askama templates.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{take_flashes, Flash};
use crate::config::AdminConfig;

mod role;

pub use self::role::{PurgeConfirmTemplate, RoleFormTemplate, RoleListTemplate};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flashes`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AdminConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            flashes: take_flashes(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
