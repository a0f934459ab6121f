use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::screens::Notifier;

const FLASH_KEY: &str = "flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// A one-shot notification carried to the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    /// CSS modifier for templates.
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "flash-success",
            FlashKind::Error => "flash-error",
        }
    }
}

/// Queue a flash message. Messages set during one request all reach the
/// next rendered page, in order.
pub fn set_flash(session: &Session, kind: FlashKind, message: &str) {
    let mut flashes = session.get::<Vec<Flash>>(FLASH_KEY).unwrap_or(None).unwrap_or_default();
    flashes.push(Flash {
        kind,
        message: message.to_string(),
    });
    if let Err(e) = session.insert(FLASH_KEY, &flashes) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flashes(session: &Session) -> Vec<Flash> {
    session
        .remove_as::<Vec<Flash>>(FLASH_KEY)
        .and_then(Result::ok)
        .unwrap_or_default()
}

/// Notifier that turns screen notifications into session flash messages.
pub struct SessionNotifier {
    session: Session,
}

impl SessionNotifier {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
        }
    }
}

impl Notifier for SessionNotifier {
    fn success(&self, message: &str) {
        set_flash(&self.session, FlashKind::Success, message);
    }

    fn error(&self, message: &str) {
        set_flash(&self.session, FlashKind::Error, message);
    }
}
