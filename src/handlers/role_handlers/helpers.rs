use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::session::SessionNotifier;
use crate::errors::{render, AppError};
use crate::handlers::AppState;
use crate::screens::EditScreen;
use crate::templates_structs::{PageContext, RoleFormTemplate};

/// Decode a URL-encoded string (form data): `+` → space, `%HH` → byte.
pub fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' {
            if let Some(byte) = s.get(i + 1..i + 3).and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// URL-encoded form body that keeps duplicate keys (checkbox groups).
#[derive(Debug, Default)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    pub fn parse(body: &str) -> Self {
        let pairs = body
            .split('&')
            .filter(|s| !s.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (url_decode(k), url_decode(v)),
                None => (url_decode(pair), String::new()),
            })
            .collect();
        FormParams(pairs)
    }

    /// First value for `key`, or "" when absent.
    pub fn field(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Run the edit screen's load phases. `None` means a phase failed and the
/// error is already flashed.
pub async fn open_edit_screen(
    state: &AppState,
    session: &Session,
    role_uuid: Option<&str>,
) -> Option<EditScreen<SessionNotifier>> {
    let mut screen = EditScreen::new(
        state.roles.clone(),
        state.privileges.clone(),
        state.config.clone(),
        SessionNotifier::new(session),
    );
    if screen.load(role_uuid).await {
        Some(screen)
    } else {
        None
    }
}

pub fn render_edit_form(
    state: &AppState,
    session: &Session,
    screen: &EditScreen<SessionNotifier>,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, &state.config);
    let role = screen.role().clone();
    let form_title = if role.is_new() { "Create Role" } else { "Edit Role" };
    let tmpl = RoleFormTemplate {
        ctx,
        form_title: form_title.to_string(),
        role,
        roles: screen.roles().to_vec(),
        dependant_roles: screen.dependant_roles().iter().cloned().collect(),
        privileges: screen.privileges().to_vec(),
        held_grants: screen.held_grants().into_iter().cloned().collect(),
        errors,
    };
    render(tmpl)
}
