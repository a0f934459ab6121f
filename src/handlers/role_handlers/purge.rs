use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::api::{QueryParams, Role, View};
use crate::auth::csrf;
use crate::auth::session::{set_flash, FlashKind, SessionNotifier};
use crate::errors::{render, AppError};
use crate::handlers::AppState;
use crate::router::{redirect, Route};
use crate::screens::{Answered, ListScreen};
use crate::templates_structs::{PageContext, PurgeConfirmTemplate};

#[derive(Deserialize)]
pub struct PurgeForm {
    pub csrf_token: String,
    #[serde(default)]
    pub name: String,
    /// "yes" only when the confirm button was pressed
    #[serde(default)]
    pub confirm: Option<String>,
}

/// GET /roles/{uuid}/purge — confirmation dialog.
pub async fn purge_confirm(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uuid = path.into_inner();

    let role = match state.roles.get(&uuid, &QueryParams::all(View::Default)).await {
        Ok(role) => role,
        Err(e) => {
            log::error!("Failed to load role {uuid} for purge: {e}");
            set_flash(&session, FlashKind::Error, &state.config.messages.load_role_error);
            return Ok(redirect(&Route::List));
        }
    };

    let screen = ListScreen::new(
        state.roles.clone(),
        state.config.clone(),
        SessionNotifier::new(&session),
    );
    let prompt = screen.purge_prompt(&role);

    let ctx = PageContext::build(&session, &state.config);
    let tmpl = PurgeConfirmTemplate {
        ctx,
        role_uuid: prompt.subject_uuid,
        role_name: prompt.subject_name,
        message: prompt.message,
    };
    render(tmpl)
}

/// POST /roles/{uuid}/purge — hard delete when confirmed, then back to the
/// list. The redirect target does the reload.
pub async fn purge(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<PurgeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let role = Role {
        uuid: path.into_inner(),
        name: form.name.clone(),
        ..Role::default()
    };
    let confirmed = form.confirm.as_deref() == Some("yes");

    let mut screen = ListScreen::new(
        state.roles.clone(),
        state.config.clone(),
        SessionNotifier::new(&session),
    );
    screen.confirm_and_delete(&role, &Answered(confirmed)).await;

    Ok(redirect(&Route::List))
}
