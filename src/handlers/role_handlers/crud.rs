use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{csrf, validate};
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::router::{redirect, Route};

use super::helpers::*;

/// GET /edit — blank role.
pub async fn new_form(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    match open_edit_screen(&state, &session, None).await {
        Some(screen) => render_edit_form(&state, &session, &screen, vec![]),
        None => Ok(redirect(&Route::List)),
    }
}

/// GET /edit/{uuid}
pub async fn edit_form(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uuid = path.into_inner();
    match open_edit_screen(&state, &session, Some(&uuid)).await {
        Some(screen) => render_edit_form(&state, &session, &screen, vec![]),
        None => Ok(redirect(&Route::List)),
    }
}

/// POST /edit — `action=refresh` recomputes the checkboxes after an
/// inherited-role change, anything else saves.
pub async fn submit(
    state: web::Data<AppState>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = FormParams::parse(&body);
    csrf::validate_csrf(&session, params.field("csrf_token"))?;

    let uuid = params.field("uuid");
    let Some(mut screen) = open_edit_screen(&state, &session, Some(uuid)).await else {
        return Ok(redirect(&Route::List));
    };

    let name = params.field("name").trim();
    let description = params.field("description").trim();
    screen.set_name(name);
    screen.set_description(description);
    screen.apply_selection(&params.all("inherited_roles"), &params.all("privileges"));

    if params.field("action") == "refresh" {
        return render_edit_form(&state, &session, &screen, vec![]);
    }

    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_role_name(name));
    errors.extend(validate::validate_optional(description, "Description", 255));
    if !errors.is_empty() {
        return render_edit_form(&state, &session, &screen, errors);
    }

    match screen.save().await {
        Some(route) => Ok(redirect(&route)),
        None => render_edit_form(&state, &session, &screen, vec![]),
    }
}
