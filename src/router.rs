use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::role_handlers;

/// The two screens of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// `role_uuid: None` is the create-new flow.
    Edit { role_uuid: Option<String> },
}

impl Route {
    pub fn edit(role_uuid: impl Into<String>) -> Self {
        let uuid = role_uuid.into();
        Route::Edit {
            role_uuid: (!uuid.is_empty()).then_some(uuid),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::List => "list",
            Route::Edit { .. } => "edit",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/list".to_string(),
            Route::Edit { role_uuid: Some(uuid) } => format!("/edit/{uuid}"),
            Route::Edit { role_uuid: None } => "/edit".to_string(),
        }
    }

    /// Map a path to a screen; anything unrecognised lands on the list.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or("")
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["edit"] => Route::Edit { role_uuid: None },
            ["edit", uuid] => Route::edit(*uuid),
            _ => Route::List,
        }
    }
}

/// 303 to the route's path.
pub fn redirect(route: &Route) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", route.path()))
        .finish()
}

/// Register the UI routes. `/edit` BEFORE `/edit/{uuid}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { redirect(&Route::List) }))
        .route("/list", web::get().to(role_handlers::list))
        .route("/edit", web::get().to(role_handlers::new_form))
        .route("/edit", web::post().to(role_handlers::submit))
        .route("/edit/{uuid}", web::get().to(role_handlers::edit_form))
        .route("/roles/{uuid}/purge", web::get().to(role_handlers::purge_confirm))
        .route("/roles/{uuid}/purge", web::post().to(role_handlers::purge));
}

/// Default service: unknown GETs fall back to the list screen.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    let route = Route::parse(req.path());
    log::debug!("No route for {}, redirecting to {}", req.path(), route.name());
    redirect(&route)
}
