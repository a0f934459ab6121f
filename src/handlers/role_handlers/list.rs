use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::SessionNotifier;
use crate::errors::{render, AppError};
use crate::handlers::AppState;
use crate::screens::ListScreen;
use crate::templates_structs::{PageContext, RoleListTemplate};

pub async fn list(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let mut screen = ListScreen::new(
        state.roles.clone(),
        state.config.clone(),
        SessionNotifier::new(&session),
    );
    screen.load().await;

    // after load, so a load failure shows up on this page
    let ctx = PageContext::build(&session, &state.config);
    let tmpl = RoleListTemplate { ctx, roles: screen.into_roles() };
    render(tmpl)
}
