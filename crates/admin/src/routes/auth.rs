//! Login and logout handlers.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use marigold_core::Email;

use crate::{
    filters,
    middleware::auth::{clear_current_admin, set_current_admin},
    models::CurrentAdmin,
    routes::render,
    state::AppState,
};

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Login form input.
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login page handler.
///
/// Also clears any stale session state, so a redirect here after an
/// expired API session leaves nothing behind.
#[instrument(skip(session))]
pub async fn login_page(session: Session) -> impl IntoResponse {
    if let Err(err) = clear_current_admin(&session).await {
        tracing::warn!("Failed to clear stale session: {err}");
    }
    render(&LoginTemplate {
        error: None,
        email: String::new(),
    })
}

/// Login submit handler.
#[instrument(skip(state, session, input), fields(email = %input.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<LoginInput>,
) -> impl IntoResponse {
    // Structural validation before any network call.
    let email = match Email::parse(input.email.trim()) {
        Ok(email) => email,
        Err(err) => {
            return render(&LoginTemplate {
                error: Some(err.to_string()),
                email: input.email.clone(),
            })
            .into_response();
        }
    };

    match state.api().login(email.as_str(), &input.password).await {
        Ok(api_session) => {
            let admin = CurrentAdmin::new(email.as_str(), &api_session);
            if let Err(err) = set_current_admin(&session, &admin).await {
                tracing::error!("Failed to store session: {err}");
                return render(&LoginTemplate {
                    error: Some("Could not start a session, try again".to_string()),
                    email: input.email.clone(),
                })
                .into_response();
            }
            tracing::info!("Admin logged in");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            tracing::warn!("Login rejected: {err}");
            render(&LoginTemplate {
                error: Some(err.to_string()),
                email: input.email.clone(),
            })
            .into_response()
        }
    }
}

/// Logout handler: flushes the session store record and the cookie.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(err) = clear_current_admin(&session).await {
        tracing::warn!("Failed to clear session on logout: {err}");
    }
    Redirect::to("/auth/login")
}
