//! Review moderation route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::{Review, ReviewListParams};
use marigold_core::ReviewStatus;

use crate::{
    components::data_table::{DataTableConfig, reviews_table_config},
    forms::ReplyForm,
    middleware::auth::RequireAdminAuth,
    models::CurrentAdmin,
    routes::{auth_guard, render},
    state::AppState,
};

/// Page size for the review list.
const REVIEW_PAGE_SIZE: u32 = 10;

/// Review view for the list table.
#[derive(Debug, Clone)]
pub struct ReviewRowView {
    pub id: String,
    pub product_id: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub status: String,
    pub is_pending: bool,
    pub reply: Option<String>,
    pub created_at: String,
}

impl From<&Review> for ReviewRowView {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            product_id: review.product_id.clone(),
            rating: review.rating,
            title: review.title.clone(),
            comment: review.comment.clone(),
            status: review.status.to_string(),
            is_pending: review.status == ReviewStatus::Pending,
            reply: review.admin_reply.as_ref().map(|r| r.message.clone()),
            created_at: review.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Reviews list page template.
#[derive(Template)]
#[template(path = "reviews/index.html")]
pub struct ReviewsIndexTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub config: DataTableConfig,
    pub rows: Vec<ReviewRowView>,
    pub status_value: String,
    pub reply_draft_review_id: String,
    pub reply_draft_message: String,
    pub page: u32,
    pub total_pages: u32,
    pub prev_page: u32,
    pub next_page: u32,
}

/// Query parameters for the reviews list.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewsQuery {
    pub page: Option<u32>,
    pub status: Option<String>,
}

fn parse_status_filter(param: Option<&str>) -> Option<ReviewStatus> {
    match param {
        Some("pending") => Some(ReviewStatus::Pending),
        Some("approved") => Some(ReviewStatus::Approved),
        _ => None,
    }
}

/// Render the reviews page, optionally with an error and an open reply
/// draft (so a rejected reply stays editable).
async fn render_index(
    state: &AppState,
    admin: &CurrentAdmin,
    session: &Session,
    query: &ReviewsQuery,
    error: Option<String>,
    reply_draft: Option<(String, String)>,
) -> Response {
    let params = ReviewListParams {
        page: query.page,
        limit: Some(REVIEW_PAGE_SIZE),
        status: parse_status_filter(query.status.as_deref()),
    };

    let (reviews, pagination, error) = match state
        .api()
        .list_reviews(&admin.api_session(), params)
        .await
    {
        Ok(page) => (page.reviews, page.pagination, error),
        Err(err) => {
            if let Some(response) = auth_guard(session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch reviews: {err}");
            (
                vec![],
                marigold_client::PageMeta::default(),
                error.or_else(|| Some(err.to_string())),
            )
        }
    };

    let page = pagination.page.max(1);
    let total_pages = pagination.total_pages.max(1);
    let (reply_draft_review_id, reply_draft_message) = reply_draft.unwrap_or_default();

    let template = ReviewsIndexTemplate {
        admin_email: admin.email.clone(),
        error,
        config: reviews_table_config(),
        rows: reviews.iter().map(ReviewRowView::from).collect(),
        status_value: query.status.clone().unwrap_or_default(),
        reply_draft_review_id,
        reply_draft_message,
        page,
        total_pages,
        prev_page: page.saturating_sub(1).max(1),
        next_page: (page + 1).min(total_pages),
    };

    render(&template).into_response()
}

/// Reviews list page handler.
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReviewsQuery>,
) -> Response {
    render_index(&state, &admin, &session, &query, None, None).await
}

/// Status form input (approve / pending).
#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: String,
}

/// Set review moderation status handler.
#[instrument(skip(admin, state, session, input), fields(review_id = %id))]
pub async fn set_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(input): Form<StatusInput>,
) -> Response {
    let Ok(status) = input.status.parse::<ReviewStatus>() else {
        return crate::error::AppError::BadRequest(format!(
            "unknown review status: {}",
            input.status
        ))
        .into_response();
    };

    match state
        .api()
        .set_review_status(&admin.api_session(), &id, status)
        .await
    {
        Ok(review) => {
            tracing::info!(review_id = %review.id, status = %review.status, "Review status set");
            Redirect::to("/reviews").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(review_id = %id, "Failed to set review status: {err}");
            crate::error::AppError::Api(err).into_response()
        }
    }
}

/// Post admin reply handler.
#[instrument(skip(admin, state, session, form), fields(review_id = %id))]
pub async fn reply(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<ReplyForm>,
) -> Response {
    // Local validation; no network call for a rejected draft.
    let message = match form.validate() {
        Ok(message) => message,
        Err(errors) => {
            let draft = Some((id, form.message.clone()));
            return render_index(
                &state,
                &admin,
                &session,
                &ReviewsQuery::default(),
                Some(errors.to_string()),
                draft,
            )
            .await;
        }
    };

    match state
        .api()
        .reply_to_review(&admin.api_session(), &id, &message)
        .await
    {
        Ok(review) => {
            tracing::info!(review_id = %review.id, "Reply posted");
            Redirect::to("/reviews").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(review_id = %id, "Failed to post reply: {err}");
            let draft = Some((id, form.message.clone()));
            render_index(
                &state,
                &admin,
                &session,
                &ReviewsQuery::default(),
                Some(err.to_string()),
                draft,
            )
            .await
        }
    }
}

/// Remove admin reply handler.
#[instrument(skip(admin, state, session), fields(review_id = %id))]
pub async fn delete_reply(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match state
        .api()
        .delete_review_reply(&admin.api_session(), &id)
        .await
    {
        Ok(review) => {
            tracing::info!(review_id = %review.id, "Reply removed");
            Redirect::to("/reviews").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(review_id = %id, "Failed to remove reply: {err}");
            crate::error::AppError::Api(err).into_response()
        }
    }
}
