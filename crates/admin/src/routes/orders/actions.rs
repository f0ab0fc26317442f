//! Order status mutation handlers.

use axum::{
    Form,
    extract::{Path, RawForm, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::BulkStatusInput;
use marigold_core::OrderStatus;

use crate::{
    forms::TrackingForm,
    middleware::auth::RequireAdminAuth,
    routes::auth_guard,
    state::AppState,
};

use super::{list::render_index, types::OrdersQuery};

/// Update a single order's status.
///
/// The transition is checked locally first: an illegal change is
/// rejected with an error naming the transition and no API call is made.
/// Concurrent edits by another admin are not detected; the API applies
/// last-write-wins.
#[instrument(skip(admin, state, session, form), fields(order_id = %id))]
pub async fn update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<TrackingForm>,
) -> Response {
    let input = match form.validate(&id) {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(order_id = %id, "Status change rejected locally: {errors}");
            return render_index(
                &state,
                &admin,
                &session,
                &OrdersQuery::default(),
                Some(errors.to_string()),
            )
            .await;
        }
    };

    match state
        .api()
        .update_order_status(&admin.api_session(), &input)
        .await
    {
        Ok(order) => {
            tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
            Redirect::to("/orders").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(order_id = %id, "Failed to update order status: {err}");
            render_index(
                &state,
                &admin,
                &session,
                &OrdersQuery::default(),
                Some(err.to_string()),
            )
            .await
        }
    }
}

/// Parsed fields of the bulk status form.
///
/// The checkbox group submits repeated `order_ids` keys, which
/// `serde_urlencoded` cannot collect into a `Vec`, so the body is parsed
/// directly.
#[derive(Debug, Default)]
struct BulkForm {
    order_ids: Vec<String>,
    status: String,
    note: String,
}

fn parse_bulk_form(bytes: &[u8]) -> BulkForm {
    let mut form = BulkForm::default();
    for (key, value) in url::form_urlencoded::parse(bytes) {
        match key.as_ref() {
            "order_ids" => form.order_ids.push(value.into_owned()),
            "status" => form.status = value.into_owned(),
            "note" => form.note = value.into_owned(),
            _ => {}
        }
    }
    form
}

/// Update several orders to the same status.
///
/// Per-order transition legality cannot be checked locally here (the
/// form does not carry each order's current status); the API validates
/// every order and rejects the batch on the first violation.
#[instrument(skip(admin, state, session, body))]
pub async fn bulk_update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    RawForm(body): RawForm,
) -> Response {
    let form = parse_bulk_form(&body);

    if form.order_ids.is_empty() {
        return render_index(
            &state,
            &admin,
            &session,
            &OrdersQuery::default(),
            Some("Select at least one order".to_string()),
        )
        .await;
    }

    let Ok(status) = form.status.parse::<OrderStatus>() else {
        return render_index(
            &state,
            &admin,
            &session,
            &OrdersQuery::default(),
            Some(format!("Unknown status: {}", form.status)),
        )
        .await;
    };

    let note = form.note.trim();
    let input = BulkStatusInput {
        order_ids: form.order_ids,
        status,
        note: (!note.is_empty()).then(|| note.to_string()),
    };

    match state
        .api()
        .bulk_update_order_status(&admin.api_session(), &input)
        .await
    {
        Ok(outcome) => {
            tracing::info!(updated = outcome.updated, status = %status, "Bulk status update");
            Redirect::to("/orders").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed bulk status update: {err}");
            render_index(
                &state,
                &admin,
                &session,
                &OrdersQuery::default(),
                Some(err.to_string()),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bulk_form_collects_repeated_ids() {
        let body = b"order_ids=o1&order_ids=o2&status=confirmed&note=batch+confirm";
        let form = parse_bulk_form(body);
        assert_eq!(form.order_ids, ["o1", "o2"]);
        assert_eq!(form.status, "confirmed");
        assert_eq!(form.note, "batch confirm");
    }

    #[test]
    fn test_parse_bulk_form_ignores_unknown_keys() {
        let form = parse_bulk_form(b"status=shipped&csrf=xyz");
        assert!(form.order_ids.is_empty());
        assert_eq!(form.status, "shipped");
    }
}
