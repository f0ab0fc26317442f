//! Coupon management route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::Coupon;
use marigold_core::CouponKind;

use crate::{
    components::data_table::{DataTableConfig, coupons_table_config},
    forms::CouponForm,
    listing::{CouponListQuery, DerivedPage, derive_coupons},
    middleware::auth::RequireAdminAuth,
    routes::{auth_guard, render},
    state::AppState,
};

/// Coupon view for the list table.
#[derive(Debug, Clone)]
pub struct CouponRowView {
    pub id: String,
    pub code: String,
    pub kind: String,
    pub value: String,
    pub status: String,
    pub usage: String,
    pub valid_until: String,
    pub toggle_label: String,
}

impl CouponRowView {
    fn build(coupon: &Coupon, now: chrono::DateTime<Utc>) -> Self {
        let value = match coupon.kind {
            CouponKind::Percentage => format!("{}% off", coupon.value),
            CouponKind::Fixed => format!("${:.2} off", coupon.value),
        };
        let usage = coupon.usage_limit.map_or_else(
            || format!("{} uses", coupon.used_count),
            |limit| format!("{}/{} uses", coupon.used_count, limit),
        );
        let status = coupon.status(now);
        Self {
            id: coupon.id.clone(),
            code: coupon.code.clone(),
            kind: coupon.kind.as_str().to_string(),
            value,
            status: status.label().to_string(),
            usage,
            valid_until: coupon.valid_until.format("%Y-%m-%d").to_string(),
            toggle_label: if coupon.is_active {
                "Deactivate".to_string()
            } else {
                "Activate".to_string()
            },
        }
    }
}

/// Coupons list page template.
#[derive(Template)]
#[template(path = "coupons/index.html")]
pub struct CouponsIndexTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub config: DataTableConfig,
    pub rows: Vec<CouponRowView>,
    pub search_value: String,
    pub sort_value: String,
    pub next_dir: String,
    pub preserve_params: String,
    pub page: usize,
    pub total_pages: usize,
    pub prev_page: usize,
    pub next_page: usize,
}

/// Coupon create form template.
#[derive(Template)]
#[template(path = "coupons/new.html")]
pub struct CouponNewTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub form: CouponForm,
}

/// Coupon edit form template.
#[derive(Template)]
#[template(path = "coupons/edit.html")]
pub struct CouponEditTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub coupon_id: String,
    pub form: CouponForm,
}

/// Build URL parameters preserved across sort and pagination links.
fn build_preserve_params(query: &CouponListQuery) -> String {
    let mut params = Vec::new();
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("status={status}"));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("&{}", params.join("&"))
    }
}

/// Coupons list page handler.
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CouponListQuery>,
) -> Response {
    let (coupons, error) = match state.api().list_coupons(&admin.api_session()).await {
        Ok(coupons) => (coupons, None),
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch coupons: {err}");
            (vec![], Some(err.to_string()))
        }
    };

    let now = Utc::now();
    let DerivedPage {
        items,
        page,
        total_pages,
    } = derive_coupons(&coupons, &query, now);

    let template = CouponsIndexTemplate {
        admin_email: admin.email.clone(),
        error,
        config: coupons_table_config(),
        rows: items.iter().map(|c| CouponRowView::build(c, now)).collect(),
        search_value: query.search.clone().unwrap_or_default(),
        sort_value: query.sort.clone().unwrap_or_default(),
        next_dir: if query.dir.as_deref() == Some("asc") {
            "desc".to_string()
        } else {
            "asc".to_string()
        },
        preserve_params: build_preserve_params(&query),
        page,
        total_pages,
        prev_page: page.saturating_sub(1).max(1),
        next_page: (page + 1).min(total_pages),
    };

    render(&template).into_response()
}

/// New coupon form handler.
#[instrument(skip(admin))]
pub async fn new_coupon(RequireAdminAuth(admin): RequireAdminAuth) -> Response {
    render(&CouponNewTemplate {
        admin_email: admin.email,
        error: None,
        form: CouponForm::blank(),
    })
    .into_response()
}

/// Create coupon handler.
#[instrument(skip(admin, state, session, form), fields(code = %form.code))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CouponForm>,
) -> Response {
    // Local validation; no network call for a rejected draft.
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render(&CouponNewTemplate {
                admin_email: admin.email,
                error: Some(errors.to_string()),
                form,
            })
            .into_response();
        }
    };

    match state.api().create_coupon(&admin.api_session(), &input).await {
        Ok(coupon) => {
            tracing::info!(coupon_id = %coupon.id, code = %coupon.code, "Coupon created");
            // Structural refresh: the list page re-fetches on render.
            Redirect::to("/coupons").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(code = %input.code, "Failed to create coupon: {err}");
            render(&CouponNewTemplate {
                admin_email: admin.email,
                error: Some(err.to_string()),
                form,
            })
            .into_response()
        }
    }
}

/// Edit coupon form handler.
#[instrument(skip(admin, state, session), fields(coupon_id = %id))]
pub async fn edit(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let coupons = match state.api().list_coupons(&admin.api_session()).await {
        Ok(coupons) => coupons,
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            return crate::error::AppError::Api(err).into_response();
        }
    };

    match coupons.into_iter().find(|c| c.id == id) {
        Some(coupon) => render(&CouponEditTemplate {
            admin_email: admin.email.clone(),
            error: None,
            coupon_id: coupon.id.clone(),
            form: CouponForm::from_coupon(&coupon),
        })
        .into_response(),
        None => crate::error::AppError::NotFound(format!("coupon {id}")).into_response(),
    }
}

/// Update coupon handler.
#[instrument(skip(admin, state, session, form), fields(coupon_id = %id))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<CouponForm>,
) -> Response {
    // Local validation; no network call for a rejected draft.
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render(&CouponEditTemplate {
                admin_email: admin.email,
                error: Some(errors.to_string()),
                coupon_id: id,
                form,
            })
            .into_response();
        }
    };

    match state
        .api()
        .update_coupon(&admin.api_session(), &id, &input)
        .await
    {
        Ok(coupon) => {
            tracing::info!(coupon_id = %coupon.id, "Coupon updated");
            Redirect::to("/coupons").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(coupon_id = %id, "Failed to update coupon: {err}");
            render(&CouponEditTemplate {
                admin_email: admin.email,
                error: Some(err.to_string()),
                coupon_id: id,
                form,
            })
            .into_response()
        }
    }
}

/// Toggle coupon active flag handler.
#[instrument(skip(admin, state, session), fields(coupon_id = %id))]
pub async fn toggle(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match state.api().toggle_coupon(&admin.api_session(), &id).await {
        Ok(coupon) => {
            tracing::info!(coupon_id = %coupon.id, is_active = coupon.is_active, "Coupon toggled");
            Redirect::to("/coupons").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(coupon_id = %id, "Failed to toggle coupon: {err}");
            crate::error::AppError::Api(err).into_response()
        }
    }
}

/// Delete coupon handler.
#[instrument(skip(admin, state, session), fields(coupon_id = %id))]
pub async fn remove(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match state.api().delete_coupon(&admin.api_session(), &id).await {
        Ok(()) => {
            tracing::info!(coupon_id = %id, "Coupon deleted");
            Redirect::to("/coupons").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(coupon_id = %id, "Failed to delete coupon: {err}");
            crate::error::AppError::Api(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use marigold_core::CouponStatus;

    #[test]
    fn test_row_view_formats_percentage_and_usage() {
        let coupon: Coupon = serde_json::from_value(serde_json::json!({
            "id": "c1", "code": "SUMMER20", "type": "percentage", "value": 20,
            "usageLimit": 100, "usedCount": 12,
            "validFrom": "2025-06-01T00:00:00Z", "validUntil": "2025-08-31T23:59:59Z",
            "isActive": true,
        }))
        .expect("decode");
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).single().expect("date");
        let row = CouponRowView::build(&coupon, now);
        assert_eq!(row.value, "20% off");
        assert_eq!(row.usage, "12/100 uses");
        assert_eq!(row.status, CouponStatus::Active.label());
        assert_eq!(row.toggle_label, "Deactivate");
    }

    #[test]
    fn test_row_view_formats_fixed_without_limit() {
        let coupon: Coupon = serde_json::from_value(serde_json::json!({
            "id": "c2", "code": "WELCOME10", "type": "fixed", "value": 10,
            "usedCount": 3,
            "validFrom": "2025-01-01T00:00:00Z", "validUntil": "2025-02-01T00:00:00Z",
            "isActive": false,
        }))
        .expect("decode");
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).single().expect("date");
        let row = CouponRowView::build(&coupon, now);
        assert_eq!(row.value, "$10.00 off");
        assert_eq!(row.usage, "3 uses");
        assert_eq!(row.status, CouponStatus::Expired.label());
        assert_eq!(row.toggle_label, "Activate");
    }
}
