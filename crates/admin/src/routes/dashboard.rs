//! Dashboard overview handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::{AnalyticsPeriod, CustomerAnalytics, DashboardStats, TopProduct};

use crate::{
    middleware::auth::RequireAdminAuth,
    routes::{auth_guard, render},
    state::AppState,
};

/// Stats tiles for the overview.
#[derive(Debug, Clone, Default)]
pub struct StatsView {
    pub total_sales: String,
    pub total_orders: u64,
    pub total_products: u64,
    pub total_customers: u64,
    pub pending_orders: u64,
    pub low_stock_count: u64,
}

impl From<&DashboardStats> for StatsView {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_sales: format!("${:.2}", stats.total_sales),
            total_orders: stats.total_orders,
            total_products: stats.total_products,
            total_customers: stats.total_customers,
            pending_orders: stats.pending_orders,
            low_stock_count: stats.low_stock_count,
        }
    }
}

/// Top product row for the overview.
#[derive(Debug, Clone)]
pub struct TopProductView {
    pub name: String,
    pub units_sold: u64,
    pub revenue: String,
}

impl From<&TopProduct> for TopProductView {
    fn from(product: &TopProduct) -> Self {
        Self {
            name: product.name.clone(),
            units_sold: product.units_sold,
            revenue: format!("${:.2}", product.revenue),
        }
    }
}

/// Customer summary for the overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomersView {
    pub new_customers: u64,
    pub returning_customers: u64,
}

impl From<&CustomerAnalytics> for CustomersView {
    fn from(customers: &CustomerAnalytics) -> Self {
        Self {
            new_customers: customers.new_customers,
            returning_customers: customers.returning_customers,
        }
    }
}

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub period: String,
    pub stats: StatsView,
    pub sales_total: String,
    pub top_products: Vec<TopProductView>,
    pub customers: CustomersView,
}

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub period: Option<String>,
}

fn parse_period(param: Option<&str>) -> AnalyticsPeriod {
    match param {
        Some("week") => AnalyticsPeriod::Week,
        Some("quarter") => AnalyticsPeriod::Quarter,
        Some("year") => AnalyticsPeriod::Year,
        _ => AnalyticsPeriod::Month,
    }
}

/// Dashboard overview handler.
///
/// The four analytics reads are independent, so they run concurrently;
/// each failure degrades its own section and is reported once.
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let period = parse_period(query.period.as_deref());
    let api_session = admin.api_session();
    let api = state.api();

    let (dashboard, sales, products, customers) = tokio::join!(
        api.analytics_dashboard(&api_session, period),
        api.analytics_sales(&api_session, period),
        api.analytics_products(&api_session, period),
        api.analytics_customers(&api_session, period),
    );

    let mut error = None;
    for err in [
        dashboard.as_ref().err(),
        sales.as_ref().err(),
        products.as_ref().err(),
        customers.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    {
        if let Some(response) = auth_guard(&session, err).await {
            return response;
        }
        tracing::error!("Failed to fetch analytics: {err}");
        error = Some("Some analytics could not be loaded".to_string());
    }

    let template = DashboardTemplate {
        admin_email: admin.email.clone(),
        error,
        period: period.to_string(),
        stats: dashboard.as_ref().map(StatsView::from).unwrap_or_default(),
        sales_total: sales
            .as_ref()
            .map(|s| format!("${:.2}", s.total_sales))
            .unwrap_or_else(|_| "—".to_string()),
        top_products: products
            .as_ref()
            .map(|p| p.top_products.iter().map(TopProductView::from).collect())
            .unwrap_or_default(),
        customers: customers.as_ref().map(CustomersView::from).unwrap_or_default(),
    };

    render(&template).into_response()
}
