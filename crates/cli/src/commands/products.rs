//! Product catalog commands.

use marigold_admin::listing::{ProductListQuery, derive_products};
use marigold_client::AdminApi;

use super::session::{self, SessionError};

/// List products, deriving the page with the panel's pipeline.
///
/// # Errors
///
/// Returns [`SessionError`] when not logged in or when the API rejects
/// the session.
pub async fn list(
    api: &AdminApi,
    search: Option<String>,
    category: Option<String>,
    stock: Option<String>,
    page: usize,
) -> Result<(), SessionError> {
    let api_session = session::load()?;
    let products = api.list_products(&api_session).await?;

    let query = ProductListQuery {
        search,
        category,
        stock,
        page: Some(page),
        ..ProductListQuery::default()
    };
    let derived = derive_products(&products, &query);

    tracing::info!(
        "Page {}/{} ({} products total)",
        derived.page,
        derived.total_pages,
        products.len()
    );
    for product in &derived.items {
        tracing::info!(
            "{:<32} {:<8} ${:<8.2} {:>4} available ({})",
            product.name,
            product.category,
            product.price,
            product.inventory.available,
            product.stock_status().label()
        );
    }
    Ok(())
}

/// List products at or below their low-stock threshold.
///
/// # Errors
///
/// Returns [`SessionError`] when not logged in or when the API rejects
/// the session.
pub async fn low_stock(api: &AdminApi) -> Result<(), SessionError> {
    let api_session = session::load()?;
    let products = api.low_stock_products(&api_session).await?;

    if products.is_empty() {
        tracing::info!("Nothing is running low");
        return Ok(());
    }

    for product in &products {
        tracing::info!(
            "{:<32} {:>4}/{:<4} (threshold {})",
            product.name,
            product.inventory.available,
            product.inventory.total,
            product.inventory.low_stock_threshold
        );
    }
    Ok(())
}
