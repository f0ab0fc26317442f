//! Product management route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::{ImageUpload, Product};
use marigold_core::StockStatus;

use crate::{
    components::data_table::{DataTableConfig, products_table_config},
    forms::{ProductForm, StockForm},
    listing::{DerivedPage, ProductListQuery, derive_products},
    middleware::auth::RequireAdminAuth,
    models::CurrentAdmin,
    routes::{auth_guard, render},
    state::AppState,
};

/// Product view for the list table.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub sizes: String,
    pub stock_label: String,
    pub available: i64,
    pub is_low_or_out: bool,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        let status = product.stock_status();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: format!("${:.2}", product.price),
            sizes: product.sizes.join(", "),
            stock_label: status.label().to_string(),
            available: product.inventory.available,
            is_low_or_out: status != StockStatus::InStock,
        }
    }
}

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub config: DataTableConfig,
    pub rows: Vec<ProductRowView>,
    pub search_value: String,
    pub sort_value: String,
    pub next_dir: String,
    pub preserve_params: String,
    pub page: usize,
    pub total_pages: usize,
    pub prev_page: usize,
    pub next_page: usize,
}

/// New product form template.
#[derive(Template)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub form: ProductForm,
}

/// Inventory edit form template.
#[derive(Template)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub product_id: String,
    pub product_name: String,
    pub form: StockForm,
}

/// Build URL parameters preserved across sort and pagination links.
fn build_preserve_params(query: &ProductListQuery) -> String {
    let mut params = Vec::new();
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if let Some(category) = query.category.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if let Some(stock) = query.stock.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("stock={stock}"));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("&{}", params.join("&"))
    }
}

/// Products list page handler.
///
/// Fetches the full catalog and derives the visible page locally
/// (search, filters, sort, pagination).
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductListQuery>,
) -> Response {
    let (products, error) = match state.api().list_products(&admin.api_session()).await {
        Ok(products) => (products, None),
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch products: {err}");
            (vec![], Some(err.to_string()))
        }
    };

    let DerivedPage {
        items,
        page,
        total_pages,
    } = derive_products(&products, &query);

    let template = ProductsIndexTemplate {
        admin_email: admin.email.clone(),
        error,
        config: products_table_config(),
        rows: items.iter().map(ProductRowView::from).collect(),
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

/// New product form handler.
#[instrument(skip(admin))]
pub async fn new_product(RequireAdminAuth(admin): RequireAdminAuth) -> Response {
    render(&ProductNewTemplate {
        admin_email: admin.email,
        error: None,
        form: ProductForm::default(),
    })
    .into_response()
}

/// Read the multipart create form into a draft plus uploaded images.
async fn read_product_multipart(
    multipart: &mut Multipart,
) -> Result<(ProductForm, Vec<ImageUpload>), String> {
    let mut form = ProductForm::default();
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| format!("Invalid upload: {err}"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name.starts_with("image") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| format!("Invalid upload: {err}"))?;
            // Empty file inputs are submitted as zero-length parts.
            if !bytes.is_empty() {
                images.push(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|err| format!("Invalid upload: {err}"))?;
        match name.as_str() {
            "name" => form.name = value,
            "description" => form.description = value,
            "price" => form.price = value,
            "category" => form.category = value,
            "sub_category" => form.sub_category = value,
            "bestseller" => form.bestseller = true,
            "sizes" => form.sizes.push(value),
            _ => {}
        }
    }

    Ok((form, images))
}

/// Create product handler (multipart: fields plus up to 4 images).
#[instrument(skip(admin, state, session, multipart))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Response {
    let (form, images) = match read_product_multipart(&mut multipart).await {
        Ok(parsed) => parsed,
        Err(message) => {
            return render(&ProductNewTemplate {
                admin_email: admin.email,
                error: Some(message),
                form: ProductForm::default(),
            })
            .into_response();
        }
    };

    // Local validation; no network call for a rejected draft.
    let input = match form.validate(images) {
        Ok(input) => input,
        Err(errors) => {
            return render(&ProductNewTemplate {
                admin_email: admin.email,
                error: Some(errors.to_string()),
                form,
            })
            .into_response();
        }
    };

    match state.api().add_product(&admin.api_session(), input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, name = %product.name, "Product created");
            Redirect::to("/products").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed to create product: {err}");
            render(&ProductNewTemplate {
                admin_email: admin.email,
                error: Some(err.to_string()),
                form,
            })
            .into_response()
        }
    }
}

/// Fetch one product by id from the list endpoint.
async fn find_product(
    state: &AppState,
    admin: &CurrentAdmin,
    id: &str,
) -> Result<Option<Product>, marigold_client::ApiError> {
    let products = state.api().list_products(&admin.api_session()).await?;
    Ok(products.into_iter().find(|p| p.id == id))
}

/// Inventory edit form handler.
#[instrument(skip(admin, state, session))]
pub async fn edit(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match find_product(&state, &admin, &id).await {
        Ok(Some(product)) => render(&ProductEditTemplate {
            admin_email: admin.email.clone(),
            error: None,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            form: StockForm::from_level(product.inventory),
        })
        .into_response(),
        Ok(None) => crate::error::AppError::NotFound(format!("product {id}")).into_response(),
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            crate::error::AppError::Api(err).into_response()
        }
    }
}

/// Inventory update handler.
#[instrument(skip(admin, state, session, form), fields(product_id = %id))]
pub async fn update_stock(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<StockForm>,
) -> Response {
    let re_render = |error: String, form: StockForm, name: String| {
        render(&ProductEditTemplate {
            admin_email: admin.email.clone(),
            error: Some(error),
            product_id: id.clone(),
            product_name: name,
            form,
        })
        .into_response()
    };

    // Local validation; no network call for a rejected draft.
    let level = match form.validate() {
        Ok(level) => level,
        Err(errors) => return re_render(errors.to_string(), form, String::new()),
    };

    let input = marigold_client::StockUpdateInput {
        product_id: &id,
        total: level.total,
        available: level.available,
        low_stock_threshold: level.low_stock_threshold,
    };

    match state.api().update_stock(&admin.api_session(), input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Inventory updated");
            Redirect::to("/products").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(product_id = %id, "Failed to update inventory: {err}");
            re_render(err.to_string(), form, String::new())
        }
    }
}

/// Remove product handler.
#[instrument(skip(admin, state, session), fields(product_id = %id))]
pub async fn remove(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match state.api().remove_product(&admin.api_session(), &id).await {
        Ok(()) => {
            tracing::info!(product_id = %id, "Product removed");
            Redirect::to("/products").into_response()
        }
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!(product_id = %id, "Failed to remove product: {err}");
            crate::error::AppError::Api(err).into_response()
        }
    }
}
