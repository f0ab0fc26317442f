//! Product and inventory operations.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::instrument;

use crate::envelope::Ack;
use crate::types::{Product, ProductCreateInput, ProductUpdateInput, StockUpdateInput};
use crate::{AdminApi, ApiError, ApiSession};

/// At most this many images are sent with a new product.
const MAX_PRODUCT_IMAGES: usize = 4;

#[derive(Debug, Deserialize)]
struct ProductListData {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Product,
}

impl AdminApi {
    /// List the full product catalog.
    ///
    /// The list is small enough that filtering, sorting, and pagination
    /// happen caller-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn list_products(&self, session: &ApiSession) -> Result<Vec<Product>, ApiError> {
        let request = self.authed(Method::GET, "/api/product/list", session);
        let data: ProductListData = self.execute(request).await?;
        Ok(data.products)
    }

    /// Create a product, uploading up to four images as multipart parts
    /// named `image1`..`image4`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the API rejects the fields,
    /// or a transport error if an image part cannot be built.
    #[instrument(skip(self, session, input), fields(name = %input.name))]
    pub async fn add_product(
        &self,
        session: &ApiSession,
        input: ProductCreateInput,
    ) -> Result<Product, ApiError> {
        let mut form = Form::new()
            .text("name", input.name)
            .text("description", input.description)
            .text("price", input.price.to_string())
            .text("category", input.category)
            .text("subCategory", input.sub_category)
            .text("bestseller", input.bestseller.to_string())
            .text("sizes", serde_json::to_string(&input.sizes)?);

        for (index, image) in input.images.into_iter().take(MAX_PRODUCT_IMAGES).enumerate() {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part(format!("image{}", index + 1), part);
        }

        let request = self
            .authed(Method::POST, "/api/product/add", session)
            .multipart(form);
        let data: ProductData = self.execute(request).await?;
        Ok(data.product)
    }

    /// Update a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id, or
    /// [`ApiError::Validation`] when the API rejects the fields.
    #[instrument(skip(self, session, input), fields(product_id = %input.id))]
    pub async fn update_product(
        &self,
        session: &ApiSession,
        input: &ProductUpdateInput,
    ) -> Result<Product, ApiError> {
        let request = self
            .authed(Method::PUT, "/api/product/update", session)
            .json(input);
        let data: ProductData = self.execute(request).await?;
        Ok(data.product)
    }

    /// Remove a product from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session))]
    pub async fn remove_product(&self, session: &ApiSession, id: &str) -> Result<(), ApiError> {
        let request = self
            .authed(Method::POST, "/api/product/remove", session)
            .json(&serde_json::json!({ "id": id }));
        self.execute::<Ack>(request).await?;
        Ok(())
    }

    /// List products at or below their low-stock threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn low_stock_products(&self, session: &ApiSession) -> Result<Vec<Product>, ApiError> {
        let request = self.authed(Method::GET, "/api/product/stock/low", session);
        let data: ProductListData = self.execute(request).await?;
        Ok(data.products)
    }

    /// Update a product's inventory counts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the API rejects the counts
    /// (e.g. available exceeding total).
    #[instrument(skip(self, session), fields(product_id = %input.product_id))]
    pub async fn update_stock(
        &self,
        session: &ApiSession,
        input: StockUpdateInput<'_>,
    ) -> Result<Product, ApiError> {
        let request = self
            .authed(Method::PUT, "/api/product/stock/update", session)
            .json(&input);
        let data: ProductData = self.execute(request).await?;
        Ok(data.product)
    }
}
