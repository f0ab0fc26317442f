//! Order management operations.

use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{
    BulkStatusInput, BulkStatusOutcome, Order, OrderListPage, OrderListParams, StatusUpdateInput,
};
use crate::{AdminApi, ApiError, ApiSession};

#[derive(Debug, Deserialize)]
struct OrderData {
    order: Order,
}

impl AdminApi {
    /// List orders with server-side filtering, sorting, and pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session, params))]
    pub async fn list_orders(
        &self,
        session: &ApiSession,
        params: &OrderListParams,
    ) -> Result<OrderListPage, ApiError> {
        let request = self
            .authed(Method::GET, "/api/order/admin/list", session)
            .query(&params.to_query());
        self.execute(request).await
    }

    /// Update a single order's status, with optional tracking details.
    ///
    /// The caller is expected to reject illegal transitions before
    /// calling (the status selector only offers legal successors); the
    /// API enforces the same table and reports violations as
    /// [`ApiError::Validation`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an illegal transition or
    /// [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session, input), fields(order_id = %input.order_id, status = %input.status))]
    pub async fn update_order_status(
        &self,
        session: &ApiSession,
        input: &StatusUpdateInput,
    ) -> Result<Order, ApiError> {
        let request = self
            .authed(Method::PUT, "/api/order/admin/status", session)
            .json(input);
        let data: OrderData = self.execute(request).await?;
        Ok(data.order)
    }

    /// Update several orders to the same status in one call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when any order rejects the
    /// transition; no partial outcome is reported in that case.
    #[instrument(skip(self, session, input), fields(count = input.order_ids.len(), status = %input.status))]
    pub async fn bulk_update_order_status(
        &self,
        session: &ApiSession,
        input: &BulkStatusInput,
    ) -> Result<BulkStatusOutcome, ApiError> {
        let request = self
            .authed(Method::PUT, "/api/order/admin/bulk-status", session)
            .json(input);
        self.execute(request).await
    }
}
