//! Coupon management operations.

use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

use crate::envelope::Ack;
use crate::types::{Coupon, CouponInput};
use crate::{AdminApi, ApiError, ApiSession};

#[derive(Debug, Deserialize)]
struct CouponListData {
    coupons: Vec<Coupon>,
}

#[derive(Debug, Deserialize)]
struct CouponData {
    coupon: Coupon,
}

impl AdminApi {
    /// List all coupons.
    ///
    /// Filtering (including the derived temporal status) happens
    /// caller-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn list_coupons(&self, session: &ApiSession) -> Result<Vec<Coupon>, ApiError> {
        let request = self.authed(Method::GET, "/api/coupons/list", session);
        let data: CouponListData = self.execute(request).await?;
        Ok(data.coupons)
    }

    /// Create a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a duplicate code or invalid
    /// fields.
    #[instrument(skip(self, session, input), fields(code = %input.code))]
    pub async fn create_coupon(
        &self,
        session: &ApiSession,
        input: &CouponInput,
    ) -> Result<Coupon, ApiError> {
        let request = self
            .authed(Method::POST, "/api/coupons/create", session)
            .json(input);
        let data: CouponData = self.execute(request).await?;
        Ok(data.coupon)
    }

    /// Update a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id, or
    /// [`ApiError::Validation`] for invalid fields.
    #[instrument(skip(self, session, input), fields(coupon_id = %id))]
    pub async fn update_coupon(
        &self,
        session: &ApiSession,
        id: &str,
        input: &CouponInput,
    ) -> Result<Coupon, ApiError> {
        let request = self
            .authed(Method::PUT, &format!("/api/coupons/{id}"), session)
            .json(input);
        let data: CouponData = self.execute(request).await?;
        Ok(data.coupon)
    }

    /// Flip a coupon's `is_active` flag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session), fields(coupon_id = %id))]
    pub async fn toggle_coupon(&self, session: &ApiSession, id: &str) -> Result<Coupon, ApiError> {
        let request = self.authed(Method::PATCH, &format!("/api/coupons/{id}/toggle"), session);
        let data: CouponData = self.execute(request).await?;
        Ok(data.coupon)
    }

    /// Delete a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session), fields(coupon_id = %id))]
    pub async fn delete_coupon(&self, session: &ApiSession, id: &str) -> Result<(), ApiError> {
        let request = self.authed(Method::DELETE, &format!("/api/coupons/{id}"), session);
        self.execute::<Ack>(request).await?;
        Ok(())
    }
}
