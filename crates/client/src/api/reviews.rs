//! Review moderation operations.

use marigold_core::ReviewStatus;
use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{Review, ReviewListPage, ReviewListParams};
use crate::{AdminApi, ApiError, ApiSession};

#[derive(Debug, Deserialize)]
struct ReviewData {
    review: Review,
}

impl AdminApi {
    /// List reviews with server-side pagination and status filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn list_reviews(
        &self,
        session: &ApiSession,
        params: ReviewListParams,
    ) -> Result<ReviewListPage, ApiError> {
        let request = self
            .authed(Method::GET, "/api/reviews/admin/list", session)
            .query(&params.to_query());
        self.execute(request).await
    }

    /// Set a review's moderation status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session), fields(review_id = %id, status = %status))]
    pub async fn set_review_status(
        &self,
        session: &ApiSession,
        id: &str,
        status: ReviewStatus,
    ) -> Result<Review, ApiError> {
        let request = self
            .authed(Method::PUT, &format!("/api/reviews/admin/{id}/status"), session)
            .json(&serde_json::json!({ "status": status }));
        let data: ReviewData = self.execute(request).await?;
        Ok(data.review)
    }

    /// Post (or replace) the admin reply on a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty message, or
    /// [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, session, message), fields(review_id = %id))]
    pub async fn reply_to_review(
        &self,
        session: &ApiSession,
        id: &str,
        message: &str,
    ) -> Result<Review, ApiError> {
        let request = self
            .authed(Method::POST, &format!("/api/reviews/{id}/reply"), session)
            .json(&serde_json::json!({ "message": message }));
        let data: ReviewData = self.execute(request).await?;
        Ok(data.review)
    }

    /// Remove the admin reply from a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id or a review with no
    /// reply.
    #[instrument(skip(self, session), fields(review_id = %id))]
    pub async fn delete_review_reply(
        &self,
        session: &ApiSession,
        id: &str,
    ) -> Result<Review, ApiError> {
        let request = self.authed(Method::DELETE, &format!("/api/reviews/{id}/reply"), session);
        let data: ReviewData = self.execute(request).await?;
        Ok(data.review)
    }
}
