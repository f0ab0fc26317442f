//! Review wire types and list parameters.

use chrono::{DateTime, Utc};
use marigold_core::ReviewStatus;
use serde::{Deserialize, Serialize};

use super::common::PageMeta;

/// An admin reply attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReply {
    /// Reply text shown under the review.
    pub message: String,
    /// Admin who replied.
    #[serde(default)]
    pub replied_by: String,
    /// When the reply was posted.
    pub replied_at: DateTime<Utc>,
}

/// A product review as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review id.
    pub id: String,
    /// Reviewing user's id.
    pub user_id: String,
    /// Reviewed product's id.
    pub product_id: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review title.
    #[serde(default)]
    pub title: String,
    /// Review body.
    #[serde(default)]
    pub comment: String,
    /// Moderation status.
    pub status: ReviewStatus,
    /// Admin reply, if any.
    #[serde(default)]
    pub admin_reply: Option<AdminReply>,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// One page of the server-paginated review list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewListPage {
    /// Reviews on this page.
    pub reviews: Vec<Review>,
    /// Pagination metadata.
    pub pagination: PageMeta,
}

/// Query parameters for the admin review list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListParams {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Moderation status filter.
    pub status: Option<ReviewStatus>,
}

impl ReviewListParams {
    /// Build the query string pairs for the list endpoint.
    #[must_use]
    pub fn to_query(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_decodes_with_reply() {
        let json = r#"{
            "id": "r1",
            "userId": "u1",
            "productId": "p1",
            "rating": 4,
            "title": "Great fit",
            "comment": "Runs slightly large.",
            "status": "approved",
            "adminReply": {"message": "Thanks!", "repliedBy": "admin@marigoldapparel.com",
                           "repliedAt": "2025-06-02T09:00:00Z"},
            "createdAt": "2025-06-01T10:30:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).expect("decode");
        assert_eq!(review.status, ReviewStatus::Approved);
        assert!(review.admin_reply.is_some());
    }

    #[test]
    fn test_review_decodes_without_reply() {
        let json = r#"{
            "id": "r2", "userId": "u1", "productId": "p1", "rating": 2,
            "status": "pending", "createdAt": "2025-06-01T10:30:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).expect("decode");
        assert!(review.admin_reply.is_none());
        assert!(review.title.is_empty());
    }

    #[test]
    fn test_params_to_query() {
        let params = ReviewListParams {
            page: Some(3),
            limit: None,
            status: Some(ReviewStatus::Pending),
        };
        let pairs = params.to_query();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("status".to_string(), "pending".to_string())));
    }
}
