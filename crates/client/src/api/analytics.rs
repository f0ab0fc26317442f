//! Read-only analytics operations.

use reqwest::Method;
use tracing::instrument;

use crate::types::{
    AnalyticsPeriod, CustomerAnalytics, DashboardStats, ProductAnalytics, SalesAnalytics,
};
use crate::{AdminApi, ApiError, ApiSession};

impl AdminApi {
    /// Headline dashboard numbers for a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn analytics_dashboard(
        &self,
        session: &ApiSession,
        period: AnalyticsPeriod,
    ) -> Result<DashboardStats, ApiError> {
        self.analytics(session, "dashboard", period).await
    }

    /// Sales-over-time series for a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn analytics_sales(
        &self,
        session: &ApiSession,
        period: AnalyticsPeriod,
    ) -> Result<SalesAnalytics, ApiError> {
        self.analytics(session, "sales", period).await
    }

    /// Top products for a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn analytics_products(
        &self,
        session: &ApiSession,
        period: AnalyticsPeriod,
    ) -> Result<ProductAnalytics, ApiError> {
        self.analytics(session, "products", period).await
    }

    /// Customer summary for a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self, session))]
    pub async fn analytics_customers(
        &self,
        session: &ApiSession,
        period: AnalyticsPeriod,
    ) -> Result<CustomerAnalytics, ApiError> {
        self.analytics(session, "customers", period).await
    }

    async fn analytics<T: serde::de::DeserializeOwned>(
        &self,
        session: &ApiSession,
        report: &str,
        period: AnalyticsPeriod,
    ) -> Result<T, ApiError> {
        let request = self
            .authed(Method::GET, &format!("/api/analytics/{report}"), session)
            .query(&[("period", period.as_str())]);
        self.execute(request).await
    }
}
