//! Wire types for the Marigold admin API.
//!
//! One module per resource, plus [`common`] for shapes shared across
//! resources. All types use camelCase field names on the wire; money is
//! decimal (JSON numbers), timestamps are RFC 3339.

pub mod analytics;
pub mod common;
pub mod coupon;
pub mod order;
pub mod product;
pub mod review;

pub use analytics::{
    AnalyticsPeriod, CustomerAnalytics, DashboardStats, ProductAnalytics, SalesAnalytics,
    SalesPoint, TopProduct,
};
pub use common::{Address, PageMeta};
pub use coupon::{Coupon, CouponInput};
pub use order::{
    BulkStatusInput, BulkStatusOutcome, Order, OrderItem, OrderListPage, OrderListParams,
    Shipping, StatusUpdateInput,
};
pub use product::{ImageUpload, Product, ProductCreateInput, ProductUpdateInput, StockUpdateInput};
pub use review::{AdminReply, Review, ReviewListPage, ReviewListParams};
