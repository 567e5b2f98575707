//! Read-only mirror of a billing subscription row.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subscription state as mirrored from the payment provider.
///
/// The server never writes this shape; it exists so clients and future
/// webhook consumers agree on the field names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    pub customer_id: String,
    pub subscription_id: Option<String>,
    pub subscription_status: String,
    pub price_id: Option<String>,
    pub current_period_start: Option<i64>,
    pub current_period_end: Option<i64>,
    pub cancel_at_period_end: bool,
    pub payment_method_brand: Option<String>,
    pub payment_method_last4: Option<String>,
}
