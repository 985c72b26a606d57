//! Typed resource shapes exchanged with the API.
//!
//! These are pure data-transfer shapes: the caller constructs them for
//! create/update calls, the client decodes them from responses, and nothing
//! here is cached or mutated by the core after decoding. Field names are
//! snake_case on the wire (matching the Rust field names directly); enum
//! values travel as their upper-case literal names.
//!
//! Optional fields holding `None` are omitted from outbound JSON, with one
//! deliberate exception: [`Subscription::coupon`] is always emitted, because
//! an explicit `null` there means "no coupon associated" rather than "field
//! not supplied".
//!
//! [`Subscription::coupon`]: subscription::Subscription::coupon

use serde::{Deserialize, Serialize};

pub mod coupon;
pub mod customer;
pub mod invoice;
pub mod plan;
pub mod retry;
pub mod subscription;

pub use coupon::{Coupon, CouponDiscount, CouponDuration, CouponStatus, CouponsResponse,
    DiscountType, DurationType};
pub use customer::{Address, BillingInfo, CreditCard, Customer, CustomersResponse};
pub use invoice::{Invoice, InvoiceStatus, InvoicesResponse};
pub use plan::{IntervalUnit, PaymentMethod, Plan, PlanInterval, PlanStatus, PlanTrial,
    PlansResponse};
pub use retry::{RetryOutcome, RetryPreferences};
pub use subscription::{Subscription, SubscriptionStatus, SubscriptionsResponse};

/// Server acknowledgement for create/update operations.
///
/// The message is the server's operator-facing text, preserved verbatim
/// (it may be localized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable acknowledgement text.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_round_trip() {
        let json = r#"{"message":"Plano criado com sucesso"}"#;
        let decoded: StatusMessage = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.message, "Plano criado com sucesso");
        assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
    }
}
