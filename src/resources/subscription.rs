//! Subscription resource shapes.

use serde::{Deserialize, Serialize};

use crate::{
    codec::ApiDate,
    resources::{coupon::Coupon, customer::Customer, plan::{PaymentMethod, Plan}},
};

/// A subscription binding a customer to a plan.
///
/// The `status` field is read back from the server. Transitions happen only
/// through the dedicated suspend/activate/cancel operations; `CANCELED` is
/// terminal and no operation reverses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique subscription code, chosen by the caller at creation.
    pub code: String,
    /// Override amount in cents; the plan's amount applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Payment method for this subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// The subscribed plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// The subscribing customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Server-side subscription status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Date of the next invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_invoice_date: Option<ApiDate>,
    /// Date the subscription expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<ApiDate>,
    /// Associated coupon.
    ///
    /// Always serialized: an explicit `null` means "no coupon associated",
    /// which is how dissociation is represented on this wire. Omission would
    /// read as "field not supplied".
    pub coupon: Option<Coupon>,
}

/// Server-side subscription status.
///
/// Lifecycle: `TRIAL` → `ACTIVE` → `SUSPENDED` ⇄ `ACTIVE` → `CANCELED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// In trial period.
    Trial,
    /// Active and billing.
    Active,
    /// Billing suspended; can be reactivated.
    Suspended,
    /// Terminated. Terminal: no operation reverses it.
    Canceled,
    /// Ran out of billing cycles.
    Expired,
}

impl SubscriptionStatus {
    /// Whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Canceled | Self::Expired)
    }
}

/// Response wrapper for the subscription listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionsResponse {
    /// All subscriptions on the account.
    pub subscriptions: Vec<Subscription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_subscription() -> Subscription {
        Subscription {
            code: "sub_1".to_owned(),
            amount: None,
            payment_method: None,
            plan: None,
            customer: None,
            status: None,
            next_invoice_date: None,
            expiration_date: None,
            coupon: None,
        }
    }

    #[test]
    fn absent_coupon_serializes_as_explicit_null() {
        // Dissociation semantics: "no coupon" must be visible on the wire.
        let json = serde_json::to_string(&bare_subscription()).unwrap();
        assert_eq!(json, r#"{"code":"sub_1","coupon":null}"#);
    }

    #[test]
    fn explicit_null_coupon_round_trips() {
        let decoded: Subscription =
            serde_json::from_str(r#"{"code":"sub_1","coupon":null}"#).unwrap();
        assert_eq!(decoded, bare_subscription());
    }

    #[test]
    fn omitted_coupon_also_decodes_as_none() {
        // Older server payloads drop the field entirely.
        let decoded: Subscription = serde_json::from_str(r#"{"code":"sub_1"}"#).unwrap();
        assert!(decoded.coupon.is_none());
    }

    #[test]
    fn full_subscription_round_trip() {
        let subscription = Subscription {
            code: "sub_2".to_owned(),
            amount: Some(9990),
            payment_method: Some(PaymentMethod::CreditCard),
            plan: Some(Plan {
                code: "gold".to_owned(),
                name: "Gold".to_owned(),
                description: None,
                amount: 9990,
                setup_fee: None,
                max_qty: None,
                interval: None,
                billing_cycles: None,
                trial: None,
                payment_method: None,
                status: None,
            }),
            customer: None,
            status: Some(SubscriptionStatus::Active),
            next_invoice_date: ApiDate::from_ymd(2026, 9, 1),
            expiration_date: None,
            coupon: Some(Coupon {
                code: "c10".to_owned(),
                name: None,
                description: None,
                discount: None,
                status: None,
                duration: None,
                max_redemptions: None,
                expiration_date: None,
            }),
        };

        let json = serde_json::to_string(&subscription).unwrap();
        let back: Subscription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subscription);
    }

    #[test]
    fn status_literals_match_the_lifecycle_names() {
        assert_eq!(serde_json::to_string(&SubscriptionStatus::Trial).unwrap(), "\"TRIAL\"");
        assert_eq!(serde_json::to_string(&SubscriptionStatus::Active).unwrap(), "\"ACTIVE\"");
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::Suspended).unwrap(),
            "\"SUSPENDED\""
        );
        assert_eq!(serde_json::to_string(&SubscriptionStatus::Canceled).unwrap(), "\"CANCELED\"");
        assert_eq!(serde_json::to_string(&SubscriptionStatus::Expired).unwrap(), "\"EXPIRED\"");
    }

    #[test]
    fn unknown_status_literal_is_rejected() {
        assert!(serde_json::from_str::<SubscriptionStatus>("\"PAUSED\"").is_err());
    }

    #[test]
    fn canceled_and_expired_are_terminal() {
        assert!(SubscriptionStatus::Canceled.is_terminal());
        assert!(SubscriptionStatus::Expired.is_terminal());
        assert!(!SubscriptionStatus::Trial.is_terminal());
        assert!(!SubscriptionStatus::Active.is_terminal());
        assert!(!SubscriptionStatus::Suspended.is_terminal());
    }

    #[test]
    fn next_invoice_date_uses_the_date_codec() {
        let mut subscription = bare_subscription();
        subscription.next_invoice_date = ApiDate::from_ymd(2026, 8, 20);
        let json = serde_json::to_string(&subscription).unwrap();
        assert!(json.contains(r#""next_invoice_date":"2026-08-20""#));
    }
}
