//! Coupon resource shapes.

use serde::{Deserialize, Serialize};

use crate::codec::ApiDate;

/// A discount coupon.
///
/// Coupon status is independent of any association with a subscription and
/// moves between `ACTIVE` and `INACTIVE` only through the dedicated
/// activate/inactivate operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon code, chosen by the caller at creation.
    pub code: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coupon description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount applied by this coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<CouponDiscount>,
    /// Server-side coupon status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CouponStatus>,
    /// How long the discount recurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<CouponDuration>,
    /// Maximum number of redemptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<i64>,
    /// Date the coupon stops being redeemable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<ApiDate>,
}

/// Discount value and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponDiscount {
    /// Discount value: cents for `AMOUNT`, basis for `PERCENT`.
    pub value: i64,
    /// Discount kind.
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
}

/// Discount kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Percentage discount.
    Percent,
    /// Fixed amount discount, in cents.
    Amount,
}

/// How long a coupon's discount recurs once associated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponDuration {
    /// Recurrence kind.
    #[serde(rename = "type")]
    pub duration_type: DurationType,
    /// Number of occurrences, for `REPEATING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
}

/// Coupon duration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationType {
    /// Applies once.
    Once,
    /// Applies for a fixed number of invoices.
    Repeating,
    /// Applies for the subscription's lifetime.
    Forever,
}

/// Server-side coupon status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    /// Coupon can be associated and redeemed.
    Active,
    /// Coupon is disabled.
    Inactive,
}

/// Response wrapper for the coupon listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponsResponse {
    /// All coupons on the account.
    pub coupons: Vec<Coupon>,
}
