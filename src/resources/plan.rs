//! Plan resource shapes.

use serde::{Deserialize, Serialize};

/// A subscription plan.
///
/// Amounts are integer cents. The `status` field is read back from the
/// server; changing it locally has no effect — a plan moves between
/// `ACTIVE` and `INACTIVE` only through the dedicated activate/inactivate
/// operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan code, chosen by the caller at creation.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Plan description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Charge amount in cents.
    pub amount: i64,
    /// One-time setup fee in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<i64>,
    /// Maximum number of concurrent subscriptions allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_qty: Option<i64>,
    /// Billing interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    /// Number of billing cycles before the subscription expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycles: Option<i64>,
    /// Trial configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial: Option<PlanTrial>,
    /// Payment methods accepted for subscriptions to this plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Server-side plan status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
}

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInterval {
    /// Number of units between charges.
    pub length: u32,
    /// Unit of the interval.
    pub unit: IntervalUnit,
}

/// Interval unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    /// Daily interval.
    Day,
    /// Monthly interval.
    Month,
    /// Yearly interval.
    Year,
}

/// Trial configuration of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTrial {
    /// Trial length in days.
    pub days: u32,
    /// Whether new subscriptions start in trial.
    pub enabled: bool,
    /// Whether the setup fee is held until the trial ends.
    pub hold_setup_fee: bool,
}

/// Payment methods a plan accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Credit card only.
    CreditCard,
    /// Boleto only.
    Boleto,
    /// Any supported method.
    All,
}

/// Server-side plan status.
///
/// Transitions happen only through the dedicated activate/inactivate
/// operations, never through a plain field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// Plan accepts new subscriptions.
    Active,
    /// Plan rejects new subscriptions.
    Inactive,
}

/// Response wrapper for the plan listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlansResponse {
    /// All plans on the account.
    pub plans: Vec<Plan>,
}
