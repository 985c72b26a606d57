//! Static map from logical operations to HTTP verbs and resource paths.
//!
//! Every API call the client can make is one [`Operation`]. The verb and
//! path template for each operation are a fixed table, not computed logic;
//! status transitions (activate, inactivate, suspend, cancel) are distinct
//! operations with their own dedicated paths and are never routed through
//! the generic update entry.
//!
//! Path resolution substitutes the caller-supplied resource key into the
//! template's `{code}`/`{id}` placeholder. A required key that is missing or
//! empty fails fast with [`AssinaturasError::InvalidArgument`] — the request
//! is never dispatched.

use url::Url;

use crate::{
    error::{AssinaturasError, Result},
    transport::Method,
};

/// Logical API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create a plan.
    CreatePlan,
    /// List all plans.
    GetPlans,
    /// Get a plan by code.
    GetPlan,
    /// Update a plan by code.
    UpdatePlan,
    /// Activate a plan (dedicated transition, not a field update).
    ActivatePlan,
    /// Inactivate a plan (dedicated transition, not a field update).
    InactivatePlan,
    /// Create a customer.
    CreateCustomer,
    /// List all customers.
    GetCustomers,
    /// Get a customer by code.
    GetCustomer,
    /// Update a customer by code.
    UpdateCustomer,
    /// Replace a customer's billing info.
    UpdateBillingInfo,
    /// Create a subscription.
    CreateSubscription,
    /// List all subscriptions.
    GetSubscriptions,
    /// Get a subscription by code.
    GetSubscription,
    /// Update a subscription by code.
    UpdateSubscription,
    /// Suspend a subscription.
    SuspendSubscription,
    /// Reactivate a suspended subscription.
    ActivateSubscription,
    /// Cancel a subscription (terminal).
    CancelSubscription,
    /// Associate a coupon with a subscription.
    AssociateCoupon,
    /// Dissociate the coupon from a subscription.
    DissociateCoupon,
    /// List a subscription's invoices.
    GetSubscriptionInvoices,
    /// Get an invoice by id.
    GetInvoice,
    /// Request a payment retry for an invoice.
    RetryInvoice,
    /// Replace the account-wide invoice retry preferences.
    UpdateRetryPreferences,
    /// Create a coupon.
    CreateCoupon,
    /// List all coupons.
    GetCoupons,
    /// Get a coupon by code.
    GetCoupon,
    /// Activate a coupon.
    ActivateCoupon,
    /// Inactivate a coupon.
    InactivateCoupon,
}

impl Operation {
    /// HTTP verb for this operation.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::CreatePlan
            | Self::CreateCustomer
            | Self::CreateSubscription
            | Self::AssociateCoupon
            | Self::RetryInvoice
            | Self::UpdateRetryPreferences
            | Self::CreateCoupon => Method::Post,
            Self::GetPlans
            | Self::GetPlan
            | Self::GetCustomers
            | Self::GetCustomer
            | Self::GetSubscriptions
            | Self::GetSubscription
            | Self::GetSubscriptionInvoices
            | Self::GetInvoice
            | Self::GetCoupons
            | Self::GetCoupon => Method::Get,
            Self::UpdatePlan
            | Self::ActivatePlan
            | Self::InactivatePlan
            | Self::UpdateCustomer
            | Self::UpdateBillingInfo
            | Self::UpdateSubscription
            | Self::SuspendSubscription
            | Self::ActivateSubscription
            | Self::CancelSubscription
            | Self::ActivateCoupon
            | Self::InactivateCoupon => Method::Put,
            Self::DissociateCoupon => Method::Delete,
        }
    }

    /// Path template for this operation.
    ///
    /// `{code}` and `{id}` mark the caller-supplied resource key.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::CreatePlan | Self::GetPlans => "/plans",
            Self::GetPlan | Self::UpdatePlan => "/plans/{code}",
            Self::ActivatePlan => "/plans/{code}/activate",
            Self::InactivatePlan => "/plans/{code}/inactivate",
            Self::CreateCustomer | Self::GetCustomers => "/customers",
            Self::GetCustomer | Self::UpdateCustomer => "/customers/{code}",
            Self::UpdateBillingInfo => "/customers/{code}/billing_info",
            Self::CreateSubscription | Self::GetSubscriptions => "/subscriptions",
            Self::GetSubscription | Self::UpdateSubscription => "/subscriptions/{code}",
            Self::SuspendSubscription => "/subscriptions/{code}/suspend",
            Self::ActivateSubscription => "/subscriptions/{code}/activate",
            Self::CancelSubscription => "/subscriptions/{code}/cancel",
            Self::AssociateCoupon | Self::DissociateCoupon => "/subscriptions/{code}/coupon",
            Self::GetSubscriptionInvoices => "/subscriptions/{code}/invoices",
            Self::GetInvoice => "/invoices/{id}",
            Self::RetryInvoice => "/invoices/{id}/retry",
            Self::UpdateRetryPreferences => "/invoices/retry_preferences",
            Self::CreateCoupon | Self::GetCoupons => "/coupons",
            Self::GetCoupon => "/coupons/{code}",
            Self::ActivateCoupon => "/coupons/{code}/activate",
            Self::InactivateCoupon => "/coupons/{code}/inactivate",
        }
    }

    /// Resolves the request path, substituting the resource key.
    ///
    /// # Errors
    ///
    /// Returns [`AssinaturasError::InvalidArgument`] when the template
    /// requires a key and `key` is `None` or empty. Raised before any
    /// network call.
    pub fn path(self, key: Option<&str>) -> Result<String> {
        let template = self.template();

        let placeholder = if template.contains("{code}") {
            Some("{code}")
        } else if template.contains("{id}") {
            Some("{id}")
        } else {
            None
        };

        let Some(placeholder) = placeholder else {
            return Ok(template.to_owned());
        };

        match key {
            Some(key) if !key.trim().is_empty() => Ok(template.replace(placeholder, key)),
            _ => Err(AssinaturasError::InvalidArgument(format!(
                "operation path {template} requires a non-empty resource key"
            ))),
        }
    }
}

/// Appends query parameters to a resolved path with proper encoding.
///
/// # Errors
///
/// Returns [`AssinaturasError::InvalidArgument`] if the path does not form a
/// valid URL.
///
/// # Examples
///
/// ```
/// use moip_assinaturas::endpoint::append_query;
///
/// let path = append_query("/customers", &[("new_vault", "true")])?;
/// assert_eq!(path, "/customers?new_vault=true");
/// # Ok::<(), moip_assinaturas::AssinaturasError>(())
/// ```
pub fn append_query(path: &str, params: &[(&str, &str)]) -> Result<String> {
    let base = format!("https://example.invalid{path}");
    let mut url =
        Url::parse(&base).map_err(|e| AssinaturasError::InvalidArgument(e.to_string()))?;

    {
        let mut query_pairs = url.query_pairs_mut();
        for (key, value) in params {
            query_pairs.append_pair(key, value);
        }
    }

    match url.query() {
        Some(query) if !query.is_empty() => Ok(format!("{}?{query}", url.path())),
        _ => Ok(url.path().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Verb table
    // ========================================================================

    #[test]
    fn reads_use_get() {
        assert_eq!(Operation::GetPlans.method(), Method::Get);
        assert_eq!(Operation::GetSubscriptionInvoices.method(), Method::Get);
        assert_eq!(Operation::GetInvoice.method(), Method::Get);
    }

    #[test]
    fn creates_use_post() {
        assert_eq!(Operation::CreatePlan.method(), Method::Post);
        assert_eq!(Operation::CreateCustomer.method(), Method::Post);
        assert_eq!(Operation::CreateSubscription.method(), Method::Post);
        assert_eq!(Operation::CreateCoupon.method(), Method::Post);
        assert_eq!(Operation::RetryInvoice.method(), Method::Post);
    }

    #[test]
    fn transitions_use_put() {
        assert_eq!(Operation::ActivatePlan.method(), Method::Put);
        assert_eq!(Operation::SuspendSubscription.method(), Method::Put);
        assert_eq!(Operation::CancelSubscription.method(), Method::Put);
        assert_eq!(Operation::InactivateCoupon.method(), Method::Put);
    }

    #[test]
    fn coupon_dissociation_uses_delete() {
        assert_eq!(Operation::DissociateCoupon.method(), Method::Delete);
        assert_eq!(Operation::AssociateCoupon.method(), Method::Post);
    }

    // ========================================================================
    // Path resolution
    // ========================================================================

    #[test]
    fn keyless_paths_resolve_to_the_template() {
        assert_eq!(Operation::GetPlans.path(None).unwrap(), "/plans");
        assert_eq!(
            Operation::UpdateRetryPreferences.path(None).unwrap(),
            "/invoices/retry_preferences"
        );
    }

    #[test]
    fn code_placeholder_is_substituted() {
        assert_eq!(Operation::GetPlan.path(Some("gold")).unwrap(), "/plans/gold");
        assert_eq!(
            Operation::UpdateBillingInfo.path(Some("cli_42")).unwrap(),
            "/customers/cli_42/billing_info"
        );
    }

    #[test]
    fn id_placeholder_is_substituted() {
        assert_eq!(Operation::GetInvoice.path(Some("1234")).unwrap(), "/invoices/1234");
        assert_eq!(Operation::RetryInvoice.path(Some("1234")).unwrap(), "/invoices/1234/retry");
    }

    #[test]
    fn transition_operations_resolve_to_their_dedicated_paths() {
        assert_eq!(Operation::ActivatePlan.path(Some("gold")).unwrap(), "/plans/gold/activate");
        assert_eq!(
            Operation::InactivatePlan.path(Some("gold")).unwrap(),
            "/plans/gold/inactivate"
        );
        assert_eq!(
            Operation::SuspendSubscription.path(Some("sub1")).unwrap(),
            "/subscriptions/sub1/suspend"
        );
        assert_eq!(
            Operation::CancelSubscription.path(Some("sub1")).unwrap(),
            "/subscriptions/sub1/cancel"
        );
        assert_eq!(
            Operation::ActivateCoupon.path(Some("c10")).unwrap(),
            "/coupons/c10/activate"
        );
    }

    #[test]
    fn missing_key_fails_fast() {
        let result = Operation::GetPlan.path(None);
        assert!(matches!(result.unwrap_err(), AssinaturasError::InvalidArgument(_)));
    }

    #[test]
    fn empty_key_fails_fast() {
        let result = Operation::GetPlan.path(Some(""));
        assert!(matches!(result.unwrap_err(), AssinaturasError::InvalidArgument(_)));
    }

    #[test]
    fn whitespace_key_fails_fast() {
        let result = Operation::CancelSubscription.path(Some("   "));
        assert!(matches!(result.unwrap_err(), AssinaturasError::InvalidArgument(_)));
    }

    #[test]
    fn key_on_a_keyless_operation_is_ignored() {
        assert_eq!(Operation::GetPlans.path(Some("ignored")).unwrap(), "/plans");
    }

    // ========================================================================
    // Query building
    // ========================================================================

    #[test]
    fn append_query_simple() {
        let path = append_query("/customers", &[("new_vault", "true")]).unwrap();
        assert_eq!(path, "/customers?new_vault=true");
    }

    #[test]
    fn append_query_multiple_params() {
        let path = append_query("/subscriptions", &[("new_customer", "false"), ("page", "2")])
            .unwrap();
        assert_eq!(path, "/subscriptions?new_customer=false&page=2");
    }

    #[test]
    fn append_query_no_params() {
        let path = append_query("/plans", &[]).unwrap();
        assert_eq!(path, "/plans");
    }

    #[test]
    fn append_query_encodes_special_characters() {
        let path = append_query("/plans", &[("q", "a b&c")]).unwrap();
        assert!(path.contains("a+b%26c") || path.contains("a%20b%26c"));
    }
}
