//! The Assinaturas API client.
//!
//! [`AssinaturasClient`] ties the other layers together: it resolves each
//! logical operation against the endpoint table, encodes the request body,
//! attaches the Basic credential, dispatches exactly one request through the
//! transport, and either decodes the success body or translates the failure
//! into the typed error channel.
//!
//! The client holds no mutable state — credentials and base URL are captured
//! at construction and read-only afterwards — so one instance is safe to
//! share across concurrently executing calls.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, instrument};
use url::Url;

use crate::{
    auth::Credentials,
    codec,
    endpoint::{Operation, append_query},
    error::{ApiFailure, AssinaturasError, Result},
    resources::{
        BillingInfo, Coupon, CouponsResponse, Customer, CustomersResponse, Invoice,
        InvoicesResponse, Plan, PlansResponse, RetryPreferences, StatusMessage, Subscription,
        SubscriptionsResponse,
    },
    transport::{HttpTransport, RawResponse, RequestContext, Transport},
};

/// Body for associating a coupon with a subscription.
#[derive(Serialize)]
struct CouponRef<'a> {
    code: &'a str,
}

/// Typed client for the Assinaturas API.
///
/// # Examples
///
/// ```no_run
/// use moip_assinaturas::AssinaturasClient;
///
/// # async fn example() -> moip_assinaturas::Result<()> {
/// let client = AssinaturasClient::new(
///     "https://sandbox.moip.com.br/assinaturas/v1",
///     "MY_TOKEN",
///     "MY_KEY",
/// )?;
///
/// let plans = client.plans().await?;
/// for plan in plans.plans {
///     println!("{}: {} cents", plan.code, plan.amount);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AssinaturasClient<T: Transport = HttpTransport> {
    base_url: String,
    credentials: Credentials,
    transport: T,
}

impl AssinaturasClient<HttpTransport> {
    /// Creates a client over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`AssinaturasError::InvalidArgument`] if `base_url` does not
    /// parse as an absolute URL with a host.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_transport(base_url, Credentials::new(token, key), HttpTransport::new())
    }
}

impl<T: Transport> AssinaturasClient<T> {
    /// Creates a client over a specific transport.
    ///
    /// # Errors
    ///
    /// Returns [`AssinaturasError::InvalidArgument`] if `base_url` does not
    /// parse as an absolute URL with a host.
    pub fn with_transport(
        base_url: impl Into<String>,
        credentials: Credentials,
        transport: T,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| AssinaturasError::InvalidArgument(format!("invalid base URL: {e}")))?;
        if parsed.host_str().is_none() {
            return Err(AssinaturasError::InvalidArgument(format!(
                "base URL missing host: {base_url}"
            )));
        }

        Ok(Self { base_url, credentials, transport })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------------
    // Dispatch pipeline
    // ------------------------------------------------------------------------

    /// Resolves, dispatches, and checks one operation.
    ///
    /// Path resolution happens before anything touches the network, so a
    /// missing key fails with zero dispatch attempts. A non-success status
    /// is handed to the error translator; the transport reports its own
    /// kind when no response was obtained.
    #[instrument(skip(self, query, body))]
    async fn dispatch(
        &self,
        operation: Operation,
        key: Option<&str>,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let mut path = operation.path(key)?;
        if !query.is_empty() {
            path = append_query(&path, query)?;
        }

        let authorization = self.credentials.authorization_header();
        let ctx = RequestContext {
            base_url: &self.base_url,
            path: &path,
            authorization: &authorization,
            body: body.as_deref(),
        };

        let response = self.transport.execute(operation.method(), ctx).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiFailure::from_response(response.status, &response.body).into())
        }
    }

    /// Dispatches and decodes the success body.
    async fn request<R: DeserializeOwned>(
        &self,
        operation: Operation,
        key: Option<&str>,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        let response = self.dispatch(operation, key, query, body).await?;
        codec::from_json(&response.body)
    }

    /// Dispatches an operation whose success body carries nothing of value.
    async fn request_no_content(
        &self,
        operation: Operation,
        key: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<()> {
        self.dispatch(operation, key, &[], body).await?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Plans
    // ------------------------------------------------------------------------

    /// Creates a plan.
    ///
    /// # Errors
    ///
    /// Returns the API error kind if the server rejects the plan (e.g. a
    /// duplicate code).
    pub async fn create_plan(&self, plan: &Plan) -> Result<StatusMessage> {
        info!(code = %plan.code, "creating plan");
        let body = codec::to_json(plan)?;
        self.request(Operation::CreatePlan, None, &[], Some(body)).await
    }

    /// Lists all plans on the account.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn plans(&self) -> Result<PlansResponse> {
        self.request(Operation::GetPlans, None, &[], None).await
    }

    /// Gets a plan by code.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when `code` is empty.
    pub async fn plan(&self, code: &str) -> Result<Plan> {
        self.request(Operation::GetPlan, Some(code), &[], None).await
    }

    /// Updates a plan.
    ///
    /// Status is not updatable this way; use [`activate_plan`] and
    /// [`inactivate_plan`].
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    ///
    /// [`activate_plan`]: Self::activate_plan
    /// [`inactivate_plan`]: Self::inactivate_plan
    pub async fn update_plan(&self, code: &str, plan: &Plan) -> Result<()> {
        info!(code, "updating plan");
        let body = codec::to_json(plan)?;
        self.request_no_content(Operation::UpdatePlan, Some(code), Some(body)).await
    }

    /// Activates a plan through its dedicated transition endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn activate_plan(&self, code: &str) -> Result<()> {
        info!(code, "activating plan");
        self.request_no_content(Operation::ActivatePlan, Some(code), None).await
    }

    /// Inactivates a plan through its dedicated transition endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn inactivate_plan(&self, code: &str) -> Result<()> {
        info!(code, "inactivating plan");
        self.request_no_content(Operation::InactivatePlan, Some(code), None).await
    }

    // ------------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------------

    /// Creates a customer.
    ///
    /// `new_vault` asks the server to vault the supplied card for later
    /// charges; it travels as a query flag, not as part of the body.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn create_customer(
        &self,
        customer: &Customer,
        new_vault: bool,
    ) -> Result<StatusMessage> {
        info!(code = %customer.code, "creating customer");
        let body = codec::to_json(customer)?;
        let flag = if new_vault { "true" } else { "false" };
        self.request(Operation::CreateCustomer, None, &[("new_vault", flag)], Some(body)).await
    }

    /// Lists all customers on the account.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn customers(&self) -> Result<CustomersResponse> {
        self.request(Operation::GetCustomers, None, &[], None).await
    }

    /// Gets a customer by code.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when `code` is empty.
    pub async fn customer(&self, code: &str) -> Result<Customer> {
        self.request(Operation::GetCustomer, Some(code), &[], None).await
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn update_customer(&self, code: &str, customer: &Customer) -> Result<()> {
        info!(code, "updating customer");
        let body = codec::to_json(customer)?;
        self.request_no_content(Operation::UpdateCustomer, Some(code), Some(body)).await
    }

    /// Replaces a customer's billing info.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn update_billing_info(
        &self,
        code: &str,
        billing_info: &BillingInfo,
    ) -> Result<StatusMessage> {
        info!(code, "updating billing info");
        let body = codec::to_json(billing_info)?;
        self.request(Operation::UpdateBillingInfo, Some(code), &[], Some(body)).await
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Creates a subscription.
    ///
    /// Set `new_customer` when the embedded customer should be created
    /// alongside the subscription; it travels as a query flag.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn create_subscription(
        &self,
        subscription: &Subscription,
        new_customer: bool,
    ) -> Result<StatusMessage> {
        info!(code = %subscription.code, "creating subscription");
        let body = codec::to_json(subscription)?;
        let flag = if new_customer { "true" } else { "false" };
        self.request(Operation::CreateSubscription, None, &[("new_customer", flag)], Some(body))
            .await
    }

    /// Lists all subscriptions on the account.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn subscriptions(&self) -> Result<SubscriptionsResponse> {
        self.request(Operation::GetSubscriptions, None, &[], None).await
    }

    /// Gets a subscription by code.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when `code` is empty.
    pub async fn subscription(&self, code: &str) -> Result<Subscription> {
        self.request(Operation::GetSubscription, Some(code), &[], None).await
    }

    /// Updates a subscription's data fields (e.g. the next invoice date).
    ///
    /// Status is not updatable this way; use the dedicated
    /// [`suspend_subscription`], [`activate_subscription`] and
    /// [`cancel_subscription`] transitions.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    ///
    /// [`suspend_subscription`]: Self::suspend_subscription
    /// [`activate_subscription`]: Self::activate_subscription
    /// [`cancel_subscription`]: Self::cancel_subscription
    pub async fn update_subscription(
        &self,
        code: &str,
        subscription: &Subscription,
    ) -> Result<()> {
        info!(code, "updating subscription");
        let body = codec::to_json(subscription)?;
        self.request_no_content(Operation::UpdateSubscription, Some(code), Some(body)).await
    }

    /// Suspends a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn suspend_subscription(&self, code: &str) -> Result<()> {
        info!(code, "suspending subscription");
        self.request_no_content(Operation::SuspendSubscription, Some(code), None).await
    }

    /// Reactivates a suspended (or trial) subscription.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn activate_subscription(&self, code: &str) -> Result<()> {
        info!(code, "activating subscription");
        self.request_no_content(Operation::ActivateSubscription, Some(code), None).await
    }

    /// Cancels a subscription. Cancellation is terminal: the server accepts
    /// no further transitions for this subscription.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn cancel_subscription(&self, code: &str) -> Result<()> {
        info!(code, "canceling subscription");
        self.request_no_content(Operation::CancelSubscription, Some(code), None).await
    }

    /// Associates a coupon with a subscription.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when either code is empty.
    pub async fn associate_coupon(
        &self,
        subscription_code: &str,
        coupon_code: &str,
    ) -> Result<Subscription> {
        if coupon_code.trim().is_empty() {
            return Err(AssinaturasError::InvalidArgument(
                "coupon code must not be empty".to_owned(),
            ));
        }

        info!(subscription_code, coupon_code, "associating coupon");
        let body = codec::to_json(&CouponRef { code: coupon_code })?;
        self.request(Operation::AssociateCoupon, Some(subscription_code), &[], Some(body)).await
    }

    /// Dissociates the coupon from a subscription.
    ///
    /// The returned subscription carries an explicit `null` coupon.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn dissociate_coupon(&self, subscription_code: &str) -> Result<Subscription> {
        info!(subscription_code, "dissociating coupon");
        self.request(Operation::DissociateCoupon, Some(subscription_code), &[], None).await
    }

    // ------------------------------------------------------------------------
    // Invoices
    // ------------------------------------------------------------------------

    /// Lists the invoices of a subscription.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when the code is empty.
    pub async fn invoices(&self, subscription_code: &str) -> Result<InvoicesResponse> {
        self.request(Operation::GetSubscriptionInvoices, Some(subscription_code), &[], None).await
    }

    /// Gets an invoice by id.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn invoice(&self, id: u64) -> Result<Invoice> {
        let key = id.to_string();
        self.request(Operation::GetInvoice, Some(&key), &[], None).await
    }

    /// Requests a payment retry for an invoice.
    ///
    /// A server-side rejection (for instance when the invoice is not in a
    /// retryable state) surfaces as an ordinary API failure; the client does
    /// not interpret it.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn retry_invoice(&self, id: u64) -> Result<()> {
        info!(id, "requesting invoice payment retry");
        let key = id.to_string();
        self.request_no_content(Operation::RetryInvoice, Some(&key), None).await
    }

    /// Replaces the account-wide invoice retry preferences.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn update_retry_preferences(&self, preferences: &RetryPreferences) -> Result<()> {
        info!("updating retry preferences");
        let body = codec::to_json(preferences)?;
        self.request_no_content(Operation::UpdateRetryPreferences, None, Some(body)).await
    }

    // ------------------------------------------------------------------------
    // Coupons
    // ------------------------------------------------------------------------

    /// Creates a coupon. The server echoes the created coupon back.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn create_coupon(&self, coupon: &Coupon) -> Result<Coupon> {
        info!(code = %coupon.code, "creating coupon");
        let body = codec::to_json(coupon)?;
        self.request(Operation::CreateCoupon, None, &[], Some(body)).await
    }

    /// Lists all coupons on the account.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn coupons(&self) -> Result<CouponsResponse> {
        self.request(Operation::GetCoupons, None, &[], None).await
    }

    /// Gets a coupon by code.
    ///
    /// # Errors
    ///
    /// Fails fast with the invalid-argument kind when `code` is empty.
    pub async fn coupon(&self, code: &str) -> Result<Coupon> {
        self.request(Operation::GetCoupon, Some(code), &[], None).await
    }

    /// Activates a coupon through its dedicated transition endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn activate_coupon(&self, code: &str) -> Result<Coupon> {
        info!(code, "activating coupon");
        self.request(Operation::ActivateCoupon, Some(code), &[], None).await
    }

    /// Inactivates a coupon through its dedicated transition endpoint.
    ///
    /// Independent of any association: inactivating a coupon does not touch
    /// the subscriptions it is associated with.
    ///
    /// # Errors
    ///
    /// Returns an error kind per [`crate::error::AssinaturasError`].
    pub async fn inactivate_coupon(&self, code: &str) -> Result<Coupon> {
        info!(code, "inactivating coupon");
        self.request(Operation::InactivateCoupon, Some(code), &[], None).await
    }
}
