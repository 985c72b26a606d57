//! Customer resource shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A customer record.
///
/// Sent on create/update; the same shape comes back from reads. Billing
/// info is write-mostly: the server never echoes full card data back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer code, chosen by the caller at creation.
    pub code: String,
    /// Contact e-mail address.
    pub email: String,
    /// Full legal name.
    pub fullname: String,
    /// CPF document number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    /// Phone area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_area_code: Option<u32>,
    /// Phone number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Birth day of month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate_day: Option<u32>,
    /// Birth month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate_month: Option<u32>,
    /// Birth year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate_year: Option<i32>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Billing information for charging this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
}

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name.
    pub street: String,
    /// Street number.
    pub number: String,
    /// Address complement (apartment, suite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// District / neighborhood.
    pub district: String,
    /// City.
    pub city: String,
    /// State abbreviation.
    pub state: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country: String,
    /// Postal code, digits only.
    pub zipcode: String,
}

/// Billing information wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    /// Credit card to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

/// Credit card data for billing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Name embossed on the card.
    pub holder_name: String,
    /// Card number, digits only.
    pub number: String,
    /// Two-digit expiration month.
    pub expiration_month: String,
    /// Two-digit expiration year.
    pub expiration_year: String,
}

// Card numbers must not leak into debug output or logs.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = if self.number.len() > 4 {
            format!("****{}", &self.number[self.number.len() - 4..])
        } else {
            "****".to_owned()
        };
        f.debug_struct("CreditCard")
            .field("holder_name", &self.holder_name)
            .field("number", &masked)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish()
    }
}

/// Response wrapper for the customer listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomersResponse {
    /// All customers on the account.
    pub customers: Vec<Customer>,
}
