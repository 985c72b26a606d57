//! Invoice resource shapes.
//!
//! Invoices are read-only from the client's perspective: the server creates
//! them as billing cycles close. The only write-shaped operations are the
//! payment retry request and the account-wide retry preferences, which live
//! in [`crate::resources::retry`].

use serde::{Deserialize, Serialize};

/// An invoice generated for a subscription's billing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Server-assigned invoice identifier.
    pub id: u64,
    /// Invoice amount in cents.
    pub amount: i64,
    /// Code of the subscription this invoice belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_code: Option<String>,
    /// Which billing cycle this invoice covers, counted from 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<u32>,
    /// Billing status, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}

/// Invoice billing status as reported by the server.
///
/// The code/description pair is server-defined and not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceStatus {
    /// Numeric status code.
    pub code: i32,
    /// Human-readable status description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response wrapper for a subscription's invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicesResponse {
    /// Invoices of the queried subscription.
    pub invoices: Vec<Invoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_server_invoice() {
        let json = r#"{
            "id": 1234567,
            "amount": 9990,
            "subscription_code": "sub_1",
            "occurrence": 3,
            "status": {"code": 5, "description": "Atrasada"}
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, 1_234_567);
        assert_eq!(invoice.amount, 9990);
        assert_eq!(invoice.subscription_code.as_deref(), Some("sub_1"));
        assert_eq!(invoice.occurrence, Some(3));
        let status = invoice.status.unwrap();
        assert_eq!(status.code, 5);
        assert_eq!(status.description.as_deref(), Some("Atrasada"));
    }

    #[test]
    fn round_trip_with_optionals_absent() {
        let invoice = Invoice {
            id: 9,
            amount: 100,
            subscription_code: None,
            occurrence: None,
            status: None,
        };

        let json = serde_json::to_string(&invoice).unwrap();
        assert_eq!(json, r#"{"id":9,"amount":100}"#);
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn listing_response_decodes() {
        let json = r#"{"invoices":[{"id":1,"amount":500},{"id":2,"amount":600}]}"#;
        let response: InvoicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.invoices.len(), 2);
        assert_eq!(response.invoices[1].id, 2);
    }

    #[test]
    fn missing_id_is_a_hard_failure() {
        let result: Result<Invoice, _> = serde_json::from_str(r#"{"amount":500}"#);
        assert!(result.is_err());
    }
}
