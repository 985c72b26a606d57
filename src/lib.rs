//! Typed async client for the Moip Assinaturas subscription billing API.
//!
//! This crate maps strongly-typed resource objects (plans, customers,
//! subscriptions, invoices, coupons) onto the API's JSON wire format,
//! attaches HTTP Basic authentication to every request, dispatches calls
//! against resource-specific endpoints, and translates transport and API
//! failures into a typed error channel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │            AssinaturasClient (client)            │
//! │  ┌───────────┐ ┌──────────┐ ┌────────────────┐  │
//! │  │ endpoint  │ │  codec   │ │      auth      │  │
//! │  │ verb+path │ │ JSON ⇄   │ │  Basic header  │  │
//! │  │  table    │ │  typed   │ │  (token:key)   │  │
//! │  └───────────┘ └──────────┘ └────────────────┘  │
//! └────────┬─────────────────────────────────────────┘
//!          │ one HTTPS round trip per call
//! ┌────────▼────────┐          ┌───────────────────┐
//! │    transport    │─ non-2xx ─▶  error (typed    │
//! │    (reqwest)    │          │   translation)    │
//! └─────────────────┘          └───────────────────┘
//! ```
//!
//! Each operation is a single network attempt: there is no retry, backoff,
//! or caching in the client. Whether a failure is worth retrying is visible
//! in the error kind and left to the caller.
//!
//! # Quick start
//!
//! ```no_run
//! use moip_assinaturas::{AssinaturasClient, resources::{IntervalUnit, Plan, PlanInterval}};
//!
//! # async fn example() -> moip_assinaturas::Result<()> {
//! let client = AssinaturasClient::new(
//!     "https://sandbox.moip.com.br/assinaturas/v1",
//!     std::env::var("MOIP_TOKEN").expect("MOIP_TOKEN not set"),
//!     std::env::var("MOIP_KEY").expect("MOIP_KEY not set"),
//! )?;
//!
//! let plan = Plan {
//!     code: "plano_gold".to_owned(),
//!     name: "Plano Gold".to_owned(),
//!     description: None,
//!     amount: 9990,
//!     setup_fee: Some(500),
//!     max_qty: None,
//!     interval: Some(PlanInterval { length: 1, unit: IntervalUnit::Month }),
//!     billing_cycles: Some(12),
//!     trial: None,
//!     payment_method: None,
//!     status: None,
//! };
//!
//! let created = client.create_plan(&plan).await?;
//! println!("{}", created.message);
//!
//! // Status transitions go through dedicated endpoints, not field updates.
//! client.inactivate_plan("plano_gold").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! All operations return [`Result`]. Callers branch on the kind:
//!
//! ```no_run
//! use moip_assinaturas::{AssinaturasClient, AssinaturasError};
//!
//! # async fn example(client: AssinaturasClient) {
//! match client.plan("gold").await {
//!     Ok(plan) => println!("{}", plan.name),
//!     Err(AssinaturasError::Api(failure)) => {
//!         // Server said no; message is the server's own text.
//!         eprintln!("API error {}: {}", failure.status, failure.message);
//!     }
//!     Err(AssinaturasError::Transport(e)) => {
//!         // No response at all; possibly worth retrying upstream.
//!         eprintln!("network failure: {e}");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```
//!
//! # Module organization
//!
//! - [`client`]: the API client and its per-resource operations
//! - [`resources`]: typed resource shapes exchanged with the API
//! - [`endpoint`]: static operation → verb + path table
//! - [`codec`]: JSON wire codec and the calendar-date type
//! - [`auth`]: credential pair and Basic header derivation
//! - [`transport`]: single-attempt HTTP dispatch (reqwest)
//! - [`error`]: the four-kind typed error channel

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod client;
pub mod codec;
pub mod endpoint;
pub mod error;
pub mod resources;
pub mod transport;

pub use client::AssinaturasClient;
pub use codec::ApiDate;
pub use error::{ApiFailure, AssinaturasError, FieldError, Result};
