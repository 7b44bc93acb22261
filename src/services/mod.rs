//! Services module - Pure business logic for joke delivery.
//!
//! This module resolves "give me a joke" requests. The services are
//! **framework-agnostic** and have no dependencies on the presentation
//! layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`DeliveryService`]: Resolves a joke from either the remote provider
//!   (one async HTTP GET, fallible) or the local custom collection (uniform
//!   random sample), and reports the outcome as a [`JokeResult`](crate::models::JokeResult)
//!   rather than an error — fetch failures degrade to a fixed placeholder.
//!
//! - [`FetchError`]: The internal error taxonomy of the remote path
//!   (request failure, non-success status, malformed body). Logged for
//!   diagnostics, never surfaced to the user.
//!
//! # Design Philosophy
//!
//! The services layer is designed to be:
//! - **Pure where it can be**: response interpretation lives in
//!   [`parse_provider_response`], a pure function tested without a network
//! - **Async**: the provider call is the application's one suspension point
//! - **Deterministic under test**: the random source for custom sampling is
//!   injected by the caller

pub mod delivery;

pub use delivery::{DeliveryService, FetchError, parse_provider_response};
