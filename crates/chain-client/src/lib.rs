// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! Blocking HTTP client pieces for the trustless pipeline: fetching data
//! items from an untrusted gateway, resolving the trusted chain REST
//! endpoint for a chain id, and looking up finalized bundles there.
//!
//! Both fetch paths retry with bounded exponential backoff. Nothing is
//! cached or shared between calls, so concurrent lookups are independent.

mod bundles;
mod chain;
mod error;
mod fetch;

pub use bundles::*;
pub use chain::*;
pub use error::*;
pub use fetch::*;
