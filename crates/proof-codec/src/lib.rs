// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! Decoder for the binary inclusion proof served by KYVE trustless gateways.
//!
//! The proof travels base64-encoded in the `x-kyve-proof` response header
//! next to the raw data item. [`decode_proof`] turns it into a [`Proof`]
//! holding the pool and bundle ids, the canonical item keys and the merkle
//! audit path needed to rebuild the bundle's root.

mod error;
mod wire;

pub use error::*;
pub use wire::*;
