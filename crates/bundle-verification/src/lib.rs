// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! Merkle inclusion verification for KYVE data items.
//!
//! A trustless gateway hands out a raw data item together with a decoded
//! [`proof_codec::Proof`]. This crate rebuilds the item's canonical leaf
//! preimage, folds the leaf hash through the proof's audit path and compares
//! the resulting root bit-exactly against the [`BundleSummary`] the chain
//! reports for the pool and bundle the proof names. Everything in here is
//! pure: no I/O, no logging, no shared state.

mod data_item;
mod errors;
mod inclusion_proof;
mod types;

pub use data_item::*;
pub use errors::*;
pub use inclusion_proof::*;
pub use types::*;
