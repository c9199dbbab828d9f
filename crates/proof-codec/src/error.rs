// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors decoding the binary inclusion proof.
///
/// None of these are retryable: the proof is a fixed payload, so a decode
/// failure on one attempt fails on every attempt.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Proof header is not valid base64.
    #[error("invalid base64 proof encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Audit path bytes do not form whole merkle nodes.
    #[error("invalid proof encoding: {trailing} trailing audit path bytes")]
    Malformed {
        /// Leftover bytes after the last whole node.
        trailing: usize,
    },

    /// Decoded proof is shorter than the fixed prefix.
    #[error("encoded proof is too short: {length} bytes")]
    TooShort {
        /// Decoded proof length in bytes.
        length: usize,
    },

    /// A terminated string field has no terminator.
    #[error("invalid encoded proof, missing: {field}")]
    Truncated {
        /// Name of the field whose terminator is missing.
        field: &'static str,
    },

    /// [std::array::TryFromSliceError].
    #[error("TryFromSliceError: {0}")]
    TryFromSlice(#[from] std::array::TryFromSliceError),

    /// A string field is not valid UTF-8.
    #[error("{0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Unsupported proof version tag.
    #[error("unsupported proof version: {0}")]
    VersionUnsupported(u8),
}
