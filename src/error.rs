// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error taxonomy for the CDP platform client.
//!
//! Construction-time failures (`KeyFormat`) are fatal: without a usable
//! signing key the client cannot authenticate a single call. Per-call
//! failures are surfaced as values so a payout loop can continue past one
//! failed item; nothing in this crate retries automatically, since blindly
//! re-submitting a transaction risks a double-spend.

/// Errors produced by the CDP platform client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Credential material could not be parsed into a signing key, or its
    /// internal consistency check failed. Not retryable.
    #[error("invalid key material: {0}")]
    KeyFormat(String),

    /// Signing an auth token failed. Indicates a corrupted key or an
    /// algorithm mismatch; not retryable.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A caller-supplied address could not be parsed as a 20-byte EVM
    /// address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A caller-supplied payment amount was negative, non-finite, or too
    /// large to represent in atomic units.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The HTTP request failed at the network level or returned a non-2xx
    /// status. The message embeds method, path, status and response body so
    /// callers can decide whether to retry.
    #[error("request failed: {0}")]
    Transport(String),

    /// The remote returned 2xx but the body was missing an expected field.
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}
