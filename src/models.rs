// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Result records returned by the wallet client façade.
//!
//! Expected failures on the payout and swap paths are returned as values,
//! never propagated as errors across the façade boundary, so a payout loop
//! can continue past one failed item.

use serde::{Deserialize, Serialize};

/// One token holding of the platform-held account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token symbol (e.g. "USDC")
    pub symbol: String,
    /// Balance in atomic units, as reported by the platform
    pub amount: String,
    /// Token decimals
    pub decimals: u32,
}

/// Outcome of a stablecoin payout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub success: bool,
    /// Broadcast transaction hash, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// Failure description including status and body for transport errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Indicative swap pricing. Read-only; carries no executable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPrice {
    /// Whether the platform found a route with liquidity
    pub liquidity_available: bool,
    /// Atomic amount sold
    pub sell_amount: String,
    /// Atomic amount bought at the indicated price
    pub buy_amount: String,
}

/// Executable transaction descriptor attached to a firm swap quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTransaction {
    pub to: String,
    /// Native value, decimal or 0x-hex string
    pub value: String,
    /// Call-data as 0x-hex
    pub data: String,
}

/// Firm swap quote with its executable transaction descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub sell_amount: String,
    pub buy_amount: String,
    pub transaction: QuoteTransaction,
}

/// Outcome of a swap execution attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
