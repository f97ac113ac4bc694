// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unsigned transaction construction for the Base network.
//!
//! Everything in this module is pure and deterministic: RLP encoding,
//! ERC-20 transfer call-data, and EIP-1559-shaped serialization of raw
//! transactions whose fee, nonce and gas fields are deliberately left
//! empty for the remote signer to fill in.

pub mod erc20;
pub mod rlp;
pub mod transaction;
pub mod types;
