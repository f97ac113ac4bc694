// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network and token constants for the Base payout path.

/// Target network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network identifier the platform API expects (e.g. `"base"`)
    pub name: &'static str,
    /// Chain ID encoded into raw transactions
    pub chain_id: u64,
}

/// Base mainnet, the only network this client targets.
pub const BASE_MAINNET: NetworkConfig = NetworkConfig {
    name: "base",
    chain_id: 8453,
};

/// ERC-20 token metadata.
#[derive(Debug, Clone)]
pub struct Erc20Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    /// Contract address on Base mainnet
    pub address: &'static str,
}

/// Circle's native USDC on Base, the payout stablecoin.
pub const USDC_TOKEN: Erc20Token = Erc20Token {
    symbol: "USDC",
    name: "USD Coin",
    decimals: 6,
    address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
};
