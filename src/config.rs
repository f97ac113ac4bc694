// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client credentials and environment-based configuration.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `CDP_API_KEY_ID` | Platform API key identifier (JWT `kid`/`sub`) |
//! | `CDP_API_KEY_SECRET` | API signing key (PEM or base64 Ed25519 bundle) |
//! | `CDP_WALLET_SECRET` | Wallet-auth signing key (base64 key material) |
//! | `CDP_ACCOUNT_ADDRESS` | Platform-held account address on Base |

use crate::error::ClientError;

/// Credential bundle for one [`WalletClient`](crate::client::WalletClient).
///
/// All four values are opaque strings supplied at construction. Only
/// internal consistency (key parseability, Ed25519 key-pair match) is
/// validated, not external correctness.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key identifier, used as the JWT `kid` and `sub`.
    pub api_key_id: String,
    /// API signing key material: PEM (ECDSA P-256) or base64 Ed25519 bundle.
    pub api_key_secret: String,
    /// Wallet-auth signing key material (base64).
    pub wallet_secret: String,
    /// Address of the platform-held account payments are sent from.
    pub account_address: String,
}

impl Credentials {
    pub fn new(
        api_key_id: impl Into<String>,
        api_key_secret: impl Into<String>,
        wallet_secret: impl Into<String>,
        account_address: impl Into<String>,
    ) -> Self {
        Self {
            api_key_id: api_key_id.into(),
            api_key_secret: api_key_secret.into(),
            wallet_secret: wallet_secret.into(),
            account_address: account_address.into(),
        }
    }

    /// Load credentials from the `CDP_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self {
            api_key_id: env_required("CDP_API_KEY_ID")?,
            api_key_secret: env_required("CDP_API_KEY_SECRET")?,
            wallet_secret: env_required("CDP_WALLET_SECRET")?,
            account_address: env_required("CDP_ACCOUNT_ADDRESS")?,
        })
    }

    /// True when every required `CDP_*` variable is present and non-empty.
    pub fn env_is_configured() -> bool {
        ["CDP_API_KEY_ID", "CDP_API_KEY_SECRET", "CDP_WALLET_SECRET", "CDP_ACCOUNT_ADDRESS"]
            .iter()
            .all(|name| env_optional(name).is_some())
    }
}

fn env_required(name: &str) -> Result<String, ClientError> {
    env_optional(name)
        .ok_or_else(|| ClientError::KeyFormat(format!("missing configuration: {name}")))
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}
