// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication against the CDP platform API.
//!
//! Two concerns live here, both pure (no I/O):
//!
//! - `keys` - parsing configured credential strings into typed signing keys
//! - `token` - building the two JWT variants the platform requires: the
//!   bearer token attached to every call and the body-bound wallet-auth
//!   token attached to state-changing calls

pub mod keys;
pub mod token;

pub use keys::{parse_signing_key, parse_wallet_secret, ApiSigningKey, SignatureAlgorithm};
pub use token::{build_api_auth_token, build_wallet_auth_token, requires_wallet_auth};
