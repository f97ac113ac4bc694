// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT construction for the two token variants the platform API requires.
//!
//! Every call carries a bearer token; state-changing account and
//! spend-permission calls additionally carry a wallet-auth token that binds
//! the request body via a canonical-JSON SHA-256 hash. Both tokens are
//! built fresh immediately before use and are valid for 120 seconds, so
//! there is no refresh state to coordinate.

use base64ct::{Base64UrlUnpadded, Encoding};
use chrono::Utc;
use rand::RngCore;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use url::Url;

use super::keys::ApiSigningKey;
use crate::error::ClientError;

/// Hard token validity window, in seconds.
pub const TOKEN_TTL_SECS: i64 = 120;

/// Audience claim attached to both token variants.
const AUDIENCE: &str = "cdp_service";

/// Build the bearer token attached to every API call.
///
/// The `uris` claim is pinned to the exact `METHOD host+path` of the single
/// call the token authorizes, by construction rather than after-the-fact
/// validation. The query string is excluded.
pub fn build_api_auth_token(
    key: &ApiSigningKey,
    key_id: &str,
    method: &str,
    url: &str,
) -> Result<String, ClientError> {
    build_token(key, Some(key_id), method, url, None)
}

/// Build the wallet-auth token for a state-changing call.
///
/// When a non-empty body is present its canonical (recursively key-sorted)
/// JSON serialization is hashed into a `reqHash` claim, guarding against
/// body tampering between token issuance and delivery. The wallet secret
/// has no key id, so the header carries no `kid` and the claims no `sub`.
pub fn build_wallet_auth_token(
    key: &ApiSigningKey,
    method: &str,
    url: &str,
    body: Option<&Value>,
) -> Result<String, ClientError> {
    let req_hash = match body {
        Some(value) if !value.is_null() => Some(request_hash(value)?),
        _ => None,
    };
    build_token(key, None, method, url, req_hash)
}

/// Whether an endpoint requires the additional wallet-auth token: mutating
/// methods on account or spend-permission paths. GET never does.
pub fn requires_wallet_auth(method: &str, path: &str) -> bool {
    let mutating = matches!(method, "POST" | "PUT" | "DELETE");
    mutating
        && path
            .split('/')
            .any(|segment| segment == "accounts" || segment == "spend-permissions")
}

fn build_token(
    key: &ApiSigningKey,
    key_id: Option<&str>,
    method: &str,
    url: &str,
    req_hash: Option<String>,
) -> Result<String, ClientError> {
    let uri = canonical_uri(method, url)?;
    let now = Utc::now().timestamp();

    // A fresh random nonce per token keeps two tokens for the same call
    // from ever being bit-identical.
    let mut nonce = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut nonce);

    let mut header = json!({
        "alg": key.algorithm().as_str(),
        "typ": "JWT",
        "nonce": hex::encode(nonce),
    });
    if let Some(kid) = key_id {
        header["kid"] = json!(kid);
    }

    let mut claims = json!({
        "iss": "cdp",
        "aud": AUDIENCE,
        "nbf": now,
        "exp": now + TOKEN_TTL_SECS,
        "uris": [uri],
    });
    if let Some(kid) = key_id {
        claims["sub"] = json!(kid);
    }
    if let Some(hash) = req_hash {
        claims["reqHash"] = json!(hash);
    }

    let signing_input = format!("{}.{}", encode_part(&header)?, encode_part(&claims)?);
    let signature = key.sign(signing_input.as_bytes())?;
    Ok(format!(
        "{signing_input}.{}",
        Base64UrlUnpadded::encode_string(&signature)
    ))
}

/// Base64url-unpadded JSON serialization of one JWT part.
fn encode_part(part: &Value) -> Result<String, ClientError> {
    let bytes = serde_json::to_vec(part)
        .map_err(|e| ClientError::Signing(format!("token part serialization: {e}")))?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

/// Canonical URI claim: `METHOD host+path`, query string excluded.
fn canonical_uri(method: &str, url: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(url)
        .map_err(|e| ClientError::Signing(format!("invalid request url {url}: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ClientError::Signing(format!("request url has no host: {url}")))?;
    Ok(format!("{method} {host}{}", parsed.path()))
}

/// Hex SHA-256 of the canonical JSON serialization of `body`.
fn request_hash(body: &Value) -> Result<String, ClientError> {
    let canonical = canonical_json(body)?;
    Ok(hex::encode(Sha256::digest(canonical.as_bytes())))
}

/// Serialize with object keys recursively sorted; arrays keep their order.
fn canonical_json(value: &Value) -> Result<String, ClientError> {
    serde_json::to_string(&sort_keys(value))
        .map_err(|e| ClientError::Signing(format!("canonical body serialization: {e}")))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(key, _)| key.as_str());
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, inner)| (key.clone(), sort_keys(inner)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
