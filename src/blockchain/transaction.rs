// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EIP-1559-shaped serialization of raw, unsigned transactions.
//!
//! The platform signs and broadcasts server-side, so nonce, fee and gas
//! fields are deliberately left empty for the remote signer to fill in.
//! The payload is the RLP list
//! `[chainId, nonce, maxPriorityFee, maxFee, gasLimit, to, value, data,
//! accessList]` prefixed with the `0x02` type byte, hex-encoded with a
//! `0x` prefix.

use super::erc20::parse_address;
use super::rlp::{self, be_bytes_minimal, hex_to_bytes, Rlp};
use crate::error::ClientError;

/// EIP-1559 transaction type byte.
const EIP1559_TYPE: u8 = 0x02;

/// Serialize an unsigned EIP-1559 transaction for remote signing.
pub fn serialize_unsigned(
    chain_id: u64,
    to: &str,
    value: u128,
    call_data: Vec<u8>,
) -> Result<String, ClientError> {
    let to = parse_address(to)?;

    let fields = Rlp::List(vec![
        Rlp::Bytes(be_bytes_minimal(chain_id as u128)),
        Rlp::Bytes(Vec::new()), // nonce - remote signer fills in
        Rlp::Bytes(Vec::new()), // maxPriorityFeePerGas
        Rlp::Bytes(Vec::new()), // maxFeePerGas
        Rlp::Bytes(Vec::new()), // gasLimit
        Rlp::Bytes(to.to_vec()),
        Rlp::Bytes(be_bytes_minimal(value)),
        Rlp::Bytes(call_data),
        Rlp::List(Vec::new()), // accessList
    ]);

    let mut raw = vec![EIP1559_TYPE];
    raw.extend_from_slice(&rlp::encode(&fields));
    Ok(format!("0x{}", hex::encode(raw)))
}

/// Serialize an unsigned transaction from a swap quote's transaction
/// descriptor, whose `to`, `value` and `data` arrive as strings.
pub fn serialize_from_descriptor(
    chain_id: u64,
    to: &str,
    value: &str,
    data: &str,
) -> Result<String, ClientError> {
    let value = parse_value(value)?;
    let call_data = hex_to_bytes(data)?;
    serialize_unsigned(chain_id, to, value, call_data)
}

/// Quote descriptors carry `value` as a decimal string ("0" for ERC-20
/// swaps) or occasionally as 0x-hex.
fn parse_value(value: &str) -> Result<u128, ClientError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Some(hex_digits) = trimmed.strip_prefix("0x") {
        return u128::from_str_radix(hex_digits, 16)
            .map_err(|e| ClientError::ResponseShape(format!("invalid hex value {value}: {e}")));
    }
    trimmed
        .parse::<u128>()
        .map_err(|e| ClientError::ResponseShape(format!("invalid value {value}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::erc20::transfer_call_data;
    use crate::blockchain::types::{BASE_MAINNET, USDC_TOKEN};

    #[test]
    fn serialized_transaction_is_typed_and_hex_prefixed() {
        let call_data =
            transfer_call_data("0x1111111111111111111111111111111111111111", 100).unwrap();
        let raw = serialize_unsigned(BASE_MAINNET.chain_id, USDC_TOKEN.address, 0, call_data)
            .unwrap();
        assert!(raw.starts_with("0x02"));
        assert!(raw.len() > 4);
        assert!(raw[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn zero_filled_fields_encode_as_empty_strings() {
        let raw = serialize_unsigned(
            BASE_MAINNET.chain_id,
            USDC_TOKEN.address,
            0,
            Vec::new(),
        )
        .unwrap();
        let bytes = hex::decode(&raw[2..]).unwrap();

        // 0x02, list header, then chainId 8453 = 0x2105 as a 2-byte string.
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[2], 0x82);
        assert_eq!(&bytes[3..5], &[0x21, 0x05]);
        // nonce, both fee fields and gasLimit: four empty strings.
        assert_eq!(&bytes[5..9], &[0x80, 0x80, 0x80, 0x80]);
        // to: 20-byte string.
        assert_eq!(bytes[9], 0x80 + 20);
        // value and data empty, accessList an empty list.
        assert_eq!(&bytes[30..33], &[0x80, 0x80, 0xc0]);
        assert_eq!(bytes.len(), 33);
    }

    #[test]
    fn descriptor_with_decimal_and_hex_values_serializes() {
        let raw = serialize_from_descriptor(
            BASE_MAINNET.chain_id,
            USDC_TOKEN.address,
            "0",
            "0xa9059cbb",
        )
        .unwrap();
        assert!(raw.starts_with("0x02"));

        let hex_value = serialize_from_descriptor(
            BASE_MAINNET.chain_id,
            USDC_TOKEN.address,
            "0x10",
            "0xa9059cbb",
        )
        .unwrap();
        assert_ne!(raw, hex_value);
    }

    #[test]
    fn malformed_descriptor_fields_are_rejected() {
        assert!(serialize_from_descriptor(8453, USDC_TOKEN.address, "ten", "0x00").is_err());
        assert!(serialize_from_descriptor(8453, "0xnope", "0", "0x00").is_err());
        assert!(serialize_from_descriptor(8453, USDC_TOKEN.address, "0", "0xzz").is_err());
    }
}
