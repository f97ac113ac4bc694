// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 transfer call-data and decimal-to-atomic-unit conversion.
//!
//! Only the one call shape the payout path needs is encoded here:
//! `transfer(address,uint256)`. General ABI encoding is out of scope.

use crate::error::ClientError;

/// 4-byte function selector for `transfer(address,uint256)`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Build the call-data for an ERC-20 `transfer`: selector, 32-byte
/// zero-padded recipient, 32-byte big-endian atomic amount.
pub fn transfer_call_data(recipient: &str, atomic_amount: u128) -> Result<Vec<u8>, ClientError> {
    let address = parse_address(recipient)?;

    let mut data = Vec::with_capacity(68);
    data.extend_from_slice(&TRANSFER_SELECTOR);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&address);

    let mut amount_word = [0u8; 32];
    amount_word[16..].copy_from_slice(&atomic_amount.to_be_bytes());
    data.extend_from_slice(&amount_word);

    Ok(data)
}

/// Parse a `0x`-prefixed (or bare) hex string as a 20-byte EVM address.
pub fn parse_address(address: &str) -> Result<[u8; 20], ClientError> {
    let stripped = address.strip_prefix("0x").unwrap_or(address);
    let bytes = hex::decode(stripped)
        .map_err(|e| ClientError::InvalidAddress(format!("{address}: {e}")))?;
    let array: [u8; 20] = bytes
        .try_into()
        .map_err(|_| ClientError::InvalidAddress(format!("{address}: expected 20 bytes")))?;
    Ok(array)
}

/// Convert a human decimal amount into atomic token units.
///
/// Rounding rule: round-half-away-from-zero (`f64::round`). At 6 decimals
/// this means `0.0000005` pays one atomic unit, never zero; the rule is
/// pinned by tests because it decides whether a borderline payout under-
/// or over-pays by one unit.
pub fn to_atomic_units(amount: f64, decimals: u32) -> Result<u128, ClientError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ClientError::InvalidAmount(format!(
            "amount must be a finite non-negative number, got {amount}"
        )));
    }
    let scaled = (amount * 10f64.powi(decimals as i32)).round();
    if scaled > u128::MAX as f64 {
        return Err(ClientError::InvalidAmount(format!(
            "amount {amount} overflows atomic units at {decimals} decimals"
        )));
    }
    Ok(scaled as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_call_data_matches_known_vector() {
        let recipient = "0x1111111111111111111111111111111111111111";
        let data = transfer_call_data(recipient, 1_000_000).unwrap();

        assert_eq!(data.len(), 68);
        assert_eq!(&data[..4], &TRANSFER_SELECTOR);
        assert_eq!(&data[4..16], &[0u8; 12]);
        assert_eq!(&data[16..36], &[0x11u8; 20]);
        // 1_000_000 = 0x0f4240, right-aligned in the 32-byte word.
        assert_eq!(&data[36..65], &[0u8; 29]);
        assert_eq!(&data[65..68], &[0x0f, 0x42, 0x40]);
    }

    #[test]
    fn parse_address_requires_20_bytes() {
        assert!(parse_address("0x1111").is_err());
        assert!(parse_address("not-an-address").is_err());
        assert!(parse_address("1111111111111111111111111111111111111111").is_ok());
    }

    #[test]
    fn small_decimal_amount_converts_exactly() {
        // Pins the 6-decimal stablecoin case from the payout path.
        assert_eq!(to_atomic_units(0.0001, 6).unwrap(), 100);
        assert_eq!(to_atomic_units(1.5, 6).unwrap(), 1_500_000);
        assert_eq!(to_atomic_units(0.0, 6).unwrap(), 0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // Exactly representable halves at zero decimals.
        assert_eq!(to_atomic_units(0.5, 0).unwrap(), 1);
        assert_eq!(to_atomic_units(2.5, 0).unwrap(), 3);
        assert_eq!(to_atomic_units(2.4, 0).unwrap(), 2);
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert!(to_atomic_units(-0.01, 6).is_err());
        assert!(to_atomic_units(f64::NAN, 6).is_err());
        assert!(to_atomic_units(f64::INFINITY, 6).is_err());
    }
}
