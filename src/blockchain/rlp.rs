// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Minimal Recursive-Length-Prefix (RLP) encoder.
//!
//! Only the encoding rules needed for EIP-1559 transaction payloads are
//! implemented: byte strings and (nested) lists. Integers are carried as
//! minimal big-endian byte strings, where zero encodes as the empty string
//! rather than a literal `0x00` byte.

use crate::error::ClientError;

/// An RLP item: a byte string or a list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rlp {
    Bytes(Vec<u8>),
    List(Vec<Rlp>),
}

/// RLP-encode an item.
///
/// A single byte below `0x80` encodes as itself; strings of 0-55 bytes get
/// a `0x80 + len` prefix; longer strings get `0xb7 + len-of-len` followed
/// by the big-endian length. Lists use the same scheme from the `0xc0` and
/// `0xf7` base offsets.
pub fn encode(item: &Rlp) -> Vec<u8> {
    match item {
        Rlp::Bytes(bytes) => {
            if bytes.len() == 1 && bytes[0] < 0x80 {
                return bytes.clone();
            }
            let mut out = length_prefix(bytes.len(), 0x80);
            out.extend_from_slice(bytes);
            out
        }
        Rlp::List(items) => {
            let mut payload = Vec::new();
            for inner in items {
                payload.extend_from_slice(&encode(inner));
            }
            let mut out = length_prefix(payload.len(), 0xc0);
            out.extend_from_slice(&payload);
            out
        }
    }
}

fn length_prefix(len: usize, offset: u8) -> Vec<u8> {
    if len <= 55 {
        vec![offset + len as u8]
    } else {
        let len_bytes = be_bytes_minimal(len as u128);
        let mut out = vec![offset + 55 + len_bytes.len() as u8];
        out.extend_from_slice(&len_bytes);
        out
    }
}

/// Minimal big-endian encoding of an integer. Zero encodes as the empty
/// byte string, never as `0x00`.
pub fn be_bytes_minimal(value: u128) -> Vec<u8> {
    value
        .to_be_bytes()
        .iter()
        .skip_while(|byte| **byte == 0)
        .copied()
        .collect()
}

/// Decode a `0x`-prefixed (or bare) hex quantity into minimal bytes.
///
/// `""`, `"0"` and `"00"` all normalize to the empty byte string;
/// redundant leading zero bytes are trimmed otherwise.
pub fn hex_to_minimal_bytes(input: &str) -> Result<Vec<u8>, ClientError> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if stripped.is_empty() || stripped == "0" || stripped == "00" {
        return Ok(Vec::new());
    }
    let bytes = decode_hex(stripped)?;
    Ok(bytes.into_iter().skip_while(|byte| *byte == 0).collect())
}

/// Decode a `0x`-prefixed (or bare) hex byte string without trimming.
/// Call-data is opaque bytes, not an integer quantity.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, ClientError> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    decode_hex(stripped)
}

fn decode_hex(stripped: &str) -> Result<Vec<u8>, ClientError> {
    let padded;
    let even = if stripped.len() % 2 == 1 {
        padded = format!("0{stripped}");
        padded.as_str()
    } else {
        stripped
    };
    hex::decode(even).map_err(|e| ClientError::ResponseShape(format!("invalid hex {stripped}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only decoder used to check encoding round-trips.
    fn decode(input: &[u8]) -> (Rlp, usize) {
        let first = input[0];
        match first {
            0x00..=0x7f => (Rlp::Bytes(vec![first]), 1),
            0x80..=0xb7 => {
                let len = (first - 0x80) as usize;
                (Rlp::Bytes(input[1..1 + len].to_vec()), 1 + len)
            }
            0xb8..=0xbf => {
                let len_of_len = (first - 0xb7) as usize;
                let len = read_length(&input[1..1 + len_of_len]);
                let start = 1 + len_of_len;
                (Rlp::Bytes(input[start..start + len].to_vec()), start + len)
            }
            0xc0..=0xf7 => {
                let len = (first - 0xc0) as usize;
                (decode_list(&input[1..1 + len]), 1 + len)
            }
            0xf8..=0xff => {
                let len_of_len = (first - 0xf7) as usize;
                let len = read_length(&input[1..1 + len_of_len]);
                let start = 1 + len_of_len;
                (decode_list(&input[start..start + len]), start + len)
            }
        }
    }

    fn decode_list(mut payload: &[u8]) -> Rlp {
        let mut items = Vec::new();
        while !payload.is_empty() {
            let (item, consumed) = decode(payload);
            items.push(item);
            payload = &payload[consumed..];
        }
        Rlp::List(items)
    }

    fn read_length(bytes: &[u8]) -> usize {
        bytes.iter().fold(0usize, |acc, byte| acc * 256 + *byte as usize)
    }

    #[test]
    fn single_byte_below_0x80_encodes_as_itself() {
        assert_eq!(encode(&Rlp::Bytes(vec![0x7f])), vec![0x7f]);
        assert_eq!(encode(&Rlp::Bytes(vec![0x00])), vec![0x00]);
    }

    #[test]
    fn single_byte_at_0x80_gets_a_prefix() {
        assert_eq!(encode(&Rlp::Bytes(vec![0x80])), vec![0x81, 0x80]);
    }

    #[test]
    fn empty_string_encodes_as_0x80() {
        assert_eq!(encode(&Rlp::Bytes(Vec::new())), vec![0x80]);
    }

    #[test]
    fn empty_list_encodes_as_0xc0() {
        assert_eq!(encode(&Rlp::List(Vec::new())), vec![0xc0]);
    }

    #[test]
    fn short_string_prefix_is_length_based() {
        let encoded = encode(&Rlp::Bytes(b"dog".to_vec()));
        assert_eq!(encoded, vec![0x83, b'd', b'o', b'g']);
    }

    #[test]
    fn string_length_boundary_at_55_and_56() {
        let fifty_five = encode(&Rlp::Bytes(vec![0xaa; 55]));
        assert_eq!(fifty_five[0], 0x80 + 55);
        assert_eq!(fifty_five.len(), 56);

        let fifty_six = encode(&Rlp::Bytes(vec![0xaa; 56]));
        assert_eq!(fifty_six[0], 0xb7 + 1);
        assert_eq!(fifty_six[1], 56);
        assert_eq!(fifty_six.len(), 58);
    }

    #[test]
    fn long_string_carries_big_endian_length() {
        let encoded = encode(&Rlp::Bytes(vec![0x01; 300]));
        assert_eq!(encoded[0], 0xb7 + 2);
        assert_eq!(&encoded[1..3], &[0x01, 0x2c]);
    }

    #[test]
    fn nested_lists_round_trip() {
        let item = Rlp::List(vec![
            Rlp::Bytes(b"cat".to_vec()),
            Rlp::List(vec![
                Rlp::Bytes(Vec::new()),
                Rlp::List(vec![Rlp::Bytes(vec![0x01, 0x02, 0x03])]),
            ]),
            Rlp::Bytes(vec![0x55; 60]),
        ]);
        let encoded = encode(&item);
        let (decoded, consumed) = decode(&encoded);
        assert_eq!(decoded, item);
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn random_byte_strings_round_trip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let item = Rlp::Bytes(bytes);
            let (decoded, consumed) = decode(&encode(&item));
            assert_eq!(decoded, item);
            assert_eq!(consumed, encode(&item).len());
        }
    }

    #[test]
    fn minimal_integer_encoding_edge_cases() {
        assert_eq!(be_bytes_minimal(0), Vec::<u8>::new());
        assert_eq!(be_bytes_minimal(1), vec![0x01]);
        assert_eq!(be_bytes_minimal(256), vec![0x01, 0x00]);
        assert_eq!(be_bytes_minimal(8453), vec![0x21, 0x05]);
    }

    #[test]
    fn zero_integer_rlp_encodes_as_empty_string_not_zero_byte() {
        assert_eq!(encode(&Rlp::Bytes(be_bytes_minimal(0))), vec![0x80]);
    }

    #[test]
    fn hex_normalization_treats_zero_forms_as_empty() {
        assert_eq!(hex_to_minimal_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_minimal_bytes("0").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_minimal_bytes("00").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_minimal_bytes("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_minimal_bytes("0x0").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_normalization_trims_leading_zero_bytes() {
        assert_eq!(hex_to_minimal_bytes("0x000102").unwrap(), vec![0x01, 0x02]);
        assert_eq!(hex_to_minimal_bytes("0xff").unwrap(), vec![0xff]);
        assert_eq!(hex_to_minimal_bytes("f").unwrap(), vec![0x0f]);
    }

    #[test]
    fn hex_to_bytes_keeps_leading_zeros() {
        assert_eq!(hex_to_bytes("0x0001").unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(hex_to_minimal_bytes("0xzz").is_err());
    }
}
