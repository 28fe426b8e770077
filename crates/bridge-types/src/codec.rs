//! Conversions between fixed-width byte buffers and circuit-friendly scalars.

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A 32-byte hash split into two scalars: the leading byte and the big-endian
/// value of the remaining 31 bytes.
///
/// The split exists because the proving field is narrower than 256 bits, so a
/// full 32-byte digest cannot be carried losslessly in a single scalar. The
/// 31-byte lower limb stays below 2^248, which leaves roughly a u64 of
/// headroom inside a ~254-bit field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedHash {
    pub high_byte: U256,
    pub lower_bytes: U256,
}

impl PackedHash {
    /// Packs a 32-byte hash into its `(high_byte, lower_bytes)` scalar pair.
    pub fn from_bytes32(bytes: &B256) -> Self {
        let high_byte = U256::from(bytes[0]);

        let mut lower_bytes = U256::ZERO;
        for byte in &bytes[1..] {
            lower_bytes = (lower_bytes << 8) | U256::from(*byte);
        }

        Self {
            high_byte,
            lower_bytes,
        }
    }

    /// Expands the scalar pair back into the original 32-byte hash.
    pub fn to_bytes32(&self) -> B256 {
        let mut out = [0u8; 32];
        out[0] = self.high_byte.to_be_bytes::<32>()[31];
        out[1..].copy_from_slice(&self.lower_bytes.to_be_bytes::<32>()[1..]);
        B256::from(out)
    }
}

/// Serializes an integer as a left-zero-padded big-endian 32-byte word, the
/// layout the external encoder uses for integer fields.
pub fn pad_u64_to_32_bytes(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Decodes a big-endian unsigned integer from a byte slice of any width.
///
/// Fails with [`DecodeError::IntegerOverflow`] when the value does not fit in
/// 64 bits. For exactly-8-byte fields the check can never fire, but it is kept
/// so every integer field shares one decoding path.
pub fn u64_from_be_word(bytes: &[u8], field: &'static str) -> Result<u64, DecodeError> {
    let split = bytes.len().saturating_sub(8);
    if bytes[..split].iter().any(|b| *b != 0) {
        return Err(DecodeError::IntegerOverflow(field));
    }

    let mut value: u64 = 0;
    for byte in &bytes[split..] {
        value = (value << 8) | u64::from(*byte);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_pack_hash_round_trip() {
        let vectors = [
            B256::ZERO,
            B256::repeat_byte(0xff),
            b256!("8eca693ad0000000000000000000000000000000000000000000000000000001"),
            b256!("00ffeeddccbbaa99887766554433221100ffeeddccbbaa998877665544332211"),
        ];
        for hash in vectors {
            let packed = PackedHash::from_bytes32(&hash);
            assert_eq!(packed.to_bytes32(), hash);
        }
    }

    #[test]
    fn test_pack_hash_limbs() {
        let hash = b256!("ff00000000000000000000000000000000000000000000000000000000000005");
        let packed = PackedHash::from_bytes32(&hash);
        assert_eq!(packed.high_byte, U256::from(0xffu64));
        assert_eq!(packed.lower_bytes, U256::from(5u64));

        // The lower limb covers 31 bytes, so it always stays below 2^248.
        let packed = PackedHash::from_bytes32(&B256::repeat_byte(0xff));
        assert!(packed.lower_bytes < U256::from(1u8) << 248);
    }

    #[test]
    fn test_pad_u64_to_32_bytes() {
        let word = pad_u64_to_32_bytes(0x0102030405060708);
        assert_eq!(&word[..24], &[0u8; 24]);
        assert_eq!(&word[24..], &[1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(pad_u64_to_32_bytes(0), [0u8; 32]);
    }

    #[test]
    fn test_u64_from_be_word() {
        let word = pad_u64_to_32_bytes(11615680);
        assert_eq!(u64_from_be_word(&word, "slot").unwrap(), 11615680);

        assert_eq!(u64_from_be_word(&[0xab; 8], "slot").unwrap(), 0xabababababababab);

        let mut oversized = [0u8; 32];
        oversized[23] = 1;
        assert_eq!(
            u64_from_be_word(&oversized, "slot"),
            Err(DecodeError::IntegerOverflow("slot"))
        );
    }
}
