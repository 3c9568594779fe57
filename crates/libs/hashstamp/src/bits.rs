use sha1::{Digest, Sha1};

/// Counts zero bits from the most significant bit of the first byte.
pub fn leading_zero_bits(bytes: &[u8]) -> u32 {
    let mut value = 0u32;

    for byte in bytes {
        if *byte == 0 {
            value = value.saturating_add(8);
        } else {
            return value.saturating_add(byte.leading_zeros());
        }
    }

    value
}

/// Leading zero bits of the SHA-1 digest of `text`.
pub fn digest_value(text: &str) -> u32 {
    let digest = Sha1::digest(text.as_bytes());
    leading_zero_bits(digest.as_slice())
}
