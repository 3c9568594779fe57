//! Property tests for the stamp parser and bit counter.

use hashstamp::{leading_zero_bits, FixedClock, Minter, ScriptedEntropy, Stamp, Validator};
use proptest::prelude::*;
use time::macros::datetime;

proptest! {
    #[test]
    fn decode_never_panics(s in "\\PC{0,200}") {
        let _ = Stamp::decode(&s);
    }

    #[test]
    fn decode_colon_heavy_input_never_panics(s in "[0-9:a-zA-Z=]{0,80}") {
        let _ = Stamp::decode(&s);
    }

    #[test]
    fn evaluate_never_panics(s in "\\PC{0,120}", bits in 0u32..=200, days in 0u32..1000) {
        let validator = Validator::new(FixedClock(datetime!(2024-03-09 0:00 UTC)));
        let _ = validator.evaluate(&s, bits, "x", days);
    }

    #[test]
    fn counted_bits_match_constructed_prefix(
        mut bytes in prop::collection::vec(1u8..=255, 1..32),
        n in 0usize..256,
    ) {
        let n = n % (bytes.len() * 8 + 1);
        for bit in 0..n {
            bytes[bit / 8] &= !(0x80 >> (bit % 8));
        }
        if n < bytes.len() * 8 {
            bytes[n / 8] |= 0x80 >> (n % 8);
        }
        prop_assert_eq!(leading_zero_bits(&bytes), n as u32);
    }

    #[test]
    fn minted_stamp_has_seven_fields(bits in 0u32..=8, resource in "[a-zA-Z0-9@.]{0,24}", seed in any::<u8>()) {
        let mut minter = Minter::new(
            ScriptedEntropy::new(vec![seed, seed ^ 0x5a, 7]),
            FixedClock(datetime!(2024-03-09 0:00 UTC)),
        );
        let text = minter.mint(bits, &resource).unwrap();
        let fields: Vec<&str> = text.split(':').collect();
        prop_assert_eq!(fields.len(), 7);
        prop_assert_eq!(fields[4], "");
        prop_assert_eq!(fields[3], resource.as_str());
    }
}
