use hashstamp::{
    digest_value, FixedClock, MintError, Minter, OsEntropy, ScriptedEntropy, SearchLimit, Stamp,
    StampError, ValidationPolicy, Validator,
};
use time::macros::datetime;
use time::OffsetDateTime;

const NOW: OffsetDateTime = datetime!(2024-03-09 08:15 UTC);

fn seeded_minter(seed: u8) -> Minter<ScriptedEntropy, FixedClock> {
    let pattern: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(31).wrapping_add(seed)).collect();
    Minter::new(ScriptedEntropy::new(pattern), FixedClock(NOW))
}

#[test]
fn minted_stamps_validate_against_their_own_parameters() {
    let validator = Validator::new(FixedClock(NOW));
    for bits in [0u32, 1, 4, 8, 14] {
        let text = seeded_minter(bits as u8).mint(bits, "give me a token").unwrap();
        assert!(digest_value(&text) >= bits);

        let stamp = validator.evaluate(&text, bits, "give me a token", 0).unwrap();
        assert_eq!(stamp.bits(), bits);
        assert_eq!(stamp.date(), "240309");
    }
}

#[test]
fn system_minter_round_trips() {
    let mut minter = Minter::new(OsEntropy, FixedClock(NOW));
    let text = minter.mint(10, "alice@example.org").unwrap();
    let policy = ValidationPolicy::new(10, "alice@example.org", 28);
    assert!(Validator::new(FixedClock(NOW)).check(&policy, &text).is_ok());
}

#[test]
fn today_stamp_survives_one_day_window_with_system_clock() {
    let text = Minter::system().mint(4, "host").unwrap();
    assert!(Validator::system().evaluate(&text, 4, "host", 1).is_ok());
}

#[test]
fn tampered_resource_is_mismatch() {
    let text = seeded_minter(7).mint(0, "alice").unwrap();
    let tampered = text.replacen(":alice:", ":mallory:", 1);
    let err = Validator::new(FixedClock(NOW))
        .evaluate(&tampered, 0, "alice", 0)
        .unwrap_err();
    assert_eq!(
        err,
        StampError::ResourceMismatch {
            expected: "alice".into(),
            actual: "mallory".into(),
        }
    );
}

#[test]
fn stamp_evaluated_against_higher_requirement_lacks_work() {
    let text = seeded_minter(3).mint(1, "r").unwrap();
    let required = digest_value(&text) + 1;
    let err = Validator::new(FixedClock(NOW))
        .evaluate(&text, required, "r", 0)
        .unwrap_err();
    assert!(matches!(err, StampError::InsufficientWork { .. }));
}

#[test]
fn overclaimed_difficulty_is_mismatch() {
    // a cheap stamp that declares more work than was done
    let validator = Validator::new(FixedClock(NOW));
    let honest = seeded_minter(9).mint(0, "r").unwrap();
    let stamp: Stamp = honest.parse().unwrap();
    let claimed = format!(
        "1:20:{}:{}::{}:{}",
        stamp.date(),
        stamp.resource(),
        stamp.rand(),
        stamp.counter()
    );
    assert_eq!(
        validator.evaluate(&claimed, 0, "r", 0),
        Err(StampError::DifficultyMismatch { required: 0, declared: 20 })
    );
}

#[test]
fn old_stamps_expire_but_not_without_window() {
    let minter_clock = FixedClock(datetime!(2024-01-01 00:00 UTC));
    let text = Minter::new(ScriptedEntropy::new([5u8; 8]), minter_clock)
        .mint(0, "r")
        .unwrap();

    let validator = Validator::new(FixedClock(NOW));
    assert_eq!(validator.evaluate(&text, 0, "r", 28), Err(StampError::StampExpired));
    assert!(validator.evaluate(&text, 0, "r", 0).is_ok());
    assert!(validator.evaluate(&text, 0, "r", 90).is_ok());
}

#[test]
fn bounded_search_reports_attempts() {
    let mut minter = seeded_minter(1);
    let limit = SearchLimit::attempts(3);
    assert_eq!(
        minter.mint_with(160, "r", &limit),
        Err(MintError::Exhausted { attempts: 3 })
    );
}
