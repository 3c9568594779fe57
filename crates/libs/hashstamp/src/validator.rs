use time::Duration;

use crate::bits::digest_value;
use crate::clock::{Clock, SystemClock};
use crate::constants::STAMP_VERSION;
use crate::error::StampError;
use crate::stamp::Stamp;

/// What a receiver requires of incoming stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub required_bits: u32,
    pub resource: String,
    /// Days after the declared date a stamp stays valid; 0 never expires.
    pub expiry_days: u32,
}

impl ValidationPolicy {
    pub fn new(required_bits: u32, resource: impl Into<String>, expiry_days: u32) -> Self {
        Self {
            required_bits,
            resource: resource.into(),
            expiry_days,
        }
    }
}

/// Re-derives and checks stamps. Holds no record of stamps already seen.
#[derive(Debug)]
pub struct Validator<C = SystemClock> {
    clock: C,
}

impl Validator {
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Validator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn check(&self, policy: &ValidationPolicy, text: &str) -> Result<Stamp, StampError> {
        self.evaluate(text, policy.required_bits, &policy.resource, policy.expiry_days)
    }

    /// Checks run in a fixed order so the first failing one is reported:
    /// decoding, expiry, work, resource, version, declared difficulty.
    pub fn evaluate(
        &self,
        text: &str,
        required_bits: u32,
        resource: &str,
        expiry_days: u32,
    ) -> Result<Stamp, StampError> {
        let stamp = Stamp::decode(text).map_err(|err| reject(text, err))?;

        if expiry_days != 0 && self.is_expired(&stamp, expiry_days) {
            return Err(reject(text, StampError::StampExpired));
        }

        // The work criterion is what this receiver requires, not what the stamp declares.
        let actual = digest_value(text);
        if actual < required_bits {
            return Err(reject(
                text,
                StampError::InsufficientWork {
                    required: required_bits,
                    actual,
                },
            ));
        }

        if stamp.resource() != resource {
            return Err(reject(
                text,
                StampError::ResourceMismatch {
                    expected: resource.to_string(),
                    actual: stamp.resource().to_string(),
                },
            ));
        }

        if stamp.version() != STAMP_VERSION {
            return Err(reject(
                text,
                StampError::UnsupportedVersion(stamp.version().to_string()),
            ));
        }

        if stamp.bits() != required_bits {
            return Err(reject(
                text,
                StampError::DifficultyMismatch {
                    required: required_bits,
                    declared: stamp.bits(),
                },
            ));
        }

        Ok(stamp)
    }

    fn is_expired(&self, stamp: &Stamp, expiry_days: u32) -> bool {
        let Some(boundary) = stamp
            .issued_on()
            .checked_add(Duration::days(i64::from(expiry_days)))
        else {
            return false;
        };
        self.clock.now() > boundary.midnight().assume_utc()
    }
}

fn reject(text: &str, err: StampError) -> StampError {
    log::trace!("stamp {text:?} rejected: {err}");
    err
}
