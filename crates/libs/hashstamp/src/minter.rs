use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::bits::digest_value;
use crate::clock::{Clock, SystemClock};
use crate::constants::{COUNTER_BYTES, MAX_BITS, RAND_BYTES};
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::MintError;
use crate::stamp::Stamp;

/// Stop conditions checked once per search iteration.
#[derive(Debug, Clone, Default)]
pub struct SearchLimit {
    pub max_attempts: Option<u64>,
    pub deadline: Option<Instant>,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimit {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn attempts(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..Self::default()
        }
    }

    pub fn deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn check(&self, attempts: u64) -> Result<(), MintError> {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(MintError::Cancelled);
            }
        }
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(MintError::Exhausted { attempts });
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(MintError::Exhausted { attempts });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minted {
    pub stamp: Stamp,
    pub attempts: u64,
}

#[derive(Debug)]
pub struct Minter<E = OsEntropy, C = SystemClock> {
    entropy: E,
    clock: C,
}

impl Minter {
    pub fn system() -> Self {
        Self::new(OsEntropy, SystemClock)
    }
}

impl<E: EntropySource, C: Clock> Minter<E, C> {
    pub fn new(entropy: E, clock: C) -> Self {
        Self { entropy, clock }
    }

    /// Searches until a stamp with `bits` leading zero bits is found.
    pub fn mint(&mut self, bits: u32, resource: &str) -> Result<String, MintError> {
        self.mint_with(bits, resource, &SearchLimit::unbounded())
    }

    pub fn mint_with(
        &mut self,
        bits: u32,
        resource: &str,
        limit: &SearchLimit,
    ) -> Result<String, MintError> {
        self.mint_stamp(bits, resource, limit)
            .map(|minted| minted.stamp.encode())
    }

    pub fn mint_stamp(
        &mut self,
        bits: u32,
        resource: &str,
        limit: &SearchLimit,
    ) -> Result<Minted, MintError> {
        if bits > MAX_BITS {
            return Err(MintError::DifficultyTooHigh {
                bits,
                max: MAX_BITS,
            });
        }

        let mut salt = [0u8; RAND_BYTES];
        let mut seed = [0u8; COUNTER_BYTES];
        self.draw(&mut salt)?;
        self.draw(&mut seed)?;
        let rand = STANDARD.encode(salt);
        let issued = self.clock.now().date();
        let start = u64::from_be_bytes(seed);

        log::debug!("mint: searching {bits} bits for {resource:?} from counter {start}");

        let mut counter = start;
        let mut attempts = 0u64;
        loop {
            limit.check(attempts)?;

            let candidate = Stamp::new(bits, issued, resource, rand.as_str(), counter.to_string());
            attempts += 1;
            if digest_value(&candidate.encode()) >= bits {
                log::debug!("mint: found {bits}-bit stamp after {attempts} attempts");
                return Ok(Minted {
                    stamp: candidate,
                    attempts,
                });
            }

            counter = counter.wrapping_add(1);
            if counter == start {
                return Err(MintError::Exhausted { attempts });
            }
        }
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<(), MintError> {
        self.entropy.fill(dest).map_err(|err| {
            log::warn!("mint: {err}");
            MintError::from(err)
        })
    }
}
