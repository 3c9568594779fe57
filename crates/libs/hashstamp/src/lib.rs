//! Hashcash version 1 stamps.
//!
//! A stamp is a short colon-delimited token whose SHA-1 digest starts with a
//! requested number of zero bits. [`Minter`] searches for one, [`Validator`]
//! re-derives the digest and checks it against a resource and difficulty.

pub mod bits;
pub mod clock;
pub mod constants;
pub mod entropy;
pub mod error;
pub mod minter;
pub mod stamp;
pub mod validator;

pub use bits::{digest_value, leading_zero_bits};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entropy::{EntropySource, OsEntropy, ScriptedEntropy};
pub use error::{EntropyError, MintError, StampError};
pub use minter::{Minted, Minter, SearchLimit};
pub use stamp::Stamp;
pub use validator::{ValidationPolicy, Validator};
