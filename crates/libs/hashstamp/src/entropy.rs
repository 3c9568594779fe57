use rand_core::{OsRng, RngCore};

use crate::error::EntropyError;

/// Secure random bytes for stamp salts and counter seeds.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system generator via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| EntropyError::Unavailable(err.to_string()))
    }
}

/// Replays a fixed byte pattern, wrapping at the end. An empty pattern
/// behaves like an unavailable source.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    pattern: Vec<u8>,
    pos: usize,
}

impl ScriptedEntropy {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
            pos: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self::new(Vec::new())
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.pattern.is_empty() {
            return Err(EntropyError::Unavailable("scripted source is empty".into()));
        }
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.pos];
            self.pos = (self.pos + 1) % self.pattern.len();
        }
        Ok(())
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_wraps() {
        let mut source = ScriptedEntropy::new([1u8, 2, 3]);
        let mut buf = [0u8; 7];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 1, 2, 3, 1]);
        source.fill(&mut buf[..2]).unwrap();
        assert_eq!(&buf[..2], &[2, 3]);
    }

    #[test]
    fn empty_script_is_unavailable() {
        let mut buf = [0u8; 4];
        assert!(ScriptedEntropy::unavailable().fill(&mut buf).is_err());
    }

    #[test]
    fn os_entropy_fills() {
        let mut buf = [0u8; 32];
        OsEntropy.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 32]);
    }
}
