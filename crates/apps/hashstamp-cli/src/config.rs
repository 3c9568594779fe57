use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BITS: u32 = 20;
/// Customary hashcash expiry window.
pub const DEFAULT_EXPIRY_DAYS: u32 = 28;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
    #[serde(default)]
    pub mint: MintConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MintConfig {
    #[serde(default = "default_bits")]
    pub bits: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    #[serde(default = "default_bits")]
    pub bits: u32,
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self { bits: DEFAULT_BITS }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            expiry_days: DEFAULT_EXPIRY_DAYS,
        }
    }
}

fn default_bits() -> u32 {
    DEFAULT_BITS
}

fn default_expiry_days() -> u32 {
    DEFAULT_EXPIRY_DAYS
}

impl StampConfig {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    /// An explicit path must exist; the per-user default is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, std::io::Error> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                log::debug!("config: loading {}", path.display());
                Self::from_path(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hashstamp").join("config.toml"))
}
