/// Version fields are compared as text; only this exact string is supported.
pub const STAMP_VERSION: &str = "1";
pub const STAMP_FIELDS: usize = 7;
pub const FIELD_SEPARATOR: char = ':';

pub const DIGEST_SIZE: usize = 20;
pub const MAX_BITS: u32 = (DIGEST_SIZE * 8) as u32;

pub const RAND_BYTES: usize = 12;
pub const COUNTER_BYTES: usize = 8;

pub const DATE_LENGTH: usize = 6;
/// Two-digit years at or above this value belong to the 1900s.
pub const CENTURY_PIVOT: u8 = 69;
