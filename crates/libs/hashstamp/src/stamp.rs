use std::fmt;
use std::str::FromStr;

use time::{Date, Month};

use crate::constants::{CENTURY_PIVOT, DATE_LENGTH, FIELD_SEPARATOR, STAMP_FIELDS, STAMP_VERSION};
use crate::error::StampError;

/// A decoded hashcash stamp.
///
/// Encodes as `version:bits:date:resource::rand:counter`; the empty fifth
/// field is the reserved extension slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    version: String,
    bits: u32,
    date: String,
    issued: Date,
    resource: String,
    rand: String,
    counter: String,
}

impl Stamp {
    /// Builds a current-version stamp issued on `issued`.
    pub fn new(
        bits: u32,
        issued: Date,
        resource: impl Into<String>,
        rand: impl Into<String>,
        counter: impl Into<String>,
    ) -> Self {
        Self {
            version: STAMP_VERSION.to_string(),
            bits,
            date: format_date(issued),
            issued,
            resource: resource.into(),
            rand: rand.into(),
            counter: counter.into(),
        }
    }

    /// The version field as written; checked by the validator, not the decoder.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The `YYMMDD` date field as written.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn issued_on(&self) -> Date {
        self.issued
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn rand(&self) -> &str {
        &self.rand
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(text: &str) -> Result<Self, StampError> {
        let parts: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        if parts.len() != STAMP_FIELDS {
            return Err(StampError::MalformedStamp(format!(
                "expected {STAMP_FIELDS} fields, found {}",
                parts.len()
            )));
        }

        let bits = parse_decimal(parts[1]).ok_or_else(|| StampError::InvalidBits(parts[1].into()))?;
        let issued = parse_date(parts[2]).ok_or_else(|| StampError::InvalidDate(parts[2].into()))?;
        if !parts[4].is_empty() {
            return Err(StampError::MalformedStamp(format!(
                "extension field must be empty, found {:?}",
                parts[4]
            )));
        }

        Ok(Self {
            version: parts[0].to_string(),
            bits,
            date: parts[2].to_string(),
            issued,
            resource: parts[3].to_string(),
            rand: parts[5].to_string(),
            counter: parts[6].to_string(),
        })
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}::{}:{}",
            self.version, self.bits, self.date, self.resource, self.rand, self.counter
        )
    }
}

impl FromStr for Stamp {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        u8::from(date.month()),
        date.day()
    )
}

pub fn parse_date(field: &str) -> Option<Date> {
    if field.len() != DATE_LENGTH || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: u8 = field[0..2].parse().ok()?;
    let mm: u8 = field[2..4].parse().ok()?;
    let dd: u8 = field[4..6].parse().ok()?;

    let century = if yy >= CENTURY_PIVOT { 1900 } else { 2000 };
    let month = Month::try_from(mm).ok()?;
    Date::from_calendar_date(century + i32::from(yy), month, dd).ok()
}

// Plain ASCII digits only; `str::parse` would also take a leading `+`.
fn parse_decimal(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
