use std::fmt;

use serde::Deserialize;

/// Money is represented as integer cents to avoid floating-point drift.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a human-readable decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Convert cents back into currency units for the JSON wire format.
/// Example: 140000 -> 1400.0
pub fn cents_to_units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "+100" -> 10000
///
/// Amounts finer than a cent are rejected rather than rounded; trailing
/// zeros past the second decimal place ("1.500") are fine.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let parts: Vec<&str> = input.split('.').collect();
    let (units_str, decimal_str) = match parts.as_slice() {
        [units] => (*units, ""),
        [units, decimals] => (*units, *decimals),
        _ => return Err(ParseCentsError::InvalidFormat),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !is_digits(units_str) || !is_digits(decimal_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::OutOfRange)?
    };

    let (cents_str, sub_cents) = decimal_str.split_at(decimal_str.len().min(2));
    if sub_cents.bytes().any(|b| b != b'0') {
        return Err(ParseCentsError::InvalidFormat);
    }
    let decimal_cents: i64 = match cents_str.len() {
        0 => 0,
        1 => cents_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => cents_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

/// Parse exponent notation such as "1e3" or "2.5E-1".
fn parse_scientific(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let shaped = input.contains(['e', 'E'])
        && input
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !shaped {
        return Err(ParseCentsError::InvalidFormat);
    }
    let value: f64 = input.parse().map_err(|_| ParseCentsError::InvalidFormat)?;
    cents_from_f64(value)
}

fn cents_from_f64(value: f64) -> Result<Cents, ParseCentsError> {
    if !value.is_finite() {
        return Err(ParseCentsError::OutOfRange);
    }
    // f64 Display never uses exponent notation and prints the shortest
    // round-tripping digits, so 100.99 stays "100.99"
    parse_cents(&value.to_string())
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// A monetary amount as it arrives in a JSON request body.
///
/// Clients may send either a JSON number (`1000`, `12.5`) or a numeric
/// string (`"1000"`, `"+5"`, `"1e3"`). Anything else deserializes into
/// `Other` and is rejected when converted to cents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl AmountInput {
    pub fn to_cents(&self) -> Result<Cents, ParseCentsError> {
        match self {
            AmountInput::Number(n) => match n.as_i64() {
                Some(units) => units.checked_mul(100).ok_or(ParseCentsError::OutOfRange),
                None => n.as_f64().map_or(Err(ParseCentsError::OutOfRange), cents_from_f64),
            },
            AmountInput::Text(s) => match parse_cents(s) {
                Err(ParseCentsError::InvalidFormat) => parse_scientific(s),
                other => other,
            },
            AmountInput::Other(_) => Err(ParseCentsError::InvalidFormat),
        }
    }
}

impl From<i64> for AmountInput {
    fn from(units: i64) -> Self {
        AmountInput::Number(units.into())
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        AmountInput::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
