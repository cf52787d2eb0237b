//! Decoders for the string-encoded scalars returned by the ECHO API.
//!
//! The API emits every scalar as a JSON string. Booleans are spelled `"Y"` or
//! `"Yes"` and have no null form, while dates and numbers use `"null"` or
//! `"ul"` when there is no value. The `decode_*` functions hold the rules; the
//! `deserialize_*` functions wire them into serde field attributes.

use chrono::NaiveDate;
use serde::{de::Error as DeError, Deserialize, Deserializer};

/// `MM/DD/YYYY`, the only date layout the API uses.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Date the API uses for "no date".
pub const NULL_DATE: &str = "01/01/1900";

const NULL_TOKENS: [&str; 2] = ["null", "ul"];

/// A scalar token that does not satisfy its coercion rule.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("invalid date {0:?}, expected MM/DD/YYYY")]
    Date(String),
    #[error("invalid float {0:?}")]
    Float(String),
    #[error("invalid integer {0:?}")]
    Integer(String),
}

/// Returns true for the two spellings the API uses for a missing date or number.
pub fn is_null_token(raw: &str) -> bool {
    NULL_TOKENS.contains(&raw)
}

/// The sentinel date, 1900-01-01.
pub fn null_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a valid calendar date")
}

/// `"Y"` and `"Yes"` are true. Everything else, the empty string included, is false.
pub fn decode_bool(raw: &str) -> bool {
    raw == "Y" || raw == "Yes"
}

/// Parses `MM/DD/YYYY`. Null tokens decode to [`null_date`].
pub fn decode_date(raw: &str) -> Result<NaiveDate, CoerceError> {
    let token = if is_null_token(raw) { NULL_DATE } else { raw };

    // chrono tolerates padding and single-digit fields; the layout is fixed width.
    if !is_fixed_width_date(token) {
        return Err(CoerceError::Date(raw.to_string()));
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| CoerceError::Date(raw.to_string()))
}

// Digits at 0-1, 3-4 and 6-9, slashes at 2 and 5.
fn is_fixed_width_date(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == NULL_DATE.len()
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a base-10 float. Null tokens decode to `0.0`.
pub fn decode_float(raw: &str) -> Result<f64, CoerceError> {
    if is_null_token(raw) {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(|_| CoerceError::Float(raw.to_string()))
}

/// Parses a base-10 integer. Null tokens decode to `0`.
pub fn decode_int(raw: &str) -> Result<i64, CoerceError> {
    if is_null_token(raw) {
        return Ok(0);
    }
    raw.parse::<i64>().map_err(|_| CoerceError::Integer(raw.to_string()))
}

// A JSON `null` is read as the "null" token so it follows the same rules
// as the quoted spelling.
fn raw_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Reads a field that is not coerced, treating JSON `null` as the type's default.
pub fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = raw_token(deserializer)?;
    Ok(decode_bool(raw.as_deref().unwrap_or_default()))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = raw_token(deserializer)?;
    decode_date(raw.as_deref().unwrap_or(NULL_TOKENS[0])).map_err(D::Error::custom)
}

pub fn deserialize_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = raw_token(deserializer)?;
    decode_float(raw.as_deref().unwrap_or(NULL_TOKENS[0])).map_err(D::Error::custom)
}

pub fn deserialize_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = raw_token(deserializer)?;
    decode_int(raw.as_deref().unwrap_or(NULL_TOKENS[0])).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use serde::Deserialize;

    use super::*;

    #[test]
    fn test_decode_bool() {
        assert!(decode_bool("Yes"));
        assert!(decode_bool("Y"));
        assert!(!decode_bool(""));
        assert!(!decode_bool("No"));
        assert!(!decode_bool("N"));
        assert!(!decode_bool("yes"));
        assert!(!decode_bool("#$%garbage"));
    }

    #[test]
    fn test_decode_date() {
        let date = decode_date("01/30/2016").unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 30);
    }

    #[test]
    fn test_decode_date_null_tokens() {
        assert_eq!(decode_date("null").unwrap(), null_date());
        assert_eq!(decode_date("ul").unwrap(), null_date());
        assert_eq!(decode_date("01/01/1900").unwrap(), null_date());
        assert_eq!(null_date().year(), 1900);
    }

    #[test]
    fn test_decode_date_invalid() {
        assert_eq!(
            decode_date("13/40/2016"),
            Err(CoerceError::Date("13/40/2016".to_string()))
        );
        assert!(decode_date("").is_err());
        assert!(decode_date("2016-01-30").is_err());
        assert!(decode_date("1/30/2016").is_err());
        assert!(decode_date(" 1/30/2016").is_err());
        assert!(decode_date("01/30/ 016").is_err());
        assert!(decode_date("01-30-2016").is_err());
        assert!(decode_date("+1/30/2016").is_err());
        assert!(decode_date("NULL").is_err());
    }

    #[test]
    fn test_decode_float() {
        assert_eq!(decode_float("-7.95723").unwrap(), -7.95723);
        assert_eq!(decode_float("42").unwrap(), 42.0);
        assert_eq!(decode_float("null").unwrap(), 0.0);
        assert_eq!(decode_float("ul").unwrap(), 0.0);
        assert!(matches!(decode_float("1.2.3"), Err(CoerceError::Float(_))));
        assert!(decode_float("").is_err());
    }

    #[test]
    fn test_decode_int() {
        assert_eq!(decode_int("100").unwrap(), 100);
        assert_eq!(decode_int("-3").unwrap(), -3);
        assert_eq!(decode_int("ul").unwrap(), 0);
        assert_eq!(decode_int("null").unwrap(), 0);
        assert!(matches!(decode_int("1.5"), Err(CoerceError::Integer(_))));
        assert!(decode_int("").is_err());
    }

    #[derive(Deserialize)]
    struct Sample {
        #[serde(rename = "TestBool", deserialize_with = "deserialize_bool")]
        flag: bool,
        #[serde(rename = "TestDate", deserialize_with = "deserialize_date")]
        date: NaiveDate,
        #[serde(rename = "TestFloat", deserialize_with = "deserialize_float")]
        float: f64,
        #[serde(rename = "TestInt", deserialize_with = "deserialize_int")]
        int: i64,
    }

    #[test]
    fn test_deserialize_string_fields() {
        let sample: Sample = serde_json::from_str(
            r#"{"TestBool": "Yes", "TestDate": "01/30/2016", "TestFloat": "-7.95723", "TestInt": "100"}"#,
        )
        .unwrap();
        assert!(sample.flag);
        assert_eq!(sample.date, NaiveDate::from_ymd_opt(2016, 1, 30).unwrap());
        assert_eq!(sample.float, -7.95723);
        assert_eq!(sample.int, 100);
    }

    #[test]
    fn test_deserialize_json_null() {
        let sample: Sample = serde_json::from_str(
            r#"{"TestBool": null, "TestDate": null, "TestFloat": null, "TestInt": null}"#,
        )
        .unwrap();
        assert!(!sample.flag);
        assert_eq!(sample.date, null_date());
        assert_eq!(sample.float, 0.0);
        assert_eq!(sample.int, 0);
    }

    #[derive(Deserialize)]
    struct Record {
        #[serde(rename = "Name", default, deserialize_with = "deserialize_or_default")]
        name: String,
        #[serde(rename = "Rows", default, deserialize_with = "deserialize_or_default")]
        rows: Vec<String>,
    }

    #[test]
    fn test_deserialize_or_default() {
        let record: Record = serde_json::from_str(r#"{"Name": null, "Rows": null}"#).unwrap();
        assert_eq!(record.name, "");
        assert!(record.rows.is_empty());

        let record: Record = serde_json::from_str(r#"{"Name": "X", "Rows": ["a"]}"#).unwrap();
        assert_eq!(record.name, "X");
        assert_eq!(record.rows, vec!["a".to_string()]);

        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_deserialize_reports_bad_token() {
        let err = serde_json::from_str::<Sample>(
            r#"{"TestBool": "N", "TestDate": "13/40/2016", "TestFloat": "1", "TestInt": "1"}"#,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("13/40/2016"));
    }
}
