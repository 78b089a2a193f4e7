use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use strum::{AsRefStr, EnumString};

use crate::error::PadError;

/// How raw input is turned into a [`Value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Text,
    Number,
    Json,
}

/// A scalar with a defined textual representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i128),
    Float(f64),
}

impl Value {
    pub fn parse(raw: &str, kind: ValueKind) -> Result<Self, PadError> {
        match kind {
            ValueKind::Text => Ok(Self::Text(raw.to_owned())),
            ValueKind::Number => Self::parse_number(raw),
            ValueKind::Json => {
                let json: serde_json::Value = serde_json::from_str(raw)
                    .map_err(|_| PadError::NotScalar(raw.to_owned()))?;
                // serde_json widens integers past u64 to f64; keep their digits.
                if json.is_number() && is_integer_literal(raw.trim()) {
                    return Self::parse_number(raw);
                }
                Self::from_json(&json)
            }
        }
    }

    fn parse_number(raw: &str) -> Result<Self, PadError> {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return Ok(Self::Integer(n));
        }
        // An integer too wide for i128 would lose digits as f64.
        if is_integer_literal(trimmed) {
            return Err(PadError::NotNumeric(raw.to_owned()));
        }
        match trimmed.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Self::Float(x)),
            _ => Err(PadError::NotNumeric(raw.to_owned())),
        }
    }

    /// Accepts strings, numbers and booleans. Everything else has no single
    /// textual form to pad.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, PadError> {
        use serde_json::Value as Json;

        match json {
            Json::String(s) => Ok(Self::Text(s.clone())),
            Json::Bool(b) => Ok(Self::Text(b.to_string())),
            Json::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .ok_or_else(|| PadError::NotNumeric(n.to_string())),
            Json::Null | Json::Array(_) | Json::Object(_) => {
                Err(PadError::NotScalar(json.to_string()))
            }
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) | Self::Float(_) => ValueKind::Number,
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::{pad, Fill};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::kept_verbatim(" 007 ", " 007 ")]
    #[case::empty("", "")]
    fn text_kind_keeps_input(#[case] raw: &str, #[case] expected: &str) {
        let value = Value::parse(raw, ValueKind::Text).unwrap();
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.kind(), ValueKind::Text);
    }

    // Numbers render canonically, so leading zeros and trailing
    // fractional zeros disappear before padding.
    #[rstest]
    #[case::integer("3", "3")]
    #[case::leading_zeros("007", "7")]
    #[case::negative("-42", "-42")]
    #[case::whitespace(" 12 ", "12")]
    #[case::fraction("2.50", "2.5")]
    #[case::whole_float("3.0", "3")]
    #[case::u64_max("18446744073709551615", "18446744073709551615")]
    #[case::below_i64_min("-9223372036854775809", "-9223372036854775809")]
    fn number_kind_renders_canonically(#[case] raw: &str, #[case] expected: &str) {
        let value = Value::parse(raw, ValueKind::Number).unwrap();
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.kind(), ValueKind::Number);
    }

    #[rstest]
    #[case::word("abc")]
    #[case::empty("")]
    #[case::infinity("inf")]
    #[case::nan("NaN")]
    #[case::wider_than_i128("1000000000000000000000000000000000000000000")]
    fn number_kind_rejects_non_numbers(#[case] raw: &str) {
        assert_eq!(
            Value::parse(raw, ValueKind::Number),
            Err(PadError::NotNumeric(raw.to_owned()))
        );
    }

    #[rstest]
    #[case::string(json!("test"), "test")]
    #[case::integer(json!(3), "3")]
    #[case::float(json!(1.5), "1.5")]
    #[case::u64_max(json!(u64::MAX), "18446744073709551615")]
    #[case::boolean(json!(true), "true")]
    fn json_scalars_convert(#[case] input: serde_json::Value, #[case] expected: &str) {
        assert_eq!(Value::from_json(&input).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::array(json!([1, 2]))]
    #[case::object(json!({"a": 1}))]
    fn json_non_scalars_are_rejected(#[case] input: serde_json::Value) {
        assert!(matches!(
            Value::from_json(&input),
            Err(PadError::NotScalar(_))
        ));
    }

    #[rstest]
    #[case::string(r#""test""#, "test", ValueKind::Text)]
    #[case::number("10", "10", ValueKind::Number)]
    #[case::u64_max("18446744073709551615", "18446744073709551615", ValueKind::Number)]
    #[case::past_u64(" 36893488147419103232 ", "36893488147419103232", ValueKind::Number)]
    fn json_kind_parses_scalars(#[case] raw: &str, #[case] expected: &str, #[case] kind: ValueKind) {
        let value = Value::parse(raw, ValueKind::Json).unwrap();
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    #[case::bare_word("test")]
    #[case::array("[1]")]
    fn json_kind_rejects_invalid_or_compound(#[case] raw: &str) {
        assert!(matches!(
            Value::parse(raw, ValueKind::Json),
            Err(PadError::NotScalar(_))
        ));
    }

    #[test]
    fn kind_parses_from_lowercase() {
        assert_eq!("text".parse::<ValueKind>().unwrap(), ValueKind::Text);
        assert_eq!("number".parse::<ValueKind>().unwrap(), ValueKind::Number);
        assert!("bogus".parse::<ValueKind>().is_err());
        assert_eq!(ValueKind::Number.as_ref(), "number");
    }

    #[test]
    fn pads_numeric_values() {
        assert_eq!(pad(&Value::from(3_i64), 10, Fill::default()), "         3");
        assert_eq!(pad(&Value::from(3_i64), 10, Fill::new('0')), "0000000003");
        assert_eq!(pad(&Value::from("test"), 10, Fill::new('0')), "000000test");
    }
}
