use serde_json::Value;

pub type Result<T> = std::result::Result<T, StartTimeError>;

/// Largest magnitude accepted for a time, keeps `stop - start` finite.
pub const TIME_LIMIT: f64 = f64::MAX / 2.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StartTimeError {
    /// Raised for any start time that is not a float, integers and booleans included.
    #[error("'start_time' must be a float if provided, got {found}")]
    NotAFloat { found: &'static str },

    /// NaN and infinities have no JSON number encoding.
    #[error("'start_time' must be finite, got {value}")]
    NotFinite { value: f64 },

    #[error("'start_time' must be within half of f64::MAX, got {value:e}")]
    OutOfRange { value: f64 },
}

/// A start time that passed the strict float check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartTime(f64);

impl StartTime {
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StartTime {
    type Error = StartTimeError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(StartTimeError::NotFinite { value });
        }

        if value.abs() > TIME_LIMIT {
            return Err(StartTimeError::OutOfRange { value });
        }

        Ok(Self(value))
    }
}

impl TryFrom<&Value> for StartTime {
    type Error = StartTimeError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(number) if number.is_f64() => number
                .as_f64()
                .ok_or(StartTimeError::NotAFloat { found: "number" })
                .and_then(Self::try_from),
            other => Err(StartTimeError::NotAFloat {
                found: kind_of(other),
            }),
        }
    }
}

impl TryFrom<Value> for StartTime {
    type Error = StartTimeError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_floats() {
        assert_eq!(StartTime::try_from(&json!(123.0)).unwrap().as_f64(), 123.0);
        assert_eq!(StartTime::try_from(&json!(-0.5)).unwrap().as_f64(), -0.5);

        // a float written with an exponent is still a float
        let value: Value = serde_json::from_str("1e3").unwrap();
        assert_eq!(StartTime::try_from(value).unwrap().as_f64(), 1000.0);
    }

    #[test]
    fn test_rejects_everything_else() {
        let bad_values = [
            (json!("123"), "string"),
            (json!(123), "integer"),
            (json!(-7), "integer"),
            (json!(true), "boolean"),
            (json!(null), "null"),
            (json!([1.0]), "array"),
            (json!({"year": 2020}), "object"),
        ];

        for (value, found) in bad_values {
            assert_eq!(
                StartTime::try_from(&value),
                Err(StartTimeError::NotAFloat { found }),
                "{value} should have been rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    StartTime::try_from(value),
                    Err(StartTimeError::NotFinite { .. })
                ),
                "{value} should have been rejected"
            );
        }

        assert_eq!(
            StartTime::try_from(f64::MAX),
            Err(StartTimeError::OutOfRange { value: f64::MAX })
        );
        assert_eq!(
            StartTime::try_from(&json!(-1e308)),
            Err(StartTimeError::OutOfRange { value: -1e308 })
        );

        assert_eq!(StartTime::try_from(TIME_LIMIT).unwrap().as_f64(), TIME_LIMIT);
        assert_eq!(StartTime::try_from(0.0).unwrap().as_f64(), 0.0);
    }

    #[test]
    fn test_error_message() {
        let err = StartTime::try_from(&json!(123)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'start_time' must be a float if provided, got integer"
        );
    }
}
