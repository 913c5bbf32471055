//! Attribute values read from records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::column::ColumnKind;
use crate::error::{ModelError, Result};

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value.
    #[default]
    Null,
    /// Character data.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time of day.
    DateTime(NaiveDateTime),
    /// Time of day.
    Time(NaiveTime),
}

impl FieldValue {
    /// Parses a raw string for the given column kind.
    ///
    /// Empty input parses to [`FieldValue::Null`] for every kind.
    pub fn parse(column: &str, kind: &ColumnKind, raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::Null);
        }

        let invalid = || ModelError::InvalidValue {
            column: column.to_string(),
            kind: kind.clone(),
            value: raw.to_string(),
        };

        let value = match kind {
            ColumnKind::Integer => Self::Integer(raw.trim().parse().map_err(|_| invalid())?),
            ColumnKind::Float | ColumnKind::Decimal => {
                Self::Float(raw.trim().parse().map_err(|_| invalid())?)
            }
            ColumnKind::Boolean => match raw.trim() {
                "1" | "true" | "t" => Self::Bool(true),
                "0" | "false" | "f" => Self::Bool(false),
                _ => return Err(invalid()),
            },
            ColumnKind::Date => {
                Self::Date(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| invalid())?)
            }
            ColumnKind::DateTime | ColumnKind::Timestamp => {
                let raw = raw.trim();
                let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                    .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
                    .map_err(|_| invalid())?;
                Self::DateTime(parsed)
            }
            ColumnKind::Time => {
                let raw = raw.trim();
                let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
                    .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
                    .map_err(|_| invalid())?;
                Self::Time(parsed)
            }
            ColumnKind::String
            | ColumnKind::Text
            | ColumnKind::Binary
            | ColumnKind::Other(_) => Self::Text(raw.to_string()),
        };

        Ok(value)
    }

    /// Returns whether this is [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value the way it is submitted back in a form.
    ///
    /// ```
    /// use dynaform_model::FieldValue;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(FieldValue::from("Hello").to_param(), Some("Hello".to_string()));
    /// assert_eq!(FieldValue::from(1_i64).to_param(), Some("1".to_string()));
    /// let date = NaiveDate::from_ymd_opt(2004, 6, 15).unwrap();
    /// assert_eq!(FieldValue::from(date).to_param(), Some("2004-06-15".to_string()));
    /// assert_eq!(FieldValue::Null.to_param(), None);
    /// ```
    pub fn to_param(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            Self::Time(t) => Some(t.format("%H:%M:%S").to_string()),
        }
    }

    /// Returns the calendar date part, if any.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Returns the time-of-day part as `(hour, minute)`, if any.
    pub fn as_hour_minute(&self) -> Option<(u32, u32)> {
        match self {
            Self::DateTime(dt) => Some((dt.hour(), dt.minute())),
            Self::Time(t) => Some((t.hour(), t.minute())),
            _ => None,
        }
    }

    /// Interprets the value as a boolean flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Integer(n) => Some(*n != 0),
            Self::Text(s) => match s.as_str() {
                "1" | "true" | "t" => Some(true),
                "0" | "false" | "f" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for FieldValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(
            FieldValue::parse("age", &ColumnKind::Integer, "42").unwrap(),
            FieldValue::Integer(42)
        );
        assert_eq!(
            FieldValue::parse("active", &ColumnKind::Boolean, "1").unwrap(),
            FieldValue::Bool(true)
        );
        assert_eq!(
            FieldValue::parse("written_on", &ColumnKind::Date, "2004-06-15").unwrap(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2004, 6, 15).unwrap())
        );
        assert_eq!(
            FieldValue::parse("title", &ColumnKind::String, "Hello").unwrap(),
            FieldValue::Text("Hello".to_string())
        );
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2004, 6, 15)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap();
        for raw in ["2004-06-15 16:30:00", "2004-06-15T16:30:00"] {
            assert_eq!(
                FieldValue::parse("written_on", &ColumnKind::DateTime, raw).unwrap(),
                FieldValue::DateTime(expected)
            );
        }
    }

    #[test]
    fn test_parse_empty_is_null() {
        assert!(FieldValue::parse("age", &ColumnKind::Integer, "")
            .unwrap()
            .is_null());
    }

    #[test]
    fn test_parse_invalid() {
        let err = FieldValue::parse("age", &ColumnKind::Integer, "forty").unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { ref column, .. } if column == "age"));
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn test_temporal_accessors() {
        let dt = NaiveDate::from_ymd_opt(2004, 6, 15)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap();
        let value = FieldValue::from(dt);
        assert_eq!(value.as_date(), NaiveDate::from_ymd_opt(2004, 6, 15));
        assert_eq!(value.as_hour_minute(), Some((16, 30)));
        assert_eq!(value.to_param(), Some("2004-06-15 16:30:00".to_string()));
        assert_eq!(FieldValue::from("x").as_date(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert!(FieldValue::from(None::<i64>).is_null());
        assert_eq!(FieldValue::from(Some(3_i64)), FieldValue::Integer(3));
    }
}
