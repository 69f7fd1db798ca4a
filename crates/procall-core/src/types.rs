//! Core value and type-code types

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A value passed to or read back from a stored routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// Decimal/Numeric (stored as string for precision)
    Decimal(String),
    /// UTF-8 string
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// Date (year, month, day)
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// DateTime without timezone
    DateTime(NaiveDateTime),
    /// DateTime with timezone (UTC)
    DateTimeUtc(DateTime<Utc>),
    /// JSON document
    Json(serde_json::Value),
}

impl Value {
    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            Value::Decimal(s) | Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            Value::Int64(v) => Some(*v as f64),
            Value::Decimal(s) | Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Date(v) => write!(f, "{}", v),
            Value::Time(v) => write!(f, "{}", v),
            Value::DateTime(v) => write!(f, "{}", v),
            Value::DateTimeUtc(v) => write!(f, "{}", v),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int64(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTimeUtc(value)
    }
}

/// SQL type code used when binding inputs and registering outputs.
///
/// Each variant carries the integer code of the JDBC type vocabulary, so
/// drivers that speak that protocol can forward [`SqlType::code`] as is.
///
/// # Examples
///
/// ```
/// use procall_core::SqlType;
///
/// assert_eq!(SqlType::Varchar.code(), 12);
/// assert_eq!(SqlType::from_code(2), Some(SqlType::Numeric));
/// assert!(SqlType::Null.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    /// No value; on the return slot it marks a procedure call
    Null,
    Char,
    Numeric,
    Decimal,
    Integer,
    BigInt,
    Double,
    Varchar,
    Boolean,
    Date,
    Time,
    Timestamp,
    Blob,
    Clob,
    /// Driver-specific or unknown type
    Other,
}

impl SqlType {
    const ALL: [SqlType; 15] = [
        SqlType::Null,
        SqlType::Char,
        SqlType::Numeric,
        SqlType::Decimal,
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Double,
        SqlType::Varchar,
        SqlType::Boolean,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::Blob,
        SqlType::Clob,
        SqlType::Other,
    ];

    /// Integer type code
    pub const fn code(self) -> i32 {
        match self {
            SqlType::Null => 0,
            SqlType::Char => 1,
            SqlType::Numeric => 2,
            SqlType::Decimal => 3,
            SqlType::Integer => 4,
            SqlType::BigInt => -5,
            SqlType::Double => 8,
            SqlType::Varchar => 12,
            SqlType::Boolean => 16,
            SqlType::Date => 91,
            SqlType::Time => 92,
            SqlType::Timestamp => 93,
            SqlType::Blob => 2004,
            SqlType::Clob => 2005,
            SqlType::Other => 1111,
        }
    }

    /// Look up a type by its integer code
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// SQL keyword for the type
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Null => "NULL",
            SqlType::Char => "CHAR",
            SqlType::Numeric => "NUMERIC",
            SqlType::Decimal => "DECIMAL",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Double => "DOUBLE",
            SqlType::Varchar => "VARCHAR",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Blob => "BLOB",
            SqlType::Clob => "CLOB",
            SqlType::Other => "OTHER",
        }
    }

    /// Whether this is the "no value" marker
    pub fn is_null(self) -> bool {
        matches!(self, SqlType::Null)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type_codes_round_trip() {
        for sql_type in SqlType::ALL {
            assert_eq!(SqlType::from_code(sql_type.code()), Some(sql_type));
        }
    }

    #[test]
    fn test_sql_type_unknown_code() {
        assert_eq!(SqlType::from_code(-9999), None);
        assert_eq!(SqlType::from_code(13), None);
    }

    #[test]
    fn test_sql_type_display() {
        assert_eq!(SqlType::Timestamp.to_string(), "TIMESTAMP");
        assert_eq!(SqlType::BigInt.to_string(), "BIGINT");
    }

    #[test]
    fn test_sql_type_serialization() {
        let json = serde_json::to_string(&SqlType::BigInt).unwrap();
        assert_eq!(json, "\"big_int\"");

        let parsed: SqlType = serde_json::from_str("\"varchar\"").unwrap();
        assert_eq!(parsed, SqlType::Varchar);
    }

    #[test]
    fn test_value_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::Decimal("12.50".into()).as_f64(), Some(12.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1.5).as_i64(), None);
    }

    #[test]
    fn test_value_display() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Bytes(vec![1, 2, 3]).to_string(), "<3 bytes>");
        assert_eq!(Value::from(date).to_string(), "2024-02-29");
    }
}
