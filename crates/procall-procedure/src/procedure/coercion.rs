//! Type inference for value-only parameter maps

use procall_core::{SqlType, Value};

use super::parameter::{BindParameter, ParameterMode, ParameterSet};

/// Infer the SQL type of a value.
///
/// An empty string carries no type information and is typed `OTHER`, the
/// same as an absent value.
///
/// # Examples
///
/// ```
/// use procall_core::{SqlType, Value};
/// use procall_procedure::infer_sql_type;
///
/// assert_eq!(infer_sql_type(&Value::from("abc")), SqlType::Varchar);
/// assert_eq!(infer_sql_type(&Value::from("")), SqlType::Other);
/// assert_eq!(infer_sql_type(&Value::from(7)), SqlType::Numeric);
/// assert_eq!(infer_sql_type(&Value::Bytes(vec![0xff])), SqlType::Other);
/// ```
pub fn infer_sql_type(value: &Value) -> SqlType {
    match value {
        Value::String(s) if s.is_empty() => SqlType::Other,
        Value::String(_) => SqlType::Varchar,
        Value::Int64(_) | Value::Float64(_) | Value::Decimal(_) => SqlType::Numeric,
        Value::Bool(_) => SqlType::Boolean,
        Value::Date(_) => SqlType::Date,
        Value::DateTime(_) | Value::DateTimeUtc(_) => SqlType::Timestamp,
        Value::Null | Value::Bytes(_) | Value::Time(_) | Value::Json(_) => SqlType::Other,
    }
}

/// Turn plain name/value pairs into IN parameters with inferred types.
///
/// An absent or NULL value is passed as an empty string typed `OTHER`.
pub fn coerce_values<I, K>(values: I) -> ParameterSet
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<String>,
{
    values
        .into_iter()
        .map(|(name, value)| {
            let param = match value {
                Some(value) if !value.is_null() => {
                    BindParameter::new(ParameterMode::In, infer_sql_type(&value), Some(value))
                }
                _ => BindParameter::new(
                    ParameterMode::In,
                    SqlType::Other,
                    Some(Value::String(String::new())),
                ),
            };
            (name, param)
        })
        .collect()
}
