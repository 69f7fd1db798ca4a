//! Call parameters, call specifications and call results

use indexmap::IndexMap;
use procall_core::{CallOptions, SqlType, Value, identifier};
use serde::{Deserialize, Serialize};

use crate::error::{ProcedureError, ProcedureResult};

/// Result key under which a function's return value is stored.
///
/// `#` cannot start an identifier, so this never collides with a parameter.
pub const RETURN_KEY: &str = "#RETURN#";

/// Parameter direction mode for stored procedures
///
/// # Examples
///
/// ```
/// use procall_procedure::ParameterMode;
///
/// let input = ParameterMode::In;
/// assert!(input.is_input());
/// assert!(!input.is_output());
///
/// let inout = ParameterMode::InOut;
/// assert!(inout.is_input());
/// assert!(inout.is_output());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterMode {
    /// Input parameter - value is passed to the procedure
    #[default]
    In,
    /// Output parameter - value is returned from the procedure
    Out,
    /// Input/Output parameter - value is passed in and can be modified
    InOut,
}

impl ParameterMode {
    /// Check if this parameter accepts input values
    pub fn is_input(&self) -> bool {
        matches!(self, ParameterMode::In | ParameterMode::InOut)
    }

    /// Check if this parameter produces output values
    pub fn is_output(&self) -> bool {
        matches!(self, ParameterMode::Out | ParameterMode::InOut)
    }
}

/// A typed bind parameter with a direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindParameter {
    mode: ParameterMode,
    sql_type: SqlType,
    value: Option<Value>,
}

impl BindParameter {
    pub fn new(mode: ParameterMode, sql_type: SqlType, value: Option<Value>) -> Self {
        Self {
            mode,
            sql_type,
            value,
        }
    }

    /// Create an IN parameter
    pub fn input(sql_type: SqlType, value: impl Into<Value>) -> Self {
        Self::new(ParameterMode::In, sql_type, Some(value.into()))
    }

    /// Create an OUT parameter (no initial value)
    pub fn output(sql_type: SqlType) -> Self {
        Self::new(ParameterMode::Out, sql_type, None)
    }

    /// Create an INOUT parameter with an initial value
    pub fn inout(sql_type: SqlType, value: impl Into<Value>) -> Self {
        Self::new(ParameterMode::InOut, sql_type, Some(value.into()))
    }

    pub fn mode(&self) -> ParameterMode {
        self.mode
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether the parameter takes a positional `?` slot.
    ///
    /// Booleans cannot be bound; IN booleans are written into the call text
    /// as literals instead.
    pub fn occupies_slot(&self) -> bool {
        self.sql_type != SqlType::Boolean
    }
}

/// Named bind parameters, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    params: IndexMap<String, BindParameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the one it replaced.
    ///
    /// A replaced parameter keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, param: BindParameter) -> Option<BindParameter> {
        self.params.insert(name.into(), param)
    }

    /// Builder form of [`ParameterSet::insert`]
    pub fn with(mut self, name: impl Into<String>, param: BindParameter) -> Self {
        self.insert(name, param);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BindParameter> {
        self.params.get(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindParameter)> {
        self.params.iter().map(|(name, param)| (name.as_str(), param))
    }
}

impl<K: Into<String>> FromIterator<(K, BindParameter)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, BindParameter)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, param)| (name.into(), param))
                .collect(),
        }
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, BindParameter);
    type IntoIter = indexmap::map::IntoIter<String, BindParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

/// A validated call with its parameters in their final positional order.
///
/// The order fixed here is the only one used to write the call text, bind
/// the parameters and read the outputs back.
#[derive(Debug, Clone)]
pub struct CallSpec {
    procedure_name: String,
    parameters: Vec<(String, BindParameter)>,
    return_type: SqlType,
}

impl CallSpec {
    /// Validate a call and fix its parameter order.
    ///
    /// `return_type` of [`SqlType::Null`] makes this a procedure call.
    pub fn new(
        procedure_name: impl Into<String>,
        parameters: ParameterSet,
        return_type: SqlType,
        options: &CallOptions,
    ) -> ProcedureResult<Self> {
        let procedure_name = procedure_name.into();
        if procedure_name.is_empty() {
            return Err(ProcedureError::Configuration(
                "procedure name is empty".to_string(),
            ));
        }
        if options.validate_identifiers {
            identifier::validate_routine_name(&procedure_name)
                .map_err(ProcedureError::configuration)?;
        }

        let mut ordered = Vec::with_capacity(parameters.len());
        for (name, param) in parameters {
            if name.is_empty() || name == RETURN_KEY {
                return Err(ProcedureError::Configuration(format!(
                    "invalid parameter name {:?} for {}",
                    name, procedure_name
                )));
            }
            if options.validate_identifiers {
                identifier::validate_parameter_name(&name)
                    .map_err(ProcedureError::configuration)?;
            }
            if !param.occupies_slot() && param.mode().is_output() {
                if options.strict_boolean_outputs {
                    return Err(ProcedureError::Configuration(format!(
                        "parameter {} of {} is a {:?} BOOLEAN; boolean values cannot be read back",
                        name,
                        procedure_name,
                        param.mode()
                    )));
                }
                tracing::warn!(
                    procedure = %procedure_name,
                    parameter = %name,
                    "Skipping output BOOLEAN parameter"
                );
                continue;
            }
            ordered.push((name, param));
        }

        Ok(Self {
            procedure_name,
            parameters: ordered,
            return_type,
        })
    }

    pub fn procedure_name(&self) -> &str {
        &self.procedure_name
    }

    pub fn parameters(&self) -> &[(String, BindParameter)] {
        &self.parameters
    }

    pub fn return_type(&self) -> SqlType {
        self.return_type
    }

    /// Whether a return value is expected
    pub fn is_function(&self) -> bool {
        !self.return_type.is_null()
    }

    /// Number of `?` placeholders in the call text, return slot included
    pub fn placeholder_count(&self) -> usize {
        usize::from(self.is_function())
            + self
                .parameters
                .iter()
                .filter(|(_, param)| param.occupies_slot())
                .count()
    }
}

/// Values read back after a call.
///
/// Keys are OUT/INOUT parameter names, plus [`RETURN_KEY`] for functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallResult {
    values: IndexMap<String, Value>,
}

impl CallResult {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Get the function return value
    pub fn return_value(&self) -> Option<&Value> {
        self.values.get(RETURN_KEY)
    }

    /// Take the function return value
    pub fn into_return_value(mut self) -> Option<Value> {
        self.values.shift_remove(RETURN_KEY)
    }

    /// Get a value by parameter name or [`RETURN_KEY`]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.values
    }
}
