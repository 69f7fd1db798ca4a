//! Call options
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! strict_boolean_outputs = true
//! validate_identifiers = true
//! log_statements = false
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how calls are built and logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallOptions {
    /// Reject OUT/INOUT BOOLEAN parameters instead of silently dropping them.
    ///
    /// Booleans cannot be bound on the target platform and IN booleans are
    /// inlined as literals, but there is no way to read a boolean back.
    pub strict_boolean_outputs: bool,
    /// Check procedure and parameter names before inlining them in the call text
    pub validate_identifiers: bool,
    /// Log generated call text at info level (debug otherwise)
    pub log_statements: bool,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            strict_boolean_outputs: true,
            validate_identifiers: true,
            log_statements: true,
        }
    }
}

impl CallOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?options, "loaded call options");
        Ok(options)
    }

    pub fn with_strict_boolean_outputs(mut self, strict: bool) -> Self {
        self.strict_boolean_outputs = strict;
        self
    }

    pub fn with_identifier_validation(mut self, validate: bool) -> Self {
        self.validate_identifiers = validate;
        self
    }

    pub fn with_statement_logging(mut self, log: bool) -> Self {
        self.log_statements = log;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProcallError;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = CallOptions::default();
        assert!(options.strict_boolean_outputs);
        assert!(options.validate_identifiers);
        assert!(options.log_statements);
    }

    #[test]
    fn test_builder_methods() {
        let options = CallOptions::default()
            .with_strict_boolean_outputs(false)
            .with_identifier_validation(false)
            .with_statement_logging(false);

        assert_eq!(
            options,
            CallOptions {
                strict_boolean_outputs: false,
                validate_identifiers: false,
                log_statements: false,
            }
        );
    }

    #[test]
    fn test_parse_partial_toml() {
        let options = CallOptions::from_toml_str("log_statements = false\n").unwrap();
        assert_eq!(options, CallOptions::default().with_statement_logging(false));
    }

    #[test]
    fn test_parse_empty_toml() {
        let options = CallOptions::from_toml_str("").unwrap();
        assert_eq!(options, CallOptions::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CallOptions::from_toml_str("cache_statements = true").unwrap_err();
        assert!(matches!(err, ProcallError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict_boolean_outputs = false").unwrap();
        writeln!(file, "validate_identifiers = true").unwrap();

        let options = CallOptions::load(file.path()).unwrap();
        assert!(!options.strict_boolean_outputs);
        assert!(options.validate_identifiers);
        assert!(options.log_statements);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CallOptions::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ProcallError::Io(_)));
    }
}
