//! Identifier validation for names inlined into call text
//!
//! Procedure and parameter names cannot be bound as parameters, so they are
//! written into the call text verbatim. Accepted forms:
//! - bare segments: `[A-Za-z_][A-Za-z0-9_$#]*`
//! - double-quoted segments without an embedded `"`
//!
//! Procedure names may be qualified (`SCHEMA.PKG.FUNC`) and may end in a
//! database link (`PKG.FUNC@REMOTE`, `FUNC@LINK.EXAMPLE.COM`) made of bare
//! segments. Parameter names are a single segment.

use crate::{ProcallError, Result};

/// Maximum length of one identifier segment in bytes
const MAX_SEGMENT_LENGTH: usize = 128;

/// Validate a possibly qualified procedure or function name
pub fn validate_routine_name(name: &str) -> Result<()> {
    match name.rsplit_once('@') {
        Some((routine, link)) if !link.contains('"') => {
            split_segments(routine)?;
            split_segments(link).map(|_| ())
        }
        _ => split_segments(name).map(|_| ()),
    }
}

/// Validate a parameter name
pub fn validate_parameter_name(name: &str) -> Result<()> {
    let segments = split_segments(name)?;
    if segments.len() != 1 {
        return Err(ProcallError::Configuration(format!(
            "Parameter name must not be qualified: {:?}",
            name
        )));
    }
    Ok(())
}

fn split_segments(name: &str) -> Result<Vec<&str>> {
    if name.is_empty() {
        return Err(ProcallError::Configuration(
            "Identifier cannot be empty".to_string(),
        ));
    }
    if name.contains('\0') {
        return Err(ProcallError::Configuration(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    let mut segments = Vec::new();
    let mut rest = name;
    loop {
        let (segment, tail) = match rest.strip_prefix('"') {
            Some(quoted) => {
                let end = quoted.find('"').ok_or_else(|| {
                    ProcallError::Configuration(format!(
                        "Unterminated quoted identifier: {:?}",
                        name
                    ))
                })?;
                if end == 0 {
                    return Err(ProcallError::Configuration(format!(
                        "Empty quoted identifier: {:?}",
                        name
                    )));
                }
                (&rest[..end + 2], &quoted[end + 1..])
            }
            None => {
                let end = rest.find('.').unwrap_or(rest.len());
                let segment = &rest[..end];
                check_bare_segment(segment, name)?;
                (segment, &rest[end..])
            }
        };

        if segment.len() > MAX_SEGMENT_LENGTH {
            return Err(ProcallError::Configuration(format!(
                "Identifier segment exceeds {} bytes: {:?}",
                MAX_SEGMENT_LENGTH, name
            )));
        }
        segments.push(segment);

        if tail.is_empty() {
            return Ok(segments);
        }
        rest = tail.strip_prefix('.').ok_or_else(|| {
            ProcallError::Configuration(format!(
                "Unexpected character after quoted identifier: {:?}",
                name
            ))
        })?;
    }
}

fn check_bare_segment(segment: &str, name: &str) -> Result<()> {
    let mut chars = segment.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ProcallError::Configuration(format!(
            "Invalid identifier: {:?}",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_routine_names() {
        for name in [
            "PROC",
            "PKG.FUNC",
            "hr.emp_pkg.get_salary",
            "SYS$UTIL#1",
            "\"Mixed Case\".\"Proc.Name\"",
            "_private",
            "HR.PKG.PROC@REMOTE",
            "PROC@LINK.EXAMPLE.COM",
            "\"Mixed Case\".PROC@REMOTE",
            "\"a@b\".PROC",
        ] {
            assert!(validate_routine_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_routine_names() {
        for name in [
            "",
            "PKG..FUNC",
            "PKG.",
            ".FUNC",
            "1PROC",
            "PROC; DROP TABLE users",
            "PROC(1)",
            "\"unterminated",
            "\"\"",
            "\"a\"b",
            "PROC\0",
            "PROC@",
            "@REMOTE",
            "PROC@A@B",
            "PROC@\"LINK\"",
            "PROC@REMOTE; DROP TABLE users",
        ] {
            assert!(validate_routine_name(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_segment_length_limit() {
        let long = "A".repeat(MAX_SEGMENT_LENGTH + 1);
        assert!(validate_routine_name(&long).is_err());
        assert!(validate_routine_name(&"A".repeat(MAX_SEGMENT_LENGTH)).is_ok());
    }

    #[test]
    fn test_parameter_names() {
        assert!(validate_parameter_name("P_USER_ID").is_ok());
        assert!(validate_parameter_name("\"p one\"").is_ok());
        assert!(validate_parameter_name("PKG.P1").is_err());
        assert!(validate_parameter_name("#RETURN#").is_err());
        assert!(validate_parameter_name("a => 1, b").is_err());
        assert!(validate_parameter_name("P1@REMOTE").is_err());
    }
}
