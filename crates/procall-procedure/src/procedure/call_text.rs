//! Call text generation

use procall_core::Value;

use super::parameter::{BindParameter, CallSpec};

/// Build the anonymous-block call text for a call
///
/// # Examples
///
/// ```
/// use procall_core::{CallOptions, SqlType};
/// use procall_procedure::{build_call_text, BindParameter, CallSpec, ParameterSet};
///
/// let params = ParameterSet::new()
///     .with("P1", BindParameter::input(SqlType::Varchar, "x"))
///     .with("FLAG", BindParameter::input(SqlType::Boolean, true));
/// let spec = CallSpec::new("PKG.FUNC", params, SqlType::Numeric, &CallOptions::default()).unwrap();
///
/// assert_eq!(build_call_text(&spec), "begin ? := PKG.FUNC(P1 => ?,FLAG => TRUE); end;");
/// ```
pub fn build_call_text(spec: &CallSpec) -> String {
    let args: Vec<String> = spec
        .parameters()
        .iter()
        .map(|(name, param)| format!("{} => {}", name, argument(param)))
        .collect();

    format!(
        "begin {}{}({}); end;",
        if spec.is_function() { "? := " } else { "" },
        spec.procedure_name(),
        args.join(",")
    )
}

fn argument(param: &BindParameter) -> &'static str {
    if param.occupies_slot() {
        return "?";
    }
    // Only IN booleans get here; outputs are filtered out by CallSpec
    match param.value() {
        None | Some(Value::Null) => "NULL",
        Some(Value::Bool(true)) => "TRUE",
        Some(_) => "FALSE",
    }
}
