//! Positional binding of call parameters

use procall_core::{CallableStatement, Result, Value};

use super::parameter::CallSpec;

/// Bind inputs and register outputs on a prepared call.
///
/// Slot 1 is the return value for functions. Parameters follow in
/// `spec.parameters()` order, one slot each, skipping inlined booleans.
pub fn bind_parameters<S>(statement: &mut S, spec: &CallSpec) -> Result<()>
where
    S: CallableStatement + ?Sized,
{
    let mut index = 1;
    if spec.is_function() {
        tracing::trace!(index, sql_type = %spec.return_type(), "registering return slot");
        statement.register_output(index, spec.return_type())?;
        index += 1;
    }

    for (name, param) in spec.parameters() {
        if !param.occupies_slot() {
            continue;
        }
        if param.mode().is_input() {
            tracing::trace!(index, parameter = %name, sql_type = %param.sql_type(), "binding input");
            match param.value() {
                Some(value) => statement.bind_input(index, param.sql_type(), value)?,
                None => statement.bind_input(index, param.sql_type(), &Value::Null)?,
            }
        }
        if param.mode().is_output() {
            tracing::trace!(index, parameter = %name, sql_type = %param.sql_type(), "registering output");
            statement.register_output(index, param.sql_type())?;
        }
        index += 1;
    }

    Ok(())
}
