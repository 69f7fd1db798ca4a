//! Reading OUT/INOUT values back after execution

use procall_core::{CallableStatement, Result};

use super::parameter::{CallResult, CallSpec, RETURN_KEY};

/// Collect the return value and output parameters of an executed call.
///
/// IN parameters are not read, but each one that holds a `?` still counts
/// toward the slot index, so reads line up with the binder's registrations.
pub fn extract_outputs<S>(statement: &mut S, spec: &CallSpec) -> Result<CallResult>
where
    S: CallableStatement + ?Sized,
{
    let mut result = CallResult::default();
    let mut index = 1;
    if spec.is_function() {
        result.insert(RETURN_KEY, statement.read_output(index)?);
        index += 1;
    }

    for (name, param) in spec.parameters() {
        if !param.occupies_slot() {
            continue;
        }
        if param.mode().is_output() {
            let value = statement.read_output(index)?;
            tracing::trace!(index, parameter = %name, %value, "read output");
            result.insert(name.as_str(), value);
        }
        index += 1;
    }

    Ok(result)
}
