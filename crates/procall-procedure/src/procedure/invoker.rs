//! Stored procedure and function invocation

use procall_core::{CallConnection, CallOptions, ScopedRelease, SqlType, Value};

use super::binder::bind_parameters;
use super::call_text::build_call_text;
use super::coercion::coerce_values;
use super::extractor::extract_outputs;
use super::parameter::{CallResult, CallSpec, ParameterSet};
use crate::error::{ProcedureError, ProcedureResult};

/// Calls stored procedures and functions on a caller-supplied connection.
///
/// The invoker holds no per-call state; one instance can serve any number
/// of threads, each using its own connection.
///
/// # Example
///
/// ```ignore
/// let invoker = ProcedureInvoker::default();
/// let params = ParameterSet::new()
///     .with("P_DEPT", BindParameter::input(SqlType::Numeric, 10))
///     .with("P_TOTAL", BindParameter::output(SqlType::Numeric));
///
/// let result = invoker.call_procedure(&conn, "HR.PAYROLL_PKG.TOTAL", params)?;
/// let total = result.get("P_TOTAL");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcedureInvoker {
    options: CallOptions,
}

impl ProcedureInvoker {
    pub fn new(options: CallOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CallOptions {
        &self.options
    }

    /// Call a stored function.
    ///
    /// The result holds the return value under [`super::RETURN_KEY`] and
    /// every OUT/INOUT parameter under its name.
    pub fn call_function<C>(
        &self,
        connection: &C,
        procedure_name: &str,
        parameters: ParameterSet,
        return_type: SqlType,
    ) -> ProcedureResult<CallResult>
    where
        C: CallConnection + ?Sized,
    {
        self.invoke(connection, procedure_name, parameters, return_type)
    }

    /// Call a stored procedure (no return value)
    pub fn call_procedure<C>(
        &self,
        connection: &C,
        procedure_name: &str,
        parameters: ParameterSet,
    ) -> ProcedureResult<CallResult>
    where
        C: CallConnection + ?Sized,
    {
        self.invoke(connection, procedure_name, parameters, SqlType::Null)
    }

    /// Call a stored function that takes only IN parameters.
    ///
    /// Parameter types are inferred from the values; returns the function's
    /// return value.
    pub fn call_function_in_only<C, I, K>(
        &self,
        connection: &C,
        procedure_name: &str,
        values: I,
        return_type: SqlType,
    ) -> ProcedureResult<Option<Value>>
    where
        C: CallConnection + ?Sized,
        I: IntoIterator<Item = (K, Option<Value>)>,
        K: Into<String>,
    {
        let result = self.invoke(
            connection,
            procedure_name,
            coerce_values(values),
            return_type,
        )?;
        Ok(result.into_return_value())
    }

    /// Call a stored procedure that takes only IN parameters
    pub fn call_procedure_in_only<C, I, K>(
        &self,
        connection: &C,
        procedure_name: &str,
        values: I,
    ) -> ProcedureResult<()>
    where
        C: CallConnection + ?Sized,
        I: IntoIterator<Item = (K, Option<Value>)>,
        K: Into<String>,
    {
        self.invoke(
            connection,
            procedure_name,
            coerce_values(values),
            SqlType::Null,
        )?;
        Ok(())
    }

    /// Validate, build, prepare, bind, execute and collect a call.
    ///
    /// `return_type` of [`SqlType::Null`] makes this a procedure call. The
    /// prepared statement is released before this returns, whatever the
    /// outcome.
    #[tracing::instrument(
        skip(self, connection, procedure_name, parameters),
        fields(procedure = %procedure_name, driver = %connection.driver_name())
    )]
    pub fn invoke<C>(
        &self,
        connection: &C,
        procedure_name: &str,
        parameters: ParameterSet,
        return_type: SqlType,
    ) -> ProcedureResult<CallResult>
    where
        C: CallConnection + ?Sized,
    {
        if connection.is_closed() {
            return Err(ProcedureError::Configuration(
                "connection is closed".to_string(),
            ));
        }

        let spec = CallSpec::new(procedure_name, parameters, return_type, &self.options)?;
        let sql = build_call_text(&spec);
        if self.options.log_statements {
            tracing::info!(statement = %sql, "Built call statement");
        } else {
            tracing::debug!(statement = %sql, "Built call statement");
        }

        let result = execute_call(connection, &spec, &sql).map_err(|source| {
            tracing::error!("Call failed: {}", source);
            ProcedureError::Execution {
                procedure: spec.procedure_name().to_string(),
                source,
            }
        })?;

        tracing::debug!(outputs = result.len(), "Call completed");
        Ok(result)
    }
}

fn execute_call<C>(connection: &C, spec: &CallSpec, sql: &str) -> procall_core::Result<CallResult>
where
    C: CallConnection + ?Sized,
{
    let mut statement = ScopedRelease::new(connection.prepare_call(sql)?);
    bind_parameters(&mut **statement, spec)?;
    statement.execute()?;
    extract_outputs(&mut **statement, spec)
}
