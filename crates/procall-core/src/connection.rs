//! Call connection and callable statement traits

use crate::{Releasable, Result, SqlType, Value};
use std::sync::Arc;

/// A prepared procedure or function call.
///
/// Positional indices are 1-based and follow the `?` placeholders of the
/// call text the statement was prepared from.
pub trait CallableStatement: Releasable + Send {
    /// Bind an input value at a placeholder
    fn bind_input(&mut self, index: usize, sql_type: SqlType, value: &Value) -> Result<()>;

    /// Register a placeholder as an output slot of the given type
    fn register_output(&mut self, index: usize, sql_type: SqlType) -> Result<()>;

    /// Execute the call
    fn execute(&mut self) -> Result<()>;

    /// Read an output slot after execution
    fn read_output(&mut self, index: usize) -> Result<Value>;
}

/// An open database connection able to prepare call statements
pub trait CallConnection: Send + Sync {
    /// Get the driver name (e.g., "oracle")
    fn driver_name(&self) -> &str;

    /// Check if the connection is closed
    fn is_closed(&self) -> bool {
        false
    }

    /// Prepare a call statement from its text.
    ///
    /// The returned statement is owned by the caller, who must release it.
    fn prepare_call(&self, sql: &str) -> Result<Box<dyn CallableStatement + '_>>;
}

impl<T: CallConnection + ?Sized> CallConnection for Arc<T> {
    fn driver_name(&self) -> &str {
        (**self).driver_name()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn prepare_call(&self, sql: &str) -> Result<Box<dyn CallableStatement + '_>> {
        (**self).prepare_call(sql)
    }
}
