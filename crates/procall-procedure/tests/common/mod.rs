//! Common test utilities and mocks

#![allow(dead_code)]

use parking_lot::Mutex;
use procall_core::{
    CallConnection, CallableStatement, ProcallError, Releasable, Result, SqlType, Value,
};
use std::collections::HashMap;
use std::sync::Arc;

/// One operation performed against the mock driver
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Prepare(String),
    BindInput(usize, SqlType, Value),
    RegisterOutput(usize, SqlType),
    Execute,
    ReadOutput(usize),
    Release,
}

/// Where the mock driver should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Prepare,
    Bind,
    Register,
    Execute,
    Read,
    Release,
}

/// Mock connection for exercising the invoker without a real database.
///
/// Every operation on the connection and its statements is appended to a
/// shared log for assertions. Output slots return the configured values,
/// or NULL when unset.
pub struct MockConnection {
    pub driver: String,
    pub closed: bool,
    pub failures: Vec<FailAt>,
    pub outputs: HashMap<usize, Value>,
    pub log: Arc<Mutex<Vec<Operation>>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            driver: "mock".to_string(),
            closed: false,
            failures: Vec::new(),
            outputs: HashMap::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn failing_at(mut self, point: FailAt) -> Self {
        self.failures.push(point);
        self
    }

    pub fn with_output(mut self, index: usize, value: impl Into<Value>) -> Self {
        self.outputs.insert(index, value.into());
        self
    }

    pub fn log(&self) -> Vec<Operation> {
        self.log.lock().clone()
    }

    pub fn prepared_sql(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Prepare(sql) => Some(sql),
                _ => None,
            })
            .collect()
    }

    pub fn release_count(&self) -> usize {
        self.log()
            .iter()
            .filter(|op| matches!(op, Operation::Release))
            .count()
    }
}

impl CallConnection for MockConnection {
    fn driver_name(&self) -> &str {
        &self.driver
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn prepare_call(&self, sql: &str) -> Result<Box<dyn CallableStatement + '_>> {
        self.log.lock().push(Operation::Prepare(sql.to_string()));
        if self.failures.contains(&FailAt::Prepare) {
            return Err(ProcallError::Query("prepare failed".into()));
        }
        Ok(Box::new(MockStatement { connection: self }))
    }
}

pub struct MockStatement<'a> {
    connection: &'a MockConnection,
}

impl MockStatement<'_> {
    fn record(&self, op: Operation, point: FailAt) -> Result<()> {
        self.connection.log.lock().push(op);
        if self.connection.failures.contains(&point) {
            Err(ProcallError::Driver(format!("{:?} failed", point)))
        } else {
            Ok(())
        }
    }
}

impl Releasable for MockStatement<'_> {
    fn release(&mut self) -> Result<()> {
        self.record(Operation::Release, FailAt::Release)
    }
}

impl CallableStatement for MockStatement<'_> {
    fn bind_input(&mut self, index: usize, sql_type: SqlType, value: &Value) -> Result<()> {
        self.record(Operation::BindInput(index, sql_type, value.clone()), FailAt::Bind)
    }

    fn register_output(&mut self, index: usize, sql_type: SqlType) -> Result<()> {
        self.record(Operation::RegisterOutput(index, sql_type), FailAt::Register)
    }

    fn execute(&mut self) -> Result<()> {
        self.record(Operation::Execute, FailAt::Execute)
    }

    fn read_output(&mut self, index: usize) -> Result<Value> {
        self.record(Operation::ReadOutput(index), FailAt::Read)?;
        Ok(self
            .connection
            .outputs
            .get(&index)
            .cloned()
            .unwrap_or(Value::Null))
    }
}
