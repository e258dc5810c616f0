use griddle_core::driver::{Connection, RowSet};
use griddle_core::stmt::{TypedValue, Value};
use griddle_core::Result;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One logged statement execution: the SQL template, the parameter type
/// codes, and the parameter values, in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecEntry {
    pub sql: String,
    pub types: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Default)]
struct State {
    log: Vec<ExecEntry>,
    results: VecDeque<RowSet>,
    affected: VecDeque<u64>,
    insert_id: u64,
}

/// A scripted connection for driver-free tests.
///
/// Row-returning statements pop from the scripted result queue; an empty
/// queue yields an empty result. Mutating statements pop a scripted
/// affected count, defaulting to 1. Every execution is logged. Cloning
/// shares the state, so a test keeps a handle while the connection itself
/// is owned by a registry or passed as `&mut dyn Connection`.
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    state: Arc<Mutex<State>>,
}

impl MockConnection {
    pub fn new() -> MockConnection {
        MockConnection::default()
    }

    /// Queues a result set for the next row-returning statement.
    pub fn push_result(&self, rows: RowSet) {
        self.state.lock().unwrap().results.push_back(rows);
    }

    /// Queues an affected count for the next mutating statement.
    pub fn push_affected(&self, count: u64) {
        self.state.lock().unwrap().affected.push_back(count);
    }

    /// Sets the id reported for generated keys.
    pub fn set_insert_id(&self, id: u64) {
        self.state.lock().unwrap().insert_id = id;
    }

    /// Returns a copy of the execution log.
    pub fn log(&self) -> Vec<ExecEntry> {
        self.state.lock().unwrap().log.clone()
    }

    /// Returns the most recent execution.
    pub fn last(&self) -> Option<ExecEntry> {
        self.state.lock().unwrap().log.last().cloned()
    }

    fn record(&self, sql: &str, params: &[TypedValue]) {
        self.state.lock().unwrap().log.push(ExecEntry {
            sql: sql.to_string(),
            types: params.iter().map(|param| param.ty.code()).collect(),
            params: params.iter().map(|param| param.value.clone()).collect(),
        });
    }
}

impl Connection for MockConnection {
    fn query(&mut self, sql: &str, params: &[TypedValue]) -> Result<RowSet> {
        self.record(sql, params);
        Ok(self
            .state
            .lock()
            .unwrap()
            .results
            .pop_front()
            .unwrap_or_default())
    }

    fn execute(&mut self, sql: &str, params: &[TypedValue]) -> Result<u64> {
        self.record(sql, params);
        Ok(self.state.lock().unwrap().affected.pop_front().unwrap_or(1))
    }

    fn last_insert_id(&mut self) -> Result<u64> {
        Ok(self.state.lock().unwrap().insert_id)
    }
}
