use std::collections::HashMap;

use crate::value::Value;

/// The VM's mutable runtime state. Cheap to reset: `VMState::default()`
/// plus a fresh `VMConfig` is exactly what `reset()` installs.
#[derive(Debug, Default)]
pub struct VMState {
    pub data_stack: Vec<Value>,
    pub control_stack: Vec<i64>,
    pub memory: HashMap<String, Value>,
    pub registers: HashMap<String, Value>,
    pub program_counter: i64,
    pub running: bool,
    pub error_state: Option<String>,
    pub execution_steps: u64,
    pub memory_usage: u64,
}

/// A point-in-time, read-only copy of `VMState` returned by `dump_state`.
/// Includes the config bounds alongside the counters so a caller can judge
/// how close a run came to its limits without holding a reference into the
/// live VM.
#[derive(Debug, Clone, PartialEq)]
pub struct VmSnapshot {
    pub data_stack: Vec<Value>,
    pub control_stack: Vec<i64>,
    pub memory: HashMap<String, Value>,
    pub registers: HashMap<String, Value>,
    pub program_counter: i64,
    pub running: bool,
    pub error_state: Option<String>,
    pub execution_steps: u64,
    pub memory_usage: u64,
    pub max_stack_size: usize,
    pub max_memory_size: u64,
    pub max_execution_steps: u64,
    pub max_call_depth: usize,
}
