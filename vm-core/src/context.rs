use std::collections::HashMap;

use crate::config::VMConfig;
use crate::error::RuntimeError;
use crate::value::Value;

/// The mutable view an opcode operates on during a single dispatch. It
/// borrows the few fields of `VMState` an opcode can touch rather than
/// exposing the whole VM, and it is the single place resource accounting
/// happens — every push or memory store goes through one of these methods,
/// so there is exactly one code path that can violate a configured bound.
pub struct ExecutionContext<'a> {
    pub data_stack: &'a mut Vec<Value>,
    pub control_stack: &'a mut Vec<i64>,
    pub memory: &'a mut HashMap<String, Value>,
    pub registers: &'a mut HashMap<String, Value>,
    pub program_counter: &'a mut i64,
    memory_usage: &'a mut u64,
    config: &'a VMConfig,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        data_stack: &'a mut Vec<Value>,
        control_stack: &'a mut Vec<i64>,
        memory: &'a mut HashMap<String, Value>,
        registers: &'a mut HashMap<String, Value>,
        program_counter: &'a mut i64,
        memory_usage: &'a mut u64,
        config: &'a VMConfig,
    ) -> Self {
        ExecutionContext {
            data_stack,
            control_stack,
            memory,
            registers,
            program_counter,
            memory_usage,
            config,
        }
    }

    pub fn push_data(&mut self, value: Value) -> Result<(), RuntimeError> {
        if self.data_stack.len() >= self.config.max_stack_size {
            return Err(RuntimeError::DataStackOverflow);
        }
        *self.memory_usage += value.memory_cost();
        if *self.memory_usage > self.config.max_memory_size {
            *self.memory_usage -= value.memory_cost();
            return Err(RuntimeError::MemoryExceeded(self.config.max_memory_size));
        }
        self.data_stack.push(value);
        Ok(())
    }

    pub fn pop_data(&mut self) -> Result<Value, RuntimeError> {
        let value = self.data_stack.pop().ok_or(RuntimeError::DataStackUnderflow)?;
        *self.memory_usage = self.memory_usage.saturating_sub(value.memory_cost());
        Ok(value)
    }

    pub fn peek_data(&self) -> Result<&Value, RuntimeError> {
        self.data_stack.last().ok_or(RuntimeError::DataStackEmpty)
    }

    /// Empties the data stack, crediting back every cleared value's cost.
    pub fn clear_data(&mut self) {
        for value in self.data_stack.drain(..) {
            *self.memory_usage = self.memory_usage.saturating_sub(value.memory_cost());
        }
    }

    pub fn push_control(&mut self, addr: i64) -> Result<(), RuntimeError> {
        if self.control_stack.len() >= self.config.max_stack_size {
            return Err(RuntimeError::ControlStackOverflow);
        }
        if self.control_stack.len() >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded(self.config.max_call_depth));
        }
        self.control_stack.push(addr);
        Ok(())
    }

    pub fn pop_control(&mut self) -> Result<i64, RuntimeError> {
        self.control_stack.pop().ok_or(RuntimeError::ControlStackUnderflow)
    }

    pub fn store_memory(&mut self, addr: String, value: Value) -> Result<(), RuntimeError> {
        let new_cost = value.memory_cost();
        let old_cost = self.memory.get(&addr).map(Value::memory_cost).unwrap_or(0);
        if new_cost > old_cost {
            let delta = new_cost - old_cost;
            if *self.memory_usage + delta > self.config.max_memory_size {
                return Err(RuntimeError::MemoryExceeded(self.config.max_memory_size));
            }
            *self.memory_usage += delta;
        } else {
            *self.memory_usage = self.memory_usage.saturating_sub(old_cost - new_cost);
        }
        self.memory.insert(addr, value);
        Ok(())
    }

    pub fn load_memory(&self, addr: &str) -> Value {
        self.memory.get(addr).cloned().unwrap_or(Value::Int(0))
    }

    pub fn memory_usage(&self) -> u64 {
        *self.memory_usage
    }

    pub fn max_memory_size(&self) -> u64 {
        self.config.max_memory_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn push_then_pop_leaves_memory_usage_at_zero() {
        let mut data = Vec::new();
        let mut control = Vec::new();
        let mut memory = HashMap::new();
        let mut registers = HashMap::new();
        let mut pc = 0i64;
        let mut usage = 0u64;
        let config = VMConfig::default();
        let mut ctx = ExecutionContext::new(
            &mut data, &mut control, &mut memory, &mut registers, &mut pc, &mut usage, &config,
        );

        ctx.push_data(Value::Str("hello".to_string())).unwrap();
        assert_eq!(ctx.memory_usage(), 64);
        ctx.pop_data().unwrap();
        assert_eq!(ctx.memory_usage(), 0);
    }

    #[test]
    fn push_past_max_stack_size_overflows() {
        let mut data = Vec::new();
        let mut control = Vec::new();
        let mut memory = HashMap::new();
        let mut registers = HashMap::new();
        let mut pc = 0i64;
        let mut usage = 0u64;
        let config = VMConfig {
            max_stack_size: 1,
            ..VMConfig::default()
        };
        let mut ctx = ExecutionContext::new(
            &mut data, &mut control, &mut memory, &mut registers, &mut pc, &mut usage, &config,
        );
        ctx.push_data(Value::Int(1)).unwrap();
        assert_eq!(ctx.push_data(Value::Int(2)), Err(RuntimeError::DataStackOverflow));
    }
}
