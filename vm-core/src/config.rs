/// Resource bounds enforced by the fetch/dispatch loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VMConfig {
    pub max_stack_size: usize,
    pub max_memory_size: u64,
    pub max_execution_steps: u64,
    pub max_call_depth: usize,
}

impl Default for VMConfig {
    fn default() -> Self {
        VMConfig {
            max_stack_size: 1000,
            max_memory_size: 10_000,
            max_execution_steps: 100_000,
            max_call_depth: 100,
        }
    }
}
