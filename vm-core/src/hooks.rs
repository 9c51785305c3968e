/// Result of an `evolve` hook invocation. Shape only: the evolution engine
/// itself lives outside this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolutionResult {
    pub success: bool,
    pub fixed_code: Option<String>,
    pub confidence: f32,
}

/// The two external collaborators the LLMGEN and EVOLVE opcodes delegate
/// to. Implementations are supplied by the embedding application at VM
/// construction time — never as global/singleton state, so that multiple
/// VMs can run with different hooks (or in tests, with recording doubles)
/// without sharing process-wide mutable state.
pub trait VmHooks {
    fn llm_generate(&mut self, prompt: &str) -> Result<String, String>;
    fn evolve(&mut self, code: &str, error: &str) -> Result<EvolutionResult, String>;
}

/// The default hook implementation: every call reports unavailable. Used
/// by standalone core usage and by the facade when no real LLM client is
/// wired in. LLMGEN/EVOLVE turn this `Err` into a stack sentinel rather
/// than aborting execution.
#[derive(Default)]
pub struct NullHooks;

impl VmHooks for NullHooks {
    fn llm_generate(&mut self, _prompt: &str) -> Result<String, String> {
        Err("no LLM client configured".to_string())
    }

    fn evolve(&mut self, _code: &str, _error: &str) -> Result<EvolutionResult, String> {
        Err("no evolution engine configured".to_string())
    }
}
