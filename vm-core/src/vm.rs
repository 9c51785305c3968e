use crate::config::VMConfig;
use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::hooks::{NullHooks, VmHooks};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operand::Operand;
use crate::program::Program;
use crate::state::{VMState, VmSnapshot};
use crate::value::Value;

/// The stack machine. Owns its state, its resource bounds, the program
/// currently loaded, and the hook implementation LLMGEN/EVOLVE delegate
/// to. Hooks are an instance field, never global state, so independent
/// `Vm`s never share mutable runtime collaborators.
pub struct Vm {
    config: VMConfig,
    state: VMState,
    program: Option<Program>,
    hooks: Box<dyn VmHooks>,
    evolution_history: Vec<String>,
}

impl Vm {
    pub fn new(config: VMConfig) -> Self {
        Vm {
            config,
            state: VMState::default(),
            program: None,
            hooks: Box::new(NullHooks),
            evolution_history: Vec::new(),
        }
    }

    pub fn with_hooks(config: VMConfig, hooks: Box<dyn VmHooks>) -> Self {
        Vm {
            config,
            state: VMState::default(),
            program: None,
            hooks,
            evolution_history: Vec::new(),
        }
    }

    pub fn config(&self) -> &VMConfig {
        &self.config
    }

    /// Validates every instruction's opcode against the table and installs
    /// the program. Does not start execution.
    pub fn load_program(&mut self, program: Program) -> Result<(), RuntimeError> {
        for instruction in &program.instructions {
            if Opcode::from_name(&instruction.opcode).is_none() {
                return Err(RuntimeError::UnknownOpcode(instruction.opcode.clone()));
            }
        }
        self.program = Some(program);
        self.state.program_counter = 0;
        self.state.running = false;
        self.state.error_state = None;
        Ok(())
    }

    /// Loads and runs a program to completion (halt or error).
    pub fn execute(&mut self, program: Program) -> Result<(), RuntimeError> {
        self.load_program(program)?;
        self.state.running = true;
        self.run_loop()
    }

    fn run_loop(&mut self) -> Result<(), RuntimeError> {
        loop {
            let program = self.program.as_ref().expect("run_loop without a loaded program");
            let pc = self.state.program_counter;
            if !self.state.running {
                break;
            }
            if pc < 0 || pc as usize >= program.len() {
                self.state.running = false;
                break;
            }

            let instruction = program.instruction_at(pc as usize).unwrap().clone();
            if instruction.opcode == "HALT" {
                self.state.running = false;
                break;
            }

            self.state.execution_steps += 1;
            if self.state.execution_steps >= self.config.max_execution_steps {
                let err = RuntimeError::StepsExceeded(self.config.max_execution_steps);
                return self.fail(err);
            }

            log::debug!("executing: {}", instruction);
            if let Err(err) = self.dispatch(&instruction) {
                return self.fail(err);
            }
            self.state.program_counter += 1;
        }
        Ok(())
    }

    /// Executes a single already-parsed instruction against the current
    /// state, without requiring a loaded program. Used for one-shot
    /// single-instruction execution by the interpreter facade.
    pub fn execute_instruction(&mut self, instruction: Instruction) -> Result<(), RuntimeError> {
        if Opcode::from_name(&instruction.opcode).is_none() {
            return Err(RuntimeError::UnknownOpcode(instruction.opcode.clone()));
        }
        if instruction.opcode == "HALT" {
            self.state.running = false;
            return Ok(());
        }
        self.state.execution_steps += 1;
        if self.state.execution_steps >= self.config.max_execution_steps {
            let err = RuntimeError::StepsExceeded(self.config.max_execution_steps);
            return self.fail(err);
        }
        if let Err(err) = self.dispatch(&instruction) {
            return self.fail(err);
        }
        Ok(())
    }

    fn fail(&mut self, err: RuntimeError) -> Result<(), RuntimeError> {
        log::error!("runtime error: {}", err);
        self.state.error_state = Some(err.to_string());
        self.state.running = false;
        Err(err)
    }

    fn dispatch(&mut self, instruction: &Instruction) -> Result<(), RuntimeError> {
        let opcode = Opcode::from_name(&instruction.opcode)
            .ok_or_else(|| RuntimeError::UnknownOpcode(instruction.opcode.clone()))?;

        let args = self.resolve_operands(&instruction.operands, self.program.as_ref())?;

        if !opcode.validate_args(&args) {
            return Err(RuntimeError::InvalidArguments(opcode.name().to_string()));
        }

        let mut ctx = ExecutionContext::new(
            &mut self.state.data_stack,
            &mut self.state.control_stack,
            &mut self.state.memory,
            &mut self.state.registers,
            &mut self.state.program_counter,
            &mut self.state.memory_usage,
            &self.config,
        );

        let result = crate::opcodes::execute(opcode, &mut ctx, &args, self.hooks.as_mut());

        if opcode == Opcode::Evolve {
            if let Ok(()) = &result {
                if let Some(Value::Str(s)) = self.state.data_stack.last() {
                    self.evolution_history.push(s.clone());
                }
            }
        }

        result
    }

    fn resolve_operands(
        &self,
        operands: &[Operand],
        program: Option<&Program>,
    ) -> Result<Vec<Value>, RuntimeError> {
        operands
            .iter()
            .map(|operand| self.resolve_operand(operand, program))
            .collect()
    }

    fn resolve_operand(
        &self,
        operand: &Operand,
        program: Option<&Program>,
    ) -> Result<Value, RuntimeError> {
        match operand {
            Operand::Immediate(i) => Ok(Value::Int(*i)),
            Operand::Register(n) => {
                let key = format!("r{}", n);
                Ok(self.state.registers.get(&key).cloned().unwrap_or(Value::Int(0)))
            }
            Operand::Address(addr) => Ok(Value::Addr(addr.clone())),
            Operand::StringLiteral(s) => Ok(Value::Str(s.clone())),
            Operand::LabelRef(name) => {
                let index = program
                    .and_then(|p| p.get_label(name))
                    .ok_or_else(|| RuntimeError::UndefinedLabel(name.clone()))?;
                Ok(Value::Index(index as i64))
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = VMState::default();
        self.program = None;
        self.evolution_history.clear();
    }

    pub fn dump_state(&self) -> VmSnapshot {
        VmSnapshot {
            data_stack: self.state.data_stack.clone(),
            control_stack: self.state.control_stack.clone(),
            memory: self.state.memory.clone(),
            registers: self.state.registers.clone(),
            program_counter: self.state.program_counter,
            running: self.state.running,
            error_state: self.state.error_state.clone(),
            execution_steps: self.state.execution_steps,
            memory_usage: self.state.memory_usage,
            max_stack_size: self.config.max_stack_size,
            max_memory_size: self.config.max_memory_size,
            max_execution_steps: self.config.max_execution_steps,
            max_call_depth: self.config.max_call_depth,
        }
    }

    pub fn evolution_history(&self) -> &[String] {
        &self.evolution_history
    }

    /// Seeds a register's value for callers that want constant input slots
    /// visible to a program before `execute` runs. No opcode writes a
    /// register in this instruction set.
    pub fn set_register(&mut self, index: u32, value: Value) {
        self.state.registers.insert(format!("r{}", index), value);
    }
}
