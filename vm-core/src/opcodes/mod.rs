mod arithmetic;
mod control;
mod memio;
mod stack;

use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::hooks::VmHooks;
use crate::opcode::Opcode;
use crate::value::Value;

/// Dispatches one already-validated instruction. `args` are the resolved
/// operand values (see `Vm::resolve_operand`), in source order. HALT is
/// intercepted by the fetch loop before this is ever called; it is matched
/// here only so the table stays total over the enum.
pub fn execute(
    op: Opcode,
    ctx: &mut ExecutionContext,
    args: &[Value],
    hooks: &mut dyn VmHooks,
) -> Result<(), RuntimeError> {
    match op {
        Opcode::Push => stack::push(ctx, args),
        Opcode::Pop => stack::pop(ctx),
        Opcode::Dup => stack::dup(ctx),
        Opcode::Swap => stack::swap(ctx),
        Opcode::Rot => stack::rot(ctx),
        Opcode::Over => stack::over(ctx),
        Opcode::Drop => stack::drop(ctx),
        Opcode::Clear => stack::clear(ctx),

        Opcode::Add => arithmetic::add(ctx),
        Opcode::Sub => arithmetic::sub(ctx),
        Opcode::Mul => arithmetic::mul(ctx),
        Opcode::Div => arithmetic::div(ctx),
        Opcode::And => arithmetic::and(ctx),
        Opcode::Or => arithmetic::or(ctx),
        Opcode::Xor => arithmetic::xor(ctx),
        Opcode::Not => arithmetic::not(ctx),

        Opcode::Jmp => control::jmp(ctx, args),
        Opcode::Jz => control::jz(ctx, args),
        Opcode::Jnz => control::jnz(ctx, args),
        Opcode::Call => control::call(ctx, args),
        Opcode::Ret => control::ret(ctx),
        Opcode::Fork => control::fork(ctx, args),
        Opcode::Join => control::join(ctx),
        Opcode::Halt => Ok(()),

        Opcode::Load => memio::load(ctx, args),
        Opcode::Store => memio::store(ctx, args),
        Opcode::Fopen => memio::fopen(ctx, args),
        Opcode::Fread => memio::fread(ctx),
        Opcode::Fwrite => memio::fwrite(ctx),
        Opcode::Fclose => memio::fclose(ctx),
        Opcode::Llmgen => memio::llmgen(ctx, args, hooks),
        Opcode::Evolve => memio::evolve(ctx, args, hooks),
    }
}
