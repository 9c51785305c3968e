use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::value::Value;

fn target(args: &[Value], op: &str) -> Result<i64, RuntimeError> {
    args[0]
        .as_int()
        .ok_or_else(|| RuntimeError::TypeMismatch { op: op.to_string() })
}

/// Jump targets are written as `target - 1`: the fetch loop unconditionally
/// advances the program counter by one after every dispatch, so landing
/// exactly on `target` next iteration requires backing up by one here.
fn jump_to(ctx: &mut ExecutionContext, target: i64) {
    *ctx.program_counter = target - 1;
}

pub fn jmp(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let t = target(args, "JMP")?;
    jump_to(ctx, t);
    Ok(())
}

pub fn jz(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let top = ctx.peek_data()?.as_int().ok_or_else(|| RuntimeError::TypeMismatch {
        op: "JZ".to_string(),
    })?;
    if top == 0 {
        let t = target(args, "JZ")?;
        jump_to(ctx, t);
    }
    Ok(())
}

pub fn jnz(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let top = ctx.peek_data()?.as_int().ok_or_else(|| RuntimeError::TypeMismatch {
        op: "JNZ".to_string(),
    })?;
    if top != 0 {
        let t = target(args, "JNZ")?;
        jump_to(ctx, t);
    }
    Ok(())
}

pub fn call(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let t = target(args, "CALL")?;
    let return_addr = *ctx.program_counter + 1;
    ctx.push_control(return_addr)?;
    jump_to(ctx, t);
    Ok(())
}

pub fn ret(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    let addr = ctx.pop_control()?;
    jump_to(ctx, addr);
    Ok(())
}

/// Reserved for future concurrency; validated but has no observable effect.
pub fn fork(_ctx: &mut ExecutionContext, _args: &[Value]) -> Result<(), RuntimeError> {
    Ok(())
}

/// Reserved for future concurrency; validated but has no observable effect.
pub fn join(_ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    Ok(())
}
