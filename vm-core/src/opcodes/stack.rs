use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::value::Value;

pub fn push(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    ctx.push_data(args[0].clone())
}

pub fn pop(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    ctx.pop_data()?;
    Ok(())
}

pub fn dup(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    let top = ctx.peek_data()?.clone();
    ctx.push_data(top)
}

fn require(ctx: &ExecutionContext, n: usize, op: &str) -> Result<(), RuntimeError> {
    if ctx.data_stack.len() < n {
        return Err(RuntimeError::NotEnoughValues { op: op.to_string(), needed: n });
    }
    Ok(())
}

pub fn swap(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    require(ctx, 2, "swap")?;
    let b = ctx.pop_data()?;
    let a = ctx.pop_data()?;
    ctx.push_data(b)?;
    ctx.push_data(a)
}

/// Rotates the top three values: `a, b, c` (`c` on top) becomes
/// `c, a, b` (`b` on top) — the top value drops to the bottom of the
/// three and the other two shift up to make room.
pub fn rot(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    require(ctx, 3, "rotate")?;
    let c = ctx.pop_data()?;
    let b = ctx.pop_data()?;
    let a = ctx.pop_data()?;
    ctx.push_data(c)?;
    ctx.push_data(a)?;
    ctx.push_data(b)
}

pub fn over(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    require(ctx, 2, "over")?;
    let b = ctx.pop_data()?;
    let a = ctx.pop_data()?;
    ctx.push_data(a.clone())?;
    ctx.push_data(b)?;
    ctx.push_data(a)
}

pub fn drop(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    ctx.pop_data()?;
    Ok(())
}

pub fn clear(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    ctx.clear_data();
    Ok(())
}
