use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::value::Value;

fn pop_int(ctx: &mut ExecutionContext, op: &str) -> Result<i64, RuntimeError> {
    ctx.pop_data()?
        .as_int()
        .ok_or_else(|| RuntimeError::TypeMismatch { op: op.to_string() })
}

fn binary(
    ctx: &mut ExecutionContext,
    op: &str,
    f: impl FnOnce(i64, i64) -> Result<i64, RuntimeError>,
) -> Result<(), RuntimeError> {
    let b = pop_int(ctx, op)?;
    let a = pop_int(ctx, op)?;
    let result = f(a, b)?;
    ctx.push_data(Value::Int(result))
}

pub fn add(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "ADD", |a, b| Ok(a.wrapping_add(b)))
}

pub fn sub(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "SUB", |a, b| Ok(a.wrapping_sub(b)))
}

pub fn mul(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "MUL", |a, b| Ok(a.wrapping_mul(b)))
}

pub fn div(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "DIV", |a, b| {
        if b == 0 {
            Err(RuntimeError::DivisionByZero)
        } else {
            Ok(a.wrapping_div(b))
        }
    })
}

pub fn and(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "AND", |a, b| Ok(a & b))
}

pub fn or(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "OR", |a, b| Ok(a | b))
}

pub fn xor(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    binary(ctx, "XOR", |a, b| Ok(a ^ b))
}

pub fn not(ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    let a = pop_int(ctx, "NOT")?;
    ctx.push_data(Value::Int(!a))
}
