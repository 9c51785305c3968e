use crate::context::ExecutionContext;
use crate::error::RuntimeError;
use crate::hooks::VmHooks;
use crate::value::Value;

fn addr_key(value: &Value, op: &str) -> Result<String, RuntimeError> {
    match value {
        Value::Addr(s) => Ok(s.clone()),
        _ => Err(RuntimeError::InvalidArguments(op.to_string())),
    }
}

pub fn load(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let key = addr_key(&args[0], "LOAD")?;
    let value = ctx.load_memory(&key);
    ctx.push_data(value)
}

pub fn store(ctx: &mut ExecutionContext, args: &[Value]) -> Result<(), RuntimeError> {
    let key = addr_key(&args[0], "STORE")?;
    let value = ctx.pop_data()?;
    ctx.store_memory(key, value)
}

/// Reserved file-handle opcodes; no I/O is performed in this core.
pub fn fopen(_ctx: &mut ExecutionContext, _args: &[Value]) -> Result<(), RuntimeError> {
    Ok(())
}

pub fn fread(_ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    Ok(())
}

pub fn fwrite(_ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    Ok(())
}

pub fn fclose(_ctx: &mut ExecutionContext) -> Result<(), RuntimeError> {
    Ok(())
}

fn prompt_text(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Delegates to the `llm_generate` hook. A hook failure is converted into
/// an `LLMGEN_ERROR: ...` sentinel pushed onto the data stack rather than
/// aborting execution — the only two opcodes (this and EVOLVE) with that
/// catch-and-convert behavior.
pub fn llmgen(
    ctx: &mut ExecutionContext,
    args: &[Value],
    hooks: &mut dyn VmHooks,
) -> Result<(), RuntimeError> {
    let prompt = prompt_text(&args[0]);
    match hooks.llm_generate(&prompt) {
        Ok(text) => ctx.push_data(Value::Str(text)),
        Err(e) => ctx.push_data(Value::Str(format!("LLMGEN_ERROR: {}", e))),
    }
}

/// Delegates to the `evolve` hook, with the same catch-and-convert
/// behavior as LLMGEN on hook failure.
pub fn evolve(
    ctx: &mut ExecutionContext,
    args: &[Value],
    hooks: &mut dyn VmHooks,
) -> Result<(), RuntimeError> {
    let code = prompt_text(&args[0]);
    match hooks.evolve(&code, "") {
        Ok(result) => {
            let text = match result.fixed_code {
                Some(fixed) => fixed,
                None => format!("EVOLVE_RESULT: confidence={}", result.confidence),
            };
            ctx.push_data(Value::Str(text))
        }
        Err(e) => ctx.push_data(Value::Str(format!("EVOLVE_FAILED: {}", e))),
    }
}
