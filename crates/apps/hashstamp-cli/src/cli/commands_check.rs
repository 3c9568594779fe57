use anyhow::Result;
use hashstamp::{ValidationPolicy, Validator};
use serde_json::json;

use crate::cli::app::{CheckCommand, Outcome, RuntimeContext};

pub fn run(ctx: &RuntimeContext, command: &CheckCommand) -> Result<Outcome> {
    let policy = ValidationPolicy::new(
        command.bits.unwrap_or(ctx.config.check.bits),
        command.resource.as_str(),
        command.expiry_days.unwrap_or(ctx.config.check.expiry_days),
    );

    match Validator::system().check(&policy, &command.stamp) {
        Ok(_) => {
            emit(ctx, true, None)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            emit(ctx, false, Some(err.to_string()))?;
            Ok(Outcome::Rejected)
        }
    }
}

fn emit(ctx: &RuntimeContext, valid: bool, reason: Option<String>) -> Result<()> {
    if ctx.output.json {
        return ctx.output.emit_json(&json!({"valid": valid, "reason": reason}));
    }
    match reason {
        Some(reason) => ctx.output.emit_line(format!("invalid: {reason}")),
        None => ctx.output.emit_line("valid"),
    }
    Ok(())
}
