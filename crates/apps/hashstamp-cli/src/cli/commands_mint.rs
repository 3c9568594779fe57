use anyhow::Result;
use hashstamp::{Minter, SearchLimit};
use serde_json::json;
use std::time::{Duration, Instant};

use crate::cli::app::{MintCommand, Outcome, RuntimeContext};

pub fn run(ctx: &RuntimeContext, command: &MintCommand) -> Result<Outcome> {
    let bits = command.bits.unwrap_or(ctx.config.mint.bits);
    let limit = SearchLimit {
        max_attempts: command.max_attempts,
        // An unrepresentable deadline is no deadline at all.
        deadline: command
            .timeout_secs
            .and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs))),
        cancel: None,
    };

    let minted = Minter::system().mint_stamp(bits, &command.resource, &limit)?;
    let stamp = minted.stamp.encode();

    if ctx.output.json {
        ctx.output.emit_json(&json!({
            "stamp": stamp,
            "bits": bits,
            "attempts": minted.attempts,
        }))?;
    } else {
        ctx.output.emit_line(&stamp);
    }
    Ok(Outcome::Success)
}
