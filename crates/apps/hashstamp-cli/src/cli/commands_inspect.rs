use anyhow::Result;
use hashstamp::{digest_value, Stamp};

use crate::cli::app::{InspectCommand, Outcome, RuntimeContext};

pub fn run(ctx: &RuntimeContext, command: &InspectCommand) -> Result<Outcome> {
    let stamp = Stamp::decode(&command.stamp)?;
    let fields = [
        ("version", stamp.version().to_string()),
        ("bits", stamp.bits().to_string()),
        ("date", stamp.date().to_string()),
        ("issued", stamp.issued_on().to_string()),
        ("resource", stamp.resource().to_string()),
        ("rand", stamp.rand().to_string()),
        ("counter", stamp.counter().to_string()),
        ("value", digest_value(&command.stamp).to_string()),
    ];
    ctx.output.emit_fields("stamp", &fields)?;
    Ok(Outcome::Success)
}
