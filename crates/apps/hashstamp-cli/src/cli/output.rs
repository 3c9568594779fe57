use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serde_json::{Map, Value};

/// Where command results go: pretty JSON with `--json`, plain text
/// otherwise, nothing with `--quiet`.
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Always JSON; callers pick this branch only when `json` is set.
    pub fn emit_json<T: Serialize>(&self, value: &T) -> Result<()> {
        if !self.quiet {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    pub fn emit_line(&self, line: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", line.as_ref());
        }
    }

    /// A titled field table, or a flat JSON object of string values.
    pub fn emit_fields(&self, title: &str, fields: &[(&str, String)]) -> Result<()> {
        if self.json {
            let object: Map<String, Value> = fields
                .iter()
                .map(|(name, value)| (name.to_string(), Value::String(value.clone())))
                .collect();
            return self.emit_json(&object);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(["field", "value"]);
        for (name, value) in fields {
            table.add_row([*name, value.as_str()]);
        }
        self.emit_line(format!("{title}\n{table}"));
        Ok(())
    }
}
