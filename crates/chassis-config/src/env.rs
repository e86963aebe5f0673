use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Placeholder grammar: `{{ env.NAME }}` or `{{ env.NAME | default("value") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern must be valid")
    })
}

/// Expand environment placeholders in raw TOML text
///
/// Comment lines pass through untouched. A placeholder without a default
/// errors when the variable is unset; with a default, the default is used
/// instead. Expansion happens before deserialization, so config structs use
/// plain values.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut expanded = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            expanded.push(line.to_owned());
            continue;
        }

        let mut missing: Option<String> = None;
        let replaced = placeholder().replace_all(line, |caps: &Captures<'_>| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| {
                caps.get(2).map_or_else(
                    || {
                        missing = Some(name.to_owned());
                        String::new()
                    },
                    |default| default.as_str().to_owned(),
                )
            })
        });

        if let Some(name) = missing {
            anyhow::bail!("environment variable not found: `{name}`");
        }

        expanded.push(replaced.into_owned());
    }

    let mut output = expanded.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
