use anyhow::Result;
use charm_core::mock::{MockKind, MockQuery};
use colored::Colorize;

use super::CliContext;
use crate::format;

pub fn run(ctx: &CliContext, count: Option<usize>, category: Option<String>) -> Result<()> {
    let unknown = category
        .as_deref()
        .filter(|name| !name.trim().is_empty() && MockKind::parse(name).is_none());
    if let Some(name) = unknown {
        let kinds: Vec<&str> = MockKind::ALL.iter().map(MockKind::as_str).collect();
        tracing::warn!(kind = name, "Unknown mock kind");
        eprintln!(
            "{} {}",
            format!("Unknown kind '{name}'. Known kinds:").yellow(),
            kinds.join(", ")
        );
    }

    let characters = ctx.mock_service().list(&MockQuery { count, category })?;
    if !ctx.print_json(&characters)? {
        for character in &characters {
            println!("{}", format::mock_row(character));
        }
    }
    Ok(())
}
