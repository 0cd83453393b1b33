use anyhow::Result;
use charm_core::catalog::CatalogFilter;
use charm_core::category::{Category, split_nav};
use colored::Colorize;

use super::CliContext;
use crate::format;

/// Categories shown before the "more" group, as in the nav bar.
const NAV_LIMIT: usize = 7;

pub async fn list(ctx: &CliContext, category: Option<String>, query: Option<String>) -> Result<()> {
    let filter = CatalogFilter { category, query };
    let characters = ctx.catalog.list(&filter).await?;

    if ctx.print_json(&characters)? {
        return Ok(());
    }
    if characters.is_empty() {
        println!("{}", "No characters found".yellow());
        return Ok(());
    }
    for character in &characters {
        println!("{}", format::character_row(character));
    }
    Ok(())
}

pub async fn show(ctx: &CliContext, id: &str) -> Result<()> {
    let character = ctx.catalog.get(id).await?;
    if !ctx.print_json(&character)? {
        println!("{}", format::character_detail(&character));
    }
    Ok(())
}

pub fn categories(ctx: &CliContext) -> Result<()> {
    if ctx.print_json(&ctx.catalog.categories())? {
        return Ok(());
    }

    let (visible, more) = split_nav(NAV_LIMIT);
    println!("{} {}", "All".bold(), join_names(&visible));
    if !more.is_empty() {
        println!("{} {}", "more:".bright_black(), join_names(&more));
    }
    Ok(())
}

fn join_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
