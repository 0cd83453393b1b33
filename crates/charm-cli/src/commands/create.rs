use anyhow::Result;
use charm_core::category::creation_categories;
use charm_core::character::{CreateCharacterRequest, Visibility};
use colored::Colorize;

use super::CliContext;
use crate::format;

pub fn request(
    name: String,
    description: String,
    category: String,
    greeting: String,
    tagline: String,
    private: bool,
    image_url: Option<String>,
) -> CreateCharacterRequest {
    CreateCharacterRequest {
        name,
        tagline,
        greeting,
        description,
        visibility: if private {
            Visibility::Private
        } else {
            Visibility::Public
        },
        category,
        image_url,
    }
}

pub async fn run(ctx: &CliContext, request: CreateCharacterRequest) -> Result<()> {
    let character = match ctx.characters.create(request).await {
        Ok(character) => character,
        Err(err) if err.is_validation() => {
            eprintln!("{}", err.to_string().red());
            eprintln!(
                "{} {}",
                "Categories:".bright_black(),
                creation_categories().join(", ")
            );
            anyhow::bail!("character was not created");
        }
        Err(err) => return Err(err.into()),
    };

    if !ctx.print_json(&character)? {
        println!("{}", "Character created".bright_green());
        println!("{}", format::character_detail(&character));
    }
    Ok(())
}
