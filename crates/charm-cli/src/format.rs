//! Text rendering for catalog and mock output.

use charm_core::character::{Character, Visibility};
use charm_core::mock::{MockCharacter, group_thousands};
use colored::Colorize;

/// `75000` → `75,000 chats`
pub fn interactions(count: u64) -> String {
    format!("{} chats", group_thousands(count))
}

/// One catalog row: id, name, category and interaction count.
pub fn character_row(character: &Character) -> String {
    format!(
        "{:<12} {:<24} {:<14} {}",
        character.id.bright_black(),
        character.name.bold(),
        character.category.as_deref().unwrap_or("-").cyan(),
        interactions(character.interactions)
    )
}

/// Multi-line detail view.
pub fn character_detail(character: &Character) -> String {
    let title = if character.is_user_created() {
        format!("{} {}", character.name.bold().bright_magenta(), "(yours)".green())
    } else {
        format!("{}", character.name.bold().bright_magenta())
    };
    let mut lines = vec![
        title,
        format!("  {} {}", "id:".bright_black(), character.id),
    ];
    if let Some(tagline) = &character.tagline {
        lines.push(format!("  {}", tagline.italic()));
    }
    lines.push(format!("  {}", character.description));
    lines.push(format!(
        "  {} {}",
        "category:".bright_black(),
        character.category.as_deref().unwrap_or("-")
    ));
    lines.push(format!("  {} {}", "by:".bright_black(), character.creator));
    lines.push(format!("  {} {}", "avatar:".bright_black(), character.image_url));
    lines.push(format!(
        "  {} {}",
        "interactions:".bright_black(),
        interactions(character.interactions)
    ));
    if character.visibility == Visibility::Private {
        lines.push(format!("  {}", "private".yellow()));
    }
    if let Some(greeting) = &character.greeting {
        lines.push(format!("  {} {}", "greeting:".bright_black(), greeting));
    }
    lines.join("\n")
}

/// One mock row: id, kind, name, then the kind-specific attributes.
pub fn mock_row(character: &MockCharacter) -> String {
    let attributes: Vec<String> = character
        .attributes
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(text) => format!("{key}={text}"),
            None => format!("{key}={value}"),
        })
        .collect();
    format!(
        "{:>3} {:<10} {:<22} {}",
        character.id,
        character.kind.as_str().cyan(),
        character.name.bold(),
        attributes.join(", ").bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::character::default_characters;

    #[test]
    fn test_interactions_grouping() {
        assert_eq!(interactions(0), "0 chats");
        assert_eq!(interactions(75_000), "75,000 chats");
        assert_eq!(interactions(1_250_000), "1,250,000 chats");
    }

    #[test]
    fn test_rows_mention_key_fields() {
        colored::control::set_override(false);
        let rock = default_characters()
            .into_iter()
            .find(|c| c.id == "2")
            .unwrap();

        let row = character_row(&rock);
        assert!(row.contains("The Rock"));
        assert!(row.contains("Entertainment"));
        assert!(row.contains("250,000 chats"));

        let detail = character_detail(&rock);
        assert!(detail.contains("WWE Team"));
        assert!(detail.contains("greeting:"));
        assert!(!detail.contains("private"));
        assert!(!detail.contains("(yours)"));
    }

    #[test]
    fn test_detail_marks_user_characters() {
        colored::control::set_override(false);
        let mine = charm_core::character::CreateCharacterRequest {
            name: "Quiz Bot".to_string(),
            description: "Asks questions".to_string(),
            category: "Riddles".to_string(),
            visibility: Visibility::Private,
            ..Default::default()
        }
        .into_character();

        let detail = character_detail(&mine);
        assert!(detail.starts_with("Quiz Bot (yours)"));
        assert!(detail.contains("private"));
        assert!(detail.contains("0 chats"));
    }
}
