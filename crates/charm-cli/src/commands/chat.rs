//! Interactive chat REPL.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::io::Write;

use anyhow::Result;
use charm_core::chat::{ChatMessage, MessageSender};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::CliContext;
use crate::format;

const COMMANDS: [&str; 3] = ["/quit", "/history", "/help"];

/// Completion and hints for slash commands.
struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

/// What the REPL should do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Skip,
    Quit,
    History,
    Help,
    Unknown(&'a str),
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Skip,
        "/quit" | "/exit" => Input::Quit,
        "/history" => Input::History,
        "/help" => Input::Help,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        text => Input::Message(text),
    }
}

fn print_message(name: &str, message: &ChatMessage) {
    let time = message.timestamp.format("%H:%M");
    match message.sender {
        MessageSender::User => {
            println!("{} {}", format!("[{time}] you:").green(), message.content);
        }
        MessageSender::Character => {
            println!(
                "{} {}",
                format!("[{time}] {name}:").bright_magenta(),
                message.content.bright_blue()
            );
        }
    }
}

pub async fn run(ctx: &CliContext, character_id: &str) -> Result<()> {
    let chat = ctx.chat_service()?;
    let session = chat.open(character_id).await?;
    let name = session.character.name.clone();

    println!("{}", format!("=== {name} ===").bright_magenta().bold());
    if let Some(tagline) = &session.character.tagline {
        println!("{}", tagline.italic());
    }
    println!(
        "{}",
        format!(
            "{} | {}",
            session.character.creator,
            format::interactions(session.character.interactions)
        )
        .bright_black()
    );
    println!("{}", "Type a message, '/history' to replay, or '/quit' to leave.".bright_black());
    println!();

    for message in &session.messages {
        print_message(&name, message);
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to leave.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        match parse_input(&line) {
            Input::Skip => continue,
            Input::Quit => break,
            Input::Help => {
                println!("{}", COMMANDS.join("  ").bright_black());
            }
            Input::History => {
                for message in &chat.get(&session.id).await?.messages {
                    print_message(&name, message);
                }
            }
            Input::Unknown(cmd) => {
                println!("{}", format!("Unknown command {cmd}").bright_black());
            }
            Input::Message(text) => {
                let _ = rl.add_history_entry(text);

                print!("{}", format!("{name} is typing...").bright_black().italic());
                std::io::stdout().flush()?;
                let exchange = chat.send(&session.id, text).await;
                // Clear the indicator line
                print!("\r\x1b[2K");

                match exchange {
                    Ok(exchange) => print_message(&name, &exchange.reply),
                    Err(err) => eprintln!("{}", err.to_string().red()),
                }
            }
        }
    }

    chat.close(&session.id).await;
    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   "), Input::Skip);
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input(" /exit"), Input::Quit);
        assert_eq!(parse_input(" /history "), Input::History);
        assert_eq!(parse_input("/dance"), Input::Unknown("/dance"));
        assert_eq!(parse_input("  hello there "), Input::Message("hello there"));
    }

    #[test]
    fn test_bare_words_are_messages() {
        assert_eq!(parse_input("exit"), Input::Message("exit"));
        assert_eq!(parse_input("quit"), Input::Message("quit"));
    }
}
