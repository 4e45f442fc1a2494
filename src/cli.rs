//! CLI interface for the legal guide.
//!
//! With no subcommand the interactive TUI starts. Subcommands are for
//! scripting and quick lookups: arguments in, text or JSON out.
//!
//! - `legalguide categories|actions|roadmap` browse the catalog.
//! - `legalguide chat` runs the intake assistant over stdin/stdout.
//! - `legalguide ask` gets one follow-up tip for an action.

mod format;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use serde::Serialize;
use tracing::info;

use crate::catalog;
use crate::config::Config;
use crate::conversation::{AdvisorChat, Conversation, InputError};
use crate::model::{ActionId, CategoryId, ChatMessage, RoadmapTemplate};
use crate::render::{self, RenderSink, TextSink};
use crate::{logging, tui};

use format::{format_action, format_category};

/// Legal guide: step-by-step roadmaps for common legal processes.
#[derive(Debug, Parser)]
#[command(name = "legalguide", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

const WORKFLOW_HELP: &str = r"Workflow: finding a roadmap
  1. legalguide categories
  2. legalguide actions employment
  3. legalguide roadmap wrongful-termination
  4. legalguide ask wrongful-termination 'Was my notice period too short?'

Or describe the problem and let the assistant pick a remedy:
  legalguide chat
  legalguide chat --action file-fir     (follow-up tips for filing an FIR)

Export a roadmap:
  legalguide roadmap file-fir --out fir.json

This tool provides general legal guidance only. Always consult a qualified
attorney for advice specific to your situation.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List legal categories.
    Categories,

    /// List the actions in a category.
    Actions {
        /// Category identifier (e.g. `employment`).
        category: String,
    },

    /// Show the roadmap for an action.
    Roadmap {
        /// Action identifier (e.g. `file-fir`).
        action: String,

        /// Print the roadmap as JSON.
        #[arg(long)]
        json: bool,

        /// Write the roadmap JSON to this file instead of printing it.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Talk an issue through with the assistant.
    ///
    /// Type a reply and press enter. When options are listed, their number
    /// picks them. `/quit` or end of input exits.
    Chat {
        /// Action whose tips answer follow-up questions after the roadmap.
        #[arg(long, value_parser = parse_action)]
        action: Option<ActionId>,
    },

    /// Ask one follow-up question about an action's roadmap.
    Ask {
        /// Action identifier.
        #[arg(value_parser = parse_action)]
        action: ActionId,

        /// Your question.
        question: String,
    },
}

fn parse_action(s: &str) -> Result<ActionId, String> {
    s.parse::<ActionId>()
        .map_err(|_| format!("unknown action '{s}'; run `legalguide actions <category>` to list them"))
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let dir = config
            .log_dir
            .clone()
            .or_else(|| Config::home().map(|h| h.join("logs")))
            .ok_or("could not determine home directory")?;
        let _guard = logging::init_file(config, &dir)
            .map_err(|e| format!("failed to open log directory {}: {e}", dir.display()))?;
        return tui::run(config).map_err(|e| format!("terminal error: {e}"));
    };

    let _guard = match &config.log_dir {
        Some(dir) => Some(
            logging::init_file(config, dir)
                .map_err(|e| format!("failed to open log directory {}: {e}", dir.display()))?,
        ),
        None => {
            logging::init_stderr(config);
            None
        }
    };

    match command {
        Command::Categories => cmd_categories(),
        Command::Actions { category } => cmd_actions(&category),
        Command::Roadmap { action, json, out } => cmd_roadmap(&action, json, out),
        Command::Chat { action } => {
            let mut conversation = Conversation::new(action, config.tip_rotation);
            let stdin = io::stdin();
            run_chat(&mut conversation, stdin.lock(), io::stdout().lock())
                .map_err(|e| format!("chat failed: {e}"))
        }
        Command::Ask { action, question } => {
            let mut chat = AdvisorChat::new(action, config.tip_rotation);
            let reply = ask(&mut chat, &question)?;
            println!("{reply}");
            Ok(())
        }
    }
}

fn cmd_categories() -> Result<(), String> {
    for category in catalog::categories() {
        println!("{}", format_category(category));
    }
    Ok(())
}

fn cmd_actions(category_id: &str) -> Result<(), String> {
    let actions = catalog::actions_for(category_id).map_err(|e| {
        format!("{e}\nRun `legalguide categories` to see which categories have actions.")
    })?;

    // Parsing succeeded inside `actions_for`, so the category exists.
    if let Some(category) = category_id
        .parse::<CategoryId>()
        .ok()
        .and_then(catalog::category)
    {
        println!("{}", category.display_name);
        println!();
    }
    for action in actions {
        println!("{}", format_action(action));
    }
    Ok(())
}

/// A roadmap as written by `roadmap --json` and `roadmap --out`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoadmapExport<'a> {
    action: ActionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<CategoryId>,
    roadmap: &'a RoadmapTemplate,
    exported_at: Timestamp,
}

fn export_json(action: ActionId, template: &RoadmapTemplate) -> Result<String, String> {
    let export = RoadmapExport {
        action,
        category: catalog::category_of(action),
        roadmap: template,
        exported_at: Timestamp::now(),
    };
    serde_json::to_string_pretty(&export).map_err(|e| format!("failed to serialize roadmap: {e}"))
}

fn cmd_roadmap(action_id: &str, json: bool, out: Option<PathBuf>) -> Result<(), String> {
    let template = catalog::template_for(action_id)
        .map_err(|e| format!("{e}\nNo step-by-step roadmap is available for this action yet."))?;
    // `template_for` only succeeds for identifiers that parse.
    let action = parse_action(action_id)?;

    match out {
        Some(path) => {
            let json = export_json(action, template)?;
            fs::write(&path, json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!(%action, path = %path.display(), "Roadmap exported");
            eprintln!("Saved {} → {}", template.title, path.display());
        }
        None if json => println!("{}", export_json(action, template)?),
        None => {
            for line in render::format_template(template) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Ask the advisor one question and return its reply.
fn ask(chat: &mut AdvisorChat, question: &str) -> Result<String, String> {
    match chat.ask(question) {
        Ok(new) => Ok(new[1].body.clone()),
        Err(InputError::Empty) => Err("question is empty".to_string()),
    }
}

/// Drive a conversation from line-based input.
///
/// The log so far is written first. Each non-blank line is submitted and
/// the reply written; a bare number picks from the last options message.
pub fn run_chat<R: BufRead, W: Write>(
    conversation: &mut Conversation,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut sink = TextSink::new(output);
    conversation.replay(&mut sink);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == "/quit" {
            break;
        }

        let text = pick_option(conversation.last(), line);
        match conversation.submit(&text) {
            Ok(new) => sink.render(&new[1]),
            Err(InputError::Empty) => {}
        }
    }

    sink.finish().map(|_| ())
}

/// Translate a bare option number into the option it names.
fn pick_option(last: &ChatMessage, input: &str) -> String {
    last.choices()
        .and_then(|choices| {
            let n = input.parse::<usize>().ok()?;
            choices.get(n.checked_sub(1)?)
        })
        .map_or_else(|| input.to_string(), Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::intake::IntakeState;
    use crate::resolver::{TipRotation, remedy_roadmap};

    fn chat(focus: Option<ActionId>, input: &str) -> (Conversation, String) {
        let mut conversation = Conversation::new(focus, TipRotation::RoundRobin);
        let mut out = Vec::new();
        run_chat(&mut conversation, input.as_bytes(), &mut out).unwrap();
        (conversation, String::from_utf8(out).unwrap())
    }

    #[test]
    fn numbers_pick_listed_options() {
        let (c, out) = chat(None, "4\nI was fired without notice\n1\n");
        assert_eq!(c.state(), IntakeState::Roadmap);
        assert_eq!(c.context().issue_type.as_deref(), Some("Employment Issue"));
        assert_eq!(
            c.context().preferred_option.as_deref(),
            Some("Send Legal Notice (Formal warning)")
        );
        assert!(out.contains("Draft Legal Notice"));
    }

    #[test]
    fn out_of_range_number_is_sent_as_text() {
        let (c, _) = chat(None, "99\n");
        assert_eq!(c.context().issue_type.as_deref(), Some("99"));
    }

    #[test]
    fn numbers_are_literal_when_no_options_are_showing() {
        // After the issue type the assistant asks for free text.
        let (c, _) = chat(None, "Other\n2\n");
        assert_eq!(c.context().details.as_deref(), Some("2"));
    }

    #[test]
    fn blank_lines_are_skipped_and_quit_stops() {
        let (c, out) = chat(None, "\n   \nOther\n/quit\nignored\n");
        assert_eq!(c.messages().len(), 3);
        assert!(out.starts_with("assistant › Hello!"));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn chat_roadmap_matches_fallback_payload() {
        let (c, _) = chat(None, "Employment Issue\nFired\nApproach Court\n");
        assert_eq!(
            c.last().roadmap_payload(),
            Some(&remedy_roadmap("Send Legal Notice"))
        );
    }

    #[test]
    fn follow_up_after_roadmap_uses_focus_tips() {
        let tips = catalog::tips_for(ActionId::FileFir).unwrap();
        let (_, out) = chat(Some(ActionId::FileFir), "5\nTheft\n5\nWhat now?\n");
        assert!(out.contains(&tips[0]));
    }

    #[test]
    fn ask_rejects_empty_question() {
        let mut advisor = AdvisorChat::new(ActionId::WageDispute, TipRotation::RoundRobin);
        assert_eq!(ask(&mut advisor, "  "), Err("question is empty".to_string()));
        let tips = catalog::tips_for(ActionId::WageDispute).unwrap();
        assert_eq!(ask(&mut advisor, "How long?").unwrap(), tips[0]);
    }

    #[test]
    fn parse_action_reports_unknown_ids() {
        assert_eq!(parse_action("file-fir"), Ok(ActionId::FileFir));
        assert!(parse_action("nope").unwrap_err().contains("unknown action 'nope'"));
    }

    #[test]
    fn export_includes_action_category_and_steps() {
        let template = catalog::template(ActionId::PfGratuity).unwrap();
        let json = export_json(ActionId::PfGratuity, template).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["action"], "pf-gratuity");
        assert_eq!(value["category"], "employment");
        assert_eq!(value["roadmap"]["steps"].as_array().unwrap().len(), 4);
        assert!(value["exportedAt"].is_string());
    }

    #[test]
    fn roadmap_out_writes_export_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fir.json");
        cmd_roadmap("file-fir", false, Some(path.clone())).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["roadmap"]["title"], "File FIR");
    }

    #[test]
    fn roadmap_for_unknown_action_is_an_error() {
        let err = cmd_roadmap("nonexistent-action", false, None).unwrap_err();
        assert!(err.starts_with("roadmap not found: nonexistent-action"));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["legalguide", "chat", "--action", "file-fir"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Chat {
                action: Some(ActionId::FileFir)
            })
        ));

        let cli = Cli::try_parse_from(["legalguide"]).unwrap();
        assert!(cli.command.is_none());

        assert!(Cli::try_parse_from(["legalguide", "ask", "bogus", "why?"]).is_err());
    }
}
