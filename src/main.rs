// src/main.rs
//
// Line-oriented host loop standing in for the scanner screen.
//
//   scan <code>     a scanned code, taken verbatim
//   loaded          the embedded player finished loading
//   error <text>    the embedded player failed to load
//   http <code>     the embedded player got an HTTP status
//   again | back | home
//   list            home screen overview
//   quit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use log::info;

use qrcalendar::application::commands::*;
use qrcalendar::application::AppState;
use qrcalendar::{
    AppConfig, EmbedRequested, EmbedSignal, NoticeKind, SystemUrlOpener, UserAction,
    UserNotified,
};

/// One line of host input
#[derive(Debug, PartialEq, Eq)]
enum HostCommand {
    Scan(String),
    Signal(EmbedSignal),
    Action(UserAction),
    List,
    Quit,
    Empty,
    Invalid(String),
}

impl HostCommand {
    fn parse(line: &str) -> Self {
        let input = line.trim_start();
        let (word, rest) = input.split_once(' ').unwrap_or((input.trim_end(), ""));

        match word {
            "" => HostCommand::Empty,
            // Codes are looked up by exact match, so only the separator is stripped
            "scan" => HostCommand::Scan(rest.trim_end_matches(['\r', '\n']).to_string()),
            "loaded" => HostCommand::Signal(EmbedSignal::Loaded),
            "error" => HostCommand::Signal(EmbedSignal::LoadError {
                description: rest.trim().to_string(),
            }),
            "http" => match rest.trim().parse::<u16>() {
                Ok(status_code) => HostCommand::Signal(EmbedSignal::HttpStatus {
                    status_code,
                    description: String::new(),
                }),
                Err(_) => HostCommand::Invalid("usage: http <status code>".to_string()),
            },
            "again" => HostCommand::Action(UserAction::ScanAgain),
            "back" => HostCommand::Action(UserAction::Back),
            "home" => HostCommand::Action(UserAction::GoHome),
            "list" => HostCommand::List,
            "quit" => HostCommand::Quit,
            other => HostCommand::Invalid(format!("unknown command {:?}", other)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;
    info!("Using catalog {}", config.catalog_path.display());

    // 2. STATE
    let opener = Arc::new(SystemUrlOpener::new());
    let mut state = AppState::initialize(config, opener).context("loading media catalog")?;

    // 3. PRESENTATION SUBSCRIPTIONS
    state.event_bus.subscribe::<UserNotified, _>(|notice| match notice.kind {
        NoticeKind::Status => println!("{}", notice.message),
        NoticeKind::Alert => println!("[!] {}", notice.message),
    });
    state.event_bus.subscribe::<EmbedRequested, _>(|embed| {
        println!("[embed {}] {}", embed.session_id, embed.url);
    });

    // 4. EVENT LOOP
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let now = Local::now().naive_local();

        match HostCommand::parse(&line) {
            HostCommand::Quit => break,
            HostCommand::List => {
                for card in list_media(&state, now) {
                    println!("{}  {}  {}  {}", card.id, card.date, card.status, card.title);
                }
            }
            HostCommand::Action(action) => {
                perform_user_action(&mut state, action);
            }
            HostCommand::Signal(signal) => send_signal(&mut state, signal),
            HostCommand::Scan(code) => {
                let result = scan_code(&mut state, &code, now);
                if !result.accepted {
                    println!("Finish the current result first (again / back / home)");
                }
            }
            HostCommand::Invalid(message) => println!("{}", message),
            HostCommand::Empty => {}
        }
        prompt()?;
    }

    Ok(())
}

/// Signals always target the live embed in this host
fn send_signal(state: &mut AppState, signal: EmbedSignal) {
    let Some(session_id) = state.playback_controller.current_session() else {
        println!("No embedded player is active");
        return;
    };
    match report_embed_signal(state, &session_id.to_string(), signal) {
        Ok(view) => println!("state: {}", view.state),
        Err(error) => println!("{}", error),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_words_can_be_scanned() {
        for code in ["list", "quit", "back", "error x", "http 404"] {
            let line = format!("scan {}", code);
            assert_eq!(HostCommand::parse(&line), HostCommand::Scan(code.to_string()));
        }
    }

    #[test]
    fn test_bare_text_is_not_a_scan() {
        assert!(matches!(
            HostCommand::parse("day-1"),
            HostCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_scan_keeps_code_verbatim() {
        assert_eq!(
            HostCommand::parse("scan  Day 1 "),
            HostCommand::Scan(" Day 1 ".to_string())
        );
    }

    #[test]
    fn test_signals_and_actions() {
        assert_eq!(
            HostCommand::parse("http 404"),
            HostCommand::Signal(EmbedSignal::HttpStatus {
                status_code: 404,
                description: String::new(),
            })
        );
        assert!(matches!(
            HostCommand::parse("http abc"),
            HostCommand::Invalid(_)
        ));
        assert_eq!(
            HostCommand::parse("home"),
            HostCommand::Action(UserAction::GoHome)
        );
        assert_eq!(HostCommand::parse("   "), HostCommand::Empty);
    }
}
