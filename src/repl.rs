// repl.rs

use anyhow::Context as _;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};

use recent_files::config::Config;
use recent_files::store::HistoryStore;
use recent_files::RecencyList;

use crate::commands::{Flow, Session};
use crate::completion::HistoryCompleter;
use crate::parser::split_command_line;

fn load_history(config: &Config) -> anyhow::Result<RecencyList> {
    let Some(path) = &config.history_file else {
        info!("no history file configured; recent files are kept in memory");
        return Ok(RecencyList::new(config.capacity)?);
    };
    let store = HistoryStore::new(path);
    match store.load_attached(config.capacity) {
        Ok(list) => {
            info!("recent files from {:?} ({} entries)", store.path(), list.size());
            Ok(list)
        }
        Err(e) => {
            // the unread file must not be overwritten
            warn!("{}; recent files will not be saved this session", e);
            Ok(RecencyList::new(config.capacity)?)
        }
    }
}

/// Runs until `exit` or end of input. Returns the exit code.
pub fn start_repl(config: &Config) -> anyhow::Result<i32> {
    let list = load_history(config)?;
    let mut session = Session::new(list);

    let editor_config = EditorConfig::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<HistoryCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(HistoryCompleter::new(session.list_mut())));

    let mut stdout = std::io::stdout();
    loop {
        match rl.readline("recent> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                let tokens = split_command_line(trimmed);
                if let Flow::Exit(code) = session.run_command(&tokens, &mut stdout)? {
                    info!("exit {} with {} recent files", code, session.list().size());
                    return Ok(code);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(0),
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
}
