// commands.rs

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use log::debug;
use recent_files::menu::RecentMenu;
use recent_files::{
    DocumentOpener, FailureReporter, FileOpener, FsExistence, HistoryEntry, OpenOutcome, RecencyList,
};

use crate::util::writeln_ignore_broken_pipe;

pub const COMMANDS: [&str; 5] = ["open", "list", "clear", "help", "exit"];

const HELP: &str = "\
open <path>   open a file and record it as most recent
list          show recent files
1-9           reopen the recent file with that number
clear         forget all recent files
exit [code]   leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Lines produced by the opener and reporter, written out by the command
/// that triggered them.
#[derive(Clone, Debug, Default)]
pub struct Outbox(Rc<RefCell<Vec<String>>>);

impl Outbox {
    fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }

    fn flush_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let lines = std::mem::take(&mut *self.0.borrow_mut());
        for line in lines {
            writeln_ignore_broken_pipe(out, line)?;
        }
        Ok(())
    }
}

/// Announces `opened <path>` for each file handed over.
pub struct ConsoleOpener(Outbox);

impl DocumentOpener for ConsoleOpener {
    fn open(&mut self, entry: &HistoryEntry) -> anyhow::Result<()> {
        self.0.push(format!("opened {}", entry));
        Ok(())
    }
}

pub struct ConsoleReporter(Outbox);

impl FailureReporter for ConsoleReporter {
    fn file_not_found(&mut self, entry: &HistoryEntry) {
        self.0.push(format!("File not found: {}", entry));
    }
}

pub struct Session {
    list: RecencyList,
    menu: Rc<RefCell<RecentMenu>>,
    files: FileOpener<FsExistence, ConsoleOpener, ConsoleReporter>,
    outbox: Outbox,
}

impl Session {
    pub fn new(mut list: RecencyList) -> Self {
        let (menu, _) = RecentMenu::bind(&mut list);
        let outbox = Outbox::default();
        Self {
            list,
            menu,
            files: FileOpener::new(
                FsExistence,
                ConsoleOpener(outbox.clone()),
                ConsoleReporter(outbox.clone()),
            ),
            outbox,
        }
    }

    pub fn list(&self) -> &RecencyList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut RecencyList {
        &mut self.list
    }

    pub fn run_command<W: Write>(&mut self, tokens: &[String], out: &mut W) -> io::Result<Flow> {
        let Some(command) = tokens.first() else {
            return Ok(Flow::Continue);
        };
        debug!("command: {:?}", tokens);
        match command.as_str() {
            "exit" => {
                let code = match tokens.get(1) {
                    Some(code) => code.parse::<i32>().unwrap_or(255),
                    None => 0,
                };
                return Ok(Flow::Exit(code));
            }
            "help" => writeln_ignore_broken_pipe(out, HELP)?,
            "list" => {
                let menu = self.menu.borrow();
                if menu.disabled() {
                    writeln_ignore_broken_pipe(out, "no recent files")?;
                } else {
                    for line in menu.lines() {
                        writeln_ignore_broken_pipe(out, line)?;
                    }
                }
            }
            "clear" => self.list.clear(),
            "open" => {
                if tokens.len() != 2 {
                    writeln_ignore_broken_pipe(out, "open: expected exactly one path")?;
                    return Ok(Flow::Continue);
                }
                match std::path::absolute(Path::new(&tokens[1])) {
                    Ok(path) => {
                        let outcome = self.files.open(&mut self.list, HistoryEntry::new(path));
                        self.report(outcome, out)?;
                    }
                    Err(e) => writeln_ignore_broken_pipe(out, format!("open: {}: {}", tokens[1], e))?,
                }
            }
            other => {
                let key = single_char(other).filter(|_| tokens.len() == 1);
                match key.and_then(|key| self.files.open_by_key(&mut self.list, key)) {
                    Some(outcome) => self.report(outcome, out)?,
                    None => writeln_ignore_broken_pipe(out, format!("{}: command not found", other))?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn report<W: Write>(&self, outcome: OpenOutcome, out: &mut W) -> io::Result<()> {
        self.outbox.flush_to(out)?;
        match outcome {
            OpenOutcome::OpenFailed(message) => writeln_ignore_broken_pipe(out, format!("open: {}", message)),
            OpenOutcome::Opened | OpenOutcome::NotFound => Ok(()),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
