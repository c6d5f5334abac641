// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::cell::RefCell;
use std::rc::Rc;

use recent_files::RecencyList;

use crate::commands::COMMANDS;
use crate::parser::quote_word;

/// Completes command names, and recent files after `open `.
pub struct HistoryCompleter {
    recent: Rc<RefCell<Vec<String>>>,
}

impl HistoryCompleter {
    /// Keeps its copy of the recent paths in step with `list`.
    pub fn new(list: &mut RecencyList) -> Self {
        let recent = Rc::new(RefCell::new(paths(list)));
        let shared = recent.clone();
        list.subscribe(move |list| *shared.borrow_mut() = paths(list));
        Self { recent }
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let prefix = &line[..pos];
        let mut names = Vec::new();
        let start;
        if let Some(arg) = prefix.strip_prefix("open ") {
            let arg = arg.trim_start();
            start = pos - arg.len();
            let typed = arg.trim_start_matches(['\'', '"']);
            for path in self.recent.borrow().iter() {
                if path.starts_with(typed) {
                    names.push(quote_word(path));
                }
            }
        } else {
            start = 0;
            if !prefix.contains(char::is_whitespace) {
                for c in COMMANDS {
                    if c.starts_with(prefix) {
                        names.push(c.to_string());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        (start, names)
    }
}

fn paths(list: &RecencyList) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

impl Completer for HistoryCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, names) = self.candidates(line, pos);
        let completions = names
            .into_iter()
            .map(|n| Pair {
                display: n.clone(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for HistoryCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for HistoryCompleter {}

impl Validator for HistoryCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for HistoryCompleter {}
