use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::completion::Completer;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::HistoryHinter;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{Context, Helper, Hinter, Validator};

const COMMANDS: [&str; 7] = ["add", "filter", "select", "undo", "list", "help", "quit"];
const FILTER_KINDS: [&str; 2] = ["amount", "category"];

#[derive(Helper, Hinter, Validator)]
pub(crate) struct ExpenseHelper {
    pub(crate) highlighter: MatchingBracketHighlighter,
    #[rustyline(Validator)]
    pub(crate) validator: MatchingBracketValidator,
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored_prompt: String,
}

impl ExpenseHelper {
    pub(crate) fn new(prompt: &str) -> ExpenseHelper {
        ExpenseHelper {
            highlighter: MatchingBracketHighlighter::new(),
            validator: MatchingBracketValidator::new(),
            hinter: HistoryHinter::new(),
            colored_prompt: format!("\x1b[1;32m{prompt}\x1b[0m"),
        }
    }
}

impl Completer for ExpenseHelper {
    type Candidate = String;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(complete_keyword(line, pos))
    }
}

/// Complete the word ending at `pos` with a command keyword, or a filter kind after `filter`.
fn complete_keyword(line: &str, pos: usize) -> (usize, Vec<String>) {
    let line = &line[..pos];
    let start = line.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let prefix = line[start..].to_lowercase();

    let previous_words: Vec<&str> = line[..start].split_whitespace().collect();
    let keywords: &[&str] = match previous_words.as_slice() {
        [] => &COMMANDS,
        [first] if first.eq_ignore_ascii_case("filter") => &FILTER_KINDS,
        _ => &[],
    };

    let candidates = keywords.iter()
        .filter(|k| k.starts_with(prefix.as_str()))
        .map(|k| k.to_string())
        .collect();
    (start, candidates)
}

impl Highlighter for ExpenseHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored_prompt)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}
