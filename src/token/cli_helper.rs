use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::builtins;


/// Rustyline Helper completing builtin names.
pub struct CliHelper {
    names: Vec<&'static str>,
}

pub struct CliCandidate {
    name: &'static str,
}

impl CliHelper {
    pub fn new() -> Self {
        let mut names = builtins::names().collect::<Vec<_>>();
        names.sort_unstable();
        Self { names }
    }

    fn prefixed(&self, prefix: &str) -> Vec<CliCandidate> {
        self.names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| CliCandidate { name: *name })
            .collect()
    }

    // Start of the word ending at pos.
    fn word_start(&self, line: &str, pos: usize) -> usize {
        line[..pos]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace() || "()'".contains(*c))
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let start = self.word_start(line, pos);
        Ok((start, self.prefixed(&line[start..pos])))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_start() {
        let helper = CliHelper::new();
        assert_eq!(helper.word_start("(list-", 6), 1);
        assert_eq!(helper.word_start("(car '(1 2) nu", 14), 12);
        assert_eq!(helper.word_start("ab", 2), 0);
    }

    #[test]
    fn prefixed() {
        let helper = CliHelper::new();
        let names = helper
            .prefixed("list")
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["list", "list-ref", "list-tail", "list?"]);
        assert!(helper.prefixed("zz").is_empty());
    }
}
