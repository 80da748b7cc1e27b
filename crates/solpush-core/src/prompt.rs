use std::io::{BufRead, Write};

use crate::error::{Result, SolpushError};
use crate::ports::Prompt;

pub const BRANCH_PROMPT: &str = "Enter new branch name (e.g., feature/add-solution)";

/// Ask for the feature branch name. Cancelled, empty and whitespace-only
/// answers fail with [`SolpushError::InputRequired`].
pub fn ask_branch_name(prompt: &mut dyn Prompt) -> Result<String> {
    match prompt.ask(BRANCH_PROMPT) {
        Some(answer) if !answer.trim().is_empty() => Ok(answer.trim().to_string()),
        _ => Err(SolpushError::InputRequired("Branch name".into())),
    }
}

/// Line-oriented prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Reads from stdin and writes the prompt to stderr so stdout stays
    /// clean for `--json`.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Option<String> {
        let _ = write!(self.output, "{message}: ");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn returns_trimmed_answer() {
        let mut p = prompt("  feature/two-sum  \n");
        assert_eq!(ask_branch_name(&mut p).unwrap(), "feature/two-sum");
    }

    #[test]
    fn writes_prompt_message() {
        let mut p = prompt("feature/x\n");
        ask_branch_name(&mut p).unwrap();
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.starts_with(BRANCH_PROMPT));
    }

    #[test]
    fn empty_answer_is_rejected() {
        let mut p = prompt("\n");
        let err = ask_branch_name(&mut p).unwrap_err();
        assert!(matches!(err, SolpushError::InputRequired(_)));
        assert_eq!(err.to_string(), "Branch name required");
    }

    #[test]
    fn whitespace_answer_is_rejected() {
        let mut p = prompt("   \t \n");
        assert!(matches!(
            ask_branch_name(&mut p),
            Err(SolpushError::InputRequired(_))
        ));
    }

    #[test]
    fn cancelled_input_is_rejected() {
        let mut p = prompt("");
        assert!(matches!(
            ask_branch_name(&mut p),
            Err(SolpushError::InputRequired(_))
        ));
    }

    #[test]
    fn line_without_newline_is_accepted() {
        let mut p = prompt("feature/eof");
        assert_eq!(ask_branch_name(&mut p).unwrap(), "feature/eof");
    }
}
