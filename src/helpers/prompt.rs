//! Interactive prompting
//!
//! The authoring flow is one linear conversation: print a question,
//! read one answer line. The prompter is generic over its I/O handles
//! so tests can drive it with in-memory buffers.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads answer lines from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question and return the trimmed answer line
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{} ", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            anyhow::bail!("Input closed before all answers were given");
        }

        Ok(line.trim().to_string())
    }

    /// Ask with a default shown in brackets; an empty answer takes it
    pub fn ask_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [{}]", message, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_returns_trimmed_line() {
        let input = Cursor::new(b"  an answer  \n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let answer = prompter.ask("Question?").unwrap();
        assert_eq!(answer, "an answer");
        assert_eq!(String::from_utf8(output).unwrap(), "Question? ");
    }

    #[test]
    fn test_ask_with_default_takes_default_on_empty() {
        let input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let answer = prompter.ask_with_default("Slug:", "my-post").unwrap();
        assert_eq!(answer, "my-post");
        assert!(String::from_utf8(output).unwrap().contains("[my-post]"));
    }

    #[test]
    fn test_ask_with_default_prefers_typed_answer() {
        let input = Cursor::new(b"other\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let answer = prompter.ask_with_default("Slug:", "my-post").unwrap();
        assert_eq!(answer, "other");
    }

    #[test]
    fn test_ask_fails_on_closed_input() {
        let input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        assert!(prompter.ask("Question?").is_err());
    }
}
