//! Line-oriented console used by every interactive screen
//!
//! Each prompt is a blocking request/response exchange: write the question,
//! read one line. Malformed answers are reported and the question is asked
//! again, so validation failures never leave this module. Only the end of
//! input is surfaced, as [`ShrinkError::InputClosed`].

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::domain::errors::DomainError;
use crate::error::{ShrinkError, ShrinkResult};

/// ANSI sequence clearing the screen and homing the cursor
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

/// One selectable line of a numbered menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<T> {
    pub label: String,
    pub value: T,
}

impl<T> MenuEntry<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Console over any line source and sink
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal that never clears the screen
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enable screen clearing between screens (only sensible on a real tty)
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Sink for screen text
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the sink, mainly so tests can inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Start a new screen
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SEQUENCE)?;
        }
        Ok(())
    }

    /// Print a title underlined with `=`
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", "=".repeat(title.chars().count()))
    }

    /// Read one line, trimmed. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print `prompt` without a newline and wait for an answer
    pub fn ask(&mut self, prompt: &str) -> ShrinkResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()?.ok_or(ShrinkError::InputClosed)
    }

    /// Wait for Enter; end of input counts as Enter
    pub fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)
    }

    /// Yes/no question defaulting to no; end of input counts as no
    pub fn confirm(&mut self, prompt: &str) -> ShrinkResult<bool> {
        match self.ask(prompt) {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("y")),
            Err(ShrinkError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Ask for a number, re-asking until it parses and is at least `min`
    pub fn ask_float(&mut self, prompt: &str, default: f64, min: f64) -> ShrinkResult<f64> {
        loop {
            let answer = self.ask(&format!("{} [{}]: ", prompt, default))?;
            match parse_float_answer(&answer, default, min) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Show a numbered menu and return the chosen value.
    ///
    /// Entries are numbered from 1; `0` or an empty answer takes the default.
    pub fn pick<T: Clone>(
        &mut self,
        title: &str,
        entries: &[MenuEntry<T>],
        default_idx: usize,
    ) -> ShrinkResult<T> {
        loop {
            self.clear()?;
            self.heading(title)?;
            for (i, entry) in entries.iter().enumerate() {
                writeln!(self.output, "{}) {}", i + 1, entry.label)?;
            }
            writeln!(self.output, "0) Use default")?;

            let answer = self.ask(&format!("Select (default {}): ", default_idx + 1))?;
            match parse_menu_answer(&answer, entries.len(), default_idx) {
                Ok(idx) => return Ok(entries[idx].value.clone()),
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    self.pause()?;
                }
            }
        }
    }
}

/// Validate a numeric answer; empty takes `default`
pub fn parse_float_answer(answer: &str, default: f64, min: f64) -> Result<f64, DomainError> {
    let answer = answer.trim();
    let value = if answer.is_empty() {
        default
    } else {
        answer
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DomainError::BadArgs("Please enter a number.".to_string()))?
    };

    if value < min {
        return Err(DomainError::ValidationFailed(format!("Must be >= {}", min)));
    }
    Ok(value)
}

/// Validate a menu answer; returns a 0-based entry index
pub fn parse_menu_answer(answer: &str, len: usize, default_idx: usize) -> Result<usize, DomainError> {
    let answer = answer.trim();
    if answer.is_empty() || answer == "0" {
        return Ok(default_idx);
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(DomainError::BadArgs("Invalid choice.".to_string())),
    }
}

/// Render a value for a screen line
pub fn display_or<T: Display>(value: Option<T>, fallback: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(term: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_parse_float_answer() {
        assert_eq!(parse_float_answer("", 9.0, 0.5).unwrap(), 9.0);
        assert_eq!(parse_float_answer(" 12.5 ", 9.0, 0.5).unwrap(), 12.5);
        assert_eq!(parse_float_answer("0.5", 9.0, 0.5).unwrap(), 0.5);
        assert!(parse_float_answer("0.49", 9.0, 0.5).is_err());
        assert!(parse_float_answer("ten", 9.0, 0.5).is_err());
        assert!(parse_float_answer("NaN", 9.0, 0.5).is_err());
        assert!(parse_float_answer("inf", 9.0, 0.5).is_err());
    }

    #[test]
    fn test_parse_menu_answer() {
        assert_eq!(parse_menu_answer("", 4, 2).unwrap(), 2);
        assert_eq!(parse_menu_answer("0", 4, 2).unwrap(), 2);
        assert_eq!(parse_menu_answer("1", 4, 2).unwrap(), 0);
        assert_eq!(parse_menu_answer("4", 4, 2).unwrap(), 3);
        assert!(parse_menu_answer("5", 4, 2).is_err());
        assert!(parse_menu_answer("-1", 4, 2).is_err());
        assert!(parse_menu_answer("two", 4, 2).is_err());
    }

    #[test]
    fn test_ask_float_reprompts_until_valid() {
        let mut term = scripted("abc\n0.1\n7.25\n");
        assert_eq!(term.ask_float("Enter target size in MB", 9.0, 0.5).unwrap(), 7.25);
        let text = printed(term);
        assert!(text.contains("Please enter a number."));
        assert!(text.contains("Must be >= 0.5"));
        assert_eq!(text.matches("Enter target size in MB [9]: ").count(), 3);
    }

    #[test]
    fn test_pick_reprompts_on_invalid_choice() {
        let entries = vec![MenuEntry::new("a", 'a'), MenuEntry::new("b", 'b')];
        let mut term = scripted("9\n\n2\n");
        assert_eq!(term.pick("Letters", &entries, 0).unwrap(), 'b');
        let text = printed(term);
        assert!(text.contains("Letters\n======="));
        assert!(text.contains("Invalid choice."));
        assert!(text.contains("0) Use default"));
    }

    #[test]
    fn test_end_of_input() {
        let mut term = scripted("");
        assert!(matches!(term.ask("? "), Err(ShrinkError::InputClosed)));
        assert!(!term.confirm("Go? (y/N): ").unwrap());
        assert!(term.pause().is_ok());
    }

    #[test]
    fn test_confirm_is_case_insensitive() {
        let mut term = scripted("Y\nyes\n");
        assert!(term.confirm("Go? ").unwrap());
        assert!(!term.confirm("Go? ").unwrap());
    }

    #[test]
    fn test_clear_only_when_enabled() {
        let mut term = scripted("").with_clear_screen(true);
        term.clear().unwrap();
        assert!(printed(term).starts_with(CLEAR_SEQUENCE));

        let mut term = scripted("");
        term.clear().unwrap();
        assert!(printed(term).is_empty());
    }
}
