//! Line-oriented prompt session.
//!
//! The interactive front-end owns one [`Session`] and passes it down explicitly; nothing
//! about the terminal is global. Tests drive it with a `Cursor` and a `Vec<u8>`.

use std::io::{self, BufRead, Write};

/// Terminator for multi-line answers.
pub const END_OF_TEXT: &str = ".";

/// `y` or `yes` in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line without its line ending. End of input is an `UnexpectedEof` error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prints `label: ` and returns the trimmed answer.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Like [`Self::ask`], with a blank answer meaning `None`.
    pub fn ask_optional(&mut self, label: &str) -> io::Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    /// Shows the current value; a blank answer keeps it (`None`), `-` clears it.
    pub fn ask_change(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let answer = self.ask(&format!("{} [{}]", label, current))?;
        Ok(match answer.as_str() {
            "" => None,
            "-" => Some(String::new()),
            _ => Some(answer),
        })
    }

    /// Yes/no question; anything but `y`/`yes` is no.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{} [y/N]", label))?;
        Ok(is_yes(&answer))
    }

    /// Reads lines until one consisting of [`END_OF_TEXT`].
    pub fn ask_text(&mut self, label: &str) -> io::Result<String> {
        writeln!(
            self.output,
            "{} (end with a line containing only `{}`):",
            label, END_OF_TEXT
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            if line.trim() == END_OF_TEXT {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_and_echoes_label() {
        let mut s = session("  Hello World \r\n");
        assert_eq!(s.ask("Title").unwrap(), "Hello World");
        assert_eq!(String::from_utf8(std::mem::take(s.output())).unwrap(), "Title: ");
    }

    #[test]
    fn closed_input_is_eof() {
        let mut s = session("");
        let err = s.ask("Title").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ask_change_keeps_clears_or_replaces() {
        let mut s = session("\n-\nnew\n");
        assert_eq!(s.ask_change("URL", "old").unwrap(), None);
        assert_eq!(s.ask_change("URL", "old").unwrap(), Some(String::new()));
        assert_eq!(s.ask_change("URL", "old").unwrap(), Some("new".into()));
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut s = session("y\n\nYES\nnope\n");
        assert!(s.confirm("Delete?").unwrap());
        assert!(!s.confirm("Delete?").unwrap());
        assert!(s.confirm("Delete?").unwrap());
        assert!(!s.confirm("Delete?").unwrap());
    }

    #[test]
    fn yes_answers_ignore_case() {
        assert!(is_yes("yes"));
        assert!(is_yes("Y"));
        assert!(is_yes(" Yes "));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
        assert!(!is_yes(""));
    }

    #[test]
    fn ask_text_reads_until_terminator() {
        let mut s = session("line one\n\nline three\n.\nafter\n");
        assert_eq!(s.ask_text("Content").unwrap(), "line one\n\nline three");
        assert_eq!(s.ask("Next").unwrap(), "after");
    }

    #[test]
    fn unterminated_text_is_eof() {
        let mut s = session("dangling\n");
        assert!(s.ask_text("Content").is_err());
    }
}
