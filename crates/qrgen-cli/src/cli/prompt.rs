//! Line-based prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `label: ` and reads one line without its line ending. `None` on end of input.
    pub fn line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Asks for a value, showing `default`; blank input takes the default.
    /// Unparseable or rejected values are reported and asked for again.
    pub fn value<T, F>(&mut self, label: &str, default: T, check: F) -> io::Result<Option<T>>
    where
        T: FromStr + Display,
        T::Err: Display,
        F: Fn(&T) -> Result<(), String>,
    {
        loop {
            let Some(answer) = self.line(&format!("{label} [{default}]"))? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<T>() {
                Ok(v) => match check(&v) {
                    Ok(()) => return Ok(Some(v)),
                    Err(msg) => writeln!(self.output, "  {msg}")?,
                },
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }

    /// Yes/no question; blank input takes `default`.
    pub fn confirm(&mut self, label: &str, default: bool) -> io::Result<Option<bool>> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let Some(answer) = self.line(&format!("{label} [{hint}]"))? else {
                return Ok(None);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "  please answer y or n")?,
            }
        }
    }
}
