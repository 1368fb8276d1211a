use crate::utils::error::{ExerciseError, Result};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Token and line reader over any input, paired with the transcript output.
///
/// Numeric reads consume whitespace-separated tokens and may span lines.
/// `next_line` drops whatever tokens remain on the current line first, so a
/// line read after a number starts on the next line of input.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    pending: VecDeque<String>,
}

impl<'a> Console<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            pending: VecDeque::new(),
        }
    }

    /// Writes `text` without a newline and flushes.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8(bytes).map_err(|e| ExerciseError::InvalidInputError {
            expected: "UTF-8 text".to_string(),
            found: String::from_utf8_lossy(e.as_bytes()).trim_end().to_string(),
        })?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn next_token(&mut self, expected: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            match self.read_raw_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                None => {
                    return Err(ExerciseError::UnexpectedEofError {
                        expected: expected.to_string(),
                    })
                }
            }
        }
    }

    pub fn next_i32(&mut self) -> Result<i32> {
        self.next_parsed("an integer")
    }

    pub fn next_f64(&mut self) -> Result<f64> {
        self.next_parsed("a number")
    }

    /// First character of the next token.
    pub fn next_char(&mut self) -> Result<char> {
        let token = self.next_token("a character")?;
        token
            .chars()
            .next()
            .ok_or_else(|| ExerciseError::UnexpectedEofError {
                expected: "a character".to_string(),
            })
    }

    pub fn next_line(&mut self) -> Result<String> {
        self.pending.clear();
        self.read_raw_line()?
            .ok_or_else(|| ExerciseError::UnexpectedEofError {
                expected: "a line of text".to_string(),
            })
    }

    fn next_parsed<T: std::str::FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| ExerciseError::InvalidInputError {
                expected: expected.to_string(),
                found: token,
            })
    }
}
