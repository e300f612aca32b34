// src/application/console.rs
//
// Console port: the only place the pipeline touches the terminal.

#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::AppResult;

pub trait Console {
    fn write_line(&mut self, line: &str) -> AppResult<()>;

    /// Read one line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> AppResult<Option<String>>;
}

/// Standard output / standard input
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> AppResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(buffer)))
    }
}

/// Drop a trailing "\n" or "\r\n" and nothing else
pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// In-memory console with scripted input
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

#[cfg(test)]
impl MemoryConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Scripted lines not read yet
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
impl Console for MemoryConsole {
    fn write_line(&mut self, line: &str) -> AppResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        Ok(self.input.pop_front())
    }
}
