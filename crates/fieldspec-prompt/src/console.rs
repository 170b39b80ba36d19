//! Line-oriented console abstraction.
//!
//! The retry loop only needs two capabilities: read the next raw line
//! (optionally after showing a prompt) and echo a message. Keeping them
//! behind a trait lets tests drive validation with a scripted transcript
//! instead of a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Read the next raw line, without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input source is exhausted. May block.
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<String>>;

    /// Echo one line of text.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Real terminal console on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        StdConsole
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<String>> {
        if let Some(prompt) = prompt {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

/// Scripted console for tests: serves a fixed sequence of input lines and
/// records everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    written: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            written: Vec::new(),
        }
    }

    /// Lines written so far (prompts are not recorded, echoed messages are).
    pub fn written(&self) -> &[String] {
        &self.written
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: Option<&str>) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.written.push(text.to_string());
        Ok(())
    }
}
