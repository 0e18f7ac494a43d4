/*!
Line-oriented output sinks

Everything user-visible goes through a `LineSink`: one call, one line,
terminated with `\n`.
*/

use std::io::{self, Write};

/// A destination for whole lines of text
pub trait LineSink {
    /// Write `line` followed by a line terminator
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush anything buffered; a no-op by default
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Adapter turning any `io::Write` into a `LineSink`
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        WriterSink { inner }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl WriterSink<io::StdoutLock<'static>> {
    /// Sink over a locked standard output
    pub fn stdout() -> Self {
        WriterSink::new(io::stdout().lock())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink that keeps every line it receives
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
