//! Serialized line output shared by the status monitor and the coordinator.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Output stream guarded by a single print lock.
///
/// Every block of lines is written while holding the lock, so a status snapshot
/// never interleaves with other output.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Console writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Console writing to any sink.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Console writing to an in-memory buffer, plus a handle to read it back.
    #[must_use]
    pub fn in_memory() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        (Self::from_writer(captured.clone()), captured)
    }

    /// Write a blank line, the header and every line as one uninterrupted block.
    ///
    /// Write failures are logged and otherwise ignored; output is best-effort.
    pub fn print_block<I, S>(&self, header: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = self.out.lock();
        let result = (|| -> io::Result<()> {
            writeln!(out)?;
            writeln!(out, "{header}")?;
            for line in lines {
                writeln!(out, "{}", line.as_ref())?;
            }
            out.flush()
        })();
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write console output");
        }
    }

    /// Write a single line.
    pub fn print_line(&self, line: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write console output");
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Shared buffer behind [`Console::in_memory`].
#[derive(Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without the trailing newline.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
