//! Line-oriented writer sink for serial-style outputs.

use super::ports::NotificationSink;
use std::io::Write;

/// Writes each stage code as one line to any [`Write`] target.
///
/// Typically wraps an opened serial port. Write failures are logged and
/// counted; the tracker is never told.
///
/// # Example
///
/// ```rust
/// use gesture_stage::effects::{NotificationSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.on_stage_changed("stage-0");
/// sink.on_stage_changed("complete");
///
/// assert_eq!(sink.get_ref().as_slice(), b"stage-0\ncomplete\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    write_errors: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_errors: 0,
        }
    }

    /// Number of codes that failed to write.
    pub fn write_errors(&self) -> u64 {
        self.write_errors
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, code: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{code}")?;
        self.writer.flush()
    }
}

impl<W: Write> NotificationSink for WriterSink<W> {
    fn on_stage_changed(&mut self, code: &str) {
        if let Err(e) = self.write_line(code) {
            self.write_errors += 1;
            tracing::warn!(
                code,
                error = %e,
                failures = self.write_errors,
                "Failed to write stage code"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Unplugged;

    impl Write for Unplugged {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_code() {
        let mut sink = WriterSink::new(Vec::new());
        sink.on_stage_changed("reset");
        sink.on_activated();
        sink.on_stage_changed("stage-0");

        assert_eq!(sink.into_inner(), b"reset\nstage-0\n".to_vec());
    }

    #[test]
    fn write_failures_are_counted_not_propagated() {
        let mut sink = WriterSink::new(Unplugged);
        sink.on_stage_changed("stage-0");
        sink.on_stage_changed("stage-1");

        assert_eq!(sink.write_errors(), 2);
    }
}
