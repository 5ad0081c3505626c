//! Line-oriented output sinks.
//!
//! A [`Sink`] receives display lines (e.g. `"iPhone 12/10"`). Sinks compose
//! by wrapping: a [`Gated`] sink forwards to another one only while a
//! predicate holds, and a [`Broadcast`] sink fans every line out to several
//! members. Any combination forms a tree:
//!
//! ```ignore
//! let mut sink = Broadcast::new()
//!     .with(WriterSink::stdout())
//!     .with(Gated::on_weekday(WriterSink::append_to_file("stock.log")?, Weekday::Fri));
//! sink.emit("iPhone 12/10")?;
//! ```
//!
//! Sinks are single-threaded (no `Send` bound), matching the inventory model.

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::rc::Rc;

use chrono::{Datelike, Local, Weekday};
use thiserror::Error;

/// Output failure.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
}

/// A line-oriented output capability.
pub trait Sink {
    /// Emit a single line (without trailing newline).
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

/// Direct sink: writes each line, newline-terminated, to a writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<File> {
    /// Open `path` for appending, creating it if missing.
    pub fn append_to_file(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink. Clones share the same buffer, so a handle kept outside a
/// composed tree can inspect what reached it.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Forwards lines to `tracing` as info events tagged with a channel name.
#[derive(Debug, Copy, Clone)]
pub struct TracingSink {
    channel: &'static str,
}

impl TracingSink {
    pub fn new(channel: &'static str) -> Self {
        Self { channel }
    }
}

impl Sink for TracingSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        ::tracing::info!(channel = self.channel, line, "display");
        Ok(())
    }
}

/// Conditional sink: forwards a line to `inner` only if the predicate holds.
///
/// Lines rejected by the predicate are dropped silently.
pub struct Gated<S> {
    inner: S,
    predicate: Box<dyn FnMut(&str) -> bool>,
}

impl<S: Sink> Gated<S> {
    pub fn new(inner: S, predicate: impl FnMut(&str) -> bool + 'static) -> Self {
        Self {
            inner,
            predicate: Box::new(predicate),
        }
    }

    /// Forward only on `day`, according to the local clock.
    pub fn on_weekday(inner: S, day: Weekday) -> Self {
        Self::on_weekday_with(inner, day, || Local::now().weekday())
    }

    /// Forward only on `day`, according to `today`.
    pub fn on_weekday_with(inner: S, day: Weekday, today: impl Fn() -> Weekday + 'static) -> Self {
        Self::new(inner, move |_| today() == day)
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> core::fmt::Debug for Gated<S>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gated").field("inner", &self.inner).finish_non_exhaustive()
    }
}

impl<S: Sink> Sink for Gated<S> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        if (self.predicate)(line) {
            self.inner.emit(line)?;
        }
        Ok(())
    }
}

/// Fan-out sink: every member receives every line.
///
/// A failing member does not stop delivery to the others; the first error is
/// returned once all members have been tried.
#[derive(Default)]
pub struct Broadcast {
    members: Vec<Box<dyn Sink>>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl Sink + 'static) -> Self {
        self.push(sink);
        self
    }

    pub fn push(&mut self, sink: impl Sink + 'static) {
        self.members.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl core::fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Broadcast").field("members", &self.members.len()).finish()
    }
}

impl Sink for Broadcast {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        let mut first_err = None;
        for member in &mut self.members {
            if let Err(e) = member.emit(line) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
