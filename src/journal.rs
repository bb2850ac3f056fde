use crate::{
    common::{LogOpen, LogWrite, LOG_TIMESTAMP_FORMAT},
    config::NodeCount,
    DiscoveryError,
};
use snafu::ResultExt;
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

/// Append-only log of utility invocations.
///
/// Every record is a single line `<YYYYMMDD> <HH:MM:SS AM/PM> <message>` in local
/// time. The handle is created once by the caller and passed explicitly into
/// the fetch operation; the underlying file is closed when the handle is dropped.
#[derive(Debug)]
pub struct InvocationLog<W: Write = File> {
    target: String,
    writer: W,
}

impl InvocationLog<File> {
    /// Open `path` for appending, creating it if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DiscoveryError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .context(LogOpen { path })?;

        Ok(Self {
            target: path.display().to_string(),
            writer: file,
        })
    }
}

impl<W: Write> InvocationLog<W> {
    /// Log into an arbitrary writer; `target` names it in error messages.
    pub fn from_writer(writer: W, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            writer,
        }
    }

    /// Append one timestamped line.
    pub fn record(&mut self, message: &str) -> Result<(), DiscoveryError> {
        let timestamp = chrono::Local::now().format(LOG_TIMESTAMP_FORMAT);

        writeln!(self.writer, "{} {}", timestamp, message)
            .and_then(|_| self.writer.flush())
            .context(LogWrite {
                target: self.target.clone(),
            })
    }

    /// Record the two invocation lines: node count first, then the note.
    pub fn record_invocation(
        &mut self,
        node_count: &NodeCount,
        note: Option<&str>,
    ) -> Result<(), DiscoveryError> {
        self.record(&format!("Number of nodes => {}", node_count))?;
        self.record(&format!("Note => {}", note.unwrap_or("<none>")))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
