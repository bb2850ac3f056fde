use crate::common::{DiscoveryError, SerializeOutput};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::io;

/// Record printed on stdout: `{"etcd_discovery_url": "<body>"}`.
/// The body is carried as-is, it's never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryOutput {
    etcd_discovery_url: String,
}

impl DiscoveryOutput {
    pub fn new(discovery_url: impl Into<String>) -> Self {
        Self {
            etcd_discovery_url: discovery_url.into(),
        }
    }

    pub fn discovery_url(&self) -> &str {
        &self.etcd_discovery_url
    }

    /// Render as a single JSON line: `": "` and `", "` separators, ASCII-only
    /// output with DEL and non-ASCII characters escaped as `\uXXXX`.
    pub fn to_json(&self) -> Result<String, DiscoveryError> {
        let mut buf = Vec::with_capacity(self.etcd_discovery_url.len() + 32);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, DumpsFormatter);
        self.serialize(&mut serializer)
            .context(SerializeOutput {})?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Compact formatter with spaced separators and ASCII escaping.
struct DumpsFormatter;

impl serde_json::ser::Formatter for DumpsFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            // Printable ASCII and the control characters serde_json escapes itself.
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }

            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
