//! The `{text, tooltip}` record a Waybar custom module reads from stdout.

use serde::{Serialize, ser::Error as _};
use serde_json::ser::{Formatter, Serializer};
use std::io;

use crate::error::{FetchError, ProcessingError, error_chain};

pub const FETCH_ERROR_TEXT: &str = "\u{2753} Weather Error";
pub const PROCESSING_ERROR_TEXT: &str = "\u{2753} Processing Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub text: String,
    pub tooltip: String,
}

impl StatusRecord {
    pub fn fetch_failure(err: &FetchError) -> Self {
        Self {
            text: FETCH_ERROR_TEXT.to_string(),
            tooltip: format!("Failed to get weather data: {}", error_chain(err)),
        }
    }

    pub fn processing_failure(err: &ProcessingError) -> Self {
        Self {
            text: PROCESSING_ERROR_TEXT.to_string(),
            tooltip: format!("Failed to process weather data: {}", error_chain(err)),
        }
    }

    /// Write the record as a single JSON object, without a trailing newline.
    pub fn write_json<W: io::Write>(&self, writer: W) -> serde_json::Result<()> {
        let mut ser = Serializer::with_formatter(writer, SpacedFormatter);
        self.serialize(&mut ser)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        // serde_json only ever writes UTF-8.
        String::from_utf8(buf).map_err(|err| serde_json::Error::custom(err.to_string()))
    }
}

/// One-line JSON with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
