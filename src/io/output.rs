use crate::core::errors::Result;
use crate::core::types::Tag;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per tag
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

pub trait TagWriter {
    fn write_tags(&mut self, tags: &[Tag]) -> Result<()>;
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TagWriter for TextWriter<W> {
    fn write_tags(&mut self, tags: &[Tag]) -> Result<()> {
        for tag in tags {
            writeln!(self.writer, "{}", tag)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TagWriter for JsonWriter<W> {
    fn write_tags(&mut self, tags: &[Tag]) -> Result<()> {
        let json = serde_json::to_string_pretty(tags)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn TagWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
