//! Plain line output.

use std::io::Write;
use stockbar_core::error::RenderError;
use stockbar_core::render::DisplayItem;
use stockbar_core::traits::DisplaySink;

/// Writes every refresh as a single `label value | label value` line.
pub struct LineSink<W: Write + Send> {
    writer: W,
    slots: Vec<String>,
}

impl<W: Write + Send> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            slots: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> DisplaySink for LineSink<W> {
    fn show(&mut self, index: usize, item: &DisplayItem) -> Result<(), RenderError> {
        let text = format!("{} {}", item.label, item.value);
        if index < self.slots.len() {
            self.slots[index] = text;
        } else {
            self.slots.resize(index, String::new());
            self.slots.push(text);
        }
        Ok(())
    }

    fn retain(&mut self, len: usize) -> Result<(), RenderError> {
        self.slots.truncate(len);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, "{}", self.slots.join(" | "))?;
        self.writer.flush()?;
        Ok(())
    }
}
