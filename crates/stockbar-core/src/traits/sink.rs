//! Display sink trait definition.

use crate::error::RenderError;
use crate::render::DisplayItem;

/// Host surface that shows one slot per tracked instrument.
///
/// Calls arrive in watch-list order: `show` for every slot, then `retain`
/// with the slot count, then `flush`.
pub trait DisplaySink: Send {
    /// Set the visible text and tooltip of slot `index`.
    fn show(&mut self, index: usize, item: &DisplayItem) -> Result<(), RenderError>;

    /// Drop every slot at position `len` or beyond.
    fn retain(&mut self, _len: usize) -> Result<(), RenderError> {
        Ok(())
    }

    /// Make the slots visible.
    fn flush(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
