// render.rs - Render collaborator: draws one buffer

use std::io::Write;

use crate::error::RenderError;
use crate::grid::CellGrid;

pub trait RenderStep {
    fn render(&mut self, buffer: &CellGrid, step: u64) -> Result<(), RenderError>;
}

/// Writes each frame as text, `#` for alive and `.` for dead.
pub struct TextRender<W: Write> {
    out: W,
}

impl<W: Write> TextRender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderStep for TextRender<W> {
    fn render(&mut self, buffer: &CellGrid, step: u64) -> Result<(), RenderError> {
        writeln!(self.out, "step {}", step)?;
        for row in 0..buffer.height() {
            let line: String = buffer
                .row(row)
                .iter()
                .map(|&c| if c != 0 { '#' } else { '.' })
                .collect();
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
