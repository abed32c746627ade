// renderer.rs - Render collaborator for egui: caches the drawn buffer for painting

use egui::{Color32, Painter, Rect, Vec2};
use grid_stepper::{CellGrid, RenderError, RenderStep};

/// Fraction of the canvas covered by the grid, as in a -0.8..0.8 clip-space quad.
const GRID_EXTENT: f32 = 0.8;

pub fn color_rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Last frame handed over by the driver. egui repaints whenever it likes, so
/// the frame is copied here and painted from the copy.
#[derive(Default)]
pub struct DisplayCache {
    frame: Option<(u64, CellGrid)>,
}

impl DisplayCache {
    pub fn step(&self) -> Option<u64> {
        self.frame.as_ref().map(|(step, _)| *step)
    }

    pub fn grid(&self) -> Option<&CellGrid> {
        self.frame.as_ref().map(|(_, grid)| grid)
    }

    pub fn clear(&mut self) {
        self.frame = None;
    }
}

impl RenderStep for DisplayCache {
    fn render(&mut self, buffer: &CellGrid, step: u64) -> Result<(), RenderError> {
        if let Some((cached_step, grid)) = &mut self.frame {
            if grid.width() == buffer.width() && grid.height() == buffer.height() {
                grid.clone_from(buffer);
                *cached_step = step;
                return Ok(());
            }
        }
        self.frame = Some((step, buffer.clone()));
        Ok(())
    }
}

/// Cell rectangle for `(row, col)` inside `canvas`. Row 0 is the bottom row.
pub fn cell_rect(canvas: Rect, width: usize, height: usize, row: usize, col: usize) -> Rect {
    let margin = canvas.size() * (1.0 - GRID_EXTENT) / 2.0;
    let area = canvas.shrink2(margin);
    let cell = Vec2::new(area.width() / width as f32, area.height() / height as f32);
    let min = egui::pos2(
        area.min.x + col as f32 * cell.x,
        area.max.y - (row + 1) as f32 * cell.y,
    );
    Rect::from_min_size(min, cell)
}

/// Clears the canvas and fills one square per live cell.
pub fn paint_grid(painter: &Painter, canvas: Rect, grid: Option<&CellGrid>, live: Color32, clear: Color32) {
    painter.rect_filled(canvas, 0.0, clear);

    let Some(grid) = grid else { return };
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_alive(row, col) {
                let rect = cell_rect(canvas, grid.width(), grid.height(), row, col);
                painter.rect_filled(rect, 0.0, live);
            }
        }
    }
}
