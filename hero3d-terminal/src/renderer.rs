/// ASCII raster for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use hero3d_core::{DrawSurface, Projected, Rgb, Segment, Style, Viewport};
use std::io::Write;

/// Character luminosity ramp (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Virtual pixels covered by one terminal cell. Cells are about twice as
/// tall as they are wide.
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Opacities are tuned for a dark page background; a bare terminal needs
/// them boosted to register on the ramp.
const INTENSITY_GAIN: f64 = 4.0;

/// Renders scene draw calls into a grid of characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    coverage: Vec<f64>,
    color: Option<Rgb>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; width * height],
            color: None,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.coverage = vec![0.0; width * height];
    }

    /// Virtual pixel size matching the current grid
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width as f64 * CELL_WIDTH,
            self.height as f64 * CELL_HEIGHT,
        )
    }

    /// Centre of a cell in virtual pixels
    pub fn cell_center(column: u16, row: u16) -> (f64, f64) {
        (
            (f64::from(column) + 0.5) * CELL_WIDTH,
            (f64::from(row) + 0.5) * CELL_HEIGHT,
        )
    }

    pub fn char_at(&self, column: usize, row: usize) -> char {
        ramp_char(self.coverage[row * self.width + column])
    }

    /// Composite `alpha` over the cell containing virtual pixel (x, y)
    fn blend(&mut self, x: f64, y: f64, alpha: f64) {
        let column = (x / CELL_WIDTH).floor();
        let row = (y / CELL_HEIGHT).floor();
        if column < 0.0 || row < 0.0 {
            return;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.coverage[row * self.width + column];
        *cell = 1.0 - (1.0 - *cell) * (1.0 - alpha.clamp(0.0, 1.0));
    }

    fn stroke_line(&mut self, start: &Projected, end: &Projected, alpha: f64) {
        let (dx, dy) = (end.x - start.x, end.y - start.y);
        // One sample per cell crossed along the major axis
        let steps = (dx.abs() / CELL_WIDTH)
            .max(dy.abs() / CELL_HEIGHT)
            .ceil()
            .max(1.0) as usize;

        let mut last = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let (x, y) = (start.x + dx * t, start.y + dy * t);
            let cell = ((x / CELL_WIDTH).floor(), (y / CELL_HEIGHT).floor());
            if last == Some(cell) {
                continue;
            }
            last = Some(cell);
            self.blend(x, y, alpha);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let color = self
            .color
            .map(|c| Color::Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            })
            .unwrap_or(Color::White);

        writer.queue(SetForegroundColor(color))?;
        for y in 0..self.height {
            let row: String = (0..self.width).map(|x| self.char_at(x, y)).collect();
            writer.queue(cursor::MoveTo(0, y as u16))?;
            writer.queue(Print(row))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for AsciiRenderer {
    fn clear(&mut self, _viewport: Viewport) {
        self.coverage.fill(0.0);
    }

    fn fill_disc(&mut self, center: Projected, _radius: f64, style: &Style) {
        // Particles are at most a few pixels across, well under a cell
        self.color = Some(style.color);
        self.blend(center.x, center.y, style.alpha * INTENSITY_GAIN);
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: &Style) {
        self.color = Some(style.color);
        for segment in segments {
            self.stroke_line(&segment.start, &segment.end, style.alpha * INTENSITY_GAIN);
        }
    }
}

fn ramp_char(coverage: f64) -> char {
    let index = (coverage * (LUMINOSITY_RAMP.len() - 1) as f64).round() as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero3d_core::ACCENT;

    fn style(alpha: f64) -> Style {
        Style {
            color: ACCENT,
            alpha,
            line_width: 1.0,
        }
    }

    fn at(x: f64, y: f64) -> Projected {
        Projected { x, y, scale: 1.0 }
    }

    #[test]
    fn test_viewport_tracks_grid() {
        let mut renderer = AsciiRenderer::new(80, 24);
        assert_eq!(renderer.viewport(), Viewport::new(640.0, 384.0));
        renderer.resize(100, 30);
        assert_eq!(renderer.viewport(), Viewport::new(800.0, 480.0));
    }

    #[test]
    fn test_horizontal_stroke_marks_one_row() {
        let mut renderer = AsciiRenderer::new(10, 4);
        let segment = Segment {
            start: at(4.0, 24.0),
            end: at(76.0, 24.0),
        };
        renderer.stroke_segments(&[segment], &style(0.25));

        for x in 0..10 {
            assert_eq!(renderer.char_at(x, 1), '@');
            assert_eq!(renderer.char_at(x, 0), ' ');
            assert_eq!(renderer.char_at(x, 2), ' ');
        }
    }

    #[test]
    fn test_vertical_stroke_marks_one_column() {
        let mut renderer = AsciiRenderer::new(4, 6);
        let segment = Segment {
            start: at(12.0, 0.0),
            end: at(12.0, 95.0),
        };
        renderer.stroke_segments(&[segment], &style(0.1));

        for y in 0..6 {
            assert_ne!(renderer.char_at(1, y), ' ');
            assert_eq!(renderer.char_at(0, y), ' ');
        }
    }

    #[test]
    fn test_overlapping_draws_brighten() {
        let mut renderer = AsciiRenderer::new(2, 2);
        renderer.fill_disc(at(4.0, 8.0), 1.0, &style(0.05));
        let faint = renderer.char_at(0, 0);
        renderer.fill_disc(at(4.0, 8.0), 1.0, &style(0.05));
        let brighter = renderer.char_at(0, 0);

        let rank = |c| LUMINOSITY_RAMP.iter().position(|&r| r == c).unwrap();
        assert!(rank(brighter) > rank(faint));
    }

    #[test]
    fn test_offscreen_points_are_ignored() {
        let mut renderer = AsciiRenderer::new(3, 3);
        renderer.fill_disc(at(-5.0, 10.0), 1.0, &style(1.0));
        renderer.fill_disc(at(10.0, 500.0), 1.0, &style(1.0));
        renderer.stroke_segments(
            &[Segment {
                start: at(-100.0, -100.0),
                end: at(-10.0, -40.0),
            }],
            &style(1.0),
        );
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(renderer.char_at(x, y), ' ');
            }
        }
    }

    #[test]
    fn test_clear_erases() {
        let mut renderer = AsciiRenderer::new(2, 2);
        renderer.fill_disc(at(4.0, 8.0), 1.0, &style(1.0));
        assert_eq!(renderer.char_at(0, 0), '@');
        renderer.clear(renderer.viewport());
        assert_eq!(renderer.char_at(0, 0), ' ');
    }

    #[test]
    fn test_draw_writes_every_row() {
        let mut renderer = AsciiRenderer::new(3, 2);
        renderer.fill_disc(at(20.0, 24.0), 1.0, &style(1.0));
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("  @"));
        assert!(text.contains("   "));
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(AsciiRenderer::cell_center(0, 0), (4.0, 8.0));
        assert_eq!(AsciiRenderer::cell_center(3, 2), (28.0, 40.0));
    }
}
