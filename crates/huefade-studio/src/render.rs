use std::io::Write;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use huefade_engine::coords::{Rect, Vec2};
use huefade_engine::paint::{Color, Paint};
use huefade_engine::scene::{DrawCmd, DrawItem, DrawList};
use huefade_engine::time::FrameTime;

/// Consumer of the per-frame draw stream.
pub trait Renderer {
    fn render(&mut self, frame: &FrameTime, draw_list: &DrawList) -> Result<()>;

    /// Restores whatever the renderer took over.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

// ── software raster ───────────────────────────────────────────────────────

/// CPU pixel buffer. Pixels are sampled at their centers.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Color::transparent(); width * height] }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Color::transparent());
    }

    pub fn draw(&mut self, draw_list: &DrawList) {
        for item in draw_list.in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => match &cmd.paint {
                    Paint::Solid(c) => self.fill(cmd.rect, |_| *c),
                    Paint::LinearGradient(g) => self.fill(cmd.rect, |p| g.sample(p)),
                },
                DrawCmd::Gradient(cmd) => self.fill(cmd.rect, |p| cmd.gradient.sample(p)),
            }
        }
    }

    /// Overwrites every pixel whose center lies in `rect`. No blending.
    fn fill(&mut self, rect: Rect, shade: impl Fn(Vec2) -> Color) {
        for y in 0..self.height {
            for x in 0..self.width {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if rect.contains(center) {
                    self.pixels[y * self.width + x] = shade(center);
                }
            }
        }
    }
}

// ── terminal ──────────────────────────────────────────────────────────────

/// Truecolor terminal output: one `▀` cell shows two stacked pixels.
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Canvas,
    /// Last frame presented, for skipping repaints on accelerated gradients.
    last: Vec<DrawItem>,
    active: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(mut out: W, columns: u16, rows: u16) -> Result<Self> {
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self {
            out,
            canvas: Canvas::new(usize::from(columns), usize::from(rows) * 2),
            last: Vec::new(),
            active: true,
        })
    }

    fn unchanged_and_accelerated(&self, draw_list: &DrawList) -> bool {
        let accelerated = draw_list.items().iter().all(|item| match &item.cmd {
            DrawCmd::Gradient(cmd) => cmd.accelerated,
            DrawCmd::Rect(_) => true,
        });
        accelerated && self.last.as_slice() == draw_list.items()
    }

    fn present(&mut self) -> Result<()> {
        for row in 0..self.canvas.height / 2 {
            queue!(self.out, MoveTo(0, row as u16))?;
            for x in 0..self.canvas.width {
                let top = term_color(self.canvas.get(x, row * 2));
                let bottom = term_color(self.canvas.get(x, row * 2 + 1));
                queue!(self.out, SetForegroundColor(top), SetBackgroundColor(bottom), Print('▀'))?;
            }
            queue!(self.out, ResetColor)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, _frame: &FrameTime, draw_list: &DrawList) -> Result<()> {
        if self.unchanged_and_accelerated(draw_list) {
            return Ok(());
        }
        self.canvas.clear();
        self.canvas.draw(draw_list);
        self.present()?;
        self.last = draw_list.items().to_vec();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.finish() {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}

/// Premultiplied channels composited over black.
fn term_color(c: Color) -> style::Color {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    style::Color::Rgb { r: q(c.r), g: q(c.g), b: q(c.b) }
}

// ── headless ──────────────────────────────────────────────────────────────

/// Prints the stop colors of every gradient whenever they change.
pub struct HexDump<W: Write> {
    out: W,
    last: Option<String>,
}

impl<W: Write> HexDump<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }
}

impl<W: Write> Renderer for HexDump<W> {
    fn render(&mut self, frame: &FrameTime, draw_list: &DrawList) -> Result<()> {
        let line = describe(draw_list);
        if self.last.as_deref() == Some(line.as_str()) {
            return Ok(());
        }
        writeln!(self.out, "frame {:>4}  {}", frame.frame_index, line)?;
        self.last = Some(line);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

fn describe(draw_list: &DrawList) -> String {
    let mut parts = Vec::new();
    for item in draw_list.in_paint_order() {
        match &item.cmd {
            DrawCmd::Gradient(cmd) => {
                let stops: Vec<String> = cmd.gradient.stops.iter().map(|s| s.color.to_hex()).collect();
                parts.push(stops.join(" "));
            }
            DrawCmd::Rect(cmd) => match &cmd.paint {
                Paint::Solid(c) => parts.push(c.to_hex()),
                Paint::LinearGradient(g) => {
                    let stops: Vec<String> = g.stops.iter().map(|s| s.color.to_hex()).collect();
                    parts.push(stops.join(" "));
                }
            },
        }
    }
    if parts.is_empty() { "(empty)".to_string() } else { parts.join(" | ") }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use huefade_engine::paint::{LinearGradient, SpreadMode};
    use huefade_engine::scene::ZIndex;

    use super::*;

    fn frame(index: u64) -> FrameTime {
        FrameTime { dt: Duration::from_millis(16), now: Instant::now(), frame_index: index }
    }

    fn vertical(rect: Rect) -> LinearGradient {
        LinearGradient::evenly_spaced(
            rect.point_at(Vec2::new(0.5, 0.0)),
            rect.point_at(Vec2::new(0.5, 1.0)),
            [Color::gray(0.0), Color::gray(1.0)],
            SpreadMode::Pad,
        )
    }

    #[test]
    fn canvas_rasterizes_gradient_top_to_bottom() {
        let rect = Rect::new(0.0, 0.0, 2.0, 4.0);
        let mut list = DrawList::new();
        list.push_gradient(ZIndex::new(0), rect, vertical(rect), true);

        let mut canvas = Canvas::new(2, 4);
        canvas.draw(&list);
        assert!(canvas.get(0, 0).r < canvas.get(0, 3).r);
        assert_eq!(canvas.get(0, 1), canvas.get(1, 1));
    }

    #[test]
    fn canvas_leaves_uncovered_pixels_transparent() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 1.0, 1.0), Paint::Solid(Color::gray(1.0)));
        let mut canvas = Canvas::new(2, 1);
        canvas.draw(&list);
        assert_eq!(canvas.get(1, 0), Color::transparent());
    }

    #[test]
    fn hex_dump_skips_identical_frames() {
        let rect = Rect::new(0.0, 0.0, 1.0, 2.0);
        let mut list = DrawList::new();
        list.push_gradient(ZIndex::new(0), rect, vertical(rect), true);

        let mut out = Vec::new();
        {
            let mut dump = HexDump::new(&mut out);
            dump.render(&frame(0), &list).unwrap();
            dump.render(&frame(1), &list).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "frame    0  #000000 #ffffff\n");
    }

    #[test]
    fn describes_empty_frames() {
        assert_eq!(describe(&DrawList::new()), "(empty)");
    }
}
