//! Terminal renderer
//!
//! Scales the 1200x600 world onto the character grid, one colored cell per
//! grid position. Frames identical to the previous one are not written. On a
//! resize the grid is rebuilt and the last frame redrawn at the new size.

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue};

use super::shapes::{Rect, Sprite};
use super::{FrameView, Renderer};
use crate::error::GameError;

const SKY: Color = Color::Rgb { r: 112, g: 197, b: 206 };
const PIPE: Color = Color::Rgb { r: 84, g: 168, b: 56 };
const BIRD: Color = Color::Rgb { r: 250, g: 210, b: 60 };
const TEXT: Color = Color::Rgb { r: 255, g: 255, b: 255 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: TEXT,
        bg: Color::Black,
    };

    fn for_sprite(sprite: Sprite) -> Self {
        let bg = match sprite {
            Sprite::Background => SKY,
            Sprite::Bird => BIRD,
            Sprite::UpperPipe | Sprite::LowerPipe => PIPE,
        };
        Cell { ch: ' ', fg: TEXT, bg }
    }
}

/// Draws frames as colored cells on any `Write` (stdout in the game)
pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    grid: Vec<Cell>,
    previous: Option<Vec<Cell>>,
    last_frame: Option<FrameView>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            cols,
            rows,
            grid: vec![Cell::BLANK; cols as usize * rows as usize],
            previous: None,
            last_frame: None,
        }
    }

    /// Fill the cell grid for a frame without writing it
    fn rasterize(&mut self, frame: &FrameView) {
        self.grid.fill(Cell::BLANK);

        let sx = f32::from(self.cols) / frame.screen_width;
        let sy = f32::from(self.rows) / frame.screen_height;
        for command in &frame.commands {
            self.fill_rect(&command.rect, Cell::for_sprite(command.sprite), sx, sy);
        }

        self.put_text(0, 1, &frame.score_text());

        if let Some(overlay) = &frame.overlay {
            let [title, score, prompt] = overlay.lines();
            let mid = self.rows / 2;
            self.put_centered(self.rows / 4, &title);
            self.put_centered(mid, &score);
            self.put_centered(mid.saturating_add(2), &prompt);
        }
    }

    fn fill_rect(&mut self, rect: &Rect, cell: Cell, sx: f32, sy: f32) {
        let c0 = (rect.x * sx).floor().max(0.0) as usize;
        let c1 = ((rect.right() * sx).ceil().max(0.0) as usize).min(self.cols as usize);
        let r0 = (rect.y * sy).floor().max(0.0) as usize;
        let r1 = ((rect.bottom() * sy).ceil().max(0.0) as usize).min(self.rows as usize);

        for row in r0..r1 {
            let start = row * self.cols as usize;
            for col in c0..c1 {
                self.grid[start + col] = cell;
            }
        }
    }

    fn put_text(&mut self, row: u16, col: u16, text: &str) {
        if row >= self.rows {
            return;
        }
        let start = row as usize * self.cols as usize;
        for (i, ch) in text.chars().enumerate() {
            let col = col as usize + i;
            if col >= self.cols as usize {
                break;
            }
            let cell = &mut self.grid[start + col];
            cell.ch = ch;
            cell.fg = TEXT;
        }
    }

    fn put_centered(&mut self, row: u16, text: &str) {
        let len = text.chars().count() as u16;
        let col = self.cols.saturating_sub(len) / 2;
        self.put_text(row, col, text);
    }

    /// Current grid as plain text, one string per row
    pub fn text_rows(&self) -> Vec<String> {
        self.grid
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_grid(&mut self) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for (row, cells) in self.grid.chunks(self.cols as usize).enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for cell in cells {
                if fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(self.out, SetBackgroundColor(cell.bg))?;
                    bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &FrameView) -> Result<(), GameError> {
        self.rasterize(frame);
        if self.previous.as_ref() == Some(&self.grid) {
            return Ok(());
        }
        self.flush_grid()?;
        self.previous = Some(self.grid.clone());
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) -> Result<(), GameError> {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if (cols, rows) == (self.cols, self.rows) {
            return Ok(());
        }
        log::debug!("Terminal resized to {}x{}", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.grid = vec![Cell::BLANK; cols as usize * rows as usize];
        self.previous = None;

        match self.last_frame.take() {
            Some(frame) => self.render(&frame),
            None => Ok(()),
        }
    }
}
