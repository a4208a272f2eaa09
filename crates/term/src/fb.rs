//! Cell grid the stage view draws into and the renderer diffs.
//!
//! Every write goes through a clipped row span, so drawing a stage that does
//! not fit the terminal simply loses the overflow.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling. Built from a foreground with `const` modifiers so views
/// can keep their palette in constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Cell::BLANK.style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// What every cell holds after [`FrameBuffer::reset`].
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::fg(Rgb::new(220, 220, 220)),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Start a new frame of the given size with every cell blank. Keeps the
    /// allocation when the size does not grow.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    /// One row of cells, if `y` is inside the buffer.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Up to `len` cells of row `y` starting at column `x`, cut at the right
    /// edge. Empty when `(x, y)` is outside.
    fn span_mut(&mut self, x: u16, y: u16, len: u16) -> &mut [Cell] {
        if x >= self.width || y >= self.height {
            return &mut [];
        }
        let start = y as usize * self.width as usize + x as usize;
        let len = len.min(self.width - x) as usize;
        &mut self.cells[start..start + len]
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.put_run(x, y, 1, ch, style);
    }

    /// `len` copies of `ch` along row `y`. One stage cell is one run.
    pub fn put_run(&mut self, x: u16, y: u16, len: u16, ch: char, style: CellStyle) {
        self.span_mut(x, y, len).fill(Cell { ch, style });
    }

    /// One terminal column per `char`.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cell, ch) in self.span_mut(x, y, u16::MAX).iter_mut().zip(s.chars()) {
            *cell = Cell { ch, style };
        }
    }

    /// Single-line box outline with `(x, y)` as its top-left corner.
    /// Boxes smaller than 2x2 are not drawn.
    pub fn put_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┌', style);
        self.put_run(x.saturating_add(1), y, w - 2, '─', style);
        self.put_char(right, y, '┐', style);
        for row in y.saturating_add(1)..bottom {
            self.put_char(x, row, '│', style);
            self.put_char(right, row, '│', style);
        }
        self.put_char(x, bottom, '└', style);
        self.put_run(x.saturating_add(1), bottom, w - 2, '─', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Text of one row, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
