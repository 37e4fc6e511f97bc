//! Framebuffer of styled character cells.
//!
//! Everything the view draws lands here first; the renderer then diffs two
//! framebuffers to decide what to send to the terminal. Writes outside the
//! buffer are clipped silently.

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

/// Colors plus the two attributes the view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    /// Solid block of `color` (foreground matches background).
    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// Screen-space rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(self, n: u16) -> Self {
        Self {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            w: self.w.saturating_sub(2 * n),
            h: self.h.saturating_sub(2 * n),
        }
    }

    pub fn right(self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Row in the vertical middle of the rectangle.
    pub fn mid_y(self) -> u16 {
        self.y.saturating_add(self.h / 2)
    }
}

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
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Resize, keeping the allocation when it is already large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells.resize(width as usize * height as usize, Cell::default());
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `s` from `(x, y)` to the right. Returns the columns consumed.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut n = 0u16;
        for ch in s.chars() {
            self.put_char(x.saturating_add(n), y, ch, style);
            n = n.saturating_add(1);
        }
        n
    }

    /// Write a decimal number without allocating. Returns the digit count.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[start..].iter().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        (digits.len() - start) as u16
    }

    /// Center `s` horizontally inside `[x, x + w)` on row `y`.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        self.put_str(x.saturating_add(w.saturating_sub(len) / 2), y, s, style);
    }

    pub fn fill(&mut self, rect: Rect, ch: char, style: CellStyle) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put_char(x, y, ch, style);
            }
        }
    }

    /// Single-line box drawn on the edge of `rect`.
    pub fn draw_box(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        for x in x0 + 1..x1 {
            self.put_char(x, y0, '─', style);
            self.put_char(x, y1, '─', style);
        }
        for y in y0 + 1..y1 {
            self.put_char(x0, y, '│', style);
            self.put_char(x1, y, '│', style);
        }
        self.put_char(x0, y0, '┌', style);
        self.put_char(x1, y0, '┐', style);
        self.put_char(x0, y1, '└', style);
        self.put_char(x1, y1, '┘', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|c| c.ch).collect()
    }

    #[test]
    fn put_u32_writes_digits_in_order() {
        let mut fb = FrameBuffer::new(8, 1);
        assert_eq!(fb.put_u32(1, 0, 3075, CellStyle::default()), 4);
        assert_eq!(row_text(&fb, 0), " 3075   ");
        assert_eq!(fb.put_u32(6, 0, 0, CellStyle::default()), 1);
        assert_eq!(row_text(&fb, 0), " 3075 0 ");
    }

    #[test]
    fn centered_text_and_clipping() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str_centered(0, 0, 6, "12", CellStyle::default());
        assert_eq!(row_text(&fb, 0), "  12  ");

        fb.clear(Cell::default());
        assert_eq!(fb.put_str(4, 0, "abcdef", CellStyle::default()), 6);
        assert_eq!(row_text(&fb, 0), "    ab");
    }

    #[test]
    fn box_corners_and_inset() {
        let mut fb = FrameBuffer::new(5, 4);
        let area = fb.area();
        fb.draw_box(area, CellStyle::default());
        assert_eq!(row_text(&fb, 0), "┌───┐");
        assert_eq!(row_text(&fb, 3), "└───┘");
        assert_eq!(area.inset(1), Rect::new(1, 1, 3, 2));
        assert_eq!(area.inset(1).mid_y(), 2);
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert!(fb.get(4, 2).is_some());
        assert!(fb.get(5, 2).is_none());
    }
}
