//! Depth and character buffers for one frame.

use crate::types::BLANK;

/// Row-major glyph buffer with a parallel inverse-depth buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutFrame {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    depth: Vec<f32>,
}

impl DonutFrame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![BLANK; len],
            depth: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the frame.
    ///
    /// This preserves the underlying allocations when possible. Contents are
    /// unspecified until the next `reset`.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.resize(len, BLANK);
        self.depth.resize(len, 0.0);
    }

    /// Blank every cell and zero the depth buffer.
    pub fn reset(&mut self) {
        self.glyphs.fill(BLANK);
        self.depth.fill(0.0);
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Buffer index for a projected coordinate; `None` when outside the frame.
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Depth-tested write. Returns `false` when the cell is outside the frame
    /// or already holds an equal or closer sample.
    #[inline(always)]
    pub fn write_if_closer(&mut self, x: i32, y: i32, ooz: f32, glyph: char) -> bool {
        match self.index(x, y) {
            Some(i) if ooz > self.depth[i] => {
                self.depth[i] = ooz;
                self.glyphs[i] = glyph;
                true
            }
            _ => false,
        }
    }

    pub fn row(&self, y: u16) -> &[char] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Rows as strings. Allocates; meant for tests and debugging.
    pub fn lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.glyphs.iter().all(|&ch| ch == BLANK)
    }
}
