use crate::board::Board;
use crate::coord::Coord;
use crate::viewport::GeometryError;
use crate::viewport::Viewport;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A text frame buffer rasterizing the visible window of a board.
///
/// Each braille character packs a 2x4 block of cells, so a `w x h` cell
/// window renders as `ceil(w / 2) x ceil(h / 4)` characters. The frame's
/// pixel grid is screen-oriented (row 0 at the top); logical `y` grows
/// upward, so view rows are flipped on the way in.
pub struct Frame {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer, in cells
    w: usize,

    /// Height of the framebuffer, in cells
    h: usize,
}

impl Frame {
    /// A blank frame of `w x h` cells. Both dimensions must be positive.
    pub fn new(w: usize, h: usize) -> Result<Self, GeometryError> {
        if w == 0 {
            return Err(GeometryError::NonPositive {
                axis: "width",
                value: 0,
            });
        }

        if h == 0 {
            return Err(GeometryError::NonPositive {
                axis: "height",
                value: 0,
            });
        }

        let cb = vec![false; w * h];

        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes in UTF-8, plus one newline byte
        // per character row.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Ok(Self { cb, fb, cp, w, h })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Clear the cell buffer.
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Rasterize every visible live cell of `board` through `view`.
    ///
    /// The viewport is the source of truth for visibility; the frame only
    /// trims to its own pixel bounds in case it is smaller than the window.
    pub fn draw(&mut self, board: &Board, view: &Viewport) {
        for c in board.live_cells() {
            if !view.is_visible(c) {
                continue;
            }

            let Coord { x, y } = view.to_view(c);
            let (x, y) = (x as usize, y as usize);

            // trim to the pixel grid in case the window outsizes the frame
            if x >= self.w || y >= self.h {
                continue;
            }

            // view y is Cartesian, screen rows count down
            self.cb[(self.h - 1 - y) * self.w + x] = true;
        }
    }

    /// Pack the cell buffer into braille text, one line per character row.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = (n % self.w, n / self.w);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += Self::dot_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // codepoints stay in the braille block, always valid
            self.fb.push(char::from_u32(c).unwrap_or('\u{2800}'));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn dot_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
