//! CPU framebuffer: the drawable surface plus device-pixel-ratio handling.
//!
//! The frame stores 0RGB pixels in a `Vec<u32>` sized in physical pixels.
//! Every drawing primitive takes logical coordinates and multiplies by the
//! device pixel ratio internally, so the projection math upstream never sees
//! physical pixels.

/// Straight-alpha color used by the drawing primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0,1]; blended source-over onto the opaque buffer.
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing surface with logical size, device pixel ratio and a physical
/// 0RGB pixel buffer.
pub struct Frame {
    logical_w: f32,
    logical_h: f32,
    /// One logical unit spans this many physical pixels.
    scale: f32,
    width: usize,
    height: usize,
    buf: Vec<u32>,
}

impl Frame {
    pub fn new(logical_w: f32, logical_h: f32, scale: f32) -> Self {
        let mut frame = Self {
            logical_w: 0.0,
            logical_h: 0.0,
            scale: 0.0,
            width: 0,
            height: 0,
            buf: Vec::new(),
        };
        frame.resize(logical_w, logical_h, scale);
        frame
    }

    /// Applies a new logical size and device pixel ratio.
    ///
    /// The backing buffer is sized to `logical * scale` physical pixels.
    /// Returns `true` when anything changed (the caller should redraw);
    /// repeated calls with identical values are no-ops.
    pub fn resize(&mut self, logical_w: f32, logical_h: f32, scale: f32) -> bool {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        if logical_w == self.logical_w && logical_h == self.logical_h && scale == self.scale {
            return false;
        }

        self.logical_w = logical_w.max(0.0);
        self.logical_h = logical_h.max(0.0);
        self.scale = scale;
        self.width = (self.logical_w * scale).round() as usize;
        self.height = (self.logical_h * scale).round() as usize;
        self.buf = vec![0xFF00_0000; self.width * self.height];
        true
    }

    /// Logical viewport size, the unit space all primitives draw in.
    #[inline]
    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_w, self.logical_h)
    }

    /// Device pixel ratio currently applied.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Physical buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Physical buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The 0RGB pixel buffer, row-major, `width() * height()` long.
    #[inline]
    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    /// Fills the whole buffer with an opaque 0RGB color.
    pub fn clear(&mut self, color: u32) {
        self.buf.fill(0xFF00_0000 | color);
    }

    #[inline]
    fn blend_px(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let dst = self.buf[idx];
        let a = color.a.clamp(0.0, 1.0);
        let inv = 1.0 - a;
        let r = (color.r as f32 * a + ((dst >> 16) & 0xFF) as f32 * inv).round() as u32;
        let g = (color.g as f32 * a + ((dst >> 8) & 0xFF) as f32 * inv).round() as u32;
        let b = (color.b as f32 * a + (dst & 0xFF) as f32 * inv).round() as u32;
        self.buf[idx] = 0xFF00_0000 | (r.min(255) << 16) | (g.min(255) << 8) | b.min(255);
    }

    /// Filled circle at logical center `(cx, cy)` with logical radius `r`.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        let (pcx, pcy, pr) = (cx * self.scale, cy * self.scale, r * self.scale);
        let r2 = pr * pr;
        let x0 = (pcx - pr).floor() as i32;
        let x1 = (pcx + pr).ceil() as i32;
        let y0 = (pcy - pr).floor() as i32;
        let y1 = (pcy + pr).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - pcx;
                let dy = y as f32 + 0.5 - pcy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    /// Circle outline centered on logical radius `r` with logical stroke
    /// width `w`.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, w: f32, color: Color) {
        let (pcx, pcy, pr) = (cx * self.scale, cy * self.scale, r * self.scale);
        let half = (w * self.scale * 0.5).max(0.5);
        let outer = pr + half;
        let inner = (pr - half).max(0.0);
        let (outer2, inner2) = (outer * outer, inner * inner);
        let x0 = (pcx - outer).floor() as i32;
        let x1 = (pcx + outer).ceil() as i32;
        let y0 = (pcy - outer).floor() as i32;
        let y1 = (pcy + outer).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - pcx;
                let dy = y as f32 + 0.5 - pcy;
                let d2 = dx * dx + dy * dy;
                if d2 <= outer2 && d2 >= inner2 {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    /// Straight line segment between logical endpoints with logical width
    /// `w`. Each covered pixel is blended exactly once.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, w: f32, color: Color) {
        let (ax, ay) = (x0 * self.scale, y0 * self.scale);
        let (bx, by) = (x1 * self.scale, y1 * self.scale);
        let half = (w * self.scale * 0.5).max(0.5);
        let half2 = half * half;

        let min_x = (ax.min(bx) - half).floor() as i32;
        let max_x = (ax.max(bx) + half).ceil() as i32;
        let min_y = (ay.min(by) - half).floor() as i32;
        let max_y = (ay.max(by) + half).ceil() as i32;

        let (dx, dy) = (bx - ax, by - ay);
        let len2 = dx * dx + dy * dy;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5 - ax;
                let py = y as f32 + 0.5 - ay;
                let t = if len2 > 0.0 {
                    ((px * dx + py * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = px - t * dx;
                let ey = py - t * dy;
                if ex * ex + ey * ey <= half2 {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    /// Draws `text` with the built-in 5x7 glyph set, vertically centered on
    /// logical `y`, left edge at logical `x`. Unknown characters advance the
    /// cursor without drawing.
    pub fn text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let step = (GLYPH_W + 1) as f32;
        let top = y - GLYPH_H as f32 * 0.5;
        for (i, ch) in text.chars().enumerate() {
            let gx = x + i as f32 * step;
            if let Some(rows) = glyph(ch) {
                self.draw_glyph(gx, top, rows, color);
            }
        }
    }

    fn draw_glyph(&mut self, x: f32, y: f32, rows: &[u8; GLYPH_H], color: Color) {
        for (row, bits) in rows.iter().enumerate() {
            if *bits == 0 {
                continue;
            }
            for col in 0..GLYPH_W {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                // One glyph cell spans one logical unit: scale^2 physical px.
                let px0 = ((x + col as f32) * self.scale).round() as i32;
                let py0 = ((y + row as f32) * self.scale).round() as i32;
                let side = self.scale.ceil().max(1.0) as i32;
                for dy in 0..side {
                    for dx in 0..side {
                        self.blend_px(px0 + dx, py0 + dy, color);
                    }
                }
            }
        }
    }
}

const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;

/// 5x7 bitmap for the characters the viewer actually draws (axis labels and
/// the HUD point counter). Bit 0b10000 is the leftmost column.
fn glyph(ch: char) -> Option<&'static [u8; GLYPH_H]> {
    let rows: &[u8; GLYPH_H] = match ch {
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000],
        ':' => &[0b00000, 0b00110, 0b00110, 0b00000, 0b00110, 0b00110, 0b00000],
        'p' => &[0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'o' => &[0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'i' => &[0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'n' => &[0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b10001, 0b10001],
        't' => &[0b01000, 0b01000, 0b11110, 0b01000, 0b01000, 0b01001, 0b00110],
        's' => &[0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        _ => return None,
    };
    Some(rows)
}
