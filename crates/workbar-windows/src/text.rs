//! Text and shape helpers for drawing into the overlay's DIB.
//!
//! GDI writes text with a zero alpha channel, which `UpdateLayeredWindow`
//! would treat as fully transparent, so every text run is followed by
//! an alpha fix over the pixels it touched.

use windows::Win32::Foundation::{COLORREF, SIZE};
use windows::Win32::Graphics::Gdi::{GetTextExtentPoint32W, HDC, SetTextColor, TextOutW};

/// An RGB color parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Parses `hex`, falling back to `default` for malformed values.
    pub fn from_hex_or(hex: &str, default: Self) -> Self {
        Self::from_hex(hex).unwrap_or(default)
    }

    fn colorref(self) -> COLORREF {
        COLORREF(u32::from(self.r) | (u32::from(self.g) << 8) | (u32::from(self.b) << 16))
    }
}

/// The GDI DC, pixel buffer, and dimensions shared by all draw helpers.
pub struct DrawCtx<'a> {
    pub dc: HDC,
    pub buf: &'a mut [u32],
    pub w: i32,
    pub h: i32,
    /// Pixel value under text runs, used to find what GDI touched.
    pub bg_pixel: u32,
}

/// Draws `text` at `x`, vertically centered, and returns the X position
/// after it.
pub fn draw_text(ctx: &mut DrawCtx, x: i32, text: &str, color: Color) -> i32 {
    if text.is_empty() {
        return x;
    }

    let wide: Vec<u16> = text.encode_utf16().collect();
    let size = measure_wide(ctx.dc, &wide);
    let y = (ctx.h - size.cy) / 2;

    unsafe {
        let _ = SetTextColor(ctx.dc, color.colorref());
        let _ = TextOutW(ctx.dc, x, y, &wide);
    }

    fix_alpha_region(ctx, x, y, size.cx, size.cy);
    x + size.cx
}

/// Draws `text` horizontally centered in the span `[x, x + width)`.
pub fn draw_text_centered(ctx: &mut DrawCtx, x: i32, width: i32, text: &str, color: Color) {
    let text_w = measure_text(ctx.dc, text);
    draw_text(ctx, x + (width - text_w) / 2, text, color);
}

/// Measures text width in pixels.
pub fn measure_text(dc: HDC, text: &str) -> i32 {
    let wide: Vec<u16> = text.encode_utf16().collect();
    measure_wide(dc, &wide).cx
}

fn measure_wide(dc: HDC, wide: &[u16]) -> SIZE {
    let mut size = SIZE::default();
    unsafe {
        let _ = GetTextExtentPoint32W(dc, wide, &mut size);
    }
    size
}

/// Fills a rounded rectangle with an opaque color.
///
/// `radius` controls corner rounding (0 = sharp corners).
pub fn draw_pill(ctx: &mut DrawCtx, x: i32, y: i32, w: i32, h: i32, fill: Color, radius: i32) {
    let fill_px = pixel_from_color(fill);
    let r = radius.min(w / 2).min(h / 2);

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(ctx.w);
    let y1 = (y + h).min(ctx.h);

    for py in y0..y1 {
        for px in x0..x1 {
            if !in_rounded_rect(px - x, py - y, w, h, r) {
                continue;
            }
            let idx = (py * ctx.w + px) as usize;
            if let Some(pixel) = ctx.buf.get_mut(idx) {
                *pixel = fill_px;
            }
        }
    }
}

/// Tests if a local coordinate is inside a `w`×`h` rounded rect with
/// corner radius `r`.
fn in_rounded_rect(lx: i32, ly: i32, w: i32, h: i32, r: i32) -> bool {
    if lx < 0 || lx >= w || ly < 0 || ly >= h {
        return false;
    }
    if r <= 0 {
        return true;
    }
    let (cx, cy) = if lx < r && ly < r {
        (r, r)
    } else if lx >= w - r && ly < r {
        (w - r - 1, r)
    } else if lx < r && ly >= h - r {
        (r, h - r - 1)
    } else if lx >= w - r && ly >= h - r {
        (w - r - 1, h - r - 1)
    } else {
        return true;
    };
    let dx = lx - cx;
    let dy = ly - cy;
    dx * dx + dy * dy <= r * r
}

/// Converts a color to a fully opaque BGRA pixel.
pub fn pixel_from_color(c: Color) -> u32 {
    0xFF00_0000 | (u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b)
}

/// Sets alpha to 0xFF for pixels in a region that no longer match the
/// background.
fn fix_alpha_region(ctx: &mut DrawCtx, rx: i32, ry: i32, rw: i32, rh: i32) {
    let x0 = rx.max(0);
    let y0 = ry.max(0);
    let x1 = (rx + rw).min(ctx.w);
    let y1 = (ry + rh).min(ctx.h);

    for py in y0..y1 {
        for px in x0..x1 {
            let idx = (py * ctx.w + px) as usize;
            if let Some(pixel) = ctx.buf.get_mut(idx)
                && *pixel != ctx.bg_pixel
            {
                *pixel |= 0xFF00_0000;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#89b4fa"), Some(Color::rgb(0x89, 0xB4, 0xFA)));
        assert_eq!(Color::from_hex("1e1e2e"), Some(Color::rgb(0x1E, 0x1E, 0x2E)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
        assert_eq!(
            Color::from_hex_or("nope", Color::rgb(1, 2, 3)),
            Color::rgb(1, 2, 3)
        );
    }

    #[test]
    fn pixels_are_opaque_bgra() {
        assert_eq!(pixel_from_color(Color::rgb(0x11, 0x22, 0x33)), 0xFF11_2233);
    }

    #[test]
    fn rounded_corners_exclude_the_outer_corner_pixel() {
        assert!(!in_rounded_rect(0, 0, 20, 20, 5));
        assert!(in_rounded_rect(5, 5, 20, 20, 5));
        assert!(in_rounded_rect(10, 0, 20, 20, 5));
        assert!(!in_rounded_rect(20, 10, 20, 20, 5));
    }
}
