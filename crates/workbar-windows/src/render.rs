//! DIB rendering of the overlay.
//!
//! Draws the previous/next buttons, the desktop markers and the
//! foreground title into a 32-bit BGRA bitmap, then presents it with
//! `UpdateLayeredWindow`. Hover opacity is applied as the constant
//! alpha of the blend, so the bitmap itself stays opaque.

use std::mem;

use windows::Win32::Foundation::{COLORREF, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION,
    CreateCompatibleDC, CreateDIBSection, CreateFontW, DIB_RGB_COLORS, DeleteDC, DeleteObject,
    FONT_CHARSET, FONT_CLIP_PRECISION, FONT_OUTPUT_PRECISION, FONT_QUALITY, GetDC, HDC,
    ReleaseDC, SelectObject, SetBkMode, TRANSPARENT,
};
use windows::Win32::UI::WindowsAndMessaging::{ULW_ALPHA, UpdateLayeredWindow};
use windows::core::PCWSTR;

use workbar_core::config::OverlayConfig;
use workbar_core::desktop::ACTIVE_MARKER;
use workbar_core::overlay::OverlayView;

use crate::text::{self, Color, DrawCtx};

const PREV_GLYPH: &str = "‹";
const NEXT_GLYPH: &str = "›";

/// Space between the previous button and the first marker.
const PADDING: i32 = 8;
const MARKER_SPACING: i32 = 4;
const TITLE_GAP: i32 = 12;

/// Renders the overlay content and applies it to the layered window.
pub fn render_overlay(hwnd: HWND, config: &OverlayConfig, view: &OverlayView) {
    let (w, h) = (config.width, config.height);
    if w <= 0 || h <= 0 {
        return;
    }

    let colors = &config.colors;
    let bg = Color::from_hex_or(&colors.background, Color::rgb(0x1e, 0x1e, 0x2e));
    let fg = Color::from_hex_or(&colors.foreground, Color::rgb(0xcd, 0xd6, 0xf4));
    let active = Color::from_hex_or(&colors.active, Color::rgb(0x89, 0xb4, 0xfa));
    let button = Color::from_hex_or(&colors.button, Color::rgb(0x31, 0x32, 0x44));
    let alpha = (u32::from(config.opacity(view.hovered)) * 255 / 100) as u8;

    unsafe {
        let screen_dc = GetDC(None);
        let mem_dc = CreateCompatibleDC(Some(screen_dc));

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: w,
                biHeight: -h,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits = std::ptr::null_mut();
        let Ok(bmp) = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
        else {
            workbar_core::log_warn!("overlay render: CreateDIBSection failed");
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        };
        if bits.is_null() {
            let _ = DeleteObject(bmp.into());
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        }

        let old_bmp = SelectObject(mem_dc, bmp.into());

        // Corners outside the rounded background stay fully transparent.
        let buf = std::slice::from_raw_parts_mut(bits as *mut u32, (w * h) as usize);
        buf.fill(0);

        let font_wide: Vec<u16> = config
            .font
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        let font = CreateFontW(
            config.font_size,
            0,
            0,
            0,
            400,
            0,
            0,
            0,
            FONT_CHARSET(0),
            FONT_OUTPUT_PRECISION(0),
            FONT_CLIP_PRECISION(0),
            FONT_QUALITY(0),
            0,
            PCWSTR(font_wide.as_ptr()),
        );
        let old_font = SelectObject(mem_dc, font.into());
        let _ = SetBkMode(mem_dc, TRANSPARENT);

        let mut ctx = DrawCtx {
            dc: mem_dc,
            buf,
            w,
            h,
            bg_pixel: text::pixel_from_color(bg),
        };

        text::draw_pill(&mut ctx, 0, 0, w, h, bg, h / 4);
        draw_content(&mut ctx, config, view, fg, active, button);

        apply_layered(hwnd, screen_dc, mem_dc, w, h, alpha);

        SelectObject(mem_dc, old_font);
        let _ = DeleteObject(font.into());
        SelectObject(mem_dc, old_bmp);
        let _ = DeleteObject(bmp.into());
        let _ = DeleteDC(mem_dc);
        let _ = ReleaseDC(None, screen_dc);
    }
}

/// Buttons at both ends, markers and title in between.
fn draw_content(
    ctx: &mut DrawCtx,
    config: &OverlayConfig,
    view: &OverlayView,
    fg: Color,
    active: Color,
    button: Color,
) {
    let (w, h) = (ctx.w, ctx.h);
    let bw = config.button_width;

    if bw > 0 {
        let inset = 4.min(h / 4);
        let radius = h / 4;
        text::draw_pill(ctx, inset, inset, bw - inset, h - 2 * inset, button, radius);
        text::draw_pill(ctx, w - bw, inset, bw - inset, h - 2 * inset, button, radius);
        // Text lands on the button fill, not the background.
        let saved = ctx.bg_pixel;
        ctx.bg_pixel = text::pixel_from_color(button);
        text::draw_text_centered(ctx, 0, bw, PREV_GLYPH, fg);
        text::draw_text_centered(ctx, w - bw, bw, NEXT_GLYPH, fg);
        ctx.bg_pixel = saved;
    }

    let mut x = bw + PADDING;
    for marker in view.indicator.markers() {
        let color = if marker == ACTIVE_MARKER { active } else { fg };
        x = text::draw_text(ctx, x, marker.encode_utf8(&mut [0; 4]), color) + MARKER_SPACING;
    }

    if !view.title.is_empty() {
        if view.indicator.count > 0 {
            x += TITLE_GAP - MARKER_SPACING;
        }
        text::draw_text(ctx, x, &view.title, fg);
    }
}

/// Calls `UpdateLayeredWindow` to present the bitmap at `alpha`.
///
/// The window keeps its current position; only the surface changes.
unsafe fn apply_layered(hwnd: HWND, screen_dc: HDC, mem_dc: HDC, w: i32, h: i32, alpha: u8) {
    let blend = BLENDFUNCTION {
        // AC_SRC_OVER with per-pixel AC_SRC_ALPHA.
        BlendOp: 0,
        SourceConstantAlpha: alpha,
        AlphaFormat: 1,
        ..Default::default()
    };
    unsafe {
        let _ = UpdateLayeredWindow(
            hwnd,
            Some(screen_dc),
            None,
            Some(&SIZE { cx: w, cy: h }),
            Some(mem_dc),
            Some(&POINT::default()),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        );
    }
}
