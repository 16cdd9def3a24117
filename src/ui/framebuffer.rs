//! Framebuffers
//!
//! Two fixed-size byte arrays back the panel: a 7-page main frame and a
//! one-page status strip. Each byte encodes one vertical 8-pixel column
//! slice, matching the controller's page-addressed layout, so the buffers
//! blit to the panel unchanged.
//!
//! All writes go through a bounds-checked blit-at-offset primitive; a
//! write that would overflow is skipped in full and the buffer tail is
//! left untouched.

use crate::config::{FRAME_BUFFER_SIZE, FRAME_PAGES, LCD_WIDTH};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Pixel height of the main frame
pub const FRAME_HEIGHT: usize = FRAME_PAGES * 8;

/// Main-screen framebuffer (7 pages × 128 columns)
pub struct FrameBuffer {
    bytes: [u8; FRAME_BUFFER_SIZE],
}

impl FrameBuffer {
    /// Create a cleared framebuffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BUFFER_SIZE],
        }
    }

    /// Clear all pixels
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Copy a glyph slice to a byte offset.
    ///
    /// Returns `false` without writing when the slice would overflow.
    pub fn blit(&mut self, offset: usize, src: &[u8]) -> bool {
        let Some(end) = offset.checked_add(src.len()) else {
            return false;
        };
        if end > FRAME_BUFFER_SIZE {
            return false;
        }
        self.bytes[offset..end].copy_from_slice(src);
        true
    }

    /// Set a single pixel; coordinates outside the frame are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= LCD_WIDTH || y >= FRAME_HEIGHT {
            return;
        }

        let byte_idx = (y / 8) * LCD_WIDTH + x;
        let bit = 1 << (y % 8);

        if on {
            self.bytes[byte_idx] |= bit;
        } else {
            self.bytes[byte_idx] &= !bit;
        }
    }

    /// Get the raw buffer
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement `DrawTarget` so the text path renders straight into the frame
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.x < LCD_WIDTH as i32
                && coord.y >= 0
                && coord.y < FRAME_HEIGHT as i32
            {
                self.set_pixel(coord.x as usize, coord.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(LCD_WIDTH as u32, FRAME_HEIGHT as u32)
    }
}

/// One-page status strip (128 columns)
pub struct StatusLine {
    bytes: [u8; LCD_WIDTH],
}

impl StatusLine {
    /// Create a cleared status line
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: [0; LCD_WIDTH] }
    }

    /// Clear all pixels
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Copy a glyph slice to a column offset.
    ///
    /// Returns `false` without writing when the slice would overflow.
    pub fn blit(&mut self, offset: usize, src: &[u8]) -> bool {
        let Some(end) = offset.checked_add(src.len()) else {
            return false;
        };
        if end > LCD_WIDTH {
            return false;
        }
        self.bytes[offset..end].copy_from_slice(src);
        true
    }

    /// Get the raw buffer
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
