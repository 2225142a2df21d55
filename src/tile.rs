//! Painting grid layout.
//!
//! A painting is a 106x70 image made of 18px cells. The last two rows and columns of every
//! cell are transparent dividers; only the remaining 16x16 are drawn from the source.

use crate::buffer::PixelBuffer;
use crate::foundation::error::{PaintError, PaintResult};
use crate::foundation::pixel::Rgba8;

pub const PAINTING_WIDTH: u32 = 106;
pub const PAINTING_HEIGHT: u32 = 70;

/// Distance between the starts of consecutive gutters, in pixels.
pub const GUTTER_PERIOD: u32 = 18;

/// Source columns consumed per painting row.
pub const CONTENT_WIDTH: u32 = content_extent(PAINTING_WIDTH);
/// Source rows consumed per painting.
pub const CONTENT_HEIGHT: u32 = content_extent(PAINTING_HEIGHT);

/// True if row or column `index` of the painting is a divider.
pub const fn is_gutter(index: u32) -> bool {
    let r = index % GUTTER_PERIOD;
    r == GUTTER_PERIOD - 2 || r == GUTTER_PERIOD - 1
}

/// Number of non-gutter indices in `0..len`.
pub const fn content_extent(len: u32) -> u32 {
    let mut n = 0;
    let mut i = 0;
    while i < len {
        if !is_gutter(i) {
            n += 1;
        }
        i += 1;
    }
    n
}

/// Lay `source` out on the painting grid.
///
/// Content positions are filled in row-major order from the top-left
/// `CONTENT_WIDTH` x `CONTENT_HEIGHT` region of `source`; anything to the right or below
/// is ignored. Sources smaller than that region are rejected.
#[tracing::instrument(skip(source), fields(w = source.width(), h = source.height()))]
pub fn tile(source: &PixelBuffer) -> PaintResult<PixelBuffer> {
    if source.width() < CONTENT_WIDTH || source.height() < CONTENT_HEIGHT {
        return Err(PaintError::dimension_mismatch(format!(
            "painting needs at least {CONTENT_WIDTH}x{CONTENT_HEIGHT} source pixels, got {}x{}",
            source.width(),
            source.height()
        )));
    }

    let mut dest = PixelBuffer::new(PAINTING_WIDTH, PAINTING_HEIGHT)?;
    let mut src_y = 0;
    for y in 0..PAINTING_HEIGHT {
        if is_gutter(y) {
            for x in 0..PAINTING_WIDTH {
                dest.set(x, y, Rgba8::GUTTER);
            }
            continue;
        }

        let mut src_x = 0;
        for x in 0..PAINTING_WIDTH {
            if is_gutter(x) {
                dest.set(x, y, Rgba8::GUTTER);
                continue;
            }
            dest.set(x, y, source.get(src_x, src_y));
            src_x += 1;
        }
        src_y += 1;
    }

    tracing::debug!(rows = src_y, cols = CONTENT_WIDTH, "tiled painting");
    Ok(dest)
}
