use crate::buffer::PixelBuffer;
use crate::foundation::error::{PaintError, PaintResult};
use crate::foundation::pixel::Rgba8;

/// Exact match against [`Rgba8::CHROMA_KEY`] on all four channels.
pub fn is_chroma_key(px: Rgba8) -> bool {
    px == Rgba8::CHROMA_KEY
}

/// Overlay `frame` onto `base` in place.
///
/// Chroma-key pixels in the frame leave the base pixel unchanged; every other frame pixel
/// replaces the base pixel verbatim, alpha included. Returns the number of replaced pixels.
#[tracing::instrument(skip(base, frame), fields(w = base.width(), h = base.height()))]
pub fn composite_in_place(base: &mut PixelBuffer, frame: &PixelBuffer) -> PaintResult<usize> {
    if base.dimensions() != frame.dimensions() {
        return Err(PaintError::dimension_mismatch(format!(
            "frame is {}x{} but image is {}x{}",
            frame.width(),
            frame.height(),
            base.width(),
            base.height()
        )));
    }

    let mut replaced = 0usize;
    for (dst, src) in base.pixels_mut().zip(frame.pixels()) {
        if is_chroma_key(src) {
            continue;
        }
        dst.copy_from_slice(&src.to_array());
        replaced += 1;
    }

    tracing::debug!(replaced, "applied frame overlay");
    Ok(replaced)
}

/// By-value form of [`composite_in_place`].
pub fn composite(mut base: PixelBuffer, frame: &PixelBuffer) -> PaintResult<PixelBuffer> {
    composite_in_place(&mut base, frame)?;
    Ok(base)
}
