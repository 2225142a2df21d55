use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::foundation::error::{PaintError, PaintResult};

/// Decode an image file into RGBA8, whatever its stored channel layout.
pub fn decode_rgba(path: &Path) -> PaintResult<PixelBuffer> {
    let bytes = std::fs::read(path)
        .map_err(|e| PaintError::decode(format!("read '{}': {e}", path.display())))?;
    let dyn_img = image::load_from_memory(&bytes)
        .map_err(|e| PaintError::decode(format!("'{}': {e}", path.display())))?;
    into_buffer(dyn_img)
}

pub fn decode_rgba_from_memory(bytes: &[u8]) -> PaintResult<PixelBuffer> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| PaintError::decode(e.to_string()))?;
    into_buffer(dyn_img)
}

fn into_buffer(dyn_img: image::DynamicImage) -> PaintResult<PixelBuffer> {
    let rgba = dyn_img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::trace!(width, height, "decoded image");
    PixelBuffer::from_flat_bytes(rgba.into_raw(), width, height)
}

/// Write `buf` as PNG. The file extension is not consulted.
pub fn encode_png(path: &Path, buf: &PixelBuffer) -> PaintResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PaintError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        buf.to_flat_bytes(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PaintError::encode(format!("write png '{}': {e}", path.display())))
}
