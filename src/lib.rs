//! paintgrid turns RGBA images into tiled "paintings" for a game's picture-frame grid.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image file -> [`PixelBuffer`] (always RGBA8)
//! 2. **Frame** (optional): lay a green-screened frame over the image with [`composite`]
//! 3. **Tile**: spread the image over the fixed 106x70 painting grid with [`tile`]
//! 4. **Encode**: write the painting as PNG
//!
//! [`convert`] runs all four steps. [`render_painting`] runs 2 and 3 on buffers already in
//! memory.
#![forbid(unsafe_code)]

mod buffer;
mod chroma;
mod codec;
mod foundation;
mod logging;
mod pipeline;
mod scan;
mod tile;

pub use buffer::{CHANNELS, PixelBuffer};
pub use chroma::{composite, composite_in_place, is_chroma_key};
pub use codec::{decode_rgba, decode_rgba_from_memory, encode_png};
pub use foundation::error::{PaintError, PaintResult};
pub use foundation::pixel::Rgba8;
pub use logging::init_tracing;
pub use pipeline::{
    ConvertOptions, ConvertReport, FrameLibrary, FrameSelector, SizePolicy, convert,
    render_painting,
};
pub use scan::{ScanEntry, contains_chroma_key, scan_files, write_report};
pub use tile::{
    CONTENT_HEIGHT, CONTENT_WIDTH, GUTTER_PERIOD, PAINTING_HEIGHT, PAINTING_WIDTH,
    content_extent, is_gutter, tile,
};
