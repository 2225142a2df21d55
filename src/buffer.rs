use crate::foundation::error::{PaintError, PaintResult};
use crate::foundation::pixel::Rgba8;

/// Bytes per pixel. Buffers are always RGBA8.
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image, row-major and tightly packed.
///
/// The shape is fixed at construction. [`PixelBuffer::get`] and [`PixelBuffer::set`]
/// panic on out-of-range coordinates instead of clamping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Self::filled(width, height, Rgba8::default())
    }

    /// Allocate a buffer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> PaintResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            PaintError::allocation(format!("reserve {width}x{height} rgba8 buffer: {e}"))
        })?;
        let px = px.to_array();
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&px);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Reinterpret a row-major RGBA8 byte vector as a `width` x `height` buffer.
    pub fn from_flat_bytes(data: Vec<u8>, width: u32, height: u32) -> PaintResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(PaintError::dimension_mismatch(format!(
                "expected {expected} bytes for {width}x{height} rgba8, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major RGBA8 bytes.
    pub fn to_flat_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_flat_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    pub fn set(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px.to_array());
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
    }

    pub(crate) fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }
}

fn byte_len(width: u32, height: u32) -> PaintResult<usize> {
    if width == 0 || height == 0 {
        return Err(PaintError::dimension_mismatch(format!(
            "buffer dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| PaintError::allocation(format!("{width}x{height} buffer size overflow")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_transparent_black() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.to_flat_bytes().len(), 3 * 2 * 4);
        assert!(buf.pixels().all(|px| px == Rgba8::new(0, 0, 0, 0)));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 4),
            Err(PaintError::DimensionMismatch(_))
        ));
        assert!(matches!(
            PixelBuffer::new(4, 0),
            Err(PaintError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn from_flat_bytes_indexes_row_major() {
        // 2x2: (0,0) red, (1,0) green, (0,1) blue, (1,1) white
        let bytes = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let buf = PixelBuffer::from_flat_bytes(bytes.clone(), 2, 2).unwrap();
        assert_eq!(buf.get(1, 0), Rgba8::new(0, 255, 0, 255));
        assert_eq!(buf.get(0, 1), Rgba8::new(0, 0, 255, 255));
        assert_eq!(buf.into_flat_bytes(), bytes);
    }

    #[test]
    fn from_flat_bytes_rejects_wrong_length() {
        let err = PixelBuffer::from_flat_bytes(vec![0; 15], 2, 2).unwrap_err();
        assert!(matches!(err, PaintError::DimensionMismatch(_)));
    }

    #[test]
    fn set_then_get_touches_only_target_pixel() {
        let mut buf = PixelBuffer::filled(4, 3, Rgba8::new(9, 9, 9, 9)).unwrap();
        buf.set(3, 2, Rgba8::new(1, 2, 3, 4));
        assert_eq!(buf.get(3, 2), Rgba8::new(1, 2, 3, 4));
        assert_eq!(buf.pixels().filter(|&px| px == Rgba8::new(9, 9, 9, 9)).count(), 11);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        let _ = buf.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(0, 2, Rgba8::GUTTER);
    }
}
