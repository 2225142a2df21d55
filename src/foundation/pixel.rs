/// Straight (non-premultiplied) RGBA8 pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Pure opaque green. In a frame image it marks "show the base image here".
    pub const CHROMA_KEY: Self = Self::new(0, 255, 0, 255);

    /// Divider pixel written between painting tiles: white, fully transparent.
    pub const GUTTER: Self = Self::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(px: Rgba8) -> Self {
        px.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_constants_match_channel_values() {
        assert_eq!(Rgba8::CHROMA_KEY.to_array(), [0, 255, 0, 255]);
        assert_eq!(Rgba8::GUTTER.to_array(), [255, 255, 255, 0]);
    }

    #[test]
    fn array_conversions_preserve_channel_order() {
        let px = Rgba8::from([1, 2, 3, 4]);
        assert_eq!(px, Rgba8::new(1, 2, 3, 4));
        assert_eq!(<[u8; 4]>::from(px), [1, 2, 3, 4]);
    }
}
