use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::chroma::composite_in_place;
use crate::codec::{decode_rgba, encode_png};
use crate::foundation::error::{PaintError, PaintResult};
use crate::tile::{CONTENT_HEIGHT, CONTENT_WIDTH, tile};

/// Which frame, if any, to lay over the input image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameSelector {
    None,
    Named(String),
}

impl FrameSelector {
    /// `"0"` selects no frame; anything else names `frame_<name>.png`.
    pub fn parse(s: &str) -> PaintResult<Self> {
        match s {
            "" => Err(PaintError::usage("frame selector must not be empty")),
            "0" => Ok(Self::None),
            name => Ok(Self::Named(name.to_string())),
        }
    }
}

impl std::str::FromStr for FrameSelector {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Directory of green-screened frame images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLibrary {
    pub dir: PathBuf,
}

impl FrameLibrary {
    pub const DEFAULT_DIR: &'static str = "frames_greenscreened";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        self.dir.join(format!("frame_{name}.png"))
    }
}

impl Default for FrameLibrary {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR)
    }
}

/// How strictly the input image size is checked before tiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Input must be exactly `CONTENT_WIDTH` x `CONTENT_HEIGHT`.
    #[default]
    Exact,
    /// Larger inputs are accepted and cropped to the top-left content region.
    AtLeast,
}

impl SizePolicy {
    pub fn check(self, buf: &PixelBuffer) -> PaintResult<()> {
        let (w, h) = buf.dimensions();
        let ok = match self {
            Self::Exact => w == CONTENT_WIDTH && h == CONTENT_HEIGHT,
            Self::AtLeast => w >= CONTENT_WIDTH && h >= CONTENT_HEIGHT,
        };
        if ok {
            return Ok(());
        }
        let rule = match self {
            Self::Exact => "exactly",
            Self::AtLeast => "at least",
        };
        Err(PaintError::dimension_mismatch(format!(
            "input image must be {rule} {CONTENT_WIDTH}x{CONTENT_HEIGHT} pixels, got {w}x{h}"
        )))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    pub frames: FrameLibrary,
    pub size_policy: SizePolicy,
}

/// What a successful [`convert`] read and wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    pub input_size: (u32, u32),
    pub frame_path: Option<PathBuf>,
    pub output: PathBuf,
}

/// Composite and tile already-decoded images. No IO.
pub fn render_painting(
    mut base: PixelBuffer,
    frame: Option<&PixelBuffer>,
    policy: SizePolicy,
) -> PaintResult<PixelBuffer> {
    policy.check(&base)?;
    if let Some(frame) = frame {
        composite_in_place(&mut base, frame)?;
    }
    tile(&base)
}

/// Decode `input`, apply the selected frame, tile, and write the painting to `output` as PNG.
#[tracing::instrument(skip(input, output, opts), fields(input = %input.display(), output = %output.display()))]
pub fn convert(
    input: &Path,
    output: &Path,
    frame: &FrameSelector,
    opts: &ConvertOptions,
) -> PaintResult<ConvertReport> {
    let base = decode_rgba(input)?;
    let input_size = base.dimensions();
    tracing::debug!(w = input_size.0, h = input_size.1, "decoded input");
    opts.size_policy.check(&base)?;

    let (frame_path, frame_buf) = match frame {
        FrameSelector::None => (None, None),
        FrameSelector::Named(name) => {
            let path = opts.frames.resolve(name);
            let buf = decode_rgba(&path)?;
            tracing::debug!(frame = %path.display(), "decoded frame");
            (Some(path), Some(buf))
        }
    };

    let painting = render_painting(base, frame_buf.as_ref(), opts.size_policy)?;
    encode_png(output, &painting)?;
    tracing::info!(output = %output.display(), "wrote painting");

    Ok(ConvertReport {
        input_size,
        frame_path,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::pixel::Rgba8;
    use crate::tile::{PAINTING_HEIGHT, PAINTING_WIDTH};

    #[test]
    fn frame_selector_zero_means_none() {
        assert_eq!(FrameSelector::parse("0").unwrap(), FrameSelector::None);
        assert_eq!(
            "12".parse::<FrameSelector>().unwrap(),
            FrameSelector::Named("12".to_string())
        );
        // Only the literal "0" disables the frame.
        assert_eq!(
            FrameSelector::parse("00").unwrap(),
            FrameSelector::Named("00".to_string())
        );
        assert!(matches!(
            FrameSelector::parse(""),
            Err(PaintError::Usage(_))
        ));
    }

    #[test]
    fn frame_library_uses_fixed_template() {
        let lib = FrameLibrary::default();
        assert_eq!(
            lib.resolve("3"),
            Path::new("frames_greenscreened").join("frame_3.png")
        );
        assert_eq!(
            FrameLibrary::new("/tmp/f").resolve("gold"),
            Path::new("/tmp/f/frame_gold.png")
        );
    }

    #[test]
    fn exact_policy_rejects_other_sizes() {
        let ok = PixelBuffer::new(96, 64).unwrap();
        let big = PixelBuffer::new(100, 64).unwrap();
        let small = PixelBuffer::new(96, 60).unwrap();

        assert!(SizePolicy::Exact.check(&ok).is_ok());
        assert!(matches!(
            SizePolicy::Exact.check(&big),
            Err(PaintError::DimensionMismatch(_))
        ));
        assert!(SizePolicy::AtLeast.check(&big).is_ok());
        assert!(SizePolicy::AtLeast.check(&small).is_err());
    }

    #[test]
    fn render_without_frame_tiles_base() {
        let base = PixelBuffer::filled(96, 64, Rgba8::new(0, 0, 0, 255)).unwrap();
        let out = render_painting(base, None, SizePolicy::Exact).unwrap();
        assert_eq!(out.dimensions(), (PAINTING_WIDTH, PAINTING_HEIGHT));
        assert_eq!(out.get(0, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(out.get(0, 16), Rgba8::GUTTER);
    }

    #[test]
    fn render_with_frame_applies_overlay_before_tiling() {
        let base = PixelBuffer::filled(96, 64, Rgba8::new(0, 0, 0, 255)).unwrap();
        let mut frame = PixelBuffer::filled(96, 64, Rgba8::CHROMA_KEY).unwrap();
        frame.set(16, 0, Rgba8::new(10, 20, 30, 255));

        let out = render_painting(base, Some(&frame), SizePolicy::Exact).unwrap();
        // source column 16 lands after the first gutter pair
        assert_eq!(out.get(18, 0), Rgba8::new(10, 20, 30, 255));
        assert_eq!(out.get(19, 0), Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn render_rejects_mismatched_frame() {
        let base = PixelBuffer::new(96, 64).unwrap();
        let frame = PixelBuffer::new(100, 64).unwrap();
        let err = render_painting(base, Some(&frame), SizePolicy::Exact).unwrap_err();
        assert!(matches!(err, PaintError::DimensionMismatch(_)));
    }
}
