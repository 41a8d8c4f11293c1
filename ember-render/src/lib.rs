use std::fmt;
use std::io::Cursor;

use ab_glyph::{FontRef, PxScale};
use anyhow::Context as _;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use ember_utils::text::truncate_chars;

/// Profile card dimensions in pixels.
pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 200;

/// Characters of bio shown on the card; storage keeps up to 200.
pub const BIO_DISPLAY_CHARS: usize = 30;

const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_SCALE: f32 = 16.0;
const LINE_X: i32 = 20;
const LINE_YS: [i32; 5] = [20, 50, 80, 110, 140];

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Rasterizes profile cards. Constructed once at startup and shared via `Data`.
#[derive(Clone)]
pub struct CardRenderer {
    font: FontRef<'static>,
}

impl CardRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let font =
            FontRef::try_from_slice(FONT_BYTES).context("failed to parse bundled card font")?;
        Ok(Self { font })
    }

    /// Render the fixed-layout profile card as PNG bytes.
    pub fn render_profile_card(
        &self,
        display_name: &str,
        xp: i64,
        level: i64,
        messages: i64,
        bio: &str,
    ) -> anyhow::Result<Vec<u8>> {
        let mut img = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);

        let lines = [
            format!("Profile: {display_name}"),
            format!("XP: {xp}"),
            format!("Level: {level}"),
            format!("Messages: {messages}"),
            format!("Bio: {}", truncate_chars(bio, BIO_DISPLAY_CHARS)),
        ];

        for (line, y) in lines.iter().zip(LINE_YS) {
            draw_text_mut(
                &mut img,
                TEXT_COLOR,
                LINE_X,
                y,
                PxScale::from(TEXT_SCALE),
                &self.font,
                line,
            );
        }

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("failed to encode profile card png")?;
        Ok(bytes)
    }
}

impl fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRenderer").finish_non_exhaustive()
    }
}
