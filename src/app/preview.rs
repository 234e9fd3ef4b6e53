use crate::error::PreviewError;
use derivative::Derivative;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use image::GenericImageView;

/// Longest edge of the decoded preview, in pixels.
const PREVIEW_EDGE: u32 = 720;

/// Decoded pixels for the selected file, uploaded to the GPU on first draw.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct PreviewHandle {
    name: String,
    #[derivative(Debug = "ignore")]
    image: ColorImage,
    #[derivative(Debug = "ignore")]
    texture: Option<TextureHandle>,
}

impl PreviewHandle {
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<Self, PreviewError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = if decoded.width() > PREVIEW_EDGE || decoded.height() > PREVIEW_EDGE {
            decoded.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE).to_rgba8()
        } else {
            decoded.to_rgba8()
        };
        let size = [rgba.width() as usize, rgba.height() as usize];

        Ok(Self {
            name: name.into(),
            image: ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
            texture: None,
        })
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn texture(&mut self, ctx: &egui::Context) -> &TextureHandle {
        let Self {
            name,
            image,
            texture,
        } = self;
        texture.get_or_insert_with(|| {
            ctx.load_texture(name.as_str(), image.clone(), TextureOptions::LINEAR)
        })
    }
}

#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 90, 90, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}
