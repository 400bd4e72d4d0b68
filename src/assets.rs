//! Texture loading
//!
//! Images are decoded with the `image` crate into RGBA bytes, then uploaded
//! as macroquad textures. A missing or broken file is reported and replaced
//! by a checkerboard so the demo still runs.

use std::collections::HashMap;
use std::path::Path;
use macroquad::prelude::{FilterMode, Texture2D};

pub const TEXTURE_DIR: &str = "assets/textures";

/// Drawables and the image file each one is textured with
pub const TEXTURE_FILES: [(&str, &str); 3] = [
    ("ground", "grass.jpg"),
    ("building", "container.jpg"),
    ("car", "car.png"),
];

/// Decoded RGBA image
#[derive(Debug, Clone)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
    pub name: String,
}

impl RgbaImage {
    /// Load from a PNG/JPEG/BMP file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::from_dynamic(img, name)
    }

    /// Texture sides are u16, so larger images are rejected here
    fn from_dynamic(img: image::DynamicImage, name: String) -> Result<Self, String> {
        let max = u16::MAX as u32;
        if img.width() > max || img.height() > max {
            return Err(format!(
                "Failed to load {}: {}x{} exceeds {}x{}",
                name,
                img.width(),
                img.height(),
                max,
                max
            ));
        }
        let rgba = img.to_rgba8();
        Ok(Self {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
            pixels: rgba.into_raw(),
            name,
        })
    }

    /// Two-color checkerboard with 4x4 pixel cells
    pub fn checkerboard(width: usize, height: usize, color1: [u8; 4], color2: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / 4) + (y / 4)) % 2 == 0;
                pixels.extend_from_slice(if checker { &color1 } else { &color2 });
            }
        }
        Self { width, height, pixels, name: "checkerboard".to_string() }
    }

    /// Upload to the GPU. Needs a live window.
    pub fn to_texture(&self) -> Texture2D {
        let tex = Texture2D::from_rgba8(self.width as u16, self.height as u16, &self.pixels);
        tex.set_filter(FilterMode::Nearest);
        tex
    }
}

/// Fallback colors per drawable
fn placeholder(name: &str) -> RgbaImage {
    match name {
        "ground" => RgbaImage::checkerboard(32, 32, [70, 120, 60, 255], [60, 100, 50, 255]),
        "building" => RgbaImage::checkerboard(32, 32, [150, 110, 70, 255], [120, 85, 55, 255]),
        _ => RgbaImage::checkerboard(32, 32, [200, 40, 40, 255], [160, 30, 30, 255]),
    }
}

/// Decode one drawable's image, or its placeholder on failure
pub fn load_image_or_placeholder(dir: &Path, name: &str, file: &str) -> RgbaImage {
    match RgbaImage::from_file(dir.join(file)) {
        Ok(img) => {
            println!("Loaded texture: {} ({}x{})", img.name, img.width, img.height);
            img
        }
        Err(e) => {
            eprintln!("{}, using placeholder", e);
            placeholder(name)
        }
    }
}

/// Uploaded textures keyed by drawable name
pub struct TextureSet {
    textures: HashMap<String, Texture2D>,
    fallback: Texture2D,
}

impl TextureSet {
    pub fn load<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let textures = TEXTURE_FILES
            .iter()
            .map(|(name, file)| (name.to_string(), load_image_or_placeholder(dir, name, file).to_texture()))
            .collect();

        Self {
            textures,
            fallback: placeholder("").to_texture(),
        }
    }

    pub fn get(&self, name: &str) -> &Texture2D {
        self.textures.get(name).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_layout() {
        let img = RgbaImage::checkerboard(8, 8, [1, 1, 1, 255], [2, 2, 2, 255]);
        assert_eq!(img.pixels.len(), 8 * 8 * 4);
        assert_eq!(img.pixels[0], 1);
        // Pixel (4, 0) is in the next cell
        assert_eq!(img.pixels[4 * 4], 2);
        // Pixel (4, 4) wraps back to the first color
        assert_eq!(img.pixels[(4 * 8 + 4) * 4], 1);
    }

    #[test]
    fn test_missing_file_uses_placeholder() {
        let img = load_image_or_placeholder(Path::new("no/such/dir"), "ground", "grass.jpg");
        assert_eq!(img.name, "checkerboard");
        assert_eq!((img.width, img.height), (32, 32));
    }

    #[test]
    fn test_oversized_image_rejected() {
        let wide = image::DynamicImage::new_rgba8(u16::MAX as u32 + 1, 1);
        assert!(RgbaImage::from_dynamic(wide, "wide".to_string()).is_err());

        let edge = image::DynamicImage::new_rgba8(u16::MAX as u32, 1);
        let img = RgbaImage::from_dynamic(edge, "edge".to_string()).unwrap();
        assert_eq!((img.width, img.height), (65535, 1));
    }
}
