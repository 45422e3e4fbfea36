//! Row-major RGB8 pixel buffer that the generation pipeline draws into.

use image::RgbImage;

use crate::color::Color;

pub const CHANNELS: usize = 3;

#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Canvas {
    /// Creates a canvas with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Canvas {
        let pixel_count = width as usize * height as usize;
        let mut bytes = Vec::with_capacity(pixel_count * CHANNELS);
        for _ in 0..pixel_count {
            bytes.extend_from_slice(&color.to_array());
        }

        Canvas {
            width,
            height,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the pixel bytes, three per pixel, rows top to bottom.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = self.offset(x, y);
        Color::rgb(self.bytes[idx], self.bytes[idx + 1], self.bytes[idx + 2])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.offset(x, y);
        self.bytes[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.bytes
            .chunks_exact(CHANNELS)
            .map(|p| Color::rgb(p[0], p[1], p[2]))
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.bytes.clone())
            .expect("canvas buffer length always matches its dimensions")
    }
}

impl From<RgbImage> for Canvas {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Canvas {
            width,
            height,
            bytes: image.into_raw(),
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Canvas({}x{} RGB8)", self.width, self.height)
    }
}
