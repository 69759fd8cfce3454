use std::ops;

use crate::error::ImageError;
use crate::pixel::Pixel;

/// Number of interleaved bytes per pixel in a raw RGBA buffer.
const RGBA_CHANNELS: usize = 4;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use filterer_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of pixels covered by this size, or `None` if it overflows `usize`.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An in-memory RGBA raster.
///
/// Pixels are stored row-major: the pixel at `(x, y)` lives at index `y * width + x`.
/// The buffer length always equals `width * height` and both dimensions are non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    size: ImageSize,
    pixels: Vec<Pixel>,
}

/// Check that `size` is non-empty and addressable, returning its area.
fn checked_size(size: ImageSize) -> Result<usize, ImageError> {
    match size.checked_area() {
        Some(area) if area > 0 => Ok(area),
        _ => Err(ImageError::InvalidImageSize(size.width, size.height)),
    }
}

impl RgbaImage {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `pixels` - The pixels of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the size is zero in any dimension, its area overflows `usize`, or the number
    /// of pixels does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterer_image::{ImageSize, Pixel, RgbaImage};
    ///
    /// let image = RgbaImage::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::default(); 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        let area = checked_size(size)?;

        if pixels.len() != area {
            return Err(ImageError::InvalidPixelCount(pixels.len(), area));
        }

        Ok(Self { size, pixels })
    }

    /// Create a new image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// If the size is zero in any dimension or its area overflows `usize`, an error
    /// is returned.
    pub fn from_size_val(size: ImageSize, pixel: Pixel) -> Result<Self, ImageError> {
        let area = checked_size(size)?;
        Self::new(size, vec![pixel; area])
    }

    /// Create a new image from an interleaved RGBA8 buffer.
    ///
    /// This is the layout produced by image decoders and consumed by renderers.
    ///
    /// # Errors
    ///
    /// If the buffer length is not `width * height * 4`, or the size is zero in
    /// any dimension or too large to address, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterer_image::{ImageSize, Pixel, RgbaImage};
    ///
    /// let image = RgbaImage::from_raw_rgba(
    ///     ImageSize { width: 2, height: 1 },
    ///     &[1, 2, 3, 4, 5, 6, 7, 8],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get(1, 0), Some(&Pixel::new(5, 6, 7, 8)));
    /// ```
    pub fn from_raw_rgba(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        let expected = checked_size(size)?
            .checked_mul(RGBA_CHANNELS)
            .ok_or(ImageError::InvalidImageSize(size.width, size.height))?;
        if data.len() != expected {
            return Err(ImageError::InvalidRawLength(data.len(), expected));
        }

        let pixels = data
            .chunks_exact(RGBA_CHANNELS)
            .map(|rgba| Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]))
            .collect();

        Self::new(size, pixels)
    }

    /// Flatten the image into an interleaved RGBA8 buffer.
    pub fn to_raw_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * RGBA_CHANNELS);
        for pixel in &self.pixels {
            data.extend_from_slice(&<[u8; 4]>::from(*pixel));
        }
        data
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the pixels of the image in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the pixels of the image in row-major order, mutably.
    ///
    /// The slice cannot change length, so the size invariant is preserved.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    /// Get a reference to the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.index_of(x, y).map(|i| &self.pixels[i])
    }

    /// Get a mutable reference to the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        self.index_of(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageError> {
        self.get(x, y).copied().ok_or(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            self.width(),
            self.height(),
        ))
    }

    /// Total number of pixels in the image.
    pub fn total_pixels(&self) -> usize {
        self.size.area()
    }

    fn channel_average(&self, channel: impl Fn(&Pixel) -> u8) -> u8 {
        let sum: u64 = self.pixels.iter().map(|p| u64::from(channel(p))).sum();
        // the mean of u8 samples always fits in a u8
        (sum / self.total_pixels() as u64) as u8
    }

    /// Mean of the red channel, truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterer_image::{ImageSize, Pixel, RgbaImage};
    ///
    /// let image = RgbaImage::new(
    ///     ImageSize { width: 3, height: 1 },
    ///     vec![Pixel::rgb(1, 0, 0), Pixel::rgb(1, 0, 0), Pixel::rgb(2, 0, 0)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.avg_red(), 1);
    /// ```
    pub fn avg_red(&self) -> u8 {
        self.channel_average(|p| p.red)
    }

    /// Mean of the green channel, truncated towards zero.
    pub fn avg_green(&self) -> u8 {
        self.channel_average(|p| p.green)
    }

    /// Mean of the blue channel, truncated towards zero.
    pub fn avg_blue(&self) -> u8 {
        self.channel_average(|p| p.blue)
    }
}

/// Panics if `(x, y)` is out of bounds.
impl ops::Index<(usize, usize)> for RgbaImage {
    type Output = Pixel;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        match self.get(x, y) {
            Some(pixel) => pixel,
            None => panic!(
                "pixel index ({x}, {y}) out of bounds for image of size {}",
                self.size
            ),
        }
    }
}

/// Panics if `(x, y)` is out of bounds.
impl ops::IndexMut<(usize, usize)> for RgbaImage {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let size = self.size;
        match self.get_mut(x, y) {
            Some(pixel) => pixel,
            None => panic!("pixel index ({x}, {y}) out of bounds for image of size {size}"),
        }
    }
}
