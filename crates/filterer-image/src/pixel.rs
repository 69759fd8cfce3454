/// A single RGBA sample with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use filterer_image::Pixel;
///
/// let pixel = Pixel::new(10, 20, 30, 255);
///
/// assert_eq!(pixel.red, 10);
/// assert_eq!(pixel.alpha, 255);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel.
    pub alpha: u8,
}

impl Pixel {
    /// Create a new pixel from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque pixel.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// The gray value of the pixel.
    ///
    /// Computed as `red + green + blue / 3` with integer division on the blue channel
    /// only, saturated to the [0, 255] range. This is not a luminance average and the
    /// grayscale filter relies on this exact formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterer_image::Pixel;
    ///
    /// assert_eq!(Pixel::rgb(10, 20, 31).gray(), 40);
    /// assert_eq!(Pixel::rgb(200, 100, 0).gray(), 255);
    /// ```
    pub fn gray(&self) -> u8 {
        let gray = i32::from(self.red) + i32::from(self.green) + i32::from(self.blue) / 3;
        gray.clamp(0, 255) as u8
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        [pixel.red, pixel.green, pixel.blue, pixel.alpha]
    }
}
