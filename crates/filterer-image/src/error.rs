/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image has a zero width or height, or too many pixels to address.
    #[error("Invalid image size: width ({0}) and height ({1}) must be non-zero and their product must fit in usize")]
    InvalidImageSize(usize, usize),

    /// Error when the pixel buffer does not match the image size.
    #[error("Pixel count ({0}) does not match the image size ({1})")]
    InvalidPixelCount(usize, usize),

    /// Error when an interleaved RGBA buffer does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidRawLength(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
