use std::path::Path;

use filterer_image::{ImageSize, RgbaImage};
use image::ImageEncoder;

use crate::error::IoError;

/// Decodes an encoded image into an RGBA raster.
///
/// The format is guessed from the data, any image with or without alpha is converted
/// to 8-bit RGBA.
///
/// # Arguments
///
/// * `bytes` - The encoded image data.
///
/// # Errors
///
/// Returns [`IoError::ImageDecodeError`] if the data is not a supported image.
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<RgbaImage, IoError> {
    let img = image::load_from_memory(bytes).map_err(IoError::ImageDecodeError)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {:?} image of {}", img.color(), size);

    Ok(RgbaImage::from_raw_rgba(size, img.into_rgba8().as_raw())?)
}

/// Reads an image from the given file path into an RGBA raster.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA image containing the image data.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<RgbaImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;

    decode_image_rgba8(&bytes)
}

/// PNG stores dimensions as `u32`.
fn png_dimensions(size: ImageSize) -> Result<(u32, u32), IoError> {
    match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(IoError::ImageEncodeError(image::ImageError::Limits(
            image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError),
        ))),
    }
}

/// Encodes an RGBA raster as PNG.
///
/// # Arguments
///
/// * `image` - The image to encode.
///
/// # Returns
///
/// The PNG encoded bytes.
///
/// # Errors
///
/// Returns [`IoError::ImageEncodeError`] if a dimension does not fit in `u32`.
pub fn encode_image_png(image: &RgbaImage) -> Result<Vec<u8>, IoError> {
    let (width, height) = png_dimensions(image.size())?;
    let mut buf = Vec::new();

    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            &image.to_raw_rgba(),
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(IoError::ImageEncodeError)?;

    Ok(buf)
}

/// Writes an RGBA raster to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to write.
pub fn write_image_png(file_path: impl AsRef<Path>, image: &RgbaImage) -> Result<(), IoError> {
    let png_data = encode_image_png(image)?;

    std::fs::write(file_path, png_data)?;

    Ok(())
}
