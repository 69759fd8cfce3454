//! Per-pixel filters.
//!
//! Each filter clamps its parameter to its own bounds, rewrites the color channels of
//! every pixel in place and saturates the result to [0, 255]. Alpha is never touched.
//! The bounds here are independent of [`FilterKind::range`], which describes the user
//! facing slider and is wider for [`greenish`] and [`blueish`].

use filterer_image::RgbaImage;

use crate::filter_kind::FilterKind;
use crate::parallel::{self, ExecutionStrategy};

#[inline]
fn saturate(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[inline]
fn offset(channel: u8, parameter: i32) -> u8 {
    saturate(parameter + i32::from(channel))
}

/// Replace the color channels with the pixel gray value plus `parameter`.
///
/// dst(x,y,c) = clamp(parameter + gray(src(x,y)))
///
/// The parameter is clamped to [-100, 100]. See [`filterer_image::Pixel::gray`] for the gray value.
///
/// # Example
///
/// ```
/// use filterer_image::{Pixel, RgbaImage};
/// use filterer_imgproc::engine::grayscale;
/// use filterer_imgproc::ExecutionStrategy;
///
/// let mut image = RgbaImage::from_size_val([2, 2].into(), Pixel::rgb(10, 20, 30)).unwrap();
///
/// grayscale(&mut image, 0, ExecutionStrategy::default());
///
/// assert_eq!(image[(1, 1)], Pixel::rgb(40, 40, 40));
/// ```
pub fn grayscale(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(-100, 100);
    parallel::for_each_pixel(image, strategy, |pixel| {
        let gray = offset(pixel.gray(), parameter);
        pixel.red = gray;
        pixel.green = gray;
        pixel.blue = gray;
    });
}

/// Invert the color channels, darkened by `parameter`.
///
/// dst(x,y,c) = clamp(255 - parameter - src(x,y,c))
///
/// The parameter is clamped to [0, 10].
pub fn negative(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(0, 10);
    let invert = |channel: u8| saturate(255 - parameter - i32::from(channel));
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.red = invert(pixel.red);
        pixel.green = invert(pixel.green);
        pixel.blue = invert(pixel.blue);
    });
}

/// Add `parameter` to the color channels.
///
/// dst(x,y,c) = clamp(parameter + src(x,y,c))
///
/// The parameter is clamped to [-100, 100].
///
/// # Example
///
/// ```
/// use filterer_image::{Pixel, RgbaImage};
/// use filterer_imgproc::engine::brightness;
/// use filterer_imgproc::ExecutionStrategy;
///
/// let mut image = RgbaImage::from_size_val([1, 1].into(), Pixel::rgb(10, 10, 10)).unwrap();
///
/// brightness(&mut image, 100, ExecutionStrategy::Serial);
/// assert_eq!(image[(0, 0)], Pixel::rgb(110, 110, 110));
///
/// brightness(&mut image, -500, ExecutionStrategy::Serial);
/// assert_eq!(image[(0, 0)], Pixel::rgb(10, 10, 10));
/// ```
pub fn brightness(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(-100, 100);
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.red = offset(pixel.red, parameter);
        pixel.green = offset(pixel.green, parameter);
        pixel.blue = offset(pixel.blue, parameter);
    });
}

/// Scale the color channels around 0.5.
///
/// dst(x,y,c) = clamp(parameter * (src(x,y,c) - 0.5) + 0.5)
///
/// The parameter is clamped to [0.0, 3.0], a NaN parameter behaves as 0.0. The result
/// is computed in floating point and truncated towards zero, so a parameter of 1.0 is
/// the identity.
pub fn contrast(image: &mut RgbaImage, parameter: f64, strategy: ExecutionStrategy) {
    let parameter = if parameter.is_nan() {
        0.0
    } else {
        parameter.clamp(0.0, 3.0)
    };
    let scale = |channel: u8| {
        let value = parameter * (f64::from(channel) - 0.5) + 0.5;
        value.clamp(0.0, 255.0) as u8
    };
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.red = scale(pixel.red);
        pixel.green = scale(pixel.green);
        pixel.blue = scale(pixel.blue);
    });
}

/// Add `parameter` to the red channel only.
///
/// The parameter is clamped to [0, 150].
pub fn reddish(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(0, 150);
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.red = offset(pixel.red, parameter);
    });
}

/// Add `parameter` to the green channel only.
///
/// The parameter is clamped to [1, 5].
pub fn greenish(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(1, 5);
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.green = offset(pixel.green, parameter);
    });
}

/// Add `parameter` to the blue channel only.
///
/// The parameter is clamped to [1, 5].
pub fn blueish(image: &mut RgbaImage, parameter: i32, strategy: ExecutionStrategy) {
    let parameter = parameter.clamp(1, 5);
    parallel::for_each_pixel(image, strategy, |pixel| {
        pixel.blue = offset(pixel.blue, parameter);
    });
}

/// Apply the filter `kind` to the image in place.
///
/// Contrast takes the real parameter as is. Every other filter truncates it towards
/// zero first, saturating at the `i32` bounds, NaN becomes 0.
pub fn apply(
    image: &mut RgbaImage,
    kind: FilterKind,
    parameter: f64,
    strategy: ExecutionStrategy,
) {
    let integral = parameter as i32;
    match kind {
        FilterKind::GrayScale => grayscale(image, integral, strategy),
        FilterKind::Negative => negative(image, integral, strategy),
        FilterKind::Brightness => brightness(image, integral, strategy),
        FilterKind::Contrast => contrast(image, parameter, strategy),
        FilterKind::Reddish => reddish(image, integral, strategy),
        FilterKind::Greenish => greenish(image, integral, strategy),
        FilterKind::Blueish => blueish(image, integral, strategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterer_image::{ImageError, Pixel};

    const S: ExecutionStrategy = ExecutionStrategy::Serial;

    fn apply_pixel(pixel: Pixel, kind: FilterKind, parameter: f64) -> Pixel {
        let mut image = RgbaImage::from_size_val([1, 1].into(), pixel).unwrap();
        apply(&mut image, kind, parameter, S);
        image[(0, 0)]
    }

    fn single(pixel: Pixel) -> Result<RgbaImage, ImageError> {
        RgbaImage::from_size_val([1, 1].into(), pixel)
    }

    fn sample() -> Result<RgbaImage, ImageError> {
        RgbaImage::new(
            [3, 2].into(),
            vec![
                Pixel::new(0, 0, 0, 0),
                Pixel::new(255, 255, 255, 255),
                Pixel::new(10, 20, 30, 40),
                Pixel::new(200, 100, 50, 128),
                Pixel::new(1, 254, 128, 7),
                Pixel::new(90, 3, 251, 255),
            ],
        )
    }

    #[test]
    fn test_grayscale() -> Result<(), ImageError> {
        let mut image = single(Pixel::new(10, 20, 30, 99))?;
        grayscale(&mut image, 0, S);
        assert_eq!(image[(0, 0)], Pixel::new(40, 40, 40, 99));

        let mut image = single(Pixel::rgb(10, 20, 30))?;
        grayscale(&mut image, -50, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(0, 0, 0));

        // parameter clamps at 100
        let mut image = single(Pixel::rgb(10, 20, 30))?;
        grayscale(&mut image, 1000, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(140, 140, 140));
        Ok(())
    }

    #[test]
    fn test_grayscale_formula() -> Result<(), ImageError> {
        let mut image = sample()?;
        let expected: Vec<u8> = image
            .as_slice()
            .iter()
            .map(|p| {
                let gray = i32::from(p.red) + i32::from(p.green) + i32::from(p.blue) / 3;
                gray.clamp(0, 255) as u8
            })
            .collect();
        grayscale(&mut image, 0, S);
        for (pixel, gray) in image.as_slice().iter().zip(expected) {
            assert_eq!((pixel.red, pixel.green, pixel.blue), (gray, gray, gray));
        }
        Ok(())
    }

    #[test]
    fn test_negative() -> Result<(), ImageError> {
        let mut image = single(Pixel::new(0, 100, 255, 17))?;
        negative(&mut image, 0, S);
        assert_eq!(image[(0, 0)], Pixel::new(255, 155, 0, 17));

        let mut image = single(Pixel::rgb(0, 100, 250))?;
        negative(&mut image, 200, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(245, 145, 0));

        let mut image = single(Pixel::rgb(0, 100, 250))?;
        negative(&mut image, -3, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(255, 155, 5));
        Ok(())
    }

    #[test]
    fn test_brightness() -> Result<(), ImageError> {
        let mut image = single(Pixel::rgb(10, 10, 10))?;
        brightness(&mut image, 100, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(110, 110, 110));

        let mut image = single(Pixel::rgb(10, 10, 10))?;
        brightness(&mut image, -100, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(0, 0, 0));

        let mut image = single(Pixel::rgb(200, 10, 10))?;
        brightness(&mut image, 300, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(255, 110, 110));
        Ok(())
    }

    #[test]
    fn test_contrast_identity() -> Result<(), ImageError> {
        let original = sample()?;
        let mut image = original.clone();
        contrast(&mut image, 1.0, S);
        assert_eq!(image, original);
        Ok(())
    }

    #[test]
    fn test_contrast() -> Result<(), ImageError> {
        let mut image = single(Pixel::new(10, 100, 200, 3))?;
        contrast(&mut image, 2.0, S);
        // 2 * 9.5 + 0.5 = 19.5, 2 * 99.5 + 0.5 = 199.5, 2 * 199.5 + 0.5 = 399.5
        assert_eq!(image[(0, 0)], Pixel::new(19, 199, 255, 3));

        let mut image = single(Pixel::rgb(10, 100, 200))?;
        contrast(&mut image, 0.5, S);
        // 0.5 * 9.5 + 0.5 = 5.25, 0.5 * 99.5 + 0.5 = 50.25, 0.5 * 199.5 + 0.5 = 100.25
        assert_eq!(image[(0, 0)], Pixel::rgb(5, 50, 100));

        let mut image = single(Pixel::rgb(10, 100, 200))?;
        contrast(&mut image, -1.0, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(0, 0, 0));

        // clamps to 3.0
        let mut image = single(Pixel::rgb(10, 40, 200))?;
        contrast(&mut image, 10.0, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(29, 119, 255));
        Ok(())
    }

    #[test]
    fn test_contrast_nan() -> Result<(), ImageError> {
        let mut image = single(Pixel::rgb(10, 100, 200))?;
        contrast(&mut image, f64::NAN, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_tints_touch_one_channel() -> Result<(), ImageError> {
        let original = sample()?;
        for parameter in [-10, 0, 1, 3, 5, 75, 150, 400] {
            let mut red = original.clone();
            reddish(&mut red, parameter, S);
            let mut green = original.clone();
            greenish(&mut green, parameter, S);
            let mut blue = original.clone();
            blueish(&mut blue, parameter, S);

            for (i, src) in original.as_slice().iter().enumerate() {
                let (r, g, b) = (red.as_slice()[i], green.as_slice()[i], blue.as_slice()[i]);
                assert_eq!((r.green, r.blue, r.alpha), (src.green, src.blue, src.alpha));
                assert_eq!((g.red, g.blue, g.alpha), (src.red, src.blue, src.alpha));
                assert_eq!((b.red, b.green, b.alpha), (src.red, src.green, src.alpha));
            }
        }
        Ok(())
    }

    #[test]
    fn test_reddish() -> Result<(), ImageError> {
        let mut image = single(Pixel::rgb(100, 100, 100))?;
        reddish(&mut image, 75, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(175, 100, 100));

        let mut image = single(Pixel::rgb(100, 100, 100))?;
        reddish(&mut image, 1000, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(250, 100, 100));

        let mut image = single(Pixel::rgb(100, 100, 100))?;
        reddish(&mut image, -20, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(100, 100, 100));
        Ok(())
    }

    #[test]
    fn test_greenish_and_blueish_bounds() -> Result<(), ImageError> {
        let mut image = single(Pixel::rgb(100, 100, 100))?;
        greenish(&mut image, 75, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(100, 105, 100));

        let mut image = single(Pixel::rgb(100, 100, 100))?;
        greenish(&mut image, 0, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(100, 101, 100));

        let mut image = single(Pixel::rgb(100, 100, 100))?;
        blueish(&mut image, 3, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(100, 100, 103));

        let mut image = single(Pixel::rgb(100, 100, 253))?;
        blueish(&mut image, 150, S);
        assert_eq!(image[(0, 0)], Pixel::rgb(100, 100, 255));
        Ok(())
    }

    #[test]
    fn test_apply_truncates_parameter() {
        let pixel = Pixel::rgb(10, 10, 10);
        assert_eq!(
            apply_pixel(pixel, FilterKind::Brightness, 20.9),
            Pixel::rgb(30, 30, 30)
        );
        assert_eq!(
            apply_pixel(pixel, FilterKind::Brightness, -20.9),
            Pixel::rgb(0, 0, 0)
        );
        assert_eq!(
            apply_pixel(pixel, FilterKind::Brightness, -5.9),
            Pixel::rgb(5, 5, 5)
        );
        assert_eq!(
            apply_pixel(pixel, FilterKind::Greenish, 0.99),
            Pixel::rgb(10, 11, 10)
        );
        assert_eq!(
            apply_pixel(pixel, FilterKind::Brightness, f64::INFINITY),
            Pixel::rgb(110, 110, 110)
        );
        assert_eq!(
            apply_pixel(pixel, FilterKind::Brightness, f64::NAN),
            Pixel::rgb(10, 10, 10)
        );
    }

    #[test]
    fn test_apply_contrast_keeps_fraction() {
        assert_eq!(
            apply_pixel(Pixel::rgb(100, 100, 100), FilterKind::Contrast, 1.5),
            Pixel::rgb(149, 149, 149)
        );
    }
}
