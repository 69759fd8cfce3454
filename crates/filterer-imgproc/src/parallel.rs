use rayon::prelude::*;

use filterer_image::{Pixel, RgbaImage};

/// Controls how per-pixel operations are executed.
///
/// Every strategy produces the same output since pixels are processed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    ///
    /// This is often more cache-friendly than [`ExecutionStrategy::ParallelElements`].
    #[default]
    ParallelRows,

    /// Use the global Rayon thread pool to process every pixel in parallel.
    ///
    /// This maximizes parallelism but may have overhead for small images.
    ParallelElements,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Apply a function to each pixel of the image in place.
///
/// # Arguments
///
/// * `image` - The image to modify.
/// * `strategy` - How to distribute the work.
/// * `op` - The operation to perform on each pixel.
///
/// # Example
///
/// ```
/// use filterer_image::{Pixel, RgbaImage};
/// use filterer_imgproc::parallel::{for_each_pixel, ExecutionStrategy};
///
/// let mut image = RgbaImage::from_size_val([4, 3].into(), Pixel::rgb(1, 2, 3)).unwrap();
///
/// for_each_pixel(&mut image, ExecutionStrategy::Serial, |p| p.red = 9);
///
/// assert!(image.as_slice().iter().all(|p| p.red == 9));
/// ```
pub fn for_each_pixel<F>(image: &mut RgbaImage, strategy: ExecutionStrategy, op: F)
where
    F: Fn(&mut Pixel) + Send + Sync,
{
    let cols = image.cols();
    let pixels = image.as_slice_mut();

    log::trace!("visiting {} pixels with {:?}", pixels.len(), strategy);

    match strategy {
        ExecutionStrategy::Serial => {
            pixels.iter_mut().for_each(op);
        }
        ExecutionStrategy::ParallelElements => {
            pixels.par_iter_mut().for_each(op);
        }
        ExecutionStrategy::ParallelRows => {
            pixels.par_chunks_exact_mut(cols).for_each(|row| {
                row.iter_mut().for_each(&op);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterer_image::ImageError;

    fn gradient() -> Result<RgbaImage, ImageError> {
        let pixels = (0..35u8).map(|i| Pixel::new(i, i * 2, i * 3, i)).collect();
        RgbaImage::new([7, 5].into(), pixels)
    }

    fn double_red(p: &mut Pixel) {
        p.red = p.red.saturating_mul(2);
    }

    #[test]
    fn test_for_each_pixel_serial() -> Result<(), ImageError> {
        let mut image = gradient()?;
        for_each_pixel(&mut image, ExecutionStrategy::Serial, double_red);
        let reds = image.as_slice().iter().map(|p| p.red).collect::<Vec<_>>();
        assert_eq!(reds, (0..35u8).map(|i| i * 2).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_strategies_agree() -> Result<(), ImageError> {
        let mut serial = gradient()?;
        for_each_pixel(&mut serial, ExecutionStrategy::Serial, double_red);

        for strategy in [
            ExecutionStrategy::ParallelRows,
            ExecutionStrategy::ParallelElements,
        ] {
            let mut image = gradient()?;
            for_each_pixel(&mut image, strategy, double_red);
            assert_eq!(image, serial, "strategy {strategy:?}");
        }
        Ok(())
    }

    #[test]
    fn test_single_row_and_column() -> Result<(), ImageError> {
        for size in [[1, 9], [9, 1], [1, 1]] {
            let mut image = RgbaImage::from_size_val(size.into(), Pixel::rgb(3, 0, 0))?;
            for_each_pixel(&mut image, ExecutionStrategy::ParallelRows, double_red);
            assert!(image.as_slice().iter().all(|p| p.red == 6));
        }
        Ok(())
    }
}
