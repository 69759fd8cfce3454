use filterer_image::RgbaImage;

use crate::engine;
use crate::filter_kind::{FilterKind, FilterStep};
use crate::parallel::ExecutionStrategy;

/// Applies filters to images.
///
/// The pipeline holds no state between calls besides its execution strategy. Parameters
/// are never validated here; each filter clamps its own parameter.
///
/// The copying methods leave the source image untouched and return the filtered copy.
/// The `_in_place` methods rewrite the caller's image.
///
/// # Example
///
/// ```
/// use filterer_image::{Pixel, RgbaImage};
/// use filterer_imgproc::{FilterKind, FilterPipeline, FilterStep};
///
/// let image = RgbaImage::from_size_val([4, 4].into(), Pixel::rgb(10, 20, 30)).unwrap();
/// let pipeline = FilterPipeline::default();
///
/// let filtered = pipeline.apply_filters_in_order(
///     &image,
///     &[
///         FilterStep::new(FilterKind::Reddish, 3.0),
///         FilterStep::new(FilterKind::Brightness, 20.0),
///     ],
/// );
///
/// assert_eq!(filtered[(0, 0)], Pixel::rgb(33, 40, 50));
/// assert_eq!(image[(0, 0)], Pixel::rgb(10, 20, 30));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    strategy: ExecutionStrategy,
}

impl FilterPipeline {
    /// Create a pipeline running every filter pass with `strategy`.
    pub fn new(strategy: ExecutionStrategy) -> Self {
        Self { strategy }
    }

    /// The execution strategy of the filter passes.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Apply `kind` with the default parameter of [`FilterKind::range`].
    pub fn apply_default_filter(&self, src: &RgbaImage, kind: FilterKind) -> RgbaImage {
        self.apply_filter(src, kind, kind.range().default)
    }

    /// Apply `kind` with `parameter`.
    pub fn apply_filter(&self, src: &RgbaImage, kind: FilterKind, parameter: f64) -> RgbaImage {
        let mut dst = src.clone();
        self.apply_filter_in_place(&mut dst, kind, parameter);
        dst
    }

    /// Apply each step in order, every pass seeing the output of the previous one.
    pub fn apply_filters_in_order(&self, src: &RgbaImage, filters: &[FilterStep]) -> RgbaImage {
        let mut dst = src.clone();
        self.apply_filters_in_order_in_place(&mut dst, filters);
        dst
    }

    /// Apply `kind` with `parameter`, rewriting `image`.
    pub fn apply_filter_in_place(&self, image: &mut RgbaImage, kind: FilterKind, parameter: f64) {
        log::debug!(
            "applying {} with parameter {} to {}",
            kind,
            parameter,
            image.size()
        );
        engine::apply(image, kind, parameter, self.strategy);
    }

    /// Apply each step in order, rewriting `image`.
    pub fn apply_filters_in_order_in_place(&self, image: &mut RgbaImage, filters: &[FilterStep]) {
        for step in filters {
            self.apply_filter_in_place(image, step.kind, step.parameter);
        }
    }

    /// Preview every filter of [`FilterKind::ALL`] with its default parameter.
    ///
    /// Each preview is computed from `src` independently.
    pub fn filter_previews(&self, src: &RgbaImage) -> Vec<(FilterKind, RgbaImage)> {
        FilterKind::ALL
            .into_iter()
            .map(|kind| (kind, self.apply_default_filter(src, kind)))
            .collect()
    }
}
