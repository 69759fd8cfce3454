use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing filters from text.
#[derive(Error, Debug, PartialEq)]
pub enum ParseFilterError {
    /// The filter name does not match any filter kind.
    #[error("unknown filter kind: {0}")]
    UnknownFilter(String),

    /// The parameter of a `kind=value` step is not a number.
    #[error("filter parameter is not a number: {0}")]
    MalformedParameter(String),
}

/// The filters that can be applied to an image.
///
/// With the `serde` feature, kinds serialize as their name and deserialize through
/// [`FromStr`], so names are matched case-insensitively like on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum FilterKind {
    /// Replace every channel with the pixel gray value plus an offset.
    GrayScale,
    /// Invert the color channels, darkened by the parameter.
    Negative,
    /// Add the parameter to every color channel.
    Brightness,
    /// Scale every color channel around 0.5.
    Contrast,
    /// Add the parameter to the red channel.
    Reddish,
    /// Add the parameter to the green channel.
    Greenish,
    /// Add the parameter to the blue channel.
    Blueish,
}

/// The user facing bounds of a filter parameter.
///
/// These are the bounds a slider should offer. The filter implementations clamp the
/// parameter to their own bounds, which are not always the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRange {
    /// Lowest value offered.
    pub min: f64,
    /// Highest value offered.
    pub max: f64,
    /// Value applied when no parameter is given.
    pub default: f64,
}

impl FilterRange {
    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl FilterKind {
    /// Every filter kind, in the order a filter menu presents them.
    pub const ALL: [FilterKind; 7] = [
        FilterKind::GrayScale,
        FilterKind::Negative,
        FilterKind::Brightness,
        FilterKind::Reddish,
        FilterKind::Greenish,
        FilterKind::Blueish,
        FilterKind::Contrast,
    ];

    /// The parameter bounds and default of the filter.
    ///
    /// # Example
    ///
    /// ```
    /// use filterer_imgproc::FilterKind;
    ///
    /// let range = FilterKind::Negative.range();
    ///
    /// assert_eq!(range.min, 0.0);
    /// assert_eq!(range.max, 10.0);
    /// assert_eq!(range.default, 5.0);
    /// ```
    pub fn range(&self) -> FilterRange {
        let (min, max, default) = match self {
            FilterKind::GrayScale => (-100.0, 100.0, 0.0),
            FilterKind::Negative => (0.0, 10.0, 5.0),
            FilterKind::Brightness => (-100.0, 100.0, 50.0),
            FilterKind::Contrast => (0.0, 3.0, 1.2),
            FilterKind::Reddish => (0.0, 150.0, 75.0),
            FilterKind::Greenish => (0.0, 150.0, 75.0),
            FilterKind::Blueish => (0.0, 150.0, 75.0),
        };
        FilterRange { min, max, default }
    }

    /// The display name of the filter.
    pub const fn name(&self) -> &'static str {
        match self {
            FilterKind::GrayScale => "GrayScale",
            FilterKind::Negative => "Negative",
            FilterKind::Brightness => "Brightness",
            FilterKind::Contrast => "Contrast",
            FilterKind::Reddish => "Reddish",
            FilterKind::Greenish => "Greenish",
            FilterKind::Blueish => "Blueish",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for FilterKind {
    type Error = ParseFilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A single filter application: a kind and the parameter to apply it with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterStep {
    /// The filter to apply.
    pub kind: FilterKind,
    /// The parameter, clamped by the filter itself.
    pub parameter: f64,
}

impl FilterStep {
    /// Create a new step.
    pub fn new(kind: FilterKind, parameter: f64) -> Self {
        Self { kind, parameter }
    }

    /// Create a step applying `kind` with its default parameter.
    pub fn with_default(kind: FilterKind) -> Self {
        Self::new(kind, kind.range().default)
    }
}

impl From<(FilterKind, f64)> for FilterStep {
    fn from((kind, parameter): (FilterKind, f64)) -> Self {
        Self::new(kind, parameter)
    }
}

impl fmt::Display for FilterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.parameter)
    }
}

/// Parses `kind=value`, or a bare `kind` for its default parameter.
///
/// # Example
///
/// ```
/// use filterer_imgproc::{FilterKind, FilterStep};
///
/// let step: FilterStep = "reddish=3".parse().unwrap();
/// assert_eq!(step, FilterStep::new(FilterKind::Reddish, 3.0));
///
/// let step: FilterStep = "Contrast".parse().unwrap();
/// assert_eq!(step, FilterStep::new(FilterKind::Contrast, 1.2));
/// ```
impl FromStr for FilterStep {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((kind, parameter)) => {
                let kind = kind.parse::<FilterKind>()?;
                let parameter = parameter
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ParseFilterError::MalformedParameter(parameter.to_string()))?;
                Ok(Self::new(kind, parameter))
            }
            None => Ok(Self::with_default(s.parse()?)),
        }
    }
}
