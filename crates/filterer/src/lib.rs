#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use filterer_image as image;

#[doc(inline)]
pub use filterer_imgproc as imgproc;

#[doc(inline)]
pub use filterer_io as io;
