//! Local preview references for images picked before upload.
//!
//! - image_set.rs: ordered file/preview pairs, releasing references on removal and teardown
//! - object_url.rs: browser `URL.createObjectURL` backed source

mod image_set;
mod object_url;

pub use image_set::{ImageSet, PreviewEntry, PreviewSource};
pub use object_url::ObjectUrlSource;
