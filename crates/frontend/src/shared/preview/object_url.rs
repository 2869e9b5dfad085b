use super::PreviewSource;
use web_sys::{File, Url};

/// Preview references backed by blob object URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlSource;

impl PreviewSource<File> for ObjectUrlSource {
    fn acquire(&self, file: &File) -> Result<String, String> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| format!("Failed to create object URL for {}: {:?}", file.name(), e))
    }

    fn release(&self, reference: &str) {
        if let Err(e) = Url::revoke_object_url(reference) {
            log::error!("Failed to revoke object URL {}: {:?}", reference, e);
        }
    }
}
