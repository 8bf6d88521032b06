//! Extension → MIME type resolution.
//!
//! [`StandardMimetypes`] is the fixed base table; [`CustomMimetypes`] layers
//! caller mappings on top of it. Unknown extensions resolve to `None`.

mod custom;
mod table;

pub use custom::CustomMimetypes;
pub use table::StandardMimetypes;

use crate::filename;

/// Maps file extensions to MIME types.
pub trait MimetypeResolver: Send + Sync {
    /// MIME type for `extension` (without the dot), compared case-insensitively.
    fn resolve_extension(&self, extension: &str) -> Option<&str>;

    /// MIME type for the extension of `filename`'s last component.
    fn resolve_filename(&self, filename: &str) -> Option<&str> {
        self.resolve_extension(filename::extension(filename)?)
    }
}

impl<T: MimetypeResolver + ?Sized> MimetypeResolver for Box<T> {
    fn resolve_extension(&self, extension: &str) -> Option<&str> {
        (**self).resolve_extension(extension)
    }

    fn resolve_filename(&self, filename: &str) -> Option<&str> {
        (**self).resolve_filename(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_filename_uses_last_extension() {
        let m = StandardMimetypes;
        assert_eq!(m.resolve_filename("/srv/httplug.png"), Some("image/png"));
        assert_eq!(m.resolve_filename("backup.tar.gz"), Some("application/x-gzip"));
        assert_eq!(m.resolve_filename("PHOTO.JPG"), Some("image/jpeg"));
    }

    #[test]
    fn resolve_filename_without_extension() {
        assert_eq!(StandardMimetypes.resolve_filename("README"), None);
        assert_eq!(StandardMimetypes.resolve_filename("dir.png/"), Some("image/png"));
    }

    #[test]
    fn boxed_resolver_delegates() {
        let boxed: Box<dyn MimetypeResolver> = Box::new(StandardMimetypes);
        assert_eq!(boxed.resolve_extension("pdf"), Some("application/pdf"));
    }
}
