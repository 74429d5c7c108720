//! Filename to MIME type resolution.
//!
//! The extension table is compiled in from `data/mime.types` and shared by
//! every caller through [`instance`]:
//!
//! ```
//! let mimetypes = mimetypes::instance();
//! assert_eq!(mimetypes.mimetype("image.JPeG"), "image/jpeg");
//! assert_eq!(mimetypes.mimetype("test"), mimetypes::MIMETYPE_OCTET_STREAM);
//! ```

pub mod cli;
pub mod config;
pub mod mimetype;

pub use crate::mimetype::{
    extension, Mimetypes, MIMETYPE_EVENT_STREAM, MIMETYPE_GZIP, MIMETYPE_HTML,
    MIMETYPE_OCTET_STREAM, MIMETYPE_TEXT_PLAIN, MIMETYPE_XML,
};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const COMMIT_ID: &str = env!("GIT_COMMITID");

/// The process-wide resolver. Same as [`Mimetypes::instance`].
pub fn instance() -> &'static Mimetypes {
    Mimetypes::instance()
}

/// Resolve `name` with the shared resolver.
pub fn mimetype(name: &str) -> &'static str {
    Mimetypes::instance().mimetype(name)
}
