use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;

// EXTENSION_TABLE: &[(&str, &str)], generated from data/mime.types
include!(concat!(env!("OUT_DIR"), "/mime_table.rs"));

/// Returned for names without an extension or with an unrecognized one.
pub const MIMETYPE_OCTET_STREAM: &str = "application/octet-stream";
pub const MIMETYPE_XML: &str = "application/xml";
pub const MIMETYPE_HTML: &str = "text/html";
pub const MIMETYPE_GZIP: &str = "application/x-gzip";
pub const MIMETYPE_TEXT_PLAIN: &str = "text/plain";
pub const MIMETYPE_EVENT_STREAM: &str = "application/vnd.amazon.eventstream";

lazy_static! {
    // Built on first use, read-only afterwards
    static ref INSTANCE: Mimetypes = Mimetypes::builtin();
}

/// Maps file names to MIME types using the built-in extension table.
///
/// The table is immutable once built. Obtain the shared instance with
/// [`Mimetypes::instance`] (or the crate-level [`instance`](crate::instance));
/// every caller sees the same table.
#[derive(Debug)]
pub struct Mimetypes {
    extensions: HashMap<&'static str, &'static str>,
}

impl Mimetypes {
    /// The process-wide resolver.
    pub fn instance() -> &'static Mimetypes {
        &INSTANCE
    }

    fn builtin() -> Mimetypes {
        let extensions: HashMap<&'static str, &'static str> =
            EXTENSION_TABLE.iter().copied().collect();
        debug!("Loaded {} extension to MIME type mappings", extensions.len());
        Mimetypes { extensions }
    }

    /// Resolve `name` to a MIME type by its extension.
    ///
    /// Only the last path segment is considered, and within it only the text
    /// after the last `.`. The extension is matched ignoring ASCII case.
    /// Names with no extension, an empty one, or one not in the table
    /// resolve to [`MIMETYPE_OCTET_STREAM`].
    pub fn mimetype(&self, name: &str) -> &'static str {
        let ext = match extension(name) {
            Some(ext) => ext,
            None => return MIMETYPE_OCTET_STREAM,
        };

        match self.lookup(ext) {
            Some(mimetype) => mimetype,
            None => {
                debug!("Extension '{ext}' not recognized, using {MIMETYPE_OCTET_STREAM}");
                MIMETYPE_OCTET_STREAM
            }
        }
    }

    /// Resolve a filesystem path by its final component.
    pub fn mimetype_for_path(&self, path: &Path) -> &'static str {
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => self.mimetype(name),
            None => MIMETYPE_OCTET_STREAM,
        }
    }

    /// Look up a bare extension (no leading `.`), ignoring ASCII case.
    pub fn lookup(&self, ext: &str) -> Option<&'static str> {
        let ext: Cow<str> = if ext.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(ext.to_ascii_lowercase())
        } else {
            Cow::Borrowed(ext)
        };
        self.extensions.get(ext.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// All (extension, MIME type) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.extensions.iter().map(|(ext, mimetype)| (*ext, *mimetype))
    }
}

/// The extension [`Mimetypes::mimetype`] would look up for `name`, as written.
///
/// `None` when the last path segment has no `.` or ends with one.
pub fn extension(name: &str) -> Option<&str> {
    let segment = match name.rfind(['/', '\\']) {
        Some(i) => &name[i + 1..],
        None => name,
    };

    match segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
