//! Base extension table (subset of Apache `mime.types`).

use super::MimetypeResolver;

/// Static extension → MIME type table. Keys are lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMimetypes;

impl MimetypeResolver for StandardMimetypes {
    fn resolve_extension(&self, extension: &str) -> Option<&str> {
        lookup(&extension.to_ascii_lowercase())
    }
}

/// Looks up an already-lowercased extension.
pub(crate) fn lookup(extension: &str) -> Option<&'static str> {
    let mime = match extension {
        // text
        "txt" | "text" | "conf" | "def" | "list" | "log" | "in" => "text/plain",
        "htm" | "html" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "ics" | "ifb" => "text/calendar",
        "md" | "markdown" => "text/markdown",
        "rtx" => "text/richtext",
        "tsv" => "text/tab-separated-values",
        "vcf" => "text/x-vcard",
        "vcs" => "text/x-vcalendar",
        "yaml" | "yml" => "text/yaml",
        "c" | "cc" | "cxx" | "cpp" | "h" | "hh" | "dic" => "text/x-c",
        "java" => "text/x-java-source",
        "py" => "text/x-python",
        "asm" | "s" => "text/x-asm",

        // application
        "json" => "application/json",
        "xml" | "xsl" => "application/xml",
        "js" => "application/javascript",
        "pdf" => "application/pdf",
        "ps" | "ai" | "eps" => "application/postscript",
        "rtf" => "application/rtf",
        "zip" => "application/zip",
        "gz" | "tgz" => "application/x-gzip",
        "bz2" | "boz" => "application/x-bzip2",
        "xz" => "application/x-xz",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/x-rar-compressed",
        "tar" => "application/x-tar",
        "jar" => "application/java-archive",
        "deb" | "udeb" => "application/x-debian-package",
        "iso" => "application/x-iso9660-image",
        "bin" | "dms" | "lrf" | "mar" | "so" | "dist" | "distz" | "pkg" | "bpk" | "dump"
        | "elc" | "deploy" => "application/octet-stream",
        "exe" | "dll" | "com" | "bat" | "msi" => "application/x-msdownload",
        "doc" | "dot" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" | "xlm" | "xla" | "xlc" | "xlt" | "xlw" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" | "pps" | "pot" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "ods" => "application/vnd.oasis.opendocument.spreadsheet",
        "odp" => "application/vnd.oasis.opendocument.presentation",
        "epub" => "application/epub+zip",
        "swf" => "application/x-shockwave-flash",
        "torrent" => "application/x-bittorrent",
        "wasm" => "application/wasm",
        "xhtml" | "xht" => "application/xhtml+xml",
        "atom" => "application/atom+xml",
        "rss" => "application/rss+xml",
        "sql" => "application/x-sql",
        "sh" => "application/x-sh",

        // image
        "png" => "image/png",
        "jpeg" | "jpg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" | "svgz" => "image/svg+xml",
        "tiff" | "tif" => "image/tiff",
        "ico" => "image/x-icon",
        "psd" => "image/vnd.adobe.photoshop",
        "avif" => "image/avif",
        "heic" => "image/heic",

        // audio
        "mp3" | "mpga" | "mp2" | "mp2a" | "m2a" | "m3a" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "ogg" | "oga" | "spx" => "audio/ogg",
        "flac" => "audio/x-flac",
        "aac" => "audio/x-aac",
        "m4a" | "mp4a" => "audio/mp4",
        "mid" | "midi" | "kar" | "rmi" => "audio/midi",
        "weba" => "audio/webm",

        // video
        "mp4" | "mp4v" | "mpg4" => "video/mp4",
        "mpeg" | "mpg" | "mpe" | "m1v" | "m2v" => "video/mpeg",
        "mov" | "qt" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "mkv" | "mk3d" | "mks" => "video/x-matroska",
        "ogv" => "video/ogg",
        "flv" => "video/x-flv",
        "wmv" => "video/x-ms-wmv",
        "3gp" => "video/3gpp",

        // fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        _ => return None,
    };
    Some(mime)
}
