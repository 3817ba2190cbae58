use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Category assigned to a stored file. `Anime` and `Manga` are
/// library-context categories assigned by the collection layer, never by
/// `classify` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Videos,
    Musics,
    Images,
    RawImages,
    Documents,
    Archives,
    Executables,
    Anime,
    Manga,
    Books,
    Comics,
    Others,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Videos => "videos",
            FileCategory::Musics => "musics",
            FileCategory::Images => "images",
            FileCategory::RawImages => "raw_images",
            FileCategory::Documents => "documents",
            FileCategory::Archives => "archives",
            FileCategory::Executables => "executables",
            FileCategory::Anime => "anime",
            FileCategory::Manga => "manga",
            FileCategory::Books => "books",
            FileCategory::Comics => "comics",
            FileCategory::Others => "others",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installer/executable extensions. Absolute classification priority:
/// installer formats share MIME types with archives (.apk, .appx are zip
/// containers) and must never be filed as archives.
const EXECUTABLE_EXTENSIONS: &[&str] = &[
    "exe", "dmg", "pkg", "msi", "app", "deb", "rpm", "appimage", "run", "bin", "sh", "bat", "cmd",
    "com", "scr", "appx", "apk", "ipa",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ts", "m2ts", "3gp",
    "ogv", "vob",
];

const AUDIO_EXTENSIONS: &[&str] = &[
    "flac", "mp3", "m4a", "aac", "opus", "ogg", "ape", "wav", "wma", "aiff", "alac", "mid",
];

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "ico", "tiff", "tif", "heic", "avif",
];

const RAW_IMAGE_EXTENSIONS: &[&str] = &["raw", "cr2", "cr3", "nef", "arw", "dng", "orf", "rw2"];

const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "txt", "rtf", "odt", "ods", "odp", "xls", "xlsx", "ppt", "pptx", "csv",
    "md",
];

const ARCHIVE_EXTENSIONS: &[&str] = &[
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "zst", "tgz", "iso",
];

const BOOK_EXTENSIONS: &[&str] = &["epub", "mobi", "azw", "azw3", "fb2"];

const COMIC_EXTENSIONS: &[&str] = &["cbz", "cbr", "cb7", "cbt"];

/// Archive MIME types that need the executable-extension guard
const ARCHIVE_MIME_TYPES: &[&str] = &[
    "application/zip",
    "application/x-zip-compressed",
    "application/x-rar-compressed",
    "application/vnd.rar",
    "application/x-7z-compressed",
    "application/x-tar",
    "application/gzip",
    "application/x-bzip2",
    "application/x-xz",
    "application/x-iso9660-image",
];

const EXECUTABLE_MIME_TYPES: &[&str] = &[
    "application/x-msdownload",
    "application/x-msdos-program",
    "application/x-executable",
    "application/x-mach-binary",
    "application/x-apple-diskimage",
    "application/vnd.android.package-archive",
    "application/vnd.microsoft.portable-executable",
];

const DOCUMENT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.oasis.opendocument.text",
    "application/rtf",
];

static VIDEO_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static AUDIO_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_video_suffix_regex() -> &'static Regex {
    VIDEO_SUFFIX_REGEX
        .get_or_init(|| Regex::new(r"(?i)\.(mp4|mkv|avi|mov|webm|m4v|mpe?g)(\W|$)").unwrap())
}

fn get_audio_suffix_regex() -> &'static Regex {
    AUDIO_SUFFIX_REGEX
        .get_or_init(|| Regex::new(r"(?i)\.(mp3|flac|wav|ogg|m4a|aac|opus)(\W|$)").unwrap())
}

/// Lowercased final `.`-segment of a filename, if any.
fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains(|c: char| c.is_whitespace()) {
        return None;
    }
    Some(ext.to_lowercase())
}

/// True when the lowercased extension appears in any category table.
/// Used by the stripper and extractor to decide whether the last
/// `.`-segment is a real extension or just a dotted name part.
pub fn is_known_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    let ext = ext.as_str();
    EXECUTABLE_EXTENSIONS.contains(&ext)
        || VIDEO_EXTENSIONS.contains(&ext)
        || AUDIO_EXTENSIONS.contains(&ext)
        || IMAGE_EXTENSIONS.contains(&ext)
        || RAW_IMAGE_EXTENSIONS.contains(&ext)
        || DOCUMENT_EXTENSIONS.contains(&ext)
        || ARCHIVE_EXTENSIONS.contains(&ext)
        || BOOK_EXTENSIONS.contains(&ext)
        || COMIC_EXTENSIONS.contains(&ext)
}

/// Split `name` into (stem, extension) when the final segment is a known
/// extension, otherwise return the whole name with no extension.
pub fn split_known_extension(name: &str) -> (&str, Option<&str>) {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if !stem.is_empty() && is_known_extension(ext) {
            return (stem, Some(ext));
        }
    }
    (name, None)
}

fn category_for_extension(ext: &str) -> Option<FileCategory> {
    if EXECUTABLE_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Executables)
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Videos)
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Musics)
    } else if IMAGE_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Images)
    } else if RAW_IMAGE_EXTENSIONS.contains(&ext) {
        Some(FileCategory::RawImages)
    } else if DOCUMENT_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Documents)
    } else if ARCHIVE_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Archives)
    } else if BOOK_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Books)
    } else if COMIC_EXTENSIONS.contains(&ext) {
        Some(FileCategory::Comics)
    } else {
        None
    }
}

fn category_for_mime(mime: &str) -> Option<FileCategory> {
    let mime = mime.trim().to_lowercase();
    if EXECUTABLE_MIME_TYPES.contains(&mime.as_str()) {
        Some(FileCategory::Executables)
    } else if ARCHIVE_MIME_TYPES.contains(&mime.as_str()) {
        Some(FileCategory::Archives)
    } else if DOCUMENT_MIME_TYPES.contains(&mime.as_str()) {
        Some(FileCategory::Documents)
    } else if mime.starts_with("video/") {
        Some(FileCategory::Videos)
    } else if mime.starts_with("audio/") {
        Some(FileCategory::Musics)
    } else if mime.starts_with("image/") {
        Some(FileCategory::Images)
    } else if mime.starts_with("text/") {
        Some(FileCategory::Documents)
    } else {
        None
    }
}

/// Classify a file into a [`FileCategory`] from its name and MIME type.
///
/// Decision order, first match wins:
/// 1. executable extension (overrides everything, incl. the MIME type)
/// 2. extension tables
/// 3. MIME tables, with the archive-vs-executable guard
/// 4. embedded video/audio suffix fallback
/// 5. `Others`
pub fn classify(name: &str, mime_type: &str) -> FileCategory {
    let ext = extension_of(name);

    if let Some(ref ext) = ext {
        if EXECUTABLE_EXTENSIONS.contains(&ext.as_str()) {
            return FileCategory::Executables;
        }
        if let Some(category) = category_for_extension(ext) {
            return category;
        }
    }

    if let Some(category) = category_for_mime(mime_type) {
        // Guard kept explicit even though rule 1 already covers it:
        // an archive MIME with an executable extension is an installer.
        if category == FileCategory::Archives {
            if let Some(ref ext) = ext {
                if EXECUTABLE_EXTENSIONS.contains(&ext.as_str()) {
                    return FileCategory::Executables;
                }
            }
        }
        return category;
    }

    if get_video_suffix_regex().is_match(name) {
        return FileCategory::Videos;
    }
    if get_audio_suffix_regex().is_match(name) {
        return FileCategory::Musics;
    }

    FileCategory::Others
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_overrides_mime() {
        // installer with an archive MIME type stays an executable
        assert_eq!(classify("app.dmg", "application/zip"), FileCategory::Executables);
        assert_eq!(classify("setup.msi", "application/zip"), FileCategory::Executables);
        assert_eq!(classify("tool.apk", "application/zip"), FileCategory::Executables);
    }

    #[test]
    fn test_plain_archives() {
        assert_eq!(classify("backup.zip", "application/zip"), FileCategory::Archives);
        assert_eq!(classify("data.tar", ""), FileCategory::Archives);
    }

    #[test]
    fn test_basic_categories() {
        assert_eq!(classify("video.mp4", "video/mp4"), FileCategory::Videos);
        assert_eq!(classify("song.flac", "audio/flac"), FileCategory::Musics);
        assert_eq!(classify("photo.jpg", "image/jpeg"), FileCategory::Images);
        assert_eq!(classify("shot.cr2", ""), FileCategory::RawImages);
        assert_eq!(classify("paper.pdf", "application/pdf"), FileCategory::Documents);
        assert_eq!(classify("novel.epub", ""), FileCategory::Books);
        assert_eq!(classify("issue.cbz", ""), FileCategory::Comics);
    }

    #[test]
    fn test_mime_fallback_when_extension_unknown() {
        assert_eq!(classify("clip.xyz", "video/x-matroska"), FileCategory::Videos);
        assert_eq!(classify("noext", "audio/mpeg"), FileCategory::Musics);
        assert_eq!(classify("notes.xyz", "text/plain"), FileCategory::Documents);
    }

    #[test]
    fn test_suffix_fallback() {
        // double extension not caught by the tables or MIME
        assert_eq!(classify("movie.mkv.part", ""), FileCategory::Videos);
        assert_eq!(classify("track.mp3.tmp", ""), FileCategory::Musics);
    }

    #[test]
    fn test_default_others() {
        assert_eq!(classify("unknown.xyz", "application/octet-stream"), FileCategory::Others);
        assert_eq!(classify("", ""), FileCategory::Others);
    }

    #[test]
    fn test_determinism() {
        for _ in 0..3 {
            assert_eq!(classify("app.AppImage", ""), FileCategory::Executables);
        }
    }

    #[test]
    fn test_split_known_extension() {
        assert_eq!(split_known_extension("song.mp3"), ("song", Some("mp3")));
        assert_eq!(
            split_known_extension("Movie.Name.2020.x264-GROUP"),
            ("Movie.Name.2020.x264-GROUP", None)
        );
        assert_eq!(split_known_extension("noext"), ("noext", None));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&FileCategory::RawImages).unwrap(), "\"raw_images\"");
        assert_eq!(serde_json::to_string(&FileCategory::Videos).unwrap(), "\"videos\"");
    }
}
