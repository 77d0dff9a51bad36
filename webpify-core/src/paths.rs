//! Source and destination path helpers

use std::path::{Path, PathBuf};

/// Source extensions picked up by a directory run, in enumeration order
pub const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Returns the WebP path written next to `source`
pub fn webp_sibling(source: &Path) -> PathBuf {
    source.with_extension("webp")
}

/// Returns the index of the path's extension in [`SOURCE_EXTENSIONS`],
/// compared case-insensitively
pub fn source_extension_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    SOURCE_EXTENSIONS
        .iter()
        .position(|candidate| ext.eq_ignore_ascii_case(candidate))
}

/// Checks if a path has one of the supported source extensions
pub fn is_supported_source(path: &Path) -> bool {
    source_extension_rank(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webp_sibling() {
        assert_eq!(
            webp_sibling(Path::new("assets/game logos/shadowlight.png")),
            PathBuf::from("assets/game logos/shadowlight.webp")
        );
        assert_eq!(
            webp_sibling(Path::new("logo.v2.jpeg")),
            PathBuf::from("logo.v2.webp")
        );
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_source(Path::new("a.png")));
        assert!(is_supported_source(Path::new("a.JPG")));
        assert!(is_supported_source(Path::new("a.Jpeg")));
        assert!(!is_supported_source(Path::new("a.webp")));
        assert!(!is_supported_source(Path::new("png")));
        assert_eq!(source_extension_rank(Path::new("b.jpeg")), Some(2));
    }
}
