//! File system utilities.

/// Extension of a filename: the substring after the last `.`, or `None`
/// when the name contains no dot.
pub fn extension_of(file: &str) -> Option<&str> {
    file.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("movie.mkv"), Some("mkv"));
        assert_eq!(extension_of("movie.1080p.mp4"), Some("mp4"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".hidden"), Some("hidden"));
    }
}
