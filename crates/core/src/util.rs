use crate::error::{Result, StencilError};
use std::path::{Path, PathBuf};
use url::Url;

/// Filesystem path behind a `file://` URI.
pub fn uri_to_path(uri: &str) -> Result<PathBuf> {
    let url = Url::parse(uri).map_err(|e| StencilError::InvalidUri(format!("{}: {}", uri, e)))?;
    url.to_file_path()
        .map_err(|_| StencilError::InvalidUri(uri.to_string()))
}

pub fn path_to_uri(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(|u| u.to_string())
        .map_err(|_| StencilError::InvalidUri(path.display().to_string()))
}

/// Directory holding the document, joined with a relative reference
/// written in the source.
pub fn resolve_relative(uri: &str, relative: &str) -> Result<PathBuf> {
    let path = uri_to_path(uri)?;
    let dir = path.parent().unwrap_or(Path::new("/"));
    Ok(dir.join(relative.replace("%40", "@")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_uri_round_trips() {
        let path = uri_to_path("file:///tmp/app/my-cmp.tsx").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/app/my-cmp.tsx"));
        assert_eq!(path_to_uri(&path).unwrap(), "file:///tmp/app/my-cmp.tsx");
    }

    #[test]
    fn relative_references_resolve_next_to_document() {
        let base = resolve_relative("file:///tmp/app/my-cmp.tsx", "styles").unwrap();
        assert_eq!(base, PathBuf::from("/tmp/app/styles"));
    }

    #[test]
    fn non_file_uris_are_rejected() {
        assert!(matches!(
            uri_to_path("untitled:Untitled-1"),
            Err(StencilError::InvalidUri(_))
        ));
        assert!(uri_to_path("not a uri").is_err());
    }
}
