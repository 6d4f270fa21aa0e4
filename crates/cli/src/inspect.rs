use std::path::{Path, PathBuf};
use stencil_ls_api::ComponentMetadata;
use stencil_ls_core::Session;
use stencil_ls_core::util::path_to_uri;
use tracing::info;

/// Opens `path` in `session` and returns its URI.
pub(crate) fn open_file(
    session: &Session,
    path: &Path,
) -> Result<String, Box<dyn std::error::Error>> {
    let path = std::fs::canonicalize(path)?;
    let text = std::fs::read_to_string(&path)?;
    let uri = path_to_uri(&path)?;
    session.open(&uri, &text, 0)?;
    Ok(uri)
}

pub(crate) fn metadata_json(meta: Option<&ComponentMetadata>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&meta)
}

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new();
    let uri = open_file(&session, &path)?;
    let meta = session.metadata(&uri)?;

    match &meta {
        Some(m) => info!("Found component <{}> in {}", m.tag, path.display()),
        None => info!("No component declared in {}", path.display()),
    }
    for diagnostic in session.diagnostics(&uri)? {
        info!(
            "{}:{}: {}",
            diagnostic.range.start.line + 1,
            diagnostic.range.start.character + 1,
            diagnostic.message
        );
    }

    println!("{}", metadata_json(meta.as_deref())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn inspects_component_on_disk() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("my-cmp.tsx");
        fs::write(
            &file,
            "@Component({ tag: 'my-cmp' })\nexport class MyCmp {\n  @Prop() name: string;\n}\n",
        )
        .unwrap();

        let session = Session::new();
        let uri = open_file(&session, &file).unwrap();
        let meta = session.metadata(&uri).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&metadata_json(meta.as_deref()).unwrap()).unwrap();
        assert_eq!(json["tag"], "my-cmp");
        assert_eq!(json["properties"][0], "name");
    }

    #[test]
    fn plain_files_print_null() {
        assert_eq!(metadata_json(None).unwrap(), "null");
    }
}
