use crate::inspect::open_file;
use std::path::PathBuf;
use stencil_ls_api::Position;
use stencil_ls_core::Session;
use tracing::info;

pub fn run(path: PathBuf, line: u32, character: u32) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new();
    let uri = open_file(&session, &path)?;

    let candidates = session.completion(&uri, Position::new(line, character))?;
    info!(
        "{} completions at {}:{}:{}",
        candidates.len(),
        path.display(),
        line,
        character
    );

    let resolved = candidates
        .into_iter()
        .map(|c| session.resolve(c))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
