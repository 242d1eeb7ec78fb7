//! Loading graphs from JSON files and writing JSON results.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use serde::Serialize;
use stopover_core::Graph;

use crate::CliError;
use crate::fs::{file_is_file, open_utf8_file};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON-encoded [`Graph`] from disk.
pub(crate) fn load_graph(path: &Utf8Path) -> Result<Graph, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenGraph {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let graph: Graph = serde_json::from_reader(reader).map_err(|source| CliError::ParseGraph {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} points and {} connections from {path}",
        graph.point_count(),
        graph.connections().len()
    );
    Ok(graph)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
