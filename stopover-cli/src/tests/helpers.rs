//! Temporary graph files for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use stopover_core::Graph;
use stopover_core::test_support::reference_network;
use tempfile::TempDir;

/// Write raw bytes to a UTF-8 path.
pub(super) fn write_utf8(path: &Utf8Path, bytes: &[u8]) {
    std::fs::write(path, bytes).expect("write test file");
}

/// A temporary directory holding `graph.json`.
pub(super) struct GraphFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl GraphFile {
    pub(super) fn with_graph(graph: &Graph) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("graph.json");
        let payload = serde_json::to_vec(graph).expect("serialise graph");
        write_utf8(&path, &payload);
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn reference() -> Self {
        Self::with_graph(&reference_network())
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Decode captured command output.
pub(super) fn parse_output(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("output should be JSON")
}

/// Identifiers in a JSON string array.
pub(super) fn ids(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|id| id.as_str().expect("expected a string id"))
        .collect()
}
