//! Writers for the BEELINE network files.
//!
//! Every writer comes in two variants in the usual style of this crate: `to_*` returns the
//! file content as a `String`, `write_*` streams it into any `std::io::Write`. The
//! [write_file] helper takes care of the buffered output to a path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// **(internal)** Signed and unsigned `.tsv` edge lists and the `refNetwork.csv` table.
mod _impl_edge_lists;
/// **(internal)** Binary `.tsv` adjacency matrix.
mod _impl_adjacency_matrix;

pub const EXPRESSION_DATA_FILE: &str = "ExpressionData.csv";
pub const PSEUDO_TIME_FILE: &str = "PseudoTime.csv";
pub const REF_NETWORK_FILE: &str = "refNetwork.csv";
pub const SUMMARY_FILE: &str = "SUMMARY.md";

pub fn signed_edge_list_file(network_name: &str) -> String {
    format!("{}_goldstandard_signed.tsv", network_name)
}

pub fn unsigned_edge_list_file(network_name: &str) -> String {
    format!("{}_goldstandard.tsv", network_name)
}

pub fn adjacency_matrix_file(network_name: &str) -> String {
    format!("{}_adjacency_matrix.tsv", network_name)
}

pub fn statistics_file(network_name: &str) -> String {
    format!("{}_statistics.json", network_name)
}

/// Create (or truncate) the file at `path` and fill it using the given `writer`.
///
/// I/O errors are converted to a message which mentions the path.
pub fn write_file<F>(path: &Path, writer: F) -> Result<(), String>
where
    F: FnOnce(&mut dyn Write) -> Result<(), std::io::Error>,
{
    let error = |e: std::io::Error| format!("Cannot write `{}`: {}", path.display(), e);
    let file = File::create(path).map_err(error)?;
    let mut out = BufWriter::new(file);
    writer(&mut out).map_err(error)?;
    out.flush().map_err(error)
}
