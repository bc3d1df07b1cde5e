use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

/// Comment marker nhmmer uses for the header and footer of --tblout files
const TBLOUT_COMMENT: &str = "#";

/// Collect the target identifiers from a --tblout file. The first column of
/// every non-comment line is the identifier; the remaining columns are
/// statistics owned by nhmmer and not interpreted here. A sequence reported
/// more than once counts once.
pub fn read_hit_ids(path_tblout: &Path) -> anyhow::Result<HashSet<String>> {
    let file_tblout = File::open(path_tblout)
        .with_context(|| format!("Could not open table output {}", path_tblout.display()))?;
    let bufreader = BufReader::new(&file_tblout);

    let mut hits = HashSet::new();
    for rline in bufreader.lines() {
        let line = rline
            .with_context(|| format!("Failed to read from {}", path_tblout.display()))?;
        if line.starts_with(TBLOUT_COMMENT) {
            continue;
        }
        if let Some(id) = line.split_whitespace().next() {
            hits.insert(id.to_string());
        }
    }

    Ok(hits)
}
