use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bio::io::fasta;
use itertools::Itertools;

use super::table::read_hit_ids;

/// All record identifiers of the input FASTA: the text between '>' and the
/// first whitespace. First-seen order, duplicates collapsed.
pub fn collect_input_ids(path_seqs: &Path) -> anyhow::Result<Vec<String>> {
    let file_seqs = File::open(path_seqs)
        .with_context(|| format!("Could not open sequence file {}", path_seqs.display()))?;
    let reader = fasta::Reader::from_bufread(BufReader::new(file_seqs));

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for res_record in reader.records() {
        let record = res_record
            .with_context(|| format!("Broken FASTA record in {}", path_seqs.display()))?;
        if seen.insert(record.id().to_string()) {
            ids.push(record.id().to_string());
        }
    }

    Ok(ids)
}

/// Input identifiers with no hit in the table output: universe minus hit set.
/// An empty table means every input sequence is an artifact; a table covering
/// every input means an empty list. Order follows the input file; callers
/// that want a stable file sort themselves.
pub fn extract_artifacts(path_seqs: &Path, path_tblout: &Path) -> anyhow::Result<Vec<String>> {
    let hits = read_hit_ids(path_tblout)?;
    let universe = collect_input_ids(path_seqs)?;

    let artifacts = universe
        .into_iter()
        .filter(|id| !hits.contains(id))
        .collect();
    Ok(artifacts)
}

/// One identifier per line, sorted so that reruns produce identical files
pub fn write_artifact_list(path_out: &Path, artifacts: &[String]) -> anyhow::Result<()> {
    let file_out = File::create(path_out)
        .with_context(|| format!("Could not create artifact list {}", path_out.display()))?;
    let mut writer = BufWriter::new(&file_out);
    for id in artifacts.iter().sorted() {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()?;
    Ok(())
}
