use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use lazy_static::lazy_static;
use regex::Regex;

use super::table::read_hit_ids;

lazy_static! {
    //The label anchors the match; token positions in these lines shift
    //between nhmmer versions, so never count columns
    static ref RE_TARGET_SEQS: Regex =
        Regex::new(r"^Target sequences:\s+(?P<count>\d+)").unwrap();
    static ref RE_TOTAL_HITS: Regex =
        Regex::new(r"^Total number of hits:\s+(?P<count>\d+)").unwrap();
}

/// Marker that opens a per-hit annotation block when alignments are kept
const ALI_MARKER: &str = ">> ";

/// Section that follows the last annotation block in every report
const STATS_MARKER: &str = "Internal pipeline statistics summary:";

/// Counts scraped from the report footer. A field stays unset when its label
/// never appeared, e.g. in a report truncated mid-write; 0 is never
/// substituted for a missing count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub target_sequences: Option<u64>,
    pub total_hits: Option<u64>,
}

/// Handle to the files one finished nhmmer run produced. All accessors
/// re-read from disk, so parsing twice gives the same answer.
#[derive(Debug)]
pub struct NhmmerResults {
    pub path_report: PathBuf,
    pub path_tblout: Option<PathBuf>,
}

impl NhmmerResults {
    pub fn new(path_report: &Path, path_tblout: Option<&Path>) -> Self {
        Self {
            path_report: path_report.to_path_buf(),
            path_tblout: path_tblout.map(|p| p.to_path_buf()),
        }
    }

    /// Scrape "Target sequences:" and "Total number of hits:" from the report
    pub fn read_summary(&self) -> anyhow::Result<ReportSummary> {
        let file_report = File::open(&self.path_report)
            .with_context(|| format!("Could not open report {}", self.path_report.display()))?;
        let bufreader = BufReader::new(&file_report);

        let mut summary = ReportSummary::default();
        for rline in bufreader.lines() {
            let line = rline
                .with_context(|| format!("Failed to read from {}", self.path_report.display()))?;
            if let Some(caps) = RE_TARGET_SEQS.captures(&line) {
                summary.target_sequences = Some(parse_count(&caps["count"], &line)?);
            } else if let Some(caps) = RE_TOTAL_HITS.captures(&line) {
                summary.total_hits = Some(parse_count(&caps["count"], &line)?);
            }
        }

        Ok(summary)
    }

    /// Hit identifiers from the table output of this run
    pub fn hit_ids(&self) -> anyhow::Result<HashSet<String>> {
        match &self.path_tblout {
            Some(path_tblout) => read_hit_ids(path_tblout),
            None => bail!("This run produced no table output"),
        }
    }

    /// The annotation lines nhmmer printed for one hit, alignment included:
    /// everything after the ">> <identifier>" marker up to the next marker or
    /// the pipeline statistics section, trailing blank lines trimmed. None
    /// when the report holds no block for this identifier, which is also the
    /// case for every identifier when alignments were suppressed.
    pub fn alignment_block(&self, id: &str) -> anyhow::Result<Option<Vec<String>>> {
        let file_report = File::open(&self.path_report)
            .with_context(|| format!("Could not open report {}", self.path_report.display()))?;
        let bufreader = BufReader::new(&file_report);

        let mut block: Option<Vec<String>> = None;
        for rline in bufreader.lines() {
            let line = rline
                .with_context(|| format!("Failed to read from {}", self.path_report.display()))?;

            if let Some(rest) = line.strip_prefix(ALI_MARKER) {
                if block.is_some() {
                    break;
                }
                if rest.split_whitespace().next() == Some(id) {
                    block = Some(Vec::new());
                }
                continue;
            }
            if line.starts_with(STATS_MARKER) {
                break;
            }
            if let Some(block) = block.as_mut() {
                block.push(line);
            }
        }

        if let Some(block) = block.as_mut() {
            while block.last().map(|l| l.trim().is_empty()) == Some(true) {
                block.pop();
            }
        }
        Ok(block)
    }
}

fn parse_count(token: &str, line: &str) -> anyhow::Result<u64> {
    token
        .parse()
        .with_context(|| format!("Unparseable count in report line: {}", line))
}
