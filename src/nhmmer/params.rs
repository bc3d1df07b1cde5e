use std::path::PathBuf;

use anyhow::bail;

/// Settings for one nhmmer invocation. Constructed per call, never reused.
pub struct NhmmerParams {
    /// Profile HMM to search with
    pub path_profile: std::path::PathBuf,

    /// FASTA file with the sequences to screen
    pub path_seqs: std::path::PathBuf,

    /// Where nhmmer writes its human-readable report
    pub path_report: std::path::PathBuf,

    /// Where nhmmer writes its parseable per-hit table (--tblout)
    pub path_tblout: Option<PathBuf>,

    /// Inclusion E-value threshold (--incE). nhmmer default applies when unset
    pub inc_evalue: Option<f64>,

    /// Leave alignment blocks out of the report (--noali)
    pub suppress_alignments: bool,

    /// Report accessions instead of names where available (--acc)
    pub prefer_accessions: bool,

    /// Worker threads for nhmmer (--cpu). 0 is valid and means serial mode
    pub num_threads: Option<i32>,

    /// Also compute the list of input sequences that did not hit the profile
    pub report_artifacts: bool,
}

impl NhmmerParams {
    /// Reject parameter combinations that make no sense, before any process
    /// is spawned. Whether the profile and sequence files exist is left for
    /// nhmmer itself to complain about.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(n) = self.num_threads {
            if n < 0 {
                bail!("Thread count must be >= 0, got {}", n);
            }
        }

        //The free-text report cannot be trusted for hit identifiers once
        //there are many hits, so artifacts require the table output
        if self.report_artifacts && self.path_tblout.is_none() {
            bail!("Artifact reporting requires a --tblout path");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> NhmmerParams {
        NhmmerParams {
            path_profile: PathBuf::from("profile.hmm"),
            path_seqs: PathBuf::from("seqs.fasta"),
            path_report: PathBuf::from("report.txt"),
            path_tblout: Some(PathBuf::from("hits.tbl")),
            inc_evalue: None,
            suppress_alignments: true,
            prefer_accessions: false,
            num_threads: None,
            report_artifacts: false,
        }
    }

    #[test]
    fn accepts_zero_threads() {
        let mut params = base_params();
        params.num_threads = Some(0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_negative_threads() {
        let mut params = base_params();
        params.num_threads = Some(-1);
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_artifacts_without_tblout() {
        let mut params = base_params();
        params.report_artifacts = true;
        params.path_tblout = None;
        assert!(params.validate().is_err());
    }

    #[test]
    fn accepts_artifacts_with_tblout() {
        let mut params = base_params();
        params.report_artifacts = true;
        assert!(params.validate().is_ok());
    }
}
