use std::process::Command;

use anyhow::bail;
use anyhow::Context;
use log::debug;
use log::info;

use super::artifacts::extract_artifacts;
use super::params::NhmmerParams;
use super::report::NhmmerResults;

pub struct Nhmmer {}

impl Nhmmer {
    const NHMMER_CMD: &str = "nhmmer";
    const ARG_REPORT_OUT: &str = "-o";
    const ARG_TBLOUT: &str = "--tblout";
    const ARG_INC_EVALUE: &str = "--incE";
    const ARG_CPU: &str = "--cpu";
    const ARG_NOALI: &str = "--noali";
    const ARG_ACC: &str = "--acc";

    /// Run one search to completion. Blocks until nhmmer exits; a failed run
    /// is reported, never retried. Returns a handle to the produced files
    /// and, when asked for, the list of input identifiers without a hit.
    pub fn run(params: &NhmmerParams) -> anyhow::Result<(NhmmerResults, Option<Vec<String>>)> {
        params.validate()?;

        let mut cmd = Command::new(Self::NHMMER_CMD);
        cmd.arg(Self::ARG_REPORT_OUT).arg(&params.path_report);
        if let Some(path_tblout) = &params.path_tblout {
            cmd.arg(Self::ARG_TBLOUT).arg(path_tblout);
        }
        if let Some(inc_evalue) = params.inc_evalue {
            cmd.arg(Self::ARG_INC_EVALUE).arg(inc_evalue.to_string());
        }
        if let Some(num_threads) = params.num_threads {
            cmd.arg(Self::ARG_CPU).arg(num_threads.to_string());
        }
        if params.suppress_alignments {
            cmd.arg(Self::ARG_NOALI);
        }
        if params.prefer_accessions {
            cmd.arg(Self::ARG_ACC);
        }
        cmd.arg(&params.path_profile);
        cmd.arg(&params.path_seqs);

        debug!("Running: {}", command_line_for_log(&cmd));
        let output = cmd.output().with_context(|| {
            format!(
                "Failed to start {}; is it installed and in PATH?",
                Self::NHMMER_CMD
            )
        })?;
        if !output.status.success() {
            bail!(
                "nhmmer exited with failure: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        info!("nhmmer run complete, report in {}", params.path_report.display());

        let results = NhmmerResults::new(&params.path_report, params.path_tblout.as_deref());

        //validate() made sure the table path is present when artifacts were asked for
        let artifacts = if let (true, Some(path_tblout)) =
            (params.report_artifacts, params.path_tblout.as_ref())
        {
            Some(extract_artifacts(&params.path_seqs, path_tblout)?)
        } else {
            None
        };

        Ok((results, artifacts))
    }
}

fn command_line_for_log(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
