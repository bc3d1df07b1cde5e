use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use itertools::Itertools;

use crate::nhmmer::artifacts::extract_artifacts;
use crate::nhmmer::artifacts::write_artifact_list;
use crate::nhmmer::NhmmerResults;

/// Re-parse the output of a finished nhmmer run without invoking the tool.
/// Useful when the search was run elsewhere and only the classification of
/// input sequences into hits and artifacts is still needed.
#[derive(Args)]
pub struct TallyCMD {
    /// FASTA the search was run on
    #[arg(short = 'i', value_parser = clap::value_parser!(PathBuf))]
    pub path_in: PathBuf,

    /// nhmmer report file from the finished run
    #[arg(short = 'r', value_parser = clap::value_parser!(PathBuf))]
    pub path_report: PathBuf,

    /// Table output from the same run
    #[arg(short = 't', value_parser = clap::value_parser!(PathBuf))]
    pub path_tblout: PathBuf,

    /// Where to write the artifact list; printed to stdout when not given
    #[arg(short = 'o', value_parser = clap::value_parser!(PathBuf))]
    pub path_out: Option<PathBuf>,
}

impl TallyCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let results = NhmmerResults::new(&self.path_report, Some(self.path_tblout.as_path()));

        let summary = results.read_summary()?;
        match summary.target_sequences {
            Some(n) => println!("Target sequences: {}", n),
            None => println!("Target sequences: not reported"),
        }
        match summary.total_hits {
            Some(n) => println!("Total number of hits: {}", n),
            None => println!("Total number of hits: not reported"),
        }

        let artifacts = extract_artifacts(&self.path_in, &self.path_tblout)?;
        println!("Artifacts: {}", artifacts.len());

        if let Some(path_out) = &self.path_out {
            write_artifact_list(path_out, &artifacts)?;
            println!("Wrote artifact list to {}", path_out.display());
        } else {
            for id in artifacts.iter().sorted() {
                println!("{}", id);
            }
        }

        log::info!("Tally has finished succesfully");
        Ok(())
    }
}
