use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::nhmmer::artifacts::write_artifact_list;
use crate::nhmmer::Nhmmer;
use crate::nhmmer::NhmmerParams;
use crate::utils::check_nhmmer;

#[derive(Args)]
pub struct ScreenCMD {
    /// FASTA with the sequences to screen
    #[arg(short = 'i', value_parser = clap::value_parser!(PathBuf))]
    pub path_in: PathBuf,

    /// Profile HMM to search with
    #[arg(short = 'm', value_parser = clap::value_parser!(PathBuf))]
    pub path_hmm: PathBuf,

    /// Where to put the nhmmer report
    #[arg(short = 'o', value_parser = clap::value_parser!(PathBuf))]
    pub path_out: PathBuf,

    /// Per-hit table file; required when --artifacts is given
    #[arg(long = "tblout", value_parser = clap::value_parser!(PathBuf))]
    pub path_tblout: Option<PathBuf>,

    /// Write identifiers of sequences without a hit to this file
    #[arg(long = "artifacts", value_parser = clap::value_parser!(PathBuf))]
    pub path_artifacts: Option<PathBuf>,

    /// Inclusion E-value threshold, passed to nhmmer as --incE
    #[arg(long = "inc-evalue")]
    pub inc_evalue: Option<f64>,

    /// Keep alignment blocks in the report instead of passing --noali
    #[arg(long = "keep-alignments", default_value_t = false)]
    pub keep_alignments: bool,

    /// Report accessions instead of names where the profile has them
    #[arg(long = "acc", default_value_t = false)]
    pub prefer_accessions: bool,

    //Thread settings, passed through to nhmmer. Negative values are let
    //through the parser so that validation can report them properly
    #[arg(short = '@', value_parser = clap::value_parser!(i32), allow_negative_numbers = true)]
    num_threads: Option<i32>,
}

impl ScreenCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let params = NhmmerParams {
            path_profile: self.path_hmm.clone(),
            path_seqs: self.path_in.clone(),
            path_report: self.path_out.clone(),
            path_tblout: self.path_tblout.clone(),
            inc_evalue: self.inc_evalue,
            suppress_alignments: !self.keep_alignments,
            prefer_accessions: self.prefer_accessions,
            num_threads: self.num_threads,
            report_artifacts: self.path_artifacts.is_some(),
        };

        //Validate before the preflight check; that check spawns a process
        params.validate()?;
        check_nhmmer()?;

        let (results, artifacts) = Nhmmer::run(&params)?;

        let summary = results.read_summary()?;
        if let Some(n) = summary.target_sequences {
            log::info!("nhmmer searched {} target sequences", n);
        }
        if let Some(n) = summary.total_hits {
            log::info!("nhmmer reported {} hits", n);
        }

        if let (Some(path_artifacts), Some(artifacts)) = (&self.path_artifacts, artifacts) {
            write_artifact_list(path_artifacts, &artifacts)?;
            println!(
                "Wrote {} artifact identifiers to {}",
                artifacts.len(),
                path_artifacts.display()
            );
        }

        log::info!("Screen has finished succesfully");
        Ok(())
    }
}
