//End-to-end tests of the commandline interface. The tally subcommand only
//parses files, so these run without nhmmer installed; the screen tests
//exercise the validation paths that fire before any process is spawned.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn tally_writes_sorted_artifact_list() {
    let temp_dir = tempdir().unwrap();
    let path_artifacts = temp_dir.path().join("artifacts.txt");

    let mut cmd = Command::cargo_bin("hmmscreen").unwrap();
    let output = cmd
        .arg("tally")
        .arg("-i")
        .arg(fixture("seqs.fasta"))
        .arg("-r")
        .arg(fixture("report_default.txt"))
        .arg("-t")
        .arg(fixture("tblout_default.txt"))
        .arg("-o")
        .arg(&path_artifacts)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Target sequences: 40"));
    assert!(stdout.contains("Total number of hits: 34"));
    assert!(stdout.contains("Artifacts: 6"));

    let listed: Vec<String> = fs::read_to_string(&path_artifacts)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(listed.len(), 6);
    assert!(listed.contains(&"19896_824354;size=17;".to_string()));

    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted, "Artifact list should be written sorted");
}

#[test]
fn tally_prints_artifacts_when_no_output_file_is_given() {
    let mut cmd = Command::cargo_bin("hmmscreen").unwrap();
    let output = cmd
        .arg("tally")
        .arg("-i")
        .arg(fixture("seqs.fasta"))
        .arg("-r")
        .arg(fixture("report_strict.txt"))
        .arg("-t")
        .arg(fixture("tblout_strict.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total number of hits: 3"));
    assert!(stdout.contains("Artifacts: 37"));
    //One of the sequences below the strict threshold
    assert!(stdout.contains("19896_3384997;size=31;"));
}

#[test]
fn tally_fails_on_missing_table_file() {
    let mut cmd = Command::cargo_bin("hmmscreen").unwrap();
    let output = cmd
        .arg("tally")
        .arg("-i")
        .arg(fixture("seqs.fasta"))
        .arg("-r")
        .arg(fixture("report_default.txt"))
        .arg("-t")
        .arg("/no/such/tblout.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn screen_rejects_negative_thread_count() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("hmmscreen").unwrap();
    let output = cmd
        .arg("screen")
        .arg("-i")
        .arg(fixture("seqs.fasta"))
        .arg("-m")
        .arg("profile.hmm")
        .arg("-o")
        .arg(temp_dir.path().join("report.txt"))
        .arg("-@")
        .arg("-1")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Thread count"));
    //Validation must fire before anything is run or written
    assert!(!temp_dir.path().join("report.txt").exists());
}

#[test]
fn screen_rejects_artifact_request_without_tblout() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("hmmscreen").unwrap();
    let output = cmd
        .arg("screen")
        .arg("-i")
        .arg(fixture("seqs.fasta"))
        .arg("-m")
        .arg("profile.hmm")
        .arg("-o")
        .arg(temp_dir.path().join("report.txt"))
        .arg("--artifacts")
        .arg(temp_dir.path().join("artifacts.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tblout"));
}
