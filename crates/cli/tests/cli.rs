use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const FOOTER_LEN: usize = 19;

#[test]
fn test_compress_single_group() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGA").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Building permutation table ... [Done]"))
        .stdout(predicate::str::contains("seq.txt.cx"));

    let output = fs::read(temp.path().join("seq.txt.cx")).unwrap();
    let mut expected = vec![27u8];
    expected.extend_from_slice(&4u64.to_le_bytes());
    expected.extend_from_slice(&1u64.to_le_bytes());
    expected.extend_from_slice(&[0, 0, 0]);
    assert_eq!(output, expected);
}

#[test]
fn test_compress_with_overflow() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "tcgat").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("--file").arg(&input).arg("--quiet").assert().success();

    let output = fs::read(temp.path().join("seq.txt.cx")).unwrap();
    assert_eq!(output.len(), 1 + FOOTER_LEN);
    assert_eq!(output[0], 27);
    assert_eq!(&output[1..9], &5u64.to_le_bytes());
    assert_eq!(&output[9..17], &1u64.to_le_bytes());
    assert_eq!(&output[17..], &[b'T', 0, 0]);
}

#[test]
fn test_compress_empty_file() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("empty");
    fs::write(&input, "").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f").arg(&input).assert().success();

    let output = fs::read(temp.path().join("empty.cx")).unwrap();
    assert_eq!(output, vec![0u8; FOOTER_LEN]);
}

#[test]
fn test_output_override() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    let output = temp.path().join("packed.bin");
    fs::write(&input, "AAAACCCCGGGGTTTT").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], &[255, 85, 170, 0]);
    assert!(!temp.path().join("seq.txt.cx").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("missing.txt");

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));

    assert!(!temp.path().join("missing.txt.cx").exists());
}

#[test]
fn test_no_file_argument_fails() {
    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Genetic Data Compression Utility"))
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn test_invalid_symbol_rejected_by_default() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGANNNN").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("offset 4"));

    assert!(!temp.path().join("seq.txt.cx").exists());
    assert!(!temp.path().join("seq.txt.cx.partial").exists());
}

#[test]
fn test_skip_policy_drops_groups() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGANNNNAAAA").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .arg("--on-invalid")
        .arg("skip")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped groups: 1"));

    let output = fs::read(temp.path().join("seq.txt.cx")).unwrap();
    assert_eq!(&output[..2], &[27, 255]);
    assert_eq!(&output[2..10], &12u64.to_le_bytes());
    assert_eq!(&output[10..18], &2u64.to_le_bytes());
}

#[test]
fn test_reject_policy_names_group() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGATTNT").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .arg("--on-invalid")
        .arg("reject")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TTNT"));
}

#[test]
fn test_unknown_policy_is_usage_error() {
    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg("whatever.txt")
        .arg("--on-invalid")
        .arg("ignore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available: skip, reject, validate"));
}

#[test]
fn test_json_report() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "GATTACA").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    let assert = cmd.arg("-f").arg(&input).arg("--json").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["footer"]["uncompressed_size"], 7);
    assert_eq!(report["footer"]["compressed_size"], 1);
    assert_eq!(report["policy"], "validate");
    assert_eq!(report["output_bytes"], 1 + FOOTER_LEN);
}

#[test]
fn test_parallel_flag_matches_sequential() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("big.txt");
    let data: Vec<u8> = b"GATTACA".iter().copied().cycle().take(3 * 1024 * 1024 + 2).collect();
    fs::write(&input, &data).unwrap();

    let seq_out = temp.path().join("seq.cx");
    let par_out = temp.path().join("par.cx");

    Command::cargo_bin("gdcx")
        .unwrap()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&seq_out)
        .arg("-q")
        .assert()
        .success();
    Command::cargo_bin("gdcx")
        .unwrap()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&par_out)
        .arg("--parallel")
        .arg("--threads")
        .arg("2")
        .arg("-q")
        .assert()
        .success();

    assert_eq!(fs::read(&seq_out).unwrap(), fs::read(&par_out).unwrap());
}

#[test]
fn test_show_table() {
    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("--show-table")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 27  0x1b  TCGA"))
        .stdout(predicate::str::contains("255  0xff  AAAA"));
}

#[test]
fn test_show_table_json() {
    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    let assert = cmd.arg("--show-table").arg("--json").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 256);
    assert_eq!(entries[27]["group"], "TCGA");
}

#[test]
fn test_show_table_conflicts_with_file() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGA").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("--show-table")
        .arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!temp.path().join("seq.txt.cx").exists());
}

#[test]
fn test_failed_stage_is_marked() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("seq.txt");
    fs::write(&input, "TCGANNNN").unwrap();

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Reading genetic data ... [Done]"))
        .stdout(predicate::str::contains("Compressing ... [Failed]\n"));
}

#[test]
fn test_failed_read_is_marked() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("missing.txt");

    let mut cmd = Command::cargo_bin("gdcx").unwrap();
    cmd.arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Reading genetic data ... [Failed]\n"))
        .stdout(predicate::str::contains("Compressing").not());
}
