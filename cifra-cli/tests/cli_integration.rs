//! Integration tests for the cifra CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_encrypt_with_default_key() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc");

    // The default key is the first alphabet symbol, a shift by one.
    cmd.assert().success().stdout(predicate::str::diff("bcd\n"));
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("hello world")
        .arg("-k")
        .arg("key")
        .arg("--index-basis")
        .arg("zero");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let cipher_text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(cipher_text.trim(), "rijvs uyvjn");

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("decrypt")
        .arg(cipher_text.trim())
        .arg("-k")
        .arg("key")
        .arg("--index-basis")
        .arg("zero");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn test_stdin_input() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("-k")
        .arg("b")
        .arg("--index-basis")
        .arg("zero")
        .write_stdin("abc");

    cmd.assert().success().stdout(predicate::str::contains("bcd"));
}

#[test]
fn test_file_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("input.txt");
    let output_file = temp_dir.path().join("output.txt");
    fs::write(&input_file, "attack at dawn").unwrap();

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("-i")
        .arg(&input_file)
        .arg("-o")
        .arg(&output_file)
        .arg("-k")
        .arg("a")
        .arg("--index-basis")
        .arg("zero");

    cmd.assert().success();

    // Key "a" with basis zero shifts by nothing.
    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("attack at dawn"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc").arg("-f").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"input\""))
        .stdout(predicate::str::contains("\"output\""))
        .stdout(predicate::str::contains("\"direction\""))
        .stdout(predicate::str::contains("encrypt"));
}

#[test]
fn test_decrypt_json_direction() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("decrypt").arg("bcd").arg("-f").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"direction\": \"decrypt\""));
}

#[test]
fn test_spanish_alphabet_preset() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("mano")
        .arg("-a")
        .arg("spanish")
        .arg("-k")
        .arg("b")
        .arg("--index-basis")
        .arg("zero");

    // Shifting by one steps n to ñ.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("nbñp"));
}

#[test]
fn test_morse_map_preset() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("sos").arg("-m").arg("morse");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("... --- ..."));

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("decrypt").arg("... --- ...").arg("-m").arg("morse");

    cmd.assert().success().stdout(predicate::str::contains("sos"));
}

#[test]
fn test_unknown_symbol_fails() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc!");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not part of the cipher"));
}

#[test]
fn test_on_conflict_ignore_drops_symbols() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("abc!")
        .arg("-k")
        .arg("a")
        .arg("--index-basis")
        .arg("zero")
        .arg("--on-conflict")
        .arg("ignore");

    cmd.assert().success().stdout(predicate::str::diff("abc\n"));
}

#[test]
fn test_unknown_alphabet_preset() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc").arg("-a").arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_conflicting_cipher_flags_are_rejected() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt")
        .arg("abc")
        .arg("-m")
        .arg("morse")
        .arg("-k")
        .arg("b");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("shift and substitution ciphers"));
}

#[test]
fn test_list_alphabets() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("list").arg("alphabets");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("latin"))
        .stdout(predicate::str::contains("spanish"))
        .stdout(predicate::str::contains("morse"));
}

#[test]
fn test_list_maps() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("list").arg("maps");

    cmd.assert().success().stdout(predicate::str::contains("morse"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_config_prints_to_stdout() {
    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("generate-config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[shift]"))
        .stdout(predicate::str::contains("alphabet = \"latin\""));
}

#[test]
fn test_generated_config_round_trips_through_the_binary() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("cipher.toml");

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("generate-config").arg("-o").arg(&config_file);
    cmd.assert().success();
    assert!(config_file.exists());

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc").arg("-c").arg(&config_file);

    // The template keys the latin alphabet with "abc" at basis one.
    cmd.assert().success().stdout(predicate::str::diff("bdf\n"));

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("decrypt").arg("bdf").arg("-c").arg(&config_file);

    cmd.assert().success().stdout(predicate::str::diff("abc\n"));
}

#[test]
fn test_config_with_both_sections_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("cipher.toml");
    fs::write(
        &config_file,
        "[shift]\nalphabet = \"latin\"\n\n[substitution]\nmap = \"morse\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("cifra").unwrap();
    cmd.arg("encrypt").arg("abc").arg("-c").arg(&config_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
