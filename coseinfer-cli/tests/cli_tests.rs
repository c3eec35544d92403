// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cose_verify_sign1"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(o: &Output) -> String {
    String::from_utf8(o.stdout.clone()).unwrap()
}

#[test]
fn verifies_built_in_sample() {
    let o = run(&["-a", "COSE_SIGN1_VERIFY"]);
    assert!(o.status.success(), "{o:?}");

    let out = stdout(&o);
    assert!(out.starts_with("Successfully verified the signature\n"), "{out}");
    assert!(out.contains("Payload:: a13a0001387f441f85ab3f\n"), "{out}");
    assert!(out.contains("Inference value from the payload:: "), "{out}");
    assert!(o.stderr.is_empty());
}

#[test]
fn decrypt_is_not_supported() {
    let o = run(&["--action", "COSE_DECRYPT_VERIFY"]);
    assert!(o.status.success());
    assert_eq!(stdout(&o), "Decrypt is not supported\n");
}

#[test]
fn unknown_action_exits_2() {
    let o = run(&["-a", "FOO"]);
    assert_eq!(o.status.code(), Some(2));
    assert!(stdout(&o).starts_with("FOO is not supported\n"));
}

#[test]
fn off_curve_key_exits_1_without_payload() {
    let mut key = vec!["0x4"];
    key.extend(std::iter::repeat("0x1").take(64));
    let key = key.join(",");

    let o = run(&["-a", "COSE_SIGN1_VERIFY", "-k", &key]);
    // (1, 1, ...) is not on P-256, so this is a key error, not a mismatch.
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).is_empty());
}

#[test]
fn tampered_payload_exits_3() {
    let tampered = coseinfer::SAMPLE_COSE_SIGN1.replacen("0x85,0xab,0x3f", "0x85,0xab,0x3e", 1);
    let o = run(&["-a", "COSE_SIGN1_VERIFY", "-p", &tampered]);
    assert_eq!(o.status.code(), Some(3));
    assert!(stdout(&o).is_empty());
    assert!(String::from_utf8_lossy(&o.stderr).contains("signature verification failed"));
}

#[test]
fn bad_hex_exits_1() {
    let o = run(&["-a", "COSE_SIGN1_VERIFY", "-p", "0x1,0x100"]);
    assert_eq!(o.status.code(), Some(1));
}

#[test]
fn missing_action_is_a_usage_error() {
    let o = run(&[]);
    assert_eq!(o.status.code(), Some(2));
}
