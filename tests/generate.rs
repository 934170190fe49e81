//! Generate command tests.
//!
//! The encryption utility is replaced by a script that prefixes each line,
//! configured through `skylab.toml`.

#![cfg(unix)]

mod support;

use predicates::prelude::*;
use support::*;

#[test]
fn test_generate_encrypts_document() {
    let t = Test::with_template("app.env", "A=echo hi\nCERT=printf 'a\\nb'\nC=plainvalue\n");
    t.fake_encryptor();
    let key = t.public_key();

    let output = t.generate("app.env", &key);
    assert_success(&output);
    assert_stdout_contains(&output, "--- SKYLAB Secret Generator: app.env ---");

    let dest = t.out().join("app.env");
    assert_eq!(
        read(&dest),
        "ENC:A=hi\nENC:CERT='a\nENC:b'\nENC:C=plainvalue\n"
    );
    assert_eq!(mode(&dest), 0o600);
}

#[test]
fn test_generate_does_not_create_side_files() {
    let t = Test::with_template("app.env", "B=file:echo secret\n");
    t.fake_encryptor();
    let key = t.public_key();

    assert_success(&t.generate("app.env", &key));

    assert_eq!(read(&t.out().join("app.env")), "ENC:B=file:echo secret\n");
    assert!(!t.out().join("b.secret").exists());
}

#[test]
fn test_generate_accepts_age_recipient() {
    let t = Test::with_template("app.env", "A=1\n");
    t.fake_encryptor();
    let key = t.path("age.pub");
    std::fs::write(&key, AGE_PUBLIC_KEY).unwrap();

    assert_success(&t.generate("app.env", &key));
}

#[test]
fn test_generate_passes_key_and_format_to_encryptor() {
    let t = Test::with_template("app.env", "A=1\n");
    let script = t.script("args-sops", "cat >/dev/null; echo \"$@\"");
    t.config(&format!(
        "[encryptor]\nprogram = \"{}\"\nformat = \"env\"\n",
        script.display()
    ));
    let key = t.public_key();

    assert_success(&t.generate("app.env", &key));

    assert_eq!(
        read(&t.out().join("app.env")),
        format!(
            "--encrypt --ssh-public-key {} --input-type env --output-type env /dev/stdin\n",
            key.display()
        )
    );
}

#[test]
fn test_missing_public_key() {
    let t = Test::with_template("app.env", "A=1\n");
    t.fake_encryptor();

    let output = t.generate("app.env", &t.path("missing.pub"));
    assert_failure(&output);
    assert_stderr_contains(&output, "public key not found");
    assert!(!t.out().exists());
}

#[test]
fn test_invalid_public_key() {
    let t = Test::with_template("app.env", "A=1\n");
    t.fake_encryptor();
    let key = t.path("bad.pub");
    std::fs::write(&key, "definitely not a key\n").unwrap();

    let output = t.generate("app.env", &key);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid public key");
}

#[test]
fn test_encryptor_failure_promotes_nothing() {
    let t = Test::with_template("app.env", "A=1\n");
    let script = t.script("broken-sops", "cat >/dev/null; echo 'could not encrypt' >&2; exit 1");
    t.config(&format!("[encryptor]\nprogram = \"{}\"\n", script.display()));
    let key = t.public_key();

    let output = t.generate("app.env", &key);
    assert_failure(&output);
    assert_stderr_contains(&output, "could not encrypt");
    assert!(!t.out().join("app.env").exists());
}

#[test]
fn test_missing_encryptor_fails_before_resolving() {
    let t = Test::with_template("app.env", "A=touch ran-anyway\n");
    t.config("[encryptor]\nprogram = \"no-such-sops-binary\"\n");
    let key = t.public_key();

    t.cmd()
        .args(["generate", "--template", "app.env", "--sshPublicKey"])
        .arg(&key)
        .args(["--outputDir", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-such-sops-binary not found"));

    assert!(!t.path("ran-anyway").exists());
}

#[test]
fn test_failing_command_skips_encryption() {
    let t = Test::with_template("app.env", "X=false\n");
    let script = t.script("marker-sops", "touch encrypted-marker; cat");
    t.config(&format!("[encryptor]\nprogram = \"{}\"\n", script.display()));
    let key = t.public_key();

    assert_failure(&t.generate("app.env", &key));
    assert!(!t.path("encrypted-marker").exists());
    assert!(!t.out().join("app.env").exists());
}
