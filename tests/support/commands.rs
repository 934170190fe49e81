//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a skylab-secrets command isolated from the caller's
    /// environment, running in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("skylab-secrets").expect("failed to find skylab-secrets binary");
        cmd.env_remove("SKYLAB_TEMPLATES");
        cmd.env_remove("SKYLAB_CONFIG");
        cmd.env_remove("SKYLAB_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd.write_stdin("");
        cmd
    }

    /// Shortcut for `skylab-secrets deploy` into `out/`.
    pub fn deploy(&self, template: &str) -> Output {
        self.deploy_with_input(template, "")
    }

    /// `deploy` with `input` piped to stdin for prompts.
    pub fn deploy_with_input(&self, template: &str, input: &str) -> Output {
        let out = self.out();
        self.cmd()
            .args(["deploy", "--template", template, "--output-dir"])
            .arg(&out)
            .write_stdin(input)
            .output()
            .expect("failed to run skylab-secrets deploy")
    }

    /// Shortcut for `skylab-secrets generate` into `out/`.
    pub fn generate(&self, template: &str, key: &Path) -> Output {
        let out = self.out();
        self.cmd()
            .args(["generate", "--template", template, "--ssh-public-key"])
            .arg(key)
            .arg("--output-dir")
            .arg(&out)
            .output()
            .expect("failed to run skylab-secrets generate")
    }
}
