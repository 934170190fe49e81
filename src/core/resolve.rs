//! Expression resolution.
//!
//! Turns a declaration into a concrete value by interpreting its
//! [`Strategy`]. Commands and prompts block until they finish; a failing
//! command aborts the whole run.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::encode::ResolvedValue;
use crate::core::exec::CommandRunner;
use crate::core::prompt::Prompter;
use crate::core::report::Reporter;
use crate::core::strategy::Strategy;
use crate::core::template::Declaration;
use crate::error::Result;

/// Resolves declarations using injected command and prompt capabilities.
pub struct Resolver<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a mut dyn Prompter,
    reporter: &'a dyn Reporter,
    side_files: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a mut dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            runner,
            prompter,
            reporter,
            side_files: false,
        }
    }

    /// Recognize the `file:` prefix.
    pub fn with_side_files(mut self, enabled: bool) -> Self {
        self.side_files = enabled;
        self
    }

    pub fn set_side_files(&mut self, enabled: bool) {
        self.side_files = enabled;
    }

    /// Parse a declaration's expression without running anything.
    pub fn strategy(&self, declaration: &Declaration) -> Strategy {
        let runner = self.runner;
        Strategy::parse(
            &declaration.key,
            &declaration.expression,
            self.side_files,
            &|word: &str| runner.is_program(word),
        )
    }

    /// Resolve a declaration.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if a command fails, or a prompt error if
    /// interactive input cannot be read.
    pub fn resolve(&mut self, declaration: &Declaration) -> Result<ResolvedValue> {
        let strategy = self.strategy(declaration);
        let key = declaration.key.as_str();

        let (inner, side_file) = match &strategy {
            Strategy::FileBacked(inner) => (inner.as_ref(), true),
            other => (other, false),
        };

        let value = self.evaluate(key, inner)?;

        Ok(ResolvedValue {
            key: key.to_string(),
            value,
            side_file,
        })
    }

    fn evaluate(&mut self, key: &str, strategy: &Strategy) -> Result<Zeroizing<String>> {
        match strategy {
            Strategy::Literal(text) => {
                debug!(key, "literal");
                Ok(Zeroizing::new(text.clone()))
            }
            Strategy::Command(expression) => {
                debug!(key, expression = %expression, "command");
                self.reporter.executing(key, expression);
                Ok(Zeroizing::new(self.runner.run(key, expression)?))
            }
            Strategy::Prompt(label) => {
                debug!(key, "prompt");
                Ok(Zeroizing::new(self.prompter.prompt(label)?))
            }
            Strategy::FileBacked(inner) => self.evaluate(key, inner),
        }
    }
}
