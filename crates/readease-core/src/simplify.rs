//! The simplification boundary.
//!
//! Neural simplification lives outside this crate. It is reached through the
//! [`Simplifier`] trait: a handle built once at startup and passed by
//! reference to whatever needs it. Timeouts and retries belong to the
//! implementation behind the trait, not to the formatting code.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crate::config::SimplifierConfig;
use crate::error::{SimplifyError, SimplifyResult};
use crate::text;

/// Something that turns text into simpler text.
pub trait Simplifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Simplify `text`. The result is treated as ordinary input text.
    fn simplify(&self, text: &str) -> SimplifyResult<String>;
}

/// Returns its input unchanged. Used when no simplifier is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Simplifier for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn simplify(&self, text: &str) -> SimplifyResult<String> {
        Ok(text.to_string())
    }
}

/// Runs an external program: text on stdin, simplified text on stdout.
#[derive(Debug, Clone)]
pub struct CommandSimplifier {
    program: String,
    args: Vec<String>,
}

impl CommandSimplifier {
    /// Create a simplifier that runs `program` with `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn spawn_error(&self, source: io::Error) -> SimplifyError {
        SimplifyError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Simplifier for CommandSimplifier {
    fn name(&self) -> &str {
        &self.program
    }

    #[instrument(skip(self, text), fields(program = %self.program, text_len = text.len()))]
    fn simplify(&self, text: &str) -> SimplifyResult<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stdin = child.stdin.take();

        // Feed stdin from a second thread so a chatty child cannot fill its
        // stdout pipe while we are still writing.
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let Some(mut stdin) = stdin {
                    stdin.write_all(text.as_bytes())?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(SimplifyError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if let Err(source) = written
            && source.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(SimplifyError::Stdin {
                program: self.program.clone(),
                source,
            });
        }

        let simplified = String::from_utf8(output.stdout).map_err(|_| SimplifyError::InvalidUtf8 {
            program: self.program.clone(),
        })?;

        debug!(output_len = simplified.len(), "simplifier finished");
        Ok(simplified.trim().to_string())
    }
}

/// Feeds a wrapped simplifier one sentence at a time.
#[derive(Debug, Clone)]
pub struct SentenceWise<S> {
    inner: S,
}

impl<S: Simplifier> SentenceWise<S> {
    /// Wrap `inner` so it sees single sentences.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Simplifier> Simplifier for SentenceWise<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn simplify(&self, text: &str) -> SimplifyResult<String> {
        simplify_by_sentence(&self.inner, text)
    }
}

/// Simplify each sentence separately and join the results with spaces.
///
/// Sentences come from the same segmenter the restructuring pipeline uses.
#[instrument(skip_all, fields(simplifier = simplifier.name(), text_len = text.len()))]
pub fn simplify_by_sentence(simplifier: &dyn Simplifier, text: &str) -> SimplifyResult<String> {
    let sentences = text::split_sentences(text);
    debug!(sentences = sentences.len(), "simplifying sentence by sentence");

    let simplified = sentences
        .iter()
        .map(|sentence| simplifier.simplify(sentence))
        .collect::<SimplifyResult<Vec<_>>>()?;

    Ok(simplified.join(" "))
}

/// Build the simplifier described by configuration.
///
/// No configuration means [`Passthrough`].
pub fn from_config(config: Option<&SimplifierConfig>) -> Box<dyn Simplifier> {
    match config {
        None => Box::new(Passthrough),
        Some(cfg) => {
            let command = CommandSimplifier::new(cfg.command.clone(), cfg.args.clone());
            if cfg.per_sentence {
                Box::new(SentenceWise::new(command))
            } else {
                Box::new(command)
            }
        }
    }
}
