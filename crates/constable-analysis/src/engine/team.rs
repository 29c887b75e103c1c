//! Per-run orchestrator.
//!
//! A `Team` owns the enabled cop pool, the parser, and the run-wide error
//! log. Each file goes through parse → diagnostics triage → commissioned
//! investigation → failure reporting → optional autocorrection → sort.

use std::fs;
use std::path::{Path, PathBuf};

use constable_core::constants::DEBUG_HINT;
use constable_core::errors::TeamError;
use constable_core::{ConstableConfig, Offence, RunOptions};

use super::commissioner::{Commissioner, CopFailure};
use super::cop::Cop;
use super::corrector::Corrector;
use super::registry::CopRegistry;
use crate::parsers::ruby::RubyParser;
use crate::parsers::traits::SourceParser;
use crate::parsers::types::ProcessedSource;

/// Outcome of inspecting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Sorted offences.
    Completed(Vec<Offence>),
    /// The file could not be parsed; carries the parser's error text.
    ParseFailed(String),
}

impl Inspection {
    /// Offences found, empty for a parse failure.
    pub fn offences(&self) -> &[Offence] {
        match self {
            Self::Completed(offences) => offences,
            Self::ParseFailed(_) => &[],
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailed(_))
    }
}

/// Result of inspecting an in-memory buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedSource {
    pub inspection: Inspection,
    /// Autocorrected text, present only when it differs from the input.
    pub corrected: Option<String>,
}

pub struct Team {
    registry: CopRegistry,
    config: ConstableConfig,
    options: RunOptions,
    parser: Box<dyn SourceParser>,
    /// Built on first use, then reused for every file.
    cops: Option<Vec<Box<dyn Cop>>>,
    errors: Vec<String>,
}

impl Team {
    pub fn new(registry: CopRegistry, config: ConstableConfig, options: RunOptions) -> Self {
        Self {
            registry,
            config,
            options,
            parser: Box::new(RubyParser),
            cops: None,
            errors: Vec::new(),
        }
    }

    /// Replace the parser.
    pub fn with_parser(mut self, parser: impl SourceParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn autocorrect(&self) -> bool {
        self.options.autocorrect
    }

    pub fn debug(&self) -> bool {
        self.options.debug
    }

    pub fn config(&self) -> &ConstableConfig {
        &self.config
    }

    /// Every error recorded so far, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The enabled cop pool, in registration order.
    pub fn cops(&mut self) -> &[Box<dyn Cop>] {
        self.ensure_cops();
        self.cops.as_deref().unwrap_or(&[])
    }

    /// Inspect `path`, rewriting it in place when autocorrect changed it.
    ///
    /// Parse and cop failures are recorded in [`Team::errors`]; only a failed
    /// rewrite is returned as an error.
    pub fn inspect_file(&mut self, path: &Path) -> Result<Inspection, TeamError> {
        let processed = match self.parser.parse_file(path) {
            Ok(processed) => processed,
            Err(error) => {
                let file = path.display();
                self.report(
                    format!("An error occurred while parsing {file}."),
                    &error,
                    None,
                );
                return Ok(Inspection::ParseFailed(error.to_string()));
            }
        };

        let (offences, corrected) = self.investigate(&processed);
        if let Some(text) = corrected {
            fs::write(path, text).map_err(|source| TeamError::Rewrite {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(file = %path.display(), "wrote corrected source");
        }
        Ok(Inspection::Completed(offences))
    }

    /// Run the same pipeline on an in-memory buffer without touching disk.
    pub fn inspect_source(&mut self, name: &str, source: impl Into<String>) -> InspectedSource {
        match self.parser.parse_source(name, source.into()) {
            Ok(processed) => {
                let (offences, corrected) = self.investigate(&processed);
                InspectedSource {
                    inspection: Inspection::Completed(offences),
                    corrected,
                }
            }
            Err(error) => {
                self.report(
                    format!("An error occurred while parsing {name}."),
                    &error,
                    None,
                );
                InspectedSource {
                    inspection: Inspection::ParseFailed(error.to_string()),
                    corrected: None,
                }
            }
        }
    }

    /// Inspect each path in turn. Stops at the first rewrite failure.
    pub fn inspect_files<I, P>(&mut self, paths: I) -> Result<Vec<(PathBuf, Inspection)>, TeamError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|p| {
                let path = p.as_ref();
                self.inspect_file(path).map(|i| (path.to_path_buf(), i))
            })
            .collect()
    }

    /// Returns sorted offences and, when autocorrecting, the rewritten text
    /// if it changed.
    fn investigate(&mut self, processed: &ProcessedSource) -> (Vec<Offence>, Option<String>) {
        let mut offences: Vec<Offence> = processed
            .diagnostics
            .iter()
            .cloned()
            .map(Offence::from_diagnostic)
            .collect();

        if offences.iter().any(|o| o.severity().is_syntax_blocking()) {
            tracing::debug!(
                file = processed.name(),
                diagnostics = offences.len(),
                "syntax errors found, skipping cops"
            );
            offences.sort();
            return (offences, None);
        }

        self.ensure_cops();
        let (cop_offences, failures, corrections) = {
            let cops = self.cops.as_deref().unwrap_or(&[]);
            let mut commissioner = Commissioner::new(cops).with_backtraces(self.options.debug);
            let found = commissioner.investigate(processed);
            let (failures, corrections) = commissioner.finish();
            (found, failures, corrections)
        };
        offences.extend(cop_offences);

        for failure in &failures {
            self.report_failure(processed.name(), failure);
        }

        let corrected = if self.options.autocorrect {
            let rewritten = Corrector::rewrite(processed.source(), corrections);
            (rewritten != processed.source()).then_some(rewritten)
        } else {
            None
        };

        offences.sort();
        (offences, corrected)
    }

    fn ensure_cops(&mut self) {
        if self.cops.is_some() {
            return;
        }
        let (cops, failures) = self.registry.build_enabled(&self.config, &self.options);
        for (id, error) in failures {
            self.report(format!("Invalid configuration for {id} cop: {error}"), &error, None);
        }
        tracing::debug!(
            count = cops.len(),
            parser = self.parser.language(),
            "cop pool built"
        );
        self.cops = Some(cops);
    }

    fn report_failure(&mut self, file: &str, failure: &CopFailure) {
        let cop = failure.cop_id;
        self.report(
            format!("An error occurred while {cop} cop was inspecting {file}."),
            &failure.error,
            failure.backtrace.as_deref(),
        );
    }

    fn report(&mut self, message: String, detail: &dyn std::error::Error, backtrace: Option<&str>) {
        tracing::warn!("{message}");
        if self.options.debug {
            match backtrace {
                Some(backtrace) => tracing::error!(error = %detail, %backtrace, "failure detail"),
                None => tracing::error!(error = %detail, "failure detail"),
            }
        } else {
            tracing::warn!("{DEBUG_HINT}");
        }
        self.errors.push(message);
    }
}

impl std::fmt::Debug for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Team")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .field("parser", &self.parser.language())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
