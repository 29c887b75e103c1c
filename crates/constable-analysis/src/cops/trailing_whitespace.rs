//! TrailingWhitespace: no spaces or tabs at the end of a line.

use constable_core::errors::{ConfigError, CopError};
use constable_core::{CopOptions, RunOptions};

use crate::engine::cop::{Cop, CopContext};

const MSG: &str = "Trailing whitespace detected.";

pub struct TrailingWhitespace;

impl TrailingWhitespace {
    pub const ID: &'static str = "TrailingWhitespace";

    pub fn build(_options: &CopOptions<'_>, _run: &RunOptions) -> Result<Box<dyn Cop>, ConfigError> {
        Ok(Box::new(Self))
    }
}

impl Cop for TrailingWhitespace {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn on_file(&self, cx: &mut CopContext<'_>) -> Result<(), CopError> {
        let source = cx.source();
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            let body = line.strip_suffix('\n').unwrap_or(line);
            let body = body.strip_suffix('\r').unwrap_or(body);
            let kept = body.trim_end_matches([' ', '\t']).len();
            if kept < body.len() {
                let range = offset + kept..offset + body.len();
                cx.add_offence_at(range.clone(), MSG);
                cx.add_correction(range, "");
            }
            offset += line.len();
        }
        Ok(())
    }
}
