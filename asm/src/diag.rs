use color_print::ceprintln;

/// Run-wide diagnostic counters. They only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// First pass only; any of these stops code generation.
    pub syntax_errors: usize,
    /// Undefined labels, second pass only.
    pub errors: usize,
    /// Superseded label declarations, second pass only.
    pub warnings: usize,
}

impl Diagnostics {
    pub fn has_syntax_errors(&self) -> bool {
        self.syntax_errors > 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.has_syntax_errors() {
            1
        } else {
            0
        }
    }

    pub fn summary(&self) -> Option<String> {
        if self.has_syntax_errors() {
            Some(format!(
                "There were {} syntax error(s), object file was not generated. Check listing file.",
                self.syntax_errors
            ))
        } else if self.errors > 0 || self.warnings > 0 {
            Some(format!(
                "There were {} warning(s) and {} error(s). Check listing file.",
                self.warnings, self.errors
            ))
        } else {
            None
        }
    }

    pub fn report(&self) {
        if let Some(summary) = self.summary() {
            if self.has_syntax_errors() || self.errors > 0 {
                ceprintln!("<red,bold>error</>: {}", summary);
            } else {
                ceprintln!("<yellow,bold>warn</>: {}", summary);
            }
        }
    }
}
