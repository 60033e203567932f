use std::io::{self, Write};

use anyhow::Error;
use patent_scope::ValidationError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_document_hints(err);
        collector.collect_analysis_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_document_hints(&mut self, err: &Error) {
        use patent_scope::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { line, column, .. } => {
                self.add(format!(
                    "The document is not valid JSON near line {line}, column {column}"
                ));
                self.add("Check for trailing commas, unquoted keys, or misspelled enum values");
                self.add("Claim types are 'independent' or 'dependent'; statuses use snake_case");
            }

            IoError::Serialize(_) => {
                self.add("The patent could not be written as JSON");
                self.add("This may indicate a bug; please report if reproducible");
            }

            IoError::Invalid { record, source } => {
                self.add(format!("The offending entry is {record}"));
                self.collect_validation_hints(source);
            }
        }
    }

    fn collect_analysis_hints(&mut self, err: &Error) {
        use patent_scope::AnalysisError;

        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            self.mark_typed();
            self.collect_validation_hints(validation);
            return;
        }

        let Some(analysis_err) = err.downcast_ref::<AnalysisError>() else {
            return;
        };

        self.mark_typed();

        match analysis_err {
            AnalysisError::Validation(source) => self.collect_validation_hints(source),

            AnalysisError::Matcher { structure, operation, .. } => {
                self.add(format!(
                    "The molecule matcher failed in '{operation}' for structure {structure}"
                ));
                self.add("Check that the sample contains valid SMILES strings");
            }

            AnalysisError::ConfigParse(_) => {
                self.add("The settings file has invalid TOML syntax or values");
                self.add("Expected tables: [enumeration] default_limit, [coverage] min_confidence");
            }

            AnalysisError::InvalidSetting { key, range, .. } => {
                self.add(format!("Set {key} to a value in {range}"));
            }
        }
    }

    fn collect_validation_hints(&mut self, err: &ValidationError) {
        match err {
            ValidationError::ForwardReference { .. } | ValidationError::SelfReference { .. } => {
                self.add("A dependent claim may only refer to lower-numbered claims");
            }

            ValidationError::UnresolvedReference { target, .. } => {
                self.add(format!("Claim {target} is referenced but not defined"));
            }

            ValidationError::NumberingGap { expected, .. } => {
                self.add(format!("Claims must be numbered 1..N without gaps; claim {expected} is missing"));
            }

            ValidationError::NoIndependentClaim => {
                self.add("At least one claim must have \"type\": \"independent\"");
            }

            ValidationError::MissingDependencies { .. } => {
                self.add("Dependent claims need a non-empty \"depends_on\" list");
            }

            ValidationError::UnexpectedDependencies { .. } => {
                self.add("Independent claims must not list dependencies");
            }

            ValidationError::TextLength { min, max, .. } => {
                self.add(format!("Claim text must be between {min} and {max} characters"));
            }

            ValidationError::NoEssentialElement { .. } => {
                self.add("Mark at least one element of the claim as essential");
            }

            ValidationError::UnknownStructure(_) => {
                self.add("Run 'pscope markush <FILE>' without --structure to list structure ids");
            }

            ValidationError::StructureClaimNotFound { .. } => {
                self.add("Each structure's claim_number must name an existing claim");
            }

            ValidationError::DanglingStructureReference { .. }
            | ValidationError::MisplacedStructureReference { .. } => {
                self.add("A claim's markush_refs may only list structures attached to that claim");
            }

            ValidationError::UnknownClaim(_) => {
                self.add("Run 'pscope claims <FILE>' without --root to list claims");
            }

            ValidationError::NoSubstituents { .. } => {
                self.add("Give the position at least one substituent or mark it optional");
            }

            ValidationError::CarbonRange { .. } | ValidationError::RepeatRange { .. } => {
                self.add("Range minimums must not exceed their maximums");
            }

            ValidationError::UnknownLinkedPosition { .. } => {
                self.add("Linked positions must name another position of the same structure");
            }

            _ => {}
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Verify the document was saved as UTF-8 JSON");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Input appears to be from a terminal");
            self.add("Pass the patent document path or pipe it to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
