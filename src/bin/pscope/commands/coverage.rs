use std::io::Write;

use anyhow::{Context, Result};
use patent_scope::{CoverageAnalyzer, CoverageReport};

use crate::cli::CoverageArgs;
use crate::display::{Context as DisplayContext, Progress, print_coverage_summary};
use crate::io::{create_output, read_sample};

const TOTAL_STEPS: u8 = 4;

pub fn run_coverage(args: CoverageArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading patent document");
    let patent = super::read_patent(&args.io)?;
    let settings = super::load_settings(&args.settings)?;
    progress.complete_step(
        "Reading patent document",
        &["Parse JSON document", "Load analysis settings"],
    );

    progress.step("Reading molecule sample");
    let sample = read_sample(&args.sample)?;
    let sample_note = format!("{} molecule(s)", sample.len());
    progress.complete_step("Reading molecule sample", &[sample_note.as_str()]);

    progress.step("Matching sample against structures");
    // No chemistry engine is bundled; only preferred examples can match.
    let report = CoverageAnalyzer::new(None)
        .with_config(settings.coverage.clone())?
        .analyze(patent.structures(), &sample)
        .context("Coverage analysis failed")?;
    let match_note = format!(
        "{} of {} covered by preferred examples",
        report.matched, report.sampled
    );
    progress.complete_step("Matching sample against structures", &[match_note.as_str()]);

    if ctx.interactive {
        print_coverage_summary(&report);
    }

    progress.step("Writing report");
    let mut out = create_output(args.io.output.as_deref())?;
    write_report(&mut out, &report).context("Failed to write coverage report")?;
    out.flush().context("Failed to write coverage report")?;
    progress.complete_step("Writing report", &[]);

    progress.finish();
    Ok(())
}

fn write_report(out: &mut impl Write, report: &CoverageReport) -> Result<()> {
    writeln!(
        out,
        "# coverage sampled={} matched={} rate={:.3} combinations={}",
        report.sampled, report.matched, report.coverage_rate, report.total_combinations
    )?;
    for (id, hits) in &report.hits_per_structure {
        writeln!(out, "# {id} hits={hits}")?;
    }
    for molecule in &report.molecules {
        writeln!(
            out,
            "{}\t{}\t{:.3}",
            molecule.molecule,
            molecule.structure_id.as_deref().unwrap_or("-"),
            molecule.confidence
        )?;
    }
    Ok(())
}
