use std::io::Write;

use anyhow::{Context, Result};
use patent_scope::{Claim, Patent};

use crate::cli::ClaimsArgs;
use crate::display::{Context as DisplayContext, Progress, print_claim_summary};
use crate::io::create_output;
use crate::util::text::join_or_dash;

const TOTAL_STEPS: u8 = 3;

pub fn run_claims(args: ClaimsArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading patent document");
    let patent = super::read_patent(&args.io)?;
    progress.complete_step(
        "Reading patent document",
        &["Parse JSON document", "Validate claims and structures"],
    );

    progress.step("Walking dependency graph");
    let families = collect_families(&patent, args.root)?;
    let family_note = format!("{} claim famil{}", families.len(), plural_y(families.len()));
    progress.complete_step("Walking dependency graph", &[family_note.as_str()]);

    if ctx.interactive {
        print_claim_summary(&patent);
    }

    progress.step("Writing report");
    let mut out = create_output(args.io.output.as_deref())?;
    write_report(&mut out, &patent, &families).context("Failed to write claims report")?;
    out.flush().context("Failed to write claims report")?;
    progress.complete_step("Writing report", &[]);

    progress.finish();
    Ok(())
}

/// One tree per independent claim, or the single tree under `root`.
fn collect_families(patent: &Patent, root: Option<u32>) -> Result<Vec<Vec<&Claim>>> {
    let claims = patent.claims();
    let roots: Vec<u32> = match root {
        Some(n) => vec![n],
        None => claims.independent_claims().map(Claim::number).collect(),
    };

    roots
        .into_iter()
        .map(|n| {
            claims
                .claim_tree(n)
                .with_context(|| format!("Cannot build claim tree for claim {n}"))
        })
        .collect()
}

fn write_report(out: &mut impl Write, patent: &Patent, families: &[Vec<&Claim>]) -> Result<()> {
    writeln!(
        out,
        "# {} status={} claims={} structures={}",
        patent.number(),
        patent.status(),
        patent.claims().len(),
        patent.structures().len()
    )?;

    for family in families {
        writeln!(out)?;
        for claim in family {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                claim.number(),
                claim.claim_type(),
                claim.category(),
                join_or_dash(claim.depends_on()),
                join_or_dash(claim.markush_refs())
            )?;
        }
    }
    Ok(())
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 { "y" } else { "ies" }
}
