use std::io::Write;

use anyhow::{Context, Result};
use patent_scope::{MarkushStructure, Patent, ValidationError};

use crate::cli::MarkushArgs;
use crate::display::{Context as DisplayContext, Progress, print_structure_table};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_markush(args: MarkushArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading patent document");
    let patent = super::read_patent(&args.io)?;
    let settings = super::load_settings(&args.settings)?;
    progress.complete_step(
        "Reading patent document",
        &["Parse JSON document", "Load analysis settings"],
    );

    progress.step("Enumerating Markush structures");
    let structures = select_structures(&patent, args.structure_id.as_deref())?;
    let limit = args.limit.unwrap_or(settings.enumeration.default_limit);
    let listings: Vec<(&MarkushStructure, Vec<String>)> = structures
        .into_iter()
        .map(|s| (s, s.enumerate_exemplary(limit)))
        .collect();
    let count_note = format!("{} structure(s), up to {} example(s) each", listings.len(), limit);
    progress.complete_step("Enumerating Markush structures", &[count_note.as_str()]);

    if ctx.interactive {
        let shown: Vec<&MarkushStructure> = listings.iter().map(|(s, _)| *s).collect();
        print_structure_table(&shown);
    }

    progress.step("Writing report");
    let mut out = create_output(args.io.output.as_deref())?;
    write_report(&mut out, &listings).context("Failed to write Markush report")?;
    out.flush().context("Failed to write Markush report")?;
    progress.complete_step("Writing report", &[]);

    progress.finish();
    Ok(())
}

fn select_structures<'a>(patent: &'a Patent, id: Option<&str>) -> Result<Vec<&'a MarkushStructure>> {
    match id {
        Some(id) => {
            let structure = patent
                .structure(id)
                .ok_or_else(|| ValidationError::UnknownStructure(id.to_string()))?;
            Ok(vec![structure])
        }
        None => Ok(patent.structures().iter().collect()),
    }
}

fn write_report(out: &mut impl Write, listings: &[(&MarkushStructure, Vec<String>)]) -> Result<()> {
    for (i, (structure, examples)) in listings.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(
            out,
            "# {} claim={} positions={} combinations={}",
            structure.id(),
            structure.claim_number(),
            structure.positions().len(),
            structure.total_combinations()
        )?;
        if structure.is_saturated() {
            write!(out, " (saturated)")?;
        }
        writeln!(out)?;

        for example in examples {
            writeln!(out, "{example}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patent_scope::io::from_json_str;

    const DOC: &str = r#"{
        "number": "WO2020000002",
        "claims": [
            { "number": 1, "text": "A compound of formula (I).", "type": "independent" },
            { "number": 2, "text": "A compound of formula (II).", "type": "independent" }
        ],
        "markush_structures": [
            { "id": "MK-1", "name": "formula (I)", "core_scaffold": "c1ccccc1[R1]", "claim_number": 1,
              "positions": [ { "symbol": "R1", "substituents": [
                  { "id": "me", "class": "alkyl", "name": "methyl", "fragment": "C" },
                  { "id": "et", "class": "alkyl", "name": "ethyl", "fragment": "CC" },
                  { "id": "oh", "class": "hydroxyl", "name": "hydroxy", "fragment": "O" }
              ] } ] },
            { "id": "MK-2", "name": "formula (II)", "core_scaffold": "C1CCNCC1[X]", "claim_number": 2,
              "positions": [ { "symbol": "X", "optional": true } ] }
        ]
    }"#;

    #[test]
    fn report_lists_examples_per_structure() {
        let patent = from_json_str(DOC).unwrap();
        let structures = select_structures(&patent, None).unwrap();
        let listings: Vec<_> = structures
            .into_iter()
            .map(|s| (s, s.enumerate_exemplary(2)))
            .collect();

        let mut buf = Vec::new();
        write_report(&mut buf, &listings).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "# MK-1 claim=1 positions=1 combinations=3\n\
             c1ccccc1C\n\
             c1ccccc1CC\n\
             \n\
             # MK-2 claim=2 positions=1 combinations=1\n\
             C1CCNCC1[H]\n"
        );
    }

    #[test]
    fn selects_single_structure_by_id() {
        let patent = from_json_str(DOC).unwrap();
        let selected = select_structures(&patent, Some("MK-2")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), "MK-2");

        let err = select_structures(&patent, Some("MK-9")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::UnknownStructure("MK-9".into()))
        );
    }
}
