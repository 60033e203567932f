use std::io::{self, Write};

use patent_scope::{CoverageReport, MarkushStructure, Patent};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 15;

pub fn print_claim_summary(patent: &Patent) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let claims = patent.claims();
    let rows = vec![
        ("Patent", patent.number().to_string()),
        ("Status", patent.status().to_string()),
        ("Claims", claims.len().to_string()),
        ("Independent", claims.independent_claims().count().to_string()),
        ("Dependent", claims.dependent_claims().count().to_string()),
        ("Markush", patent.structures().len().to_string()),
    ];

    print_kv_table(&mut out, "Claim Summary", &rows);
}

pub fn print_structure_table(structures: &[&MarkushStructure]) {
    if structures.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<[String; 4]> = structures
        .iter()
        .map(|s| {
            let combos = if s.is_saturated() {
                "saturated".to_string()
            } else {
                s.total_combinations().to_string()
            };
            [
                s.id().to_string(),
                s.claim_number().to_string(),
                s.positions().len().to_string(),
                combos,
            ]
        })
        .collect();

    print_column_table(
        &mut out,
        "Markush Structures",
        ["Structure", "Claim", "Positions", "Combinations"],
        &rows,
    );
}

pub fn print_coverage_summary(report: &CoverageReport) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Sampled", report.sampled.to_string()),
        ("Covered", report.matched.to_string()),
        ("Coverage", format!("{:.1}%", report.coverage_rate * 100.0)),
        ("Library Size", report.total_combinations.to_string()),
    ];
    print_kv_table(&mut out, "Coverage Summary", &rows);

    let hits: Vec<[String; 4]> = report
        .hits_per_structure
        .iter()
        .map(|(id, hits)| {
            let share = if report.sampled == 0 {
                0.0
            } else {
                *hits as f64 / report.sampled as f64 * 100.0
            };
            [
                id.clone(),
                hits.to_string(),
                format!("{share:.1}%"),
                make_bar(share, 12),
            ]
        })
        .collect();

    print_column_table(&mut out, "Hits per Structure", ["Structure", "Hits", "Share", ""], &hits);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

/// Four-column table; the first column takes whatever width the others leave.
fn print_column_table(
    out: &mut impl Write,
    title: &str,
    headers: [&str; 4],
    rows: &[[String; 4]],
) {
    let fixed = [0usize, 7, 10, 13];
    let sep_overhead = 3 * 4 + 1;
    let first_w = SAFE_TABLE_WIDTH.saturating_sub(fixed[1] + fixed[2] + fixed[3] + sep_overhead);
    let widths = [first_w, fixed[1], fixed[2], fixed[3]];

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{INDENT}{left}{}{right}", segments.join(mid))
    };
    let line = |cells: [&str; 4]| {
        format!(
            "{INDENT}│ {:<w0$} │ {:>w1$} │ {:>w2$} │ {:<w3$} │",
            truncate(cells[0], widths[0]),
            truncate(cells[1], widths[1]),
            truncate(cells[2], widths[2]),
            truncate(cells[3], widths[3]),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )
    };

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(out, "{}", line(headers));
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for row in rows.iter().take(MAX_ROWS) {
        let _ = writeln!(out, "{}", line([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]));
    }
    if rows.len() > MAX_ROWS {
        let more = format!("({} more)", rows.len() - MAX_ROWS);
        let _ = writeln!(out, "{}", line(["...", "", "", more.as_str()]));
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = (((pct / 100.0) * max_width as f64).round() as usize).min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
