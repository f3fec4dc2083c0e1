//! Console tables for analysis results.
//!
//! One block per file: a fields table, a methods table, then the nested
//! types seen. Flagged rows are highlighted.

use std::fmt::Write;
use std::path::Path;

use colored::Colorize;

use crate::analysis::Analysis;
use crate::types::{FieldReport, MethodReport};

use super::{Filter, RenderOptions};

/// Renders one file's analysis as text tables.
#[must_use]
pub fn render(path: &Path, analysis: &Analysis, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "─".repeat(72).dimmed());
    let _ = writeln!(out, " {}", path.display().to_string().bold());
    let _ = writeln!(out, "{}", "─".repeat(72).dimmed());

    if opts.filter != Filter::Methods {
        render_fields(&mut out, analysis, opts);
    }
    if opts.filter != Filter::Fields {
        render_methods(&mut out, analysis, opts);
    }
    if opts.show_nested_types {
        render_nested(&mut out, analysis);
    }
    render_summary(&mut out, analysis);
    out
}

/// Prints `render` to stdout.
pub fn print(path: &Path, analysis: &Analysis, opts: &RenderOptions) {
    print!("{}", render(path, analysis, opts));
}

fn render_fields(out: &mut String, analysis: &Analysis, opts: &RenderOptions) {
    let rows: Vec<&FieldReport> = analysis
        .store
        .fields()
        .filter(|f| !opts.flagged_only || f.inappropriate_access_level)
        .collect();

    let _ = writeln!(out, "\n {} ({})", "FIELDS".cyan().bold(), rows.len());
    if rows.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "  {:>5}  {:<24} {:<30} {:<4} {}",
        "LINE".dimmed(),
        "MODIFIERS".dimmed(),
        "VARIABLES".dimmed(),
        "DOC".dimmed(),
        "ACCESS".dimmed()
    );
    for f in rows {
        let access = if f.inappropriate_access_level {
            "inappropriate".red().bold().to_string()
        } else {
            "ok".green().to_string()
        };
        let vars = f
            .variables
            .iter()
            .map(|v| format!("{}: {}", v.name, v.type_name))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "  {:>5}  {:<24} {:<30} {:<4} {access}",
            line_cell(f.line),
            f.modifiers.join(" "),
            with_owner(&vars, f.owner.as_deref()),
            yes_no(f.documented),
        );
    }
}

fn render_methods(out: &mut String, analysis: &Analysis, opts: &RenderOptions) {
    let rows: Vec<&MethodReport> = analysis
        .store
        .methods()
        .filter(|m| !opts.flagged_only || m.unused_parameter)
        .collect();

    let _ = writeln!(out, "\n {} ({})", "METHODS".cyan().bold(), rows.len());
    if rows.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "  {:>5}  {:>4}  {:<40} {:<20} {:<4} {}",
        "LINE".dimmed(),
        "SIZE".dimmed(),
        "SIGNATURE".dimmed(),
        "MODIFIERS".dimmed(),
        "DOC".dimmed(),
        "PARAMS".dimmed()
    );
    for m in rows {
        let params = if m.unused_parameter {
            "unused".yellow().bold().to_string()
        } else {
            "used".green().to_string()
        };
        let _ = writeln!(
            out,
            "  {:>5}  {:>4}  {:<40} {:<20} {:<4} {params}",
            line_cell(m.start_line),
            m.size.map_or_else(|| "-".to_string(), |s| s.to_string()),
            with_owner(&signature(m), m.owner.as_deref()),
            m.modifiers.join(" "),
            yes_no(m.documented),
        );
    }
}

fn render_nested(out: &mut String, analysis: &Analysis) {
    let nested: Vec<&str> = analysis.nested_types().collect();
    if nested.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n {} {}", "NESTED TYPES:".cyan().bold(), nested.join(", "));
}

fn render_summary(out: &mut String, analysis: &Analysis) {
    let store = &analysis.store;
    let _ = writeln!(
        out,
        "\n {} {} fields ({} inappropriate), {} methods ({} with unused parameters), {} undocumented\n",
        "Summary:".white().bold(),
        store.fields().count(),
        store.flagged_fields(),
        store.methods().count(),
        store.flagged_methods(),
        store.undocumented(),
    );
}

/// `name(type a, type b): return`
fn signature(m: &MethodReport) -> String {
    let params = m
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({params}): {}", m.name, m.return_type)
}

fn with_owner(text: &str, owner: Option<&str>) -> String {
    match owner {
        Some(o) => format!("{o}.{text}"),
        None => text.to_string(),
    }
}

fn line_cell(line: Option<usize>) -> String {
    line.map_or_else(|| "-".to_string(), |l| l.to_string())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Parameter;

    fn method(unused: bool) -> MethodReport {
        MethodReport {
            line: Some(3),
            modifiers: vec!["public".into()],
            documented: false,
            owner: Some("A".into()),
            name: "get".into(),
            return_type: "int".into(),
            parameters: vec![Parameter::new("a", "int"), Parameter::new("b", "String")],
            unused_parameter: unused,
            start_line: Some(3),
            size: Some(4),
        }
    }

    #[test]
    fn test_signature() {
        assert_eq!(signature(&method(false)), "get(int a, String b): int");
    }

    #[test]
    fn test_render_respects_filter_and_flagged() {
        let mut analysis = Analysis::default();
        analysis.store.record(crate::types::Report::Method(method(false)));
        analysis.store.record(crate::types::Report::Method(MethodReport {
            name: "put".into(),
            ..method(true)
        }));

        let opts = RenderOptions {
            filter: Filter::Methods,
            flagged_only: true,
            show_nested_types: false,
        };
        let text = render(Path::new("A.java"), &analysis, &opts);
        assert!(text.contains("A.put("));
        assert!(!text.contains("A.get("));
        assert!(!text.contains("FIELDS"));
    }
}
