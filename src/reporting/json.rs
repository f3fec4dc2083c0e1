//! JSON export of analysis results.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::analysis::{Analysis, FileOutcome};
use crate::types::{Report, TypeInfo};

use super::{Filter, RenderOptions};

#[derive(Serialize)]
struct FileJson<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<&'a Report>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    methods: Option<Vec<&'a Report>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    types: Option<&'a [TypeInfo]>,
}

#[derive(Serialize)]
struct ErrorJson<'a> {
    path: &'a PathBuf,
    error: String,
}

#[derive(Serialize)]
struct ScanJson<'a> {
    files: Vec<FileJson<'a>>,
    errors: Vec<ErrorJson<'a>>,
}

fn file_json<'a>(path: &'a Path, analysis: &'a Analysis, opts: &RenderOptions) -> FileJson<'a> {
    let pick = |reports: &'a [Report]| -> Vec<&'a Report> {
        reports
            .iter()
            .filter(|r| !opts.flagged_only || r.is_flagged())
            .collect()
    };
    let store = &analysis.store;
    FileJson {
        path,
        fields: (opts.filter != Filter::Methods)
            .then(|| pick(store.all(crate::types::DeclKind::Field))),
        methods: (opts.filter != Filter::Fields)
            .then(|| pick(store.all(crate::types::DeclKind::Method))),
        types: opts.show_nested_types.then_some(analysis.types.as_slice()),
    }
}

/// Renders every outcome as one JSON document.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(outcomes: &[FileOutcome], opts: &RenderOptions) -> Result<String> {
    let mut doc = ScanJson {
        files: Vec::new(),
        errors: Vec::new(),
    };
    for outcome in outcomes {
        match &outcome.result {
            Ok(analysis) => doc.files.push(file_json(&outcome.path, analysis, opts)),
            Err(e) => doc.errors.push(ErrorJson {
                path: &outcome.path,
                error: e.to_string(),
            }),
        }
    }
    Ok(serde_json::to_string_pretty(&doc)?)
}
