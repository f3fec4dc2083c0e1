// src/analysis/mod.rs
//! Declaration analysis: one pass over one tree yields one [`ReportStore`].

pub mod aggregator;
pub mod engine;
pub mod java;
pub mod leaves;
pub mod metrics;
pub mod tree;
pub mod visitor;

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};
use tree_sitter::Parser;

use crate::config::RuleConfig;
use crate::error::{Result, ScanError};
use crate::lang::Lang;
use crate::types::TypeInfo;

pub use aggregator::ReportStore;
pub use engine::{Engine, FileOutcome};
pub use java::JavaNode;
pub use tree::{LineRange, Node, NodeKind, SyntaxNode};
pub use visitor::{DeclVisitor, IgnoreTypes, TypeCollector, TypeObserver};

/// Everything one pass over a source file produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analysis {
    pub store: ReportStore,
    /// Type declarations in traversal order.
    pub types: Vec<TypeInfo>,
}

impl Analysis {
    /// Names of types declared inside another type.
    pub fn nested_types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().filter(|t| t.nested).map(|t| t.name.as_str())
    }
}

/// Runs a pass with the default rules, discarding type declarations.
///
/// # Errors
/// Returns `MalformedTree` if a declaration lacks a required accessor.
pub fn analyze<N: SyntaxNode>(root: &N) -> Result<ReportStore> {
    analyze_with(root, &RuleConfig::default(), &mut IgnoreTypes)
}

/// Runs a pass, reporting each type declaration to `observer`.
///
/// # Errors
/// Returns `MalformedTree` if a declaration lacks a required accessor.
pub fn analyze_with<N: SyntaxNode>(
    root: &N,
    rules: &RuleConfig,
    observer: &mut dyn TypeObserver,
) -> Result<ReportStore> {
    let mut visitor = DeclVisitor::new(rules, observer);
    visitor.visit(root)?;
    Ok(visitor.finish())
}

/// Parses `source` with tree-sitter and runs a pass over it.
///
/// # Errors
/// Returns error if the grammar cannot be loaded, parsing fails, or the
/// tree is malformed.
pub fn analyze_source(lang: Lang, source: &str, rules: &RuleConfig) -> Result<Analysis> {
    let mut parser = Parser::new();
    parser
        .set_language(lang.grammar())
        .map_err(|e| ScanError::Parse(format!("cannot load {} grammar: {e}", lang.name())))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ScanError::Parse("parser returned no tree".into()))?;
    let root = tree.root_node();
    if root.has_error() {
        warn!("source contains syntax errors; results may be partial");
    }

    let mut types = TypeCollector::default();
    let store = analyze_with(&JavaNode::new(root, source), rules, &mut types)?;
    Ok(Analysis {
        store,
        types: types.types,
    })
}

/// Reads and analyses a single file.
///
/// # Errors
/// Returns error if the file cannot be read, its language is unsupported,
/// or the analysis fails.
pub fn analyze_file(path: &Path, rules: &RuleConfig) -> Result<Analysis> {
    let lang =
        Lang::from_path(path).ok_or_else(|| ScanError::UnsupportedLanguage(path.to_path_buf()))?;
    let source = std::fs::read_to_string(path).map_err(|e| ScanError::io(e, path))?;
    let analysis = analyze_source(lang, &source, rules)?;
    info!(
        path = %path.display(),
        fields = analysis.store.count(crate::types::DeclKind::Field),
        methods = analysis.store.count(crate::types::DeclKind::Method),
        "analysed"
    );
    Ok(analysis)
}
