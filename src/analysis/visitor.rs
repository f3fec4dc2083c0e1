// src/analysis/visitor.rs
//! Declaration visitor. Walks the tree depth-first, switching on the node
//! tag, and records one report per field or method.
//!
//! Order is pre-order: a declaration is recorded before anything nested in
//! it (e.g. methods of an anonymous class in a field initialiser), so the
//! store lists declarations in order of appearance.

use tracing::debug;

use super::aggregator::ReportStore;
use super::metrics::DeclMetrics;
use super::tree::{NodeKind, SyntaxNode};
use crate::config::RuleConfig;
use crate::error::{Result, ScanError};
use crate::types::{FieldReport, MethodReport, Report, TypeInfo};

/// Receives every type declaration the visitor walks into.
pub trait TypeObserver {
    fn on_type(&mut self, info: &TypeInfo);
}

impl<F: FnMut(&TypeInfo)> TypeObserver for F {
    fn on_type(&mut self, info: &TypeInfo) {
        self(info);
    }
}

/// Observer that ignores type declarations.
pub struct IgnoreTypes;

impl TypeObserver for IgnoreTypes {
    fn on_type(&mut self, _info: &TypeInfo) {}
}

/// Collects every type declaration seen.
#[derive(Debug, Default)]
pub struct TypeCollector {
    pub types: Vec<TypeInfo>,
}

impl TypeObserver for TypeCollector {
    fn on_type(&mut self, info: &TypeInfo) {
        self.types.push(info.clone());
    }
}

enum Frame<N> {
    Enter(N),
    /// Leaves the innermost type declaration.
    ExitType,
}

pub struct DeclVisitor<'a> {
    rules: &'a RuleConfig,
    observer: &'a mut dyn TypeObserver,
    owners: Vec<String>,
    store: ReportStore,
}

impl<'a> DeclVisitor<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleConfig, observer: &'a mut dyn TypeObserver) -> Self {
        Self {
            rules,
            observer,
            owners: Vec::new(),
            store: ReportStore::new(),
        }
    }

    /// Visits `root` and everything below it.
    ///
    /// The walk keeps its own work-list, so tree depth is bounded by heap
    /// rather than by the thread stack.
    ///
    /// # Errors
    /// Returns `MalformedTree` if a declaration lacks a required accessor.
    pub fn visit<N: SyntaxNode>(&mut self, root: &N) -> Result<()> {
        let mut work = Vec::new();
        self.enter(root, &mut work)?;
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Enter(node) => self.enter(&node, &mut work)?,
                Frame::ExitType => {
                    self.owners.pop();
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> ReportStore {
        self.store
    }

    fn enter<N: SyntaxNode>(&mut self, node: &N, work: &mut Vec<Frame<N>>) -> Result<()> {
        match node.kind() {
            NodeKind::Field => {
                let report = self.field_report(node)?;
                self.store.record(Report::Field(report));
            }
            NodeKind::Method => {
                let report = self.method_report(node)?;
                self.store.record(Report::Method(report));
            }
            NodeKind::Type => {
                self.enter_type(node)?;
                work.push(Frame::ExitType);
            }
            NodeKind::Other => {}
        }
        // Reversed so the leftmost child is popped first.
        work.extend(node.children().into_iter().rev().map(Frame::Enter));
        Ok(())
    }

    fn enter_type<N: SyntaxNode>(&mut self, node: &N) -> Result<()> {
        let line = node.line_range().map(|r| r.start);
        let name = node
            .name()
            .ok_or_else(|| ScanError::malformed("type", "name", line))?;

        let info = TypeInfo {
            name: name.clone(),
            line,
            nested: !self.owners.is_empty(),
        };
        debug!(name = %info.name, nested = info.nested, "type declaration");
        self.observer.on_type(&info);
        self.owners.push(name);
        Ok(())
    }

    fn field_report<N: SyntaxNode>(&self, node: &N) -> Result<FieldReport> {
        let range = node.line_range();
        if range.is_none() {
            debug!("field declaration without range information");
        }
        let modifiers = node.modifiers();
        let report = FieldReport {
            line: range.map(|r| r.start),
            documented: DeclMetrics::is_documented(node),
            owner: self.owners.last().cloned(),
            variables: node.variables()?,
            inappropriate_access_level: DeclMetrics::has_inappropriate_access(
                &modifiers, self.rules,
            ),
            modifiers,
        };
        debug!(line = ?report.line, flagged = report.inappropriate_access_level, "field");
        Ok(report)
    }

    fn method_report<N: SyntaxNode>(&self, node: &N) -> Result<MethodReport> {
        let range = node.line_range();
        let line = range.map(|r| r.start);
        let name = node
            .name()
            .ok_or_else(|| ScanError::malformed("method", "name", line))?;
        let return_type = node
            .declared_type()
            .ok_or_else(|| ScanError::malformed("method", "return type", line))?;
        let parameters = node.parameters()?;

        let unused_parameter =
            DeclMetrics::has_unused_parameter(&parameters, node.body(), self.rules);
        let span = DeclMetrics::line_span(range);
        if span.is_none() {
            debug!(method = %name, "method declaration without range information");
        }

        let report = MethodReport {
            line,
            modifiers: node.modifiers(),
            documented: DeclMetrics::is_documented(node),
            owner: self.owners.last().cloned(),
            name,
            return_type,
            parameters,
            unused_parameter,
            start_line: span.map(|(start, _)| start),
            size: span.map(|(_, size)| size),
        };
        debug!(method = %report.name, unused = report.unused_parameter, "method");
        Ok(report)
    }
}
