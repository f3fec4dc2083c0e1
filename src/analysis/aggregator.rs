// src/analysis/aggregator.rs
//! Report store for one analysis pass.
//! Pure data container; consumers (printing, export) only get shared access.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{DeclKind, FieldReport, MethodReport, Report};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStore {
    reports: BTreeMap<DeclKind, Vec<Report>>,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `report` to the sequence for its kind.
    pub fn record(&mut self, report: Report) {
        self.reports.entry(report.kind()).or_default().push(report);
    }

    /// Reports of `kind` in traversal order.
    #[must_use]
    pub fn all(&self, kind: DeclKind) -> &[Report] {
        self.reports.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.all(DeclKind::Field).iter().filter_map(Report::as_field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodReport> {
        self.all(DeclKind::Method).iter().filter_map(Report::as_method)
    }

    #[must_use]
    pub fn count(&self, kind: DeclKind) -> usize {
        self.all(kind).len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fields with an inappropriate access level.
    #[must_use]
    pub fn flagged_fields(&self) -> usize {
        self.fields().filter(|f| f.inappropriate_access_level).count()
    }

    /// Methods with an unused parameter.
    #[must_use]
    pub fn flagged_methods(&self) -> usize {
        self.methods().filter(|m| m.unused_parameter).count()
    }

    #[must_use]
    pub fn undocumented(&self) -> usize {
        self.reports
            .values()
            .flatten()
            .filter(|r| !r.documented())
            .count()
    }
}
