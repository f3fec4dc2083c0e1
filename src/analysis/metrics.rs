// src/analysis/metrics.rs
//! Per-declaration policy checks (documentation, access level, unused
//! parameters, line span).

use tracing::trace;

use super::leaves::leaf_identifiers;
use super::tree::{LineRange, SyntaxNode};
use crate::config::RuleConfig;
use crate::types::Parameter;

pub struct DeclMetrics;

impl DeclMetrics {
    /// True iff a documentation comment immediately precedes the declaration.
    #[must_use]
    pub fn is_documented<N: SyntaxNode>(node: &N) -> bool {
        node.has_doc_comment()
    }

    /// True iff the field carries none of the encapsulating modifiers
    /// (`final`, `private` by default).
    #[must_use]
    pub fn has_inappropriate_access(modifiers: &[String], rules: &RuleConfig) -> bool {
        !modifiers
            .iter()
            .any(|m| rules.encapsulating_modifiers.contains(m))
    }

    /// True iff there is no body, or at least one parameter never appears
    /// among the body's identifier leaves. Each parameter is checked on its
    /// own; one unused parameter is enough.
    #[must_use]
    pub fn has_unused_parameter<N: SyntaxNode>(
        parameters: &[Parameter],
        body: Option<N>,
        rules: &RuleConfig,
    ) -> bool {
        let Some(body) = body else {
            return rules.flag_bodiless_methods;
        };

        let used = leaf_identifiers(body);
        trace!(identifiers = used.len(), "collected body identifiers");
        parameters.iter().any(|p| !used.contains(&p.name))
    }

    /// `(start_line, size)` from the declaration's full range.
    #[must_use]
    pub fn line_span(range: Option<LineRange>) -> Option<(usize, usize)> {
        range.map(|r| (r.start, r.size()))
    }
}
