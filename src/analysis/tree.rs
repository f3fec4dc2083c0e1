// src/analysis/tree.rs
//! The tree shape the analysis consumes.
//!
//! Any parser can drive the engine by implementing [`SyntaxNode`]; the
//! dispatcher only ever looks at the closed [`NodeKind`] tag, never at the
//! parser's own node hierarchy. [`Node`] is an owned implementation for
//! trees built by hand.

use crate::error::Result;
use crate::types::{Parameter, Variable};

/// Declaration tag the dispatcher switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    Field,
    Method,
    Type,
    #[default]
    Other,
}

/// Inclusive 1-based line span of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Line count of the span, `end - start + 1`.
    #[must_use]
    pub fn size(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

/// Accessors the engine needs from a supplied tree.
///
/// `name`, `declared_type`, `variables` and `parameters` are only asked of
/// the declaration kinds they make sense for. A `None` for a required
/// accessor is treated as a malformed tree.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Direct children in source order, including the body of a method.
    fn children(&self) -> Vec<Self>;

    fn line_range(&self) -> Option<LineRange>;

    /// A documentation comment is attached immediately before the node.
    fn has_doc_comment(&self) -> bool;

    fn modifiers(&self) -> Vec<String>;

    fn name(&self) -> Option<String>;

    /// Return type of a method.
    fn declared_type(&self) -> Option<String>;

    /// # Errors
    /// Returns `MalformedTree` if a declarator has no name.
    fn variables(&self) -> Result<Vec<Variable>>;

    /// # Errors
    /// Returns `MalformedTree` if a parameter has no name.
    fn parameters(&self) -> Result<Vec<Parameter>>;

    fn body(&self) -> Option<Self>;

    /// Identifier text, for identifier tokens only.
    fn identifier(&self) -> Option<String>;
}

/// Owned syntax tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub modifiers: Vec<String>,
    pub doc: Option<String>,
    pub range: Option<LineRange>,
    pub variables: Vec<Variable>,
    pub parameters: Vec<Parameter>,
    pub body: Option<Box<Node>>,
    pub children: Vec<Node>,
    /// Set on identifier leaves.
    pub token: Option<String>,
}

impl Node {
    /// A field declaration of `type_name` declaring each of `names`.
    #[must_use]
    pub fn field(type_name: &str, names: &[&str]) -> Self {
        Self {
            kind: NodeKind::Field,
            type_name: Some(type_name.to_string()),
            variables: names.iter().map(|n| Variable::new(*n, type_name)).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn method(name: &str, return_type: &str) -> Self {
        Self {
            kind: NodeKind::Method,
            name: Some(name.to_string()),
            type_name: Some(return_type.to_string()),
            ..Self::default()
        }
    }

    /// A class, interface or enum declaration.
    #[must_use]
    pub fn class(name: &str) -> Self {
        Self {
            kind: NodeKind::Type,
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// An identifier leaf.
    #[must_use]
    pub fn ident(text: &str) -> Self {
        Self {
            token: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Any non-declaration node, e.g. a statement or a block.
    #[must_use]
    pub fn other(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| (*m).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    #[must_use]
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.range = Some(LineRange::new(start, end));
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, type_name: &str) -> Self {
        self.parameters.push(Parameter::new(name, type_name));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Node) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl<'a> SyntaxNode for &'a Node {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a Node = *self;
        node.children.iter().chain(node.body.as_deref()).collect()
    }

    fn line_range(&self) -> Option<LineRange> {
        self.range
    }

    fn has_doc_comment(&self) -> bool {
        self.doc.is_some()
    }

    fn modifiers(&self) -> Vec<String> {
        self.modifiers.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn declared_type(&self) -> Option<String> {
        self.type_name.clone()
    }

    fn variables(&self) -> Result<Vec<Variable>> {
        Ok(self.variables.clone())
    }

    fn parameters(&self) -> Result<Vec<Parameter>> {
        Ok(self.parameters.clone())
    }

    fn body(&self) -> Option<Self> {
        let node: &'a Node = *self;
        node.body.as_deref()
    }

    fn identifier(&self) -> Option<String> {
        if self.children.is_empty() && self.body.is_none() {
            self.token.clone()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_inclusive() {
        assert_eq!(LineRange::new(10, 14).size(), 5);
        assert_eq!(LineRange::new(7, 7).size(), 1);
    }

    #[test]
    fn test_method_children_include_body() {
        let m = Node::method("f", "void")
            .with_child(Node::ident("f"))
            .with_body(Node::other(vec![Node::ident("x")]));
        let children = (&m).children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].children.len(), 1);
    }

    #[test]
    fn test_identifier_only_on_leaves() {
        let leaf = Node::ident("a");
        assert_eq!((&leaf).identifier().as_deref(), Some("a"));

        let mut inner = Node::ident("b");
        inner.children.push(Node::ident("c"));
        assert_eq!((&inner).identifier(), None);
    }
}
