// src/analysis/java.rs
//! [`SyntaxNode`] over a tree-sitter-java parse tree.

use tree_sitter::Node;

use super::tree::{LineRange, NodeKind, SyntaxNode};
use crate::error::{Result, ScanError};
use crate::types::{Parameter, Variable};

const TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

#[derive(Clone, Copy)]
pub struct JavaNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> JavaNode<'a> {
    #[must_use]
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    fn text_of(&self, node: Node<'a>) -> Option<&'a str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }

    fn field_text(&self, field: &str) -> Option<String> {
        self.node
            .child_by_field_name(field)
            .and_then(|n| self.text_of(n))
            .map(String::from)
    }

    fn start_line(&self) -> usize {
        self.node.start_position().row + 1
    }

    fn malformed(&self, missing: &'static str) -> ScanError {
        let kind = match self.kind() {
            NodeKind::Field => "field",
            NodeKind::Method => "method",
            NodeKind::Type => "type",
            NodeKind::Other => "node",
        };
        ScanError::malformed(kind, missing, Some(self.start_line()))
    }

    /// Type of a declarator: the declared type plus any `[]` after the name.
    fn declarator_type(&self, base: &str, declarator: Node<'a>) -> String {
        match declarator
            .child_by_field_name("dimensions")
            .and_then(|d| self.text_of(d))
        {
            Some(dims) => format!("{base}{dims}"),
            None => base.to_string(),
        }
    }

    fn parameter(&self, node: Node<'a>) -> Result<Option<Parameter>> {
        match node.kind() {
            "formal_parameter" => {
                let name = node
                    .child_by_field_name("name")
                    .and_then(|n| self.text_of(n))
                    .ok_or_else(|| self.malformed("parameter name"))?;
                let base = node
                    .child_by_field_name("type")
                    .and_then(|n| self.text_of(n))
                    .ok_or_else(|| self.malformed("parameter type"))?;
                Ok(Some(Parameter::new(name, self.declarator_type(base, node))))
            }
            "spread_parameter" => self.spread_parameter(node).map(Some),
            _ => Ok(None),
        }
    }

    // `String... args` carries no field names for its type.
    fn spread_parameter(&self, node: Node<'a>) -> Result<Parameter> {
        let mut cursor = node.walk();
        let mut base = None;
        let mut name = None;
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "modifiers" => {}
                "variable_declarator" => {
                    name = child
                        .child_by_field_name("name")
                        .and_then(|n| self.text_of(n));
                }
                _ if base.is_none() => base = self.text_of(child),
                _ => {}
            }
        }
        let name = name.ok_or_else(|| self.malformed("parameter name"))?;
        let base = base.ok_or_else(|| self.malformed("parameter type"))?;
        Ok(Parameter::new(name, format!("{base}...")))
    }
}

impl<'a> SyntaxNode for JavaNode<'a> {
    fn kind(&self) -> NodeKind {
        match self.node.kind() {
            "field_declaration" | "constant_declaration" => NodeKind::Field,
            "method_declaration" => NodeKind::Method,
            k if TYPE_KINDS.contains(&k) => NodeKind::Type,
            _ => NodeKind::Other,
        }
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|n| Self::new(n, self.source))
            .collect()
    }

    fn line_range(&self) -> Option<LineRange> {
        Some(LineRange::new(
            self.start_line(),
            self.node.end_position().row + 1,
        ))
    }

    fn has_doc_comment(&self) -> bool {
        let Some(prev) = self.node.prev_sibling() else {
            return false;
        };
        if !matches!(prev.kind(), "comment" | "block_comment") {
            return false;
        }
        self.text_of(prev)
            .is_some_and(|t| t.starts_with("/**") && t != "/**/")
    }

    fn modifiers(&self) -> Vec<String> {
        let mut cursor = self.node.walk();
        let Some(mods) = self
            .node
            .children(&mut cursor)
            .find(|c| c.kind() == "modifiers")
        else {
            return Vec::new();
        };

        // Keywords are anonymous tokens; annotations are named nodes.
        let mut cursor = mods.walk();
        mods.children(&mut cursor)
            .filter(|c| !c.is_named())
            .map(|c| c.kind().to_string())
            .collect()
    }

    fn name(&self) -> Option<String> {
        self.field_text("name")
    }

    fn declared_type(&self) -> Option<String> {
        let base = self.field_text("type")?;
        match self.node.child_by_field_name("dimensions") {
            Some(dims) => Some(format!("{base}{}", self.text_of(dims)?)),
            None => Some(base),
        }
    }

    fn variables(&self) -> Result<Vec<Variable>> {
        let base = self
            .field_text("type")
            .ok_or_else(|| self.malformed("type"))?;
        let mut cursor = self.node.walk();
        let declarators: Vec<Node<'a>> = self
            .node
            .children_by_field_name("declarator", &mut cursor)
            .collect();

        declarators
            .into_iter()
            .map(|d| -> Result<Variable> {
                let name = d
                    .child_by_field_name("name")
                    .and_then(|n| self.text_of(n))
                    .ok_or_else(|| self.malformed("variable name"))?;
                Ok(Variable::new(name, self.declarator_type(&base, d)))
            })
            .collect()
    }

    fn parameters(&self) -> Result<Vec<Parameter>> {
        let Some(params) = self.node.child_by_field_name("parameters") else {
            return Ok(Vec::new());
        };
        let mut cursor = params.walk();
        let nodes: Vec<Node<'a>> = params.named_children(&mut cursor).collect();

        let mut out = Vec::new();
        for node in nodes {
            if let Some(p) = self.parameter(node)? {
                out.push(p);
            }
        }
        Ok(out)
    }

    fn body(&self) -> Option<Self> {
        self.node
            .child_by_field_name("body")
            .map(|n| Self::new(n, self.source))
    }

    fn identifier(&self) -> Option<String> {
        if self.node.kind() != "identifier" || self.node.child_count() > 0 {
            return None;
        }
        self.text_of(self.node).map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use tree_sitter::{Parser, Tree};

    fn parse(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(Lang::Java.grammar()).unwrap();
        parser.parse(source, None).unwrap()
    }

    fn find<'a>(node: JavaNode<'a>, kind: NodeKind) -> Option<JavaNode<'a>> {
        if node.kind() == kind {
            return Some(node);
        }
        node.children().into_iter().find_map(|c| find(c, kind))
    }

    #[test]
    fn test_field_accessors() {
        let src = "class A {\n  /** doc */\n  @Deprecated private static final int x = 1, y[];\n}";
        let tree = parse(src);
        let root = JavaNode::new(tree.root_node(), src);
        let field = find(root, NodeKind::Field).unwrap();

        assert_eq!(field.modifiers(), vec!["private", "static", "final"]);
        assert!(field.has_doc_comment());
        assert_eq!(
            field.variables().unwrap(),
            vec![Variable::new("x", "int"), Variable::new("y", "int[]")]
        );
        assert_eq!(field.line_range(), Some(LineRange::new(3, 3)));
    }

    #[test]
    fn test_plain_comment_is_not_doc() {
        let src = "class A {\n  /* note */\n  int x;\n  // line\n  int y;\n}";
        let tree = parse(src);
        let root = JavaNode::new(tree.root_node(), src);
        let class = find(root, NodeKind::Type).unwrap();
        let body = class.body().unwrap();
        let fields: Vec<_> = body
            .children()
            .into_iter()
            .filter(|c| c.kind() == NodeKind::Field)
            .collect();
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|f| !f.has_doc_comment()));
    }

    #[test]
    fn test_method_accessors() {
        let src = "class A {\n  public String get(int a, String... rest) {\n    return rest[a];\n  }\n}";
        let tree = parse(src);
        let root = JavaNode::new(tree.root_node(), src);
        let method = find(root, NodeKind::Method).unwrap();

        assert_eq!(method.name().as_deref(), Some("get"));
        assert_eq!(method.declared_type().as_deref(), Some("String"));
        assert_eq!(
            method.parameters().unwrap(),
            vec![Parameter::new("a", "int"), Parameter::new("rest", "String...")]
        );
        assert_eq!(method.line_range(), Some(LineRange::new(2, 4)));
        assert!(method.body().is_some());
    }

    #[test]
    fn test_abstract_method_has_no_body() {
        let src = "abstract class A { abstract void f(int a); }";
        let tree = parse(src);
        let root = JavaNode::new(tree.root_node(), src);
        let method = find(root, NodeKind::Method).unwrap();
        assert!(method.body().is_none());
        assert_eq!(method.modifiers(), vec!["abstract"]);
    }
}
