// src/types.rs
use serde::Serialize;

/// Which table a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Field,
    Method,
}

/// A declared field variable: `int x` in `private int x, y;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub type_name: String,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Extracted facts for one field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// First source line of the declaration, if the tree carries ranges.
    pub line: Option<usize>,
    pub modifiers: Vec<String>,
    pub documented: bool,
    /// Innermost enclosing type declaration.
    pub owner: Option<String>,
    pub variables: Vec<Variable>,
    /// Neither `final` nor `private`.
    pub inappropriate_access_level: bool,
}

/// Extracted facts for one method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    pub line: Option<usize>,
    pub modifiers: Vec<String>,
    pub documented: bool,
    pub owner: Option<String>,
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// No body, or some parameter never appears in the body.
    pub unused_parameter: bool,
    pub start_line: Option<usize>,
    /// `end - start + 1`
    pub size: Option<usize>,
}

/// One declaration's report. Built once from a single node, then read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Field(FieldReport),
    Method(MethodReport),
}

impl Report {
    #[must_use]
    pub fn kind(&self) -> DeclKind {
        match self {
            Self::Field(_) => DeclKind::Field,
            Self::Method(_) => DeclKind::Method,
        }
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Field(f) => f.line,
            Self::Method(m) => m.line,
        }
    }

    #[must_use]
    pub fn documented(&self) -> bool {
        match self {
            Self::Field(f) => f.documented,
            Self::Method(m) => m.documented,
        }
    }

    /// True when the report carries the kind's warning flag.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        match self {
            Self::Field(f) => f.inappropriate_access_level,
            Self::Method(m) => m.unused_parameter,
        }
    }

    #[must_use]
    pub fn as_field(&self) -> Option<&FieldReport> {
        match self {
            Self::Field(f) => Some(f),
            Self::Method(_) => None,
        }
    }

    #[must_use]
    pub fn as_method(&self) -> Option<&MethodReport> {
        match self {
            Self::Method(m) => Some(m),
            Self::Field(_) => None,
        }
    }
}

/// A type declaration seen during traversal. Not part of the report tables;
/// handed to the caller through a `TypeObserver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub line: Option<usize>,
    /// Declared inside another type. Static member types and local types
    /// declared in a method body count as nested too.
    pub nested: bool,
}
