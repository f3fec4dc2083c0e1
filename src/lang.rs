use std::path::Path;
use tree_sitter::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Java,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_ext)
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Java => tree_sitter_java::language(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Java => "java",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ext() {
        assert_eq!(Lang::from_ext("java"), Some(Lang::Java));
        assert_eq!(Lang::from_ext("rs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Lang::from_path(Path::new("src/Foo.java")), Some(Lang::Java));
        assert_eq!(Lang::from_path(Path::new("Makefile")), None);
    }
}
