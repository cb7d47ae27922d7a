//! TypeScript dialect selection and parsing.

use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};

use case_lint_core::ParseError;

/// Grammar used to parse a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Plain TypeScript (`.ts`, `.mts`, `.cts`, `.d.ts`).
    TypeScript,
    /// TypeScript with JSX (`.tsx`).
    Tsx,
}

impl Dialect {
    /// Picks the dialect from a file identifier's extension.
    ///
    /// Anything that is not `.tsx` is parsed as plain TypeScript.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsx") => Self::Tsx,
            _ => Self::TypeScript,
        }
    }

    /// Grammar name, for error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    fn language(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Parses `source` into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] pointing at the first error or
    /// missing node when the tree is not clean.
    pub fn parse(self, source: &str, file_name: &str) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language())
            .map_err(|e| ParseError::Grammar {
                language: self.name(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Unparsable {
                file: file_name.to_owned(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(ParseError::Syntax {
                file: file_name.to_owned(),
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        Ok(tree)
    }
}

/// Depth-first search for the first `ERROR` or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::from_file_name("src/App.tsx"), Dialect::Tsx);
        assert_eq!(Dialect::from_file_name("src/app.ts"), Dialect::TypeScript);
        assert_eq!(Dialect::from_file_name("types.d.ts"), Dialect::TypeScript);
        assert_eq!(Dialect::from_file_name("untitled"), Dialect::TypeScript);
    }

    #[test]
    fn parses_clean_source() {
        let tree = Dialect::TypeScript
            .parse("const PI: number = 3.14;\n", "a.ts")
            .expect("parse");
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn empty_source_is_valid() {
        assert!(Dialect::TypeScript.parse("", "a.ts").is_ok());
    }

    #[test]
    fn reports_first_syntax_error_position() {
        let err = Dialect::TypeScript
            .parse("const OK = 1;\nconst = ;\n", "broken.ts")
            .unwrap_err();
        match err {
            ParseError::Syntax { file, line, .. } => {
                assert_eq!(file, "broken.ts");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn jsx_needs_tsx_dialect() {
        let src = "const App = () => <div>hello</div>;\n";
        assert!(Dialect::Tsx.parse(src, "App.tsx").is_ok());
    }
}
