//! Single-pass, pre-order walk that collects checkable bindings.

use tracing::debug;
use tree_sitter::{Node, Tree};

use case_lint_core::{Binding, BindingOrigin};

use crate::node::{categorize, initializer_shape, NodeCategory};

/// Collects bindings in document order.
pub(crate) fn collect_bindings(tree: &Tree, source: &str) -> Vec<Binding> {
    let mut walker = Walker {
        source,
        lines: LineIndex::new(source),
        bindings: Vec::new(),
    };
    walker.visit_children(tree.root_node());
    walker.bindings
}

struct Walker<'s> {
    source: &'s str,
    lines: LineIndex,
    bindings: Vec<Binding>,
}

impl Walker<'_> {
    fn visit(&mut self, node: Node<'_>) {
        match categorize(node) {
            NodeCategory::ClassLike
            | NodeCategory::EnumOrInterface
            | NodeCategory::MutableStatement => {
                debug!("skipping {} at line {}", node.kind(), node.start_position().row + 1);
            }
            NodeCategory::FunctionDeclaration { name } => {
                self.push(name, BindingOrigin::FunctionDeclaration);
                self.visit_children(node);
            }
            NodeCategory::ConstStatement => self.visit_const_statement(node),
            NodeCategory::Other => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    fn visit_const_statement(&mut self, statement: Node<'_>) {
        let mut cursor = statement.walk();
        for declarator in statement.named_children(&mut cursor) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };
            // Destructuring patterns carry no single name.
            if name.kind() != "identifier" {
                continue;
            }
            let Some(value) = declarator.child_by_field_name("value") else {
                continue;
            };
            let shape = initializer_shape(value, self.source.as_bytes());
            self.push(name, BindingOrigin::ConstDeclaration(shape));
        }
    }

    fn push(&mut self, name: Node<'_>, origin: BindingOrigin) {
        let Some(text) = self.source.get(name.byte_range()) else {
            return;
        };
        let offset = name.start_byte();
        let (line, character) = self.lines.position(self.source, offset);
        self.bindings.push(Binding {
            name: text.to_owned(),
            origin,
            line,
            character,
            offset,
        });
    }
}

/// Line starts under editor line breaks.
///
/// tree-sitter rows only break on `\n`; editors also break on a lone `\r`,
/// U+2028 and U+2029.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        let mut chars = source.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
                '\r' | '\n' | '\u{2028}' | '\u{2029}' => starts.push(i + c.len_utf8()),
                _ => {}
            }
        }
        Self { starts }
    }

    /// 0-based line and UTF-16 column of a byte offset.
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self
            .starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.starts.get(line).copied().unwrap_or(0);
        let column = source
            .get(start..offset)
            .map_or(0, |prefix| prefix.encode_utf16().count());
        (line, column)
    }
}
