//! Maps tree-sitter node kinds onto the handful of categories the walker
//! cares about.

use tree_sitter::Node;

use case_lint_core::InitializerShape;

/// How the walker treats a node.
#[derive(Debug, Clone, Copy)]
pub(crate) enum NodeCategory<'t> {
    /// Class declaration or expression: skipped with its members.
    ClassLike,
    /// Enum or interface declaration: skipped with its members.
    EnumOrInterface,
    /// Named function declaration: checked, then descended into.
    FunctionDeclaration {
        /// The declared name.
        name: Node<'t>,
    },
    /// `const` statement: its declarators are checked, nothing below them.
    ConstStatement,
    /// `let` / `var` statement: neither checked nor descended into.
    MutableStatement,
    /// Everything else: descended into.
    Other,
}

pub(crate) fn categorize(node: Node<'_>) -> NodeCategory<'_> {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" | "class" => NodeCategory::ClassLike,
        "enum_declaration" | "interface_declaration" => NodeCategory::EnumOrInterface,
        "function_declaration" | "generator_function_declaration" | "function_signature" => node
            .child_by_field_name("name")
            .map_or(NodeCategory::Other, |name| NodeCategory::FunctionDeclaration {
                name,
            }),
        "lexical_declaration" | "variable_declaration" if !in_for_header(node) => {
            if is_const(node) {
                NodeCategory::ConstStatement
            } else {
                NodeCategory::MutableStatement
            }
        }
        _ => NodeCategory::Other,
    }
}

fn is_const(node: Node<'_>) -> bool {
    node.child_by_field_name("kind")
        .is_some_and(|kind| kind.kind() == "const")
}

/// The initializer clause of a `for` header is not a statement.
fn in_for_header(node: Node<'_>) -> bool {
    node.parent()
        .filter(|parent| parent.kind() == "for_statement")
        .and_then(|parent| parent.child_by_field_name("initializer"))
        .is_some_and(|initializer| initializer.id() == node.id())
}

pub(crate) fn initializer_shape(value: Node<'_>, src: &[u8]) -> InitializerShape {
    match value.kind() {
        "arrow_function" | "function_expression" | "function" | "generator_function" => {
            InitializerShape::FunctionLike
        }
        "string" | "true" | "false" => InitializerShape::PrimitiveLiteral,
        "number" if !is_bigint(value, src) => InitializerShape::PrimitiveLiteral,
        "unary_expression" if is_negated_number(value, src) => InitializerShape::PrimitiveLiteral,
        "as_expression" if is_as_const(value) => InitializerShape::AsConst,
        _ => InitializerShape::Other,
    }
}

/// `10n` shares the `number` node kind but is a BigInt.
fn is_bigint(number: Node<'_>, src: &[u8]) -> bool {
    src.get(number.byte_range())
        .is_some_and(|text| text.ends_with(b"n"))
}

fn is_negated_number(unary: Node<'_>, src: &[u8]) -> bool {
    let minus = unary
        .child_by_field_name("operator")
        .is_some_and(|op| op.kind() == "-");
    let numeric = unary
        .child_by_field_name("argument")
        .is_some_and(|arg| arg.kind() == "number" && !is_bigint(arg, src));
    minus && numeric
}

/// `<expr> as const`; other assertions (`as Foo`, `<const>x`) don't count.
fn is_as_const(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "const");
    found
}
