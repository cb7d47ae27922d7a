//! Named declarations found by a language walker, and how they are judged.
//!
//! A walker only decides *what* it found; [`Binding::check`] decides which
//! rule applies and whether the name passes it.

use crate::case_rule::check_naming_convention;
use crate::config::CheckOptions;
use crate::types::{Violation, ViolationKind};

/// Shape of the value a `const` is initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitializerShape {
    /// Arrow function or function expression.
    FunctionLike,
    /// Number, string, boolean, or a negated number.
    PrimitiveLiteral,
    /// `<expr> as const`.
    AsConst,
    /// Arrays, objects, template strings, calls and everything else.
    Other,
}

/// Where a binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingOrigin {
    /// `function name() {}`
    FunctionDeclaration,
    /// `const name = <initializer>;`
    ConstDeclaration(InitializerShape),
}

/// A named declaration, positioned at its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Identifier text.
    pub name: String,
    /// Syntactic origin.
    pub origin: BindingOrigin,
    /// Line (0-indexed).
    pub line: usize,
    /// Start column in UTF-16 code units (0-indexed).
    pub character: usize,
    /// Byte offset of the identifier.
    pub offset: usize,
}

impl Binding {
    /// The rule category this binding is subject to, if any.
    ///
    /// `const` bindings whose value is neither function-like nor a
    /// primitive literal are not checked.
    #[must_use]
    pub fn kind(&self) -> Option<ViolationKind> {
        match self.origin {
            BindingOrigin::FunctionDeclaration
            | BindingOrigin::ConstDeclaration(InitializerShape::FunctionLike) => {
                Some(ViolationKind::Function)
            }
            BindingOrigin::ConstDeclaration(InitializerShape::PrimitiveLiteral) => {
                Some(ViolationKind::Constant)
            }
            BindingOrigin::ConstDeclaration(InitializerShape::AsConst | InitializerShape::Other) => {
                None
            }
        }
    }

    /// Checks the name against the rule selected by `options`.
    ///
    /// Returns at most one violation.
    #[must_use]
    pub fn check(&self, options: &CheckOptions) -> Option<Violation> {
        let kind = self.kind()?;
        let rule = options.rule_for(kind);
        if check_naming_convention(&self.name, rule) {
            return None;
        }
        Some(Violation {
            name: self.name.clone(),
            line: self.line,
            character: self.character,
            end_character: self.character + self.name.encode_utf16().count(),
            kind,
            rule: rule.to_owned(),
            offset: self.offset,
        })
    }
}
