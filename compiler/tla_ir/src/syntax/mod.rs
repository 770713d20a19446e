//! Arena syntax tree for TLA+ modules.
//!
//! Nodes are owned by a [`SyntaxTree`] and addressed by [`NodeId`]. Every
//! node stores a non-owning link to its parent, which is all the resolver
//! needs to walk from a use site outward through enclosing scopes.
//!
//! # Shape
//!
//! ```text
//! Module(name)
//! ├── Extends ── ModuleRef(name)*
//! ├── Variables / Constants ── Decl(Variable | Constant)*
//! ├── Recursive ── Ident*
//! ├── OperatorDef [LOCAL] ── Decl(Operator), Params?, <body>
//! ├── FunctionDef [LOCAL] ── Decl(Function), Bound*, <body>
//! ├── ModuleDef [LOCAL] ── Decl(ModuleInstance), Params?, Instance
//! ├── Instance [LOCAL] ── ModuleRef, Substitution*
//! └── Assume / Theorem ── Decl(Operator)?, <body>
//!
//! Let ── (OperatorDef | FunctionDef | ModuleDef | Recursive)*, <body>
//! Quantifier / Choose / FunctionCtor / SetFilter ── Bound*, <body>
//! SetMap ── <body>, Bound*
//! Lambda ── Params, <body>
//! Bound ── Decl(BoundName)*, <domain>?
//! Params ── Decl(Parameter)*
//! Ident(name) ── Qualifier(name)*    (for `P!Q!name`)
//! ```
//!
//! `<body>` is any expression node: `Expr` groups opaque tokens, the other
//! expression kinds carry scoping structure.

mod builder;
mod tree;

pub use builder::TreeBuilder;
pub use tree::{Ancestors, Descendants, SyntaxTree};

use bitflags::bitflags;
use std::fmt;

/// Index into a [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node" in the parent column.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_some() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::NONE")
        }
    }
}

/// What a declaring identifier introduces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeclKind {
    /// `Op == ...` / `Op(a, b) == ...`
    Operator,
    /// `f[x \in S] == ...`
    Function,
    /// `P == INSTANCE M`
    ModuleInstance,
    /// Variable bound by a quantifier, comprehension or function constructor.
    BoundName,
    /// Operator or LAMBDA parameter.
    Parameter,
    /// `VARIABLE x`
    Variable,
    /// `CONSTANT c`
    Constant,
}

impl DeclKind {
    pub fn label(self) -> &'static str {
        match self {
            DeclKind::Operator => "operator",
            DeclKind::Function => "function",
            DeclKind::ModuleInstance => "module instance",
            DeclKind::BoundName => "bound name",
            DeclKind::Parameter => "parameter",
            DeclKind::Variable => "variable",
            DeclKind::Constant => "constant",
        }
    }
}

/// Syntax node kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Module,
    Extends,
    /// Module name inside EXTENDS or INSTANCE.
    ModuleRef,
    Variables,
    Constants,
    Recursive,
    OperatorDef,
    FunctionDef,
    ModuleDef,
    Instance,
    /// `param <- expr` inside `INSTANCE ... WITH`.
    Substitution,
    Assume,
    Theorem,
    /// Declaring occurrence of a name.
    Decl(DeclKind),
    Params,
    /// `x, y \in S` or an unbounded `x` in a binder list.
    Bound,
    /// Referencing occurrence of a name.
    Ident,
    /// One `P!` segment of a qualified reference.
    Qualifier,
    Let,
    /// `\A`, `\E`, `\AA`, `\EE`.
    Quantifier,
    Choose,
    /// `{x \in S : P}`
    SetFilter,
    /// `{e : x \in S}`
    SetMap,
    /// `[x \in S |-> e]`
    FunctionCtor,
    Lambda,
    /// Opaque expression group.
    Expr,
    /// Tokens the parser skipped while recovering.
    Error,
}

impl NodeKind {
    /// Units that introduce a named definition.
    pub fn is_definition(self) -> bool {
        matches!(
            self,
            NodeKind::OperatorDef | NodeKind::FunctionDef | NodeKind::ModuleDef
        )
    }

    /// Nodes that bind names through `Bound` children.
    pub fn is_binder(self) -> bool {
        matches!(
            self,
            NodeKind::Quantifier
                | NodeKind::Choose
                | NodeKind::SetFilter
                | NodeKind::SetMap
                | NodeKind::FunctionCtor
                | NodeKind::FunctionDef
        )
    }
}

bitflags! {
    /// Per-node modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// Definition or instance marked `LOCAL`.
        const LOCAL = 1 << 0;
        /// `\E` / `\EE` (unset for `\A` / `\AA`).
        const EXISTENTIAL = 1 << 1;
        /// Temporal quantifier `\AA` / `\EE`.
        const TEMPORAL = 1 << 2;
        /// Node was synthesized, not parsed.
        const SYNTHETIC = 1 << 3;
        /// EXTENDS list ending in a `,` with no name after it.
        const TRAILING_COMMA = 1 << 4;
    }
}
