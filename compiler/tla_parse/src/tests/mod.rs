//! Parser tests.
//!
//! - `module`: headers, declarations and definition forms
//! - `expr`: binders, junction lists, references and delimiters
//! - `recovery`: malformed input, proofs and nested modules

mod module;

use crate::{parse, ParseOutput};
use tla_ir::{NodeId, NodeKind, StringInterner, SyntaxTree};

pub(super) struct Parsed {
    pub(super) output: ParseOutput,
    pub(super) interner: StringInterner,
}

impl Parsed {
    pub(super) fn tree(&self) -> &SyntaxTree {
        &self.output.tree
    }

    /// All nodes of `kind` named `name`, in source order.
    pub(super) fn find_all(&self, kind: NodeKind, name: &str) -> Vec<NodeId> {
        let tree = self.tree();
        tree.descendants(tree.root())
            .filter(|&id| tree.kind(id) == kind && self.interner.lookup(tree.name(id)) == name)
            .collect()
    }

    /// The first node of `kind` named `name`.
    pub(super) fn find(&self, kind: NodeKind, name: &str) -> NodeId {
        match self.find_all(kind, name).first() {
            Some(&id) => id,
            None => panic!("no {kind:?} named `{name}` in\n{}", self.dump()),
        }
    }

    /// All nodes of `kind`, in source order.
    pub(super) fn of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        let tree = self.tree();
        tree.descendants(tree.root())
            .filter(|&id| tree.kind(id) == kind)
            .collect()
    }

    pub(super) fn dump(&self) -> String {
        self.tree().dump(&self.interner)
    }
}

pub(super) fn parse_any(source: &str) -> Parsed {
    let interner = StringInterner::new();
    let output = parse(source, &interner);
    Parsed { output, interner }
}

pub(super) fn parse_ok(source: &str) -> Parsed {
    let parsed = parse_any(source);
    assert!(
        parsed.output.errors.is_empty(),
        "unexpected errors: {:?}\n{}",
        parsed.output.errors,
        parsed.dump()
    );
    parsed
}

/// Wrap definitions in a module header and footer.
pub(super) fn module(body: &str) -> String {
    format!("---- MODULE M ----\n{body}\n====\n")
}
