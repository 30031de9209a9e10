#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

pub use self::{
    clone::CloneNode,
    decl::{Decl, FnDecl, VarDecl, VarDeclarator},
    expr::{
        ArrayLit, AssignExpr, BinExpr, CallExpr, CondExpr, Expr, FnExpr, MemberExpr, NewExpr,
        ObjectLit, SeqExpr, ThisExpr, UnaryExpr, UpdateExpr,
    },
    function::Function,
    ident::Ident,
    lit::{Bool, Lit, Null, Number, Regex, Str},
    module::{Program, Script},
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    prop::{GetterProp, KeyValueProp, Prop, PropName, SetterProp},
    stmt::{
        BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
        ExprStmt, ForInStmt, ForStmt, IfStmt, LabeledStmt, ReturnStmt, Stmt, SwitchCase,
        SwitchStmt, ThrowStmt, TryStmt, VarDeclOrExpr, WhileStmt,
    },
};

use global_common::{Span, DUMMY_SP};

mod clone;
mod decl;
mod expr;
mod function;
mod ident;
mod lit;
mod module;
mod operators;
mod prop;
mod stmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
    pub const DUMMY: NodeId = NodeId(u32::MAX);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source positions for every allocated node. Ids are handed out densely
/// from zero, so the whole table is one flat vector indexed by [NodeId];
/// [NodeId::DUMMY] lies past any real entry and reads back as [DUMMY_SP].
#[derive(Debug, Default)]
pub struct ProgramData {
    spans: Vec<Span>,
}

impl ProgramData {
    pub fn new_id(&mut self, span: Span) -> NodeId {
        let id = NodeId(u32::try_from(self.spans.len()).expect("node id space exhausted"));
        self.spans.push(span);
        id
    }

    /// A fresh id carrying `donor`'s span. Passes allocate every node they
    /// synthesize through this, so rewritten subtrees keep mapping to real
    /// source positions.
    pub fn new_id_from(&mut self, donor: NodeId) -> NodeId {
        let span = self.get_span(donor);
        self.new_id(span)
    }

    pub fn get_span(&self, node: NodeId) -> Span {
        match self.spans.get(node.index()) {
            Some(span) => *span,
            None => DUMMY_SP,
        }
    }
}

pub trait HasNodeId {
    fn node_id(&self) -> NodeId;
}

macro_rules! impl_has_node_id {
    ($($t:ty),*) => {
        $(impl crate::HasNodeId for $t {
            fn node_id(&self) -> crate::NodeId {
                self.node_id
            }
        })*
    };
}

pub(crate) use impl_has_node_id;
