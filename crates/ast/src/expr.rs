use crate::{
    function::Function, ident::Ident, lit::Lit, operators::*, prop::Prop, HasNodeId, NodeId,
};

#[derive(Debug, PartialEq)]
pub enum Expr {
    This(ThisExpr),
    Array(ArrayLit),
    Object(ObjectLit),
    Fn(FnExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Bin(BinExpr),
    Assign(AssignExpr),
    Member(MemberExpr),
    Cond(CondExpr),
    Call(CallExpr),
    New(NewExpr),
    Seq(SeqExpr),
    Ident(Ident),
    Lit(Lit),
}

impl HasNodeId for Expr {
    fn node_id(&self) -> NodeId {
        match self {
            Expr::This(n) => n.node_id,
            Expr::Array(n) => n.node_id,
            Expr::Object(n) => n.node_id,
            Expr::Fn(n) => n.node_id,
            Expr::Unary(n) => n.node_id,
            Expr::Update(n) => n.node_id,
            Expr::Bin(n) => n.node_id,
            Expr::Assign(n) => n.node_id,
            Expr::Member(n) => n.node_id,
            Expr::Cond(n) => n.node_id,
            Expr::Call(n) => n.node_id,
            Expr::New(n) => n.node_id,
            Expr::Seq(n) => n.node_id,
            Expr::Ident(n) => n.node_id,
            Expr::Lit(n) => n.node_id(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ThisExpr {
    pub node_id: NodeId,
}

/// Array literal. `None` elements are elisions (`[,,]`).
#[derive(Debug, PartialEq)]
pub struct ArrayLit {
    pub node_id: NodeId,
    pub elems: Vec<Option<Box<Expr>>>,
}

#[derive(Debug, PartialEq)]
pub struct ObjectLit {
    pub node_id: NodeId,
    pub props: Vec<Prop>,
}

#[derive(Debug, PartialEq)]
pub struct FnExpr {
    pub node_id: NodeId,
    pub ident: Option<Ident>,
    pub function: Function,
}

#[derive(Debug, PartialEq)]
pub struct UnaryExpr {
    pub node_id: NodeId,
    pub op: UnaryOp,
    pub arg: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct UpdateExpr {
    pub node_id: NodeId,
    pub op: UpdateOp,
    pub prefix: bool,
    pub arg: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct BinExpr {
    pub node_id: NodeId,
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct AssignExpr {
    pub node_id: NodeId,
    pub op: AssignOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Property access. Non-computed `prop` identifiers are property names, not
/// name references; renaming traversals must leave them alone.
#[derive(Debug, PartialEq)]
pub struct MemberExpr {
    pub node_id: NodeId,
    pub obj: Box<Expr>,
    pub prop: Box<Expr>,
    pub computed: bool,
}

#[derive(Debug, PartialEq)]
pub struct CondExpr {
    pub node_id: NodeId,
    pub test: Box<Expr>,
    pub cons: Box<Expr>,
    pub alt: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct CallExpr {
    pub node_id: NodeId,
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    /// True when the callee is a bare identifier, so the call is not a
    /// method call. Synthesized `require(...)` calls set this explicitly.
    pub free_call: bool,
}

#[derive(Debug, PartialEq)]
pub struct NewExpr {
    pub node_id: NodeId,
    pub callee: Box<Expr>,
    pub args: Option<Vec<Expr>>,
}

#[derive(Debug, PartialEq)]
pub struct SeqExpr {
    pub node_id: NodeId,
    pub exprs: Vec<Expr>,
}

crate::impl_has_node_id!(
    ThisExpr, ArrayLit, ObjectLit, FnExpr, UnaryExpr, UpdateExpr, BinExpr, AssignExpr, MemberExpr,
    CondExpr, CallExpr, NewExpr, SeqExpr
);
