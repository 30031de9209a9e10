use crate::{decl::Decl, decl::VarDecl, expr::Expr, ident::Ident, HasNodeId, NodeId};

#[derive(Debug, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Empty(EmptyStmt),
    Debugger(DebuggerStmt),
    Expr(ExprStmt),
    If(IfStmt),
    Return(ReturnStmt),
    Labeled(LabeledStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    ForIn(ForInStmt),
    Switch(SwitchStmt),
    Throw(ThrowStmt),
    Try(TryStmt),
    Decl(Decl),
}

impl HasNodeId for Stmt {
    fn node_id(&self) -> NodeId {
        match self {
            Stmt::Block(n) => n.node_id,
            Stmt::Empty(n) => n.node_id,
            Stmt::Debugger(n) => n.node_id,
            Stmt::Expr(n) => n.node_id,
            Stmt::If(n) => n.node_id,
            Stmt::Return(n) => n.node_id,
            Stmt::Labeled(n) => n.node_id,
            Stmt::Break(n) => n.node_id,
            Stmt::Continue(n) => n.node_id,
            Stmt::While(n) => n.node_id,
            Stmt::DoWhile(n) => n.node_id,
            Stmt::For(n) => n.node_id,
            Stmt::ForIn(n) => n.node_id,
            Stmt::Switch(n) => n.node_id,
            Stmt::Throw(n) => n.node_id,
            Stmt::Try(n) => n.node_id,
            Stmt::Decl(n) => n.node_id(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct BlockStmt {
    pub node_id: NodeId,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct EmptyStmt {
    pub node_id: NodeId,
}

#[derive(Debug, PartialEq)]
pub struct DebuggerStmt {
    pub node_id: NodeId,
}

#[derive(Debug, PartialEq)]
pub struct ExprStmt {
    pub node_id: NodeId,
    pub expr: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct IfStmt {
    pub node_id: NodeId,
    pub test: Box<Expr>,
    pub cons: Box<Stmt>,
    pub alt: Option<Box<Stmt>>,
}

#[derive(Debug, PartialEq)]
pub struct ReturnStmt {
    pub node_id: NodeId,
    pub arg: Option<Box<Expr>>,
}

#[derive(Debug, PartialEq)]
pub struct LabeledStmt {
    pub node_id: NodeId,
    pub label: Ident,
    pub body: Box<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct BreakStmt {
    pub node_id: NodeId,
    pub label: Option<Ident>,
}

#[derive(Debug, PartialEq)]
pub struct ContinueStmt {
    pub node_id: NodeId,
    pub label: Option<Ident>,
}

#[derive(Debug, PartialEq)]
pub struct WhileStmt {
    pub node_id: NodeId,
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct DoWhileStmt {
    pub node_id: NodeId,
    pub body: Box<Stmt>,
    pub test: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct ForStmt {
    pub node_id: NodeId,
    pub init: Option<VarDeclOrExpr>,
    pub test: Option<Box<Expr>>,
    pub update: Option<Box<Expr>>,
    pub body: Box<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct ForInStmt {
    pub node_id: NodeId,
    pub left: VarDeclOrExpr,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, PartialEq)]
pub enum VarDeclOrExpr {
    VarDecl(VarDecl),
    Expr(Box<Expr>),
}

#[derive(Debug, PartialEq)]
pub struct SwitchStmt {
    pub node_id: NodeId,
    pub discriminant: Box<Expr>,
    pub cases: Vec<SwitchCase>,
}

/// `test` is `None` for the `default` case.
#[derive(Debug, PartialEq)]
pub struct SwitchCase {
    pub node_id: NodeId,
    pub test: Option<Box<Expr>>,
    pub cons: Vec<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct ThrowStmt {
    pub node_id: NodeId,
    pub arg: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct TryStmt {
    pub node_id: NodeId,
    pub block: BlockStmt,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStmt>,
}

#[derive(Debug, PartialEq)]
pub struct CatchClause {
    pub node_id: NodeId,
    pub param: Ident,
    pub body: BlockStmt,
}

crate::impl_has_node_id!(
    BlockStmt, EmptyStmt, DebuggerStmt, ExprStmt, IfStmt, ReturnStmt, LabeledStmt, BreakStmt,
    ContinueStmt, WhileStmt, DoWhileStmt, ForStmt, ForInStmt, SwitchStmt, SwitchCase, ThrowStmt,
    TryStmt, CatchClause
);
