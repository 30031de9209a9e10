//! Deep-copy support. Nodes deliberately do not implement [Clone]: a plain
//! clone would duplicate [NodeId][crate::NodeId]s. Copies made through
//! [CloneNode] allocate a fresh id per node, each carrying the original's
//! span.

use crate::*;

pub trait CloneNode {
    fn clone_node(&self, program_data: &mut ProgramData) -> Self;
}

impl<T: CloneNode> CloneNode for Box<T> {
    fn clone_node(&self, program_data: &mut ProgramData) -> Self {
        Box::new((**self).clone_node(program_data))
    }
}

impl<T: CloneNode> CloneNode for Option<T> {
    fn clone_node(&self, program_data: &mut ProgramData) -> Self {
        match self {
            Some(node) => Some(node.clone_node(program_data)),
            None => None,
        }
    }
}

impl<T: CloneNode> CloneNode for Vec<T> {
    fn clone_node(&self, program_data: &mut ProgramData) -> Self {
        let mut out = Vec::with_capacity(self.len());
        for node in self {
            out.push(node.clone_node(program_data));
        }
        out
    }
}

/// Payload types without a node id of their own copy as-is.
macro_rules! clone_leaf {
    ($($t:ty),*) => {
        $(impl CloneNode for $t {
            fn clone_node(&self, _: &mut ProgramData) -> Self {
                self.clone()
            }
        })*
    };
}

clone_leaf!(bool, f64, swc_atoms::JsWord, UnaryOp, UpdateOp, BinaryOp, AssignOp);

macro_rules! clone_struct {
    ($($t:ident { $($field:ident),* $(,)? })*) => {
        $(impl CloneNode for $t {
            fn clone_node(&self, program_data: &mut ProgramData) -> Self {
                $t {
                    node_id: program_data.new_id_from(self.node_id),
                    $($field: self.$field.clone_node(program_data),)*
                }
            }
        })*
    };
}

macro_rules! clone_enum {
    ($($t:ident { $($variant:ident),* $(,)? })*) => {
        $(impl CloneNode for $t {
            fn clone_node(&self, program_data: &mut ProgramData) -> Self {
                match self {
                    $($t::$variant(n) => $t::$variant(n.clone_node(program_data)),)*
                }
            }
        })*
    };
}

clone_enum! {
    Expr { This, Array, Object, Fn, Unary, Update, Bin, Assign, Member, Cond, Call, New, Seq, Ident, Lit }
    Lit { Str, Bool, Null, Num, Regex }
    Stmt { Block, Empty, Debugger, Expr, If, Return, Labeled, Break, Continue, While, DoWhile, For, ForIn, Switch, Throw, Try, Decl }
    Decl { Fn, Var }
    VarDeclOrExpr { VarDecl, Expr }
    Prop { KeyValue, Getter, Setter }
    PropName { Ident, Str, Num }
}

clone_struct! {
    Program { scripts }
    Script { body }
    Ident { sym }
    Str { value }
    Bool { value }
    Null {}
    Number { value }
    Regex { exp, flags }
    ThisExpr {}
    ArrayLit { elems }
    ObjectLit { props }
    FnExpr { ident, function }
    UnaryExpr { op, arg }
    UpdateExpr { op, prefix, arg }
    BinExpr { op, left, right }
    AssignExpr { op, left, right }
    MemberExpr { obj, prop, computed }
    CondExpr { test, cons, alt }
    CallExpr { callee, args, free_call }
    NewExpr { callee, args }
    SeqExpr { exprs }
    Function { params, body }
    FnDecl { ident, function }
    VarDecl { decls }
    VarDeclarator { name, init }
    KeyValueProp { key, value }
    GetterProp { key, body }
    SetterProp { key, param, body }
    BlockStmt { stmts }
    EmptyStmt {}
    DebuggerStmt {}
    ExprStmt { expr }
    IfStmt { test, cons, alt }
    ReturnStmt { arg }
    LabeledStmt { label, body }
    BreakStmt { label }
    ContinueStmt { label }
    WhileStmt { test, body }
    DoWhileStmt { body, test }
    ForStmt { init, test, update, body }
    ForInStmt { left, right, body }
    SwitchStmt { discriminant, cases }
    SwitchCase { test, cons }
    ThrowStmt { arg }
    TryStmt { block, handler, finalizer }
    CatchClause { param, body }
}
