use crate::{expr::Expr, function::Function, ident::Ident, HasNodeId, NodeId};

#[derive(Debug, PartialEq)]
pub enum Decl {
    Fn(FnDecl),
    Var(VarDecl),
}

impl HasNodeId for Decl {
    fn node_id(&self) -> NodeId {
        match self {
            Decl::Fn(n) => n.node_id,
            Decl::Var(n) => n.node_id,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FnDecl {
    pub node_id: NodeId,
    pub ident: Ident,
    pub function: Function,
}

/// ES5: always `var`.
#[derive(Debug, PartialEq)]
pub struct VarDecl {
    pub node_id: NodeId,
    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, PartialEq)]
pub struct VarDeclarator {
    pub node_id: NodeId,
    pub name: Ident,
    pub init: Option<Box<Expr>>,
}

crate::impl_has_node_id!(FnDecl, VarDecl, VarDeclarator);
