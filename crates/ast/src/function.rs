use crate::{ident::Ident, stmt::Stmt, NodeId};

/// ES5 function: plain identifier parameters, body always present.
#[derive(Debug, PartialEq)]
pub struct Function {
    pub node_id: NodeId,
    pub params: Vec<Ident>,
    pub body: Vec<Stmt>,
}

crate::impl_has_node_id!(Function);
