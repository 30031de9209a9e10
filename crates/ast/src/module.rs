use crate::{stmt::Stmt, NodeId};

/// The synthetic root of a compilation: one child script per input file.
#[derive(Debug, PartialEq)]
pub struct Program {
    pub node_id: NodeId,
    pub scripts: Vec<Script>,
}

/// One input file. Its span covers the whole file, which is how passes
/// recover the source file name.
#[derive(Debug, PartialEq)]
pub struct Script {
    pub node_id: NodeId,
    pub body: Vec<Stmt>,
}

crate::impl_has_node_id!(Program, Script);
