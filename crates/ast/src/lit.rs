use swc_atoms::JsWord;

use crate::{HasNodeId, NodeId};

#[derive(Debug, PartialEq)]
pub enum Lit {
    Str(Str),
    Bool(Bool),
    Null(Null),
    Num(Number),
    Regex(Regex),
}

impl HasNodeId for Lit {
    fn node_id(&self) -> NodeId {
        match self {
            Lit::Str(n) => n.node_id,
            Lit::Bool(n) => n.node_id,
            Lit::Null(n) => n.node_id,
            Lit::Num(n) => n.node_id,
            Lit::Regex(n) => n.node_id,
        }
    }
}

/// A string literal. The original quote style is not preserved; the printer
/// always emits double quotes.
#[derive(Debug, PartialEq)]
pub struct Str {
    pub node_id: NodeId,
    pub value: JsWord,
}

#[derive(Debug, PartialEq)]
pub struct Bool {
    pub node_id: NodeId,
    pub value: bool,
}

#[derive(Debug, PartialEq)]
pub struct Null {
    pub node_id: NodeId,
}

#[derive(Debug, PartialEq)]
pub struct Number {
    pub node_id: NodeId,
    pub value: f64,
}

#[derive(Debug, PartialEq)]
pub struct Regex {
    pub node_id: NodeId,
    pub exp: JsWord,
    pub flags: JsWord,
}

crate::impl_has_node_id!(Str, Bool, Null, Number, Regex);
