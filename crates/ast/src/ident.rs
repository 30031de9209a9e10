use swc_atoms::JsWord;

use crate::NodeId;

#[derive(Debug, PartialEq)]
pub struct Ident {
    pub node_id: NodeId,
    pub sym: JsWord,
}

crate::impl_has_node_id!(Ident);
