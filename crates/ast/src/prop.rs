use crate::{
    expr::Expr,
    ident::Ident,
    lit::{Number, Str},
    stmt::Stmt,
    HasNodeId, NodeId,
};

#[derive(Debug, PartialEq)]
pub enum Prop {
    KeyValue(KeyValueProp),
    Getter(GetterProp),
    Setter(SetterProp),
}

impl HasNodeId for Prop {
    fn node_id(&self) -> NodeId {
        match self {
            Prop::KeyValue(n) => n.node_id,
            Prop::Getter(n) => n.node_id,
            Prop::Setter(n) => n.node_id,
        }
    }
}

/// Object-literal property names are labels, not name references.
#[derive(Debug, PartialEq)]
pub enum PropName {
    Ident(Ident),
    Str(Str),
    Num(Number),
}

impl HasNodeId for PropName {
    fn node_id(&self) -> NodeId {
        match self {
            PropName::Ident(n) => n.node_id,
            PropName::Str(n) => n.node_id,
            PropName::Num(n) => n.node_id,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct KeyValueProp {
    pub node_id: NodeId,
    pub key: PropName,
    pub value: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub struct GetterProp {
    pub node_id: NodeId,
    pub key: PropName,
    pub body: Vec<Stmt>,
}

#[derive(Debug, PartialEq)]
pub struct SetterProp {
    pub node_id: NodeId,
    pub key: PropName,
    pub param: Ident,
    pub body: Vec<Stmt>,
}

crate::impl_has_node_id!(KeyValueProp, GetterProp, SetterProp);
