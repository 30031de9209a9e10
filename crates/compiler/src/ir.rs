//! Small node factory for the rewrite passes. Every constructor takes a
//! donor node id; the new node's span is copied from it, so synthesized
//! subtrees keep pointing at real source positions.

use ast::*;
use swc_atoms::JsWord;

pub fn name(program_data: &mut ProgramData, donor: NodeId, sym: JsWord) -> Ident {
    Ident {
        node_id: program_data.new_id_from(donor),
        sym,
    }
}

pub fn name_expr(program_data: &mut ProgramData, donor: NodeId, sym: JsWord) -> Expr {
    Expr::Ident(name(program_data, donor, sym))
}

pub fn string(program_data: &mut ProgramData, donor: NodeId, value: JsWord) -> Str {
    Str {
        node_id: program_data.new_id_from(donor),
        value,
    }
}

pub fn string_expr(program_data: &mut ProgramData, donor: NodeId, value: JsWord) -> Expr {
    Expr::Lit(Lit::Str(string(program_data, donor, value)))
}

pub fn object_lit(program_data: &mut ProgramData, donor: NodeId) -> Expr {
    Expr::Object(ObjectLit {
        node_id: program_data.new_id_from(donor),
        props: Vec::new(),
    })
}

/// `obj.prop` (non-computed).
pub fn getprop(program_data: &mut ProgramData, donor: NodeId, obj: Expr, prop: JsWord) -> Expr {
    let prop = name_expr(program_data, donor, prop);
    Expr::Member(MemberExpr {
        node_id: program_data.new_id_from(donor),
        obj: Box::new(obj),
        prop: Box::new(prop),
        computed: false,
    })
}

pub fn assign(program_data: &mut ProgramData, donor: NodeId, left: Expr, right: Expr) -> Expr {
    Expr::Assign(AssignExpr {
        node_id: program_data.new_id_from(donor),
        op: AssignOp::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn expr_stmt(program_data: &mut ProgramData, donor: NodeId, expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt {
        node_id: program_data.new_id_from(donor),
        expr: Box::new(expr),
    })
}

pub fn var_stmt(
    program_data: &mut ProgramData,
    donor: NodeId,
    name_sym: JsWord,
    init: Option<Expr>,
) -> Stmt {
    let name = name(program_data, donor, name_sym);
    Stmt::Decl(Decl::Var(VarDecl {
        node_id: program_data.new_id_from(donor),
        decls: vec![VarDeclarator {
            node_id: program_data.new_id_from(donor),
            name,
            init: init.map(Box::new),
        }],
    }))
}

/// A call whose callee is a bare identifier; the free-call flag marks it as
/// not being a method call for downstream passes.
pub fn free_call(
    program_data: &mut ProgramData,
    donor: NodeId,
    callee: JsWord,
    args: Vec<Expr>,
) -> Expr {
    let callee = name_expr(program_data, donor, callee);
    Expr::Call(CallExpr {
        node_id: program_data.new_id_from(donor),
        callee: Box::new(callee),
        args,
        free_call: true,
    })
}

pub fn method_call(
    program_data: &mut ProgramData,
    donor: NodeId,
    callee: Expr,
    args: Vec<Expr>,
) -> Expr {
    Expr::Call(CallExpr {
        node_id: program_data.new_id_from(donor),
        callee: Box::new(callee),
        args,
        free_call: false,
    })
}

/// `if (test) { then_stmts }`
pub fn if_stmt(
    program_data: &mut ProgramData,
    donor: NodeId,
    test: Expr,
    then_stmts: Vec<Stmt>,
) -> Stmt {
    let block = BlockStmt {
        node_id: program_data.new_id_from(donor),
        stmts: then_stmts,
    };
    Stmt::If(IfStmt {
        node_id: program_data.new_id_from(donor),
        test: Box::new(test),
        cons: Box::new(Stmt::Block(block)),
        alt: None,
    })
}
