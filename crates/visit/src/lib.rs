//! Read-only ([Visit]) and mutating ([VisitMut]) traversals over the AST.
//!
//! Every `visit_*` method defaults to visiting the node's children, so a
//! visitor overrides only the node kinds it cares about. Children are visited
//! in source order; overriding a method and not calling
//! `visit_children_with`/`visit_mut_children_with` prunes the subtree.

use ast::*;

macro_rules! visit_method {
    ($name:ident, $ty:ty) => {
        fn $name(&mut self, n: &$ty) {
            n.visit_children_with(self)
        }
    };
}

pub trait Visit: Sized {
    visit_method!(visit_program, Program);
    visit_method!(visit_script, Script);
    visit_method!(visit_stmt, Stmt);
    visit_method!(visit_block_stmt, BlockStmt);
    visit_method!(visit_empty_stmt, EmptyStmt);
    visit_method!(visit_debugger_stmt, DebuggerStmt);
    visit_method!(visit_expr_stmt, ExprStmt);
    visit_method!(visit_if_stmt, IfStmt);
    visit_method!(visit_return_stmt, ReturnStmt);
    visit_method!(visit_labeled_stmt, LabeledStmt);
    visit_method!(visit_break_stmt, BreakStmt);
    visit_method!(visit_continue_stmt, ContinueStmt);
    visit_method!(visit_while_stmt, WhileStmt);
    visit_method!(visit_do_while_stmt, DoWhileStmt);
    visit_method!(visit_for_stmt, ForStmt);
    visit_method!(visit_for_in_stmt, ForInStmt);
    visit_method!(visit_var_decl_or_expr, VarDeclOrExpr);
    visit_method!(visit_switch_stmt, SwitchStmt);
    visit_method!(visit_switch_case, SwitchCase);
    visit_method!(visit_throw_stmt, ThrowStmt);
    visit_method!(visit_try_stmt, TryStmt);
    visit_method!(visit_catch_clause, CatchClause);
    visit_method!(visit_decl, Decl);
    visit_method!(visit_fn_decl, FnDecl);
    visit_method!(visit_var_decl, VarDecl);
    visit_method!(visit_var_declarator, VarDeclarator);
    visit_method!(visit_function, Function);
    visit_method!(visit_expr, Expr);
    visit_method!(visit_this_expr, ThisExpr);
    visit_method!(visit_array_lit, ArrayLit);
    visit_method!(visit_object_lit, ObjectLit);
    visit_method!(visit_prop, Prop);
    visit_method!(visit_key_value_prop, KeyValueProp);
    visit_method!(visit_getter_prop, GetterProp);
    visit_method!(visit_setter_prop, SetterProp);
    visit_method!(visit_prop_name, PropName);
    visit_method!(visit_fn_expr, FnExpr);
    visit_method!(visit_unary_expr, UnaryExpr);
    visit_method!(visit_update_expr, UpdateExpr);
    visit_method!(visit_bin_expr, BinExpr);
    visit_method!(visit_assign_expr, AssignExpr);
    visit_method!(visit_member_expr, MemberExpr);
    visit_method!(visit_cond_expr, CondExpr);
    visit_method!(visit_call_expr, CallExpr);
    visit_method!(visit_new_expr, NewExpr);
    visit_method!(visit_seq_expr, SeqExpr);
    visit_method!(visit_ident, Ident);
    visit_method!(visit_lit, Lit);
    visit_method!(visit_str, Str);
    visit_method!(visit_bool, Bool);
    visit_method!(visit_null, Null);
    visit_method!(visit_number, Number);
    visit_method!(visit_regex, Regex);

    fn visit_node_id(&mut self, _n: NodeId) {}
}

pub trait VisitWith<V: Visit> {
    fn visit_with(&self, v: &mut V);
    fn visit_children_with(&self, v: &mut V);
}

impl<V: Visit, T: VisitWith<V>> VisitWith<V> for Box<T> {
    fn visit_with(&self, v: &mut V) {
        self.as_ref().visit_with(v)
    }
    fn visit_children_with(&self, v: &mut V) {
        self.as_ref().visit_children_with(v)
    }
}

impl<V: Visit, T: VisitWith<V>> VisitWith<V> for Option<T> {
    fn visit_with(&self, v: &mut V) {
        if let Some(n) = self {
            n.visit_with(v)
        }
    }
    fn visit_children_with(&self, v: &mut V) {
        if let Some(n) = self {
            n.visit_children_with(v)
        }
    }
}

impl<V: Visit, T: VisitWith<V>> VisitWith<V> for Vec<T> {
    fn visit_with(&self, v: &mut V) {
        for n in self {
            n.visit_with(v)
        }
    }
    fn visit_children_with(&self, v: &mut V) {
        for n in self {
            n.visit_children_with(v)
        }
    }
}

macro_rules! impl_visit_with {
    ($ty:ty, $method:ident, |$n:ident, $v:ident| $children:block) => {
        impl<V: Visit> VisitWith<V> for $ty {
            fn visit_with(&self, v: &mut V) {
                v.$method(self)
            }
            fn visit_children_with(&self, $v: &mut V) {
                let $n = self;
                $children
            }
        }
    };
}

impl_visit_with!(Program, visit_program, |n, v| {
    v.visit_node_id(n.node_id);
    n.scripts.visit_with(v);
});
impl_visit_with!(Script, visit_script, |n, v| {
    v.visit_node_id(n.node_id);
    n.body.visit_with(v);
});
impl_visit_with!(Stmt, visit_stmt, |n, v| {
    match n {
        Stmt::Block(s) => s.visit_with(v),
        Stmt::Empty(s) => s.visit_with(v),
        Stmt::Debugger(s) => s.visit_with(v),
        Stmt::Expr(s) => s.visit_with(v),
        Stmt::If(s) => s.visit_with(v),
        Stmt::Return(s) => s.visit_with(v),
        Stmt::Labeled(s) => s.visit_with(v),
        Stmt::Break(s) => s.visit_with(v),
        Stmt::Continue(s) => s.visit_with(v),
        Stmt::While(s) => s.visit_with(v),
        Stmt::DoWhile(s) => s.visit_with(v),
        Stmt::For(s) => s.visit_with(v),
        Stmt::ForIn(s) => s.visit_with(v),
        Stmt::Switch(s) => s.visit_with(v),
        Stmt::Throw(s) => s.visit_with(v),
        Stmt::Try(s) => s.visit_with(v),
        Stmt::Decl(s) => s.visit_with(v),
    }
});
impl_visit_with!(BlockStmt, visit_block_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.stmts.visit_with(v);
});
impl_visit_with!(EmptyStmt, visit_empty_stmt, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(DebuggerStmt, visit_debugger_stmt, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(ExprStmt, visit_expr_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.expr.visit_with(v);
});
impl_visit_with!(IfStmt, visit_if_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.test.visit_with(v);
    n.cons.visit_with(v);
    n.alt.visit_with(v);
});
impl_visit_with!(ReturnStmt, visit_return_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.arg.visit_with(v);
});
impl_visit_with!(LabeledStmt, visit_labeled_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.label.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(BreakStmt, visit_break_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.label.visit_with(v);
});
impl_visit_with!(ContinueStmt, visit_continue_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.label.visit_with(v);
});
impl_visit_with!(WhileStmt, visit_while_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.test.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(DoWhileStmt, visit_do_while_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.body.visit_with(v);
    n.test.visit_with(v);
});
impl_visit_with!(ForStmt, visit_for_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.init.visit_with(v);
    n.test.visit_with(v);
    n.update.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(ForInStmt, visit_for_in_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.left.visit_with(v);
    n.right.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(VarDeclOrExpr, visit_var_decl_or_expr, |n, v| {
    match n {
        VarDeclOrExpr::VarDecl(d) => d.visit_with(v),
        VarDeclOrExpr::Expr(e) => e.visit_with(v),
    }
});
impl_visit_with!(SwitchStmt, visit_switch_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.discriminant.visit_with(v);
    n.cases.visit_with(v);
});
impl_visit_with!(SwitchCase, visit_switch_case, |n, v| {
    v.visit_node_id(n.node_id);
    n.test.visit_with(v);
    n.cons.visit_with(v);
});
impl_visit_with!(ThrowStmt, visit_throw_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.arg.visit_with(v);
});
impl_visit_with!(TryStmt, visit_try_stmt, |n, v| {
    v.visit_node_id(n.node_id);
    n.block.visit_with(v);
    n.handler.visit_with(v);
    n.finalizer.visit_with(v);
});
impl_visit_with!(CatchClause, visit_catch_clause, |n, v| {
    v.visit_node_id(n.node_id);
    n.param.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(Decl, visit_decl, |n, v| {
    match n {
        Decl::Fn(d) => d.visit_with(v),
        Decl::Var(d) => d.visit_with(v),
    }
});
impl_visit_with!(FnDecl, visit_fn_decl, |n, v| {
    v.visit_node_id(n.node_id);
    n.ident.visit_with(v);
    n.function.visit_with(v);
});
impl_visit_with!(VarDecl, visit_var_decl, |n, v| {
    v.visit_node_id(n.node_id);
    n.decls.visit_with(v);
});
impl_visit_with!(VarDeclarator, visit_var_declarator, |n, v| {
    v.visit_node_id(n.node_id);
    n.name.visit_with(v);
    n.init.visit_with(v);
});
impl_visit_with!(Function, visit_function, |n, v| {
    v.visit_node_id(n.node_id);
    n.params.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(Expr, visit_expr, |n, v| {
    match n {
        Expr::This(e) => e.visit_with(v),
        Expr::Array(e) => e.visit_with(v),
        Expr::Object(e) => e.visit_with(v),
        Expr::Fn(e) => e.visit_with(v),
        Expr::Unary(e) => e.visit_with(v),
        Expr::Update(e) => e.visit_with(v),
        Expr::Bin(e) => e.visit_with(v),
        Expr::Assign(e) => e.visit_with(v),
        Expr::Member(e) => e.visit_with(v),
        Expr::Cond(e) => e.visit_with(v),
        Expr::Call(e) => e.visit_with(v),
        Expr::New(e) => e.visit_with(v),
        Expr::Seq(e) => e.visit_with(v),
        Expr::Ident(e) => e.visit_with(v),
        Expr::Lit(e) => e.visit_with(v),
    }
});
impl_visit_with!(ThisExpr, visit_this_expr, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(ArrayLit, visit_array_lit, |n, v| {
    v.visit_node_id(n.node_id);
    n.elems.visit_with(v);
});
impl_visit_with!(ObjectLit, visit_object_lit, |n, v| {
    v.visit_node_id(n.node_id);
    n.props.visit_with(v);
});
impl_visit_with!(Prop, visit_prop, |n, v| {
    match n {
        Prop::KeyValue(p) => p.visit_with(v),
        Prop::Getter(p) => p.visit_with(v),
        Prop::Setter(p) => p.visit_with(v),
    }
});
impl_visit_with!(KeyValueProp, visit_key_value_prop, |n, v| {
    v.visit_node_id(n.node_id);
    n.key.visit_with(v);
    n.value.visit_with(v);
});
impl_visit_with!(GetterProp, visit_getter_prop, |n, v| {
    v.visit_node_id(n.node_id);
    n.key.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(SetterProp, visit_setter_prop, |n, v| {
    v.visit_node_id(n.node_id);
    n.key.visit_with(v);
    n.param.visit_with(v);
    n.body.visit_with(v);
});
impl_visit_with!(PropName, visit_prop_name, |n, v| {
    match n {
        PropName::Ident(p) => p.visit_with(v),
        PropName::Str(p) => p.visit_with(v),
        PropName::Num(p) => p.visit_with(v),
    }
});
impl_visit_with!(FnExpr, visit_fn_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.ident.visit_with(v);
    n.function.visit_with(v);
});
impl_visit_with!(UnaryExpr, visit_unary_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.arg.visit_with(v);
});
impl_visit_with!(UpdateExpr, visit_update_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.arg.visit_with(v);
});
impl_visit_with!(BinExpr, visit_bin_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.left.visit_with(v);
    n.right.visit_with(v);
});
impl_visit_with!(AssignExpr, visit_assign_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.left.visit_with(v);
    n.right.visit_with(v);
});
impl_visit_with!(MemberExpr, visit_member_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.obj.visit_with(v);
    n.prop.visit_with(v);
});
impl_visit_with!(CondExpr, visit_cond_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.test.visit_with(v);
    n.cons.visit_with(v);
    n.alt.visit_with(v);
});
impl_visit_with!(CallExpr, visit_call_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.callee.visit_with(v);
    n.args.visit_with(v);
});
impl_visit_with!(NewExpr, visit_new_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.callee.visit_with(v);
    n.args.visit_with(v);
});
impl_visit_with!(SeqExpr, visit_seq_expr, |n, v| {
    v.visit_node_id(n.node_id);
    n.exprs.visit_with(v);
});
impl_visit_with!(Ident, visit_ident, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(Lit, visit_lit, |n, v| {
    match n {
        Lit::Str(l) => l.visit_with(v),
        Lit::Bool(l) => l.visit_with(v),
        Lit::Null(l) => l.visit_with(v),
        Lit::Num(l) => l.visit_with(v),
        Lit::Regex(l) => l.visit_with(v),
    }
});
impl_visit_with!(Str, visit_str, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(Bool, visit_bool, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(Null, visit_null, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(Number, visit_number, |n, v| {
    v.visit_node_id(n.node_id);
});
impl_visit_with!(Regex, visit_regex, |n, v| {
    v.visit_node_id(n.node_id);
});

mod visit_mut;
pub use visit_mut::{VisitMut, VisitMutWith};
