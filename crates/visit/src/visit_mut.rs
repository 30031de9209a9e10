use ast::*;

macro_rules! visit_mut_method {
    ($name:ident, $ty:ty) => {
        fn $name(&mut self, n: &mut $ty) {
            n.visit_mut_children_with(self)
        }
    };
}

pub trait VisitMut: Sized {
    visit_mut_method!(visit_mut_program, Program);
    visit_mut_method!(visit_mut_script, Script);
    visit_mut_method!(visit_mut_stmt, Stmt);
    visit_mut_method!(visit_mut_block_stmt, BlockStmt);
    visit_mut_method!(visit_mut_empty_stmt, EmptyStmt);
    visit_mut_method!(visit_mut_debugger_stmt, DebuggerStmt);
    visit_mut_method!(visit_mut_expr_stmt, ExprStmt);
    visit_mut_method!(visit_mut_if_stmt, IfStmt);
    visit_mut_method!(visit_mut_return_stmt, ReturnStmt);
    visit_mut_method!(visit_mut_labeled_stmt, LabeledStmt);
    visit_mut_method!(visit_mut_break_stmt, BreakStmt);
    visit_mut_method!(visit_mut_continue_stmt, ContinueStmt);
    visit_mut_method!(visit_mut_while_stmt, WhileStmt);
    visit_mut_method!(visit_mut_do_while_stmt, DoWhileStmt);
    visit_mut_method!(visit_mut_for_stmt, ForStmt);
    visit_mut_method!(visit_mut_for_in_stmt, ForInStmt);
    visit_mut_method!(visit_mut_var_decl_or_expr, VarDeclOrExpr);
    visit_mut_method!(visit_mut_switch_stmt, SwitchStmt);
    visit_mut_method!(visit_mut_switch_case, SwitchCase);
    visit_mut_method!(visit_mut_throw_stmt, ThrowStmt);
    visit_mut_method!(visit_mut_try_stmt, TryStmt);
    visit_mut_method!(visit_mut_catch_clause, CatchClause);
    visit_mut_method!(visit_mut_decl, Decl);
    visit_mut_method!(visit_mut_fn_decl, FnDecl);
    visit_mut_method!(visit_mut_var_decl, VarDecl);
    visit_mut_method!(visit_mut_var_declarator, VarDeclarator);
    visit_mut_method!(visit_mut_function, Function);
    visit_mut_method!(visit_mut_expr, Expr);
    visit_mut_method!(visit_mut_this_expr, ThisExpr);
    visit_mut_method!(visit_mut_array_lit, ArrayLit);
    visit_mut_method!(visit_mut_object_lit, ObjectLit);
    visit_mut_method!(visit_mut_prop, Prop);
    visit_mut_method!(visit_mut_key_value_prop, KeyValueProp);
    visit_mut_method!(visit_mut_getter_prop, GetterProp);
    visit_mut_method!(visit_mut_setter_prop, SetterProp);
    visit_mut_method!(visit_mut_prop_name, PropName);
    visit_mut_method!(visit_mut_fn_expr, FnExpr);
    visit_mut_method!(visit_mut_unary_expr, UnaryExpr);
    visit_mut_method!(visit_mut_update_expr, UpdateExpr);
    visit_mut_method!(visit_mut_bin_expr, BinExpr);
    visit_mut_method!(visit_mut_assign_expr, AssignExpr);
    visit_mut_method!(visit_mut_member_expr, MemberExpr);
    visit_mut_method!(visit_mut_cond_expr, CondExpr);
    visit_mut_method!(visit_mut_call_expr, CallExpr);
    visit_mut_method!(visit_mut_new_expr, NewExpr);
    visit_mut_method!(visit_mut_seq_expr, SeqExpr);
    visit_mut_method!(visit_mut_ident, Ident);
    visit_mut_method!(visit_mut_lit, Lit);
    visit_mut_method!(visit_mut_str, Str);
    visit_mut_method!(visit_mut_bool, Bool);
    visit_mut_method!(visit_mut_null, Null);
    visit_mut_method!(visit_mut_number, Number);
    visit_mut_method!(visit_mut_regex, Regex);

    fn visit_mut_node_id(&mut self, _n: &mut NodeId) {}
}

pub trait VisitMutWith<V: VisitMut> {
    fn visit_mut_with(&mut self, v: &mut V);
    fn visit_mut_children_with(&mut self, v: &mut V);
}

impl<V: VisitMut, T: VisitMutWith<V>> VisitMutWith<V> for Box<T> {
    fn visit_mut_with(&mut self, v: &mut V) {
        self.as_mut().visit_mut_with(v)
    }
    fn visit_mut_children_with(&mut self, v: &mut V) {
        self.as_mut().visit_mut_children_with(v)
    }
}

impl<V: VisitMut, T: VisitMutWith<V>> VisitMutWith<V> for Option<T> {
    fn visit_mut_with(&mut self, v: &mut V) {
        if let Some(n) = self {
            n.visit_mut_with(v)
        }
    }
    fn visit_mut_children_with(&mut self, v: &mut V) {
        if let Some(n) = self {
            n.visit_mut_children_with(v)
        }
    }
}

impl<V: VisitMut, T: VisitMutWith<V>> VisitMutWith<V> for Vec<T> {
    fn visit_mut_with(&mut self, v: &mut V) {
        for n in self {
            n.visit_mut_with(v)
        }
    }
    fn visit_mut_children_with(&mut self, v: &mut V) {
        for n in self {
            n.visit_mut_children_with(v)
        }
    }
}

macro_rules! impl_visit_mut_with {
    ($ty:ty, $method:ident, |$n:ident, $v:ident| $children:block) => {
        impl<V: VisitMut> VisitMutWith<V> for $ty {
            fn visit_mut_with(&mut self, v: &mut V) {
                v.$method(self)
            }
            fn visit_mut_children_with(&mut self, $v: &mut V) {
                let $n = self;
                $children
            }
        }
    };
}

impl_visit_mut_with!(Program, visit_mut_program, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.scripts.visit_mut_with(v);
});
impl_visit_mut_with!(Script, visit_mut_script, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(Stmt, visit_mut_stmt, |n, v| {
    match n {
        Stmt::Block(s) => s.visit_mut_with(v),
        Stmt::Empty(s) => s.visit_mut_with(v),
        Stmt::Debugger(s) => s.visit_mut_with(v),
        Stmt::Expr(s) => s.visit_mut_with(v),
        Stmt::If(s) => s.visit_mut_with(v),
        Stmt::Return(s) => s.visit_mut_with(v),
        Stmt::Labeled(s) => s.visit_mut_with(v),
        Stmt::Break(s) => s.visit_mut_with(v),
        Stmt::Continue(s) => s.visit_mut_with(v),
        Stmt::While(s) => s.visit_mut_with(v),
        Stmt::DoWhile(s) => s.visit_mut_with(v),
        Stmt::For(s) => s.visit_mut_with(v),
        Stmt::ForIn(s) => s.visit_mut_with(v),
        Stmt::Switch(s) => s.visit_mut_with(v),
        Stmt::Throw(s) => s.visit_mut_with(v),
        Stmt::Try(s) => s.visit_mut_with(v),
        Stmt::Decl(s) => s.visit_mut_with(v),
    }
});
impl_visit_mut_with!(BlockStmt, visit_mut_block_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.stmts.visit_mut_with(v);
});
impl_visit_mut_with!(EmptyStmt, visit_mut_empty_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(DebuggerStmt, visit_mut_debugger_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(ExprStmt, visit_mut_expr_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.expr.visit_mut_with(v);
});
impl_visit_mut_with!(IfStmt, visit_mut_if_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.test.visit_mut_with(v);
    n.cons.visit_mut_with(v);
    n.alt.visit_mut_with(v);
});
impl_visit_mut_with!(ReturnStmt, visit_mut_return_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.arg.visit_mut_with(v);
});
impl_visit_mut_with!(LabeledStmt, visit_mut_labeled_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.label.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(BreakStmt, visit_mut_break_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.label.visit_mut_with(v);
});
impl_visit_mut_with!(ContinueStmt, visit_mut_continue_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.label.visit_mut_with(v);
});
impl_visit_mut_with!(WhileStmt, visit_mut_while_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.test.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(DoWhileStmt, visit_mut_do_while_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.body.visit_mut_with(v);
    n.test.visit_mut_with(v);
});
impl_visit_mut_with!(ForStmt, visit_mut_for_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.init.visit_mut_with(v);
    n.test.visit_mut_with(v);
    n.update.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(ForInStmt, visit_mut_for_in_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.left.visit_mut_with(v);
    n.right.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(VarDeclOrExpr, visit_mut_var_decl_or_expr, |n, v| {
    match n {
        VarDeclOrExpr::VarDecl(d) => d.visit_mut_with(v),
        VarDeclOrExpr::Expr(e) => e.visit_mut_with(v),
    }
});
impl_visit_mut_with!(SwitchStmt, visit_mut_switch_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.discriminant.visit_mut_with(v);
    n.cases.visit_mut_with(v);
});
impl_visit_mut_with!(SwitchCase, visit_mut_switch_case, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.test.visit_mut_with(v);
    n.cons.visit_mut_with(v);
});
impl_visit_mut_with!(ThrowStmt, visit_mut_throw_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.arg.visit_mut_with(v);
});
impl_visit_mut_with!(TryStmt, visit_mut_try_stmt, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.block.visit_mut_with(v);
    n.handler.visit_mut_with(v);
    n.finalizer.visit_mut_with(v);
});
impl_visit_mut_with!(CatchClause, visit_mut_catch_clause, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.param.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(Decl, visit_mut_decl, |n, v| {
    match n {
        Decl::Fn(d) => d.visit_mut_with(v),
        Decl::Var(d) => d.visit_mut_with(v),
    }
});
impl_visit_mut_with!(FnDecl, visit_mut_fn_decl, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.ident.visit_mut_with(v);
    n.function.visit_mut_with(v);
});
impl_visit_mut_with!(VarDecl, visit_mut_var_decl, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.decls.visit_mut_with(v);
});
impl_visit_mut_with!(VarDeclarator, visit_mut_var_declarator, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.name.visit_mut_with(v);
    n.init.visit_mut_with(v);
});
impl_visit_mut_with!(Function, visit_mut_function, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.params.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(Expr, visit_mut_expr, |n, v| {
    match n {
        Expr::This(e) => e.visit_mut_with(v),
        Expr::Array(e) => e.visit_mut_with(v),
        Expr::Object(e) => e.visit_mut_with(v),
        Expr::Fn(e) => e.visit_mut_with(v),
        Expr::Unary(e) => e.visit_mut_with(v),
        Expr::Update(e) => e.visit_mut_with(v),
        Expr::Bin(e) => e.visit_mut_with(v),
        Expr::Assign(e) => e.visit_mut_with(v),
        Expr::Member(e) => e.visit_mut_with(v),
        Expr::Cond(e) => e.visit_mut_with(v),
        Expr::Call(e) => e.visit_mut_with(v),
        Expr::New(e) => e.visit_mut_with(v),
        Expr::Seq(e) => e.visit_mut_with(v),
        Expr::Ident(e) => e.visit_mut_with(v),
        Expr::Lit(e) => e.visit_mut_with(v),
    }
});
impl_visit_mut_with!(ThisExpr, visit_mut_this_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(ArrayLit, visit_mut_array_lit, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.elems.visit_mut_with(v);
});
impl_visit_mut_with!(ObjectLit, visit_mut_object_lit, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.props.visit_mut_with(v);
});
impl_visit_mut_with!(Prop, visit_mut_prop, |n, v| {
    match n {
        Prop::KeyValue(p) => p.visit_mut_with(v),
        Prop::Getter(p) => p.visit_mut_with(v),
        Prop::Setter(p) => p.visit_mut_with(v),
    }
});
impl_visit_mut_with!(KeyValueProp, visit_mut_key_value_prop, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.key.visit_mut_with(v);
    n.value.visit_mut_with(v);
});
impl_visit_mut_with!(GetterProp, visit_mut_getter_prop, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.key.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(SetterProp, visit_mut_setter_prop, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.key.visit_mut_with(v);
    n.param.visit_mut_with(v);
    n.body.visit_mut_with(v);
});
impl_visit_mut_with!(PropName, visit_mut_prop_name, |n, v| {
    match n {
        PropName::Ident(p) => p.visit_mut_with(v),
        PropName::Str(p) => p.visit_mut_with(v),
        PropName::Num(p) => p.visit_mut_with(v),
    }
});
impl_visit_mut_with!(FnExpr, visit_mut_fn_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.ident.visit_mut_with(v);
    n.function.visit_mut_with(v);
});
impl_visit_mut_with!(UnaryExpr, visit_mut_unary_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.arg.visit_mut_with(v);
});
impl_visit_mut_with!(UpdateExpr, visit_mut_update_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.arg.visit_mut_with(v);
});
impl_visit_mut_with!(BinExpr, visit_mut_bin_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.left.visit_mut_with(v);
    n.right.visit_mut_with(v);
});
impl_visit_mut_with!(AssignExpr, visit_mut_assign_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.left.visit_mut_with(v);
    n.right.visit_mut_with(v);
});
impl_visit_mut_with!(MemberExpr, visit_mut_member_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.obj.visit_mut_with(v);
    n.prop.visit_mut_with(v);
});
impl_visit_mut_with!(CondExpr, visit_mut_cond_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.test.visit_mut_with(v);
    n.cons.visit_mut_with(v);
    n.alt.visit_mut_with(v);
});
impl_visit_mut_with!(CallExpr, visit_mut_call_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.callee.visit_mut_with(v);
    n.args.visit_mut_with(v);
});
impl_visit_mut_with!(NewExpr, visit_mut_new_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.callee.visit_mut_with(v);
    n.args.visit_mut_with(v);
});
impl_visit_mut_with!(SeqExpr, visit_mut_seq_expr, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
    n.exprs.visit_mut_with(v);
});
impl_visit_mut_with!(Ident, visit_mut_ident, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(Lit, visit_mut_lit, |n, v| {
    match n {
        Lit::Str(l) => l.visit_mut_with(v),
        Lit::Bool(l) => l.visit_mut_with(v),
        Lit::Null(l) => l.visit_mut_with(v),
        Lit::Num(l) => l.visit_mut_with(v),
        Lit::Regex(l) => l.visit_mut_with(v),
    }
});
impl_visit_mut_with!(Str, visit_mut_str, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(Bool, visit_mut_bool, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(Null, visit_mut_null, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(Number, visit_mut_number, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
impl_visit_mut_with!(Regex, visit_mut_regex, |n, v| {
    v.visit_mut_node_id(&mut n.node_id);
});
