use std::hash::BuildHasherDefault;

use ast::*;
use ecma_visit::{Visit, VisitWith};
use indexmap::IndexSet;
use rustc_hash::FxHasher;
use swc_atoms::JsWord;

pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// The hoisted declaration set of one function (or script) scope: `var`
/// declarators, function-declaration names and catch parameters, in source
/// order. Nested functions contribute nothing.
#[derive(Default)]
pub struct AllVarsDeclaredInFunction {
    pub ordered_vars: FxIndexSet<JsWord>,
}

/// Parameters plus everything hoisted out of the body.
pub fn find_vars_declared_in_fn(function: &Function) -> AllVarsDeclaredInFunction {
    let mut v = DeclFinder::default();
    for param in &function.params {
        v.record_var(&param.sym);
    }
    function.body.visit_with(&mut v);
    v.vars
}

pub fn find_vars_declared_in_script(script: &Script) -> AllVarsDeclaredInFunction {
    find_vars_declared_in_stmts(&script.body)
}

/// Getter and setter bodies are function scopes without a [Function] node.
pub(crate) fn find_vars_declared_in_stmts(stmts: &[Stmt]) -> AllVarsDeclaredInFunction {
    let mut v = DeclFinder::default();
    for stmt in stmts {
        stmt.visit_with(&mut v);
    }
    v.vars
}

#[derive(Default)]
struct DeclFinder {
    vars: AllVarsDeclaredInFunction,
}

impl DeclFinder {
    fn record_var(&mut self, sym: &JsWord) {
        self.vars.ordered_vars.insert(sym.clone());
    }
}

impl Visit for DeclFinder {
    // Declarations cannot appear inside expressions; this also keeps us out
    // of function expressions, which are separate scopes.
    fn visit_expr(&mut self, _: &Expr) {}

    // Function names are in scope; the function itself is not entered.
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.record_var(&node.ident.sym);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        self.record_var(&node.name.sym);
    }

    // ES5 `var` hoisting puts the catch binding in the function scope.
    fn visit_catch_clause(&mut self, node: &CatchClause) {
        self.record_var(&node.param.sym);
        node.body.visit_with(self);
    }
}
