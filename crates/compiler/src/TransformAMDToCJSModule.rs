use ast::*;
use ecma_visit::{Visit, VisitMut, VisitMutWith, VisitWith};
use global_common::SourceMap;
use swc_atoms::JsWord;

use crate::diagnostics::{DiagnosticType, ErrorReporter, JsError};
use crate::find_vars::{
    find_vars_declared_in_fn, find_vars_declared_in_script, find_vars_declared_in_stmts,
    FxIndexSet,
};
use crate::ir;

pub static UNSUPPORTED_DEFINE_SIGNATURE: DiagnosticType = DiagnosticType::error(
    "UNSUPPORTED_DEFINE_SIGNATURE",
    "Only define(function() ...), define(OBJECT_LITERAL) and define(['dep', 'dep1'], \
     function(d0, d2, [exports, module]) ...) forms are currently supported.",
);

pub static NON_TOP_LEVEL_STATEMENT_DEFINE: DiagnosticType = DiagnosticType::error(
    "NON_TOP_LEVEL_STATEMENT_DEFINE",
    "The define function must be called as a top level statement.",
);

pub static REQUIREJS_PLUGINS_NOT_SUPPORTED: DiagnosticType = DiagnosticType::warning(
    "REQUIREJS_PLUGINS_NOT_SUPPORTED",
    "Plugins in define requirements are not supported: {0}",
);

const VAR_RENAME_SUFFIX: &str = "__alias";

/// Rewrites AMD modules (https://github.com/amdjs/amdjs-api/wiki/AMD) to
/// Common JS modules, as a precursor to namespacing them. `define` calls
/// must appear as top level statements; their dependency lists become
/// `var dep = require("dep");` bindings and the factory body is inlined into
/// the script, with `return x` turned into `module.exports = x`.
///
/// Returns whether any code changed.
pub fn process(
    program: &mut Program,
    program_data: &mut ProgramData,
    cm: &SourceMap,
    reporter: &mut dyn ErrorReporter,
) -> bool {
    let mut pass = TransformAmdModules {
        program_data,
        cm,
        reporter,
        rename_index: 0,
        changed: false,
    };
    for script in &mut program.scripts {
        pass.process_script(script);
    }
    pass.changed
}

/// The modules "exports", "require" and "module" are virtual in terms of
/// existing implicitly in CJS.
fn is_virtual_module_name(name: Option<&str>) -> bool {
    matches!(name, Some("exports") | Some("require") | Some("module"))
}

fn as_define_call(stmt: &Stmt) -> Option<&CallExpr> {
    if let Stmt::Expr(expr_stmt) = stmt {
        if let Expr::Call(call) = &*expr_stmt.expr {
            if let Expr::Ident(callee) = &*call.callee {
                if &*callee.sym == "define" {
                    return Some(call);
                }
            }
        }
    }
    None
}

struct TransformAmdModules<'a> {
    program_data: &'a mut ProgramData,
    cm: &'a SourceMap,
    reporter: &'a mut dyn ErrorReporter,
    /// Pass-wide counter keeping invented alias names fresh.
    rename_index: usize,
    changed: bool,
}

enum DefineShape {
    ObjectLit,
    Factory,
}

impl TransformAmdModules<'_> {
    fn process_script(&mut self, script: &mut Script) {
        let source_name = self.source_name_of(script.node_id);

        // `define` calls anywhere but a top level statement position are
        // diagnosed up front and never rewritten. Locally bound `define`s
        // are somebody else's function and are ignored outright.
        let mut finder = MisplacedDefineFinder::default();
        for stmt in &script.body {
            match as_define_call(stmt) {
                Some(call) => call.args.visit_with(&mut finder),
                None => stmt.visit_with(&mut finder),
            }
        }
        for node_id in finder.misplaced {
            self.report(&source_name, node_id, &NON_TOP_LEVEL_STATEMENT_DEFINE, &[]);
        }

        let mut globals = find_vars_declared_in_script(script).ordered_vars;
        let mut front: Vec<Stmt> = Vec::new();
        let mut i = 0;
        while i < script.body.len() {
            if as_define_call(&script.body[i]).is_none() {
                i += 1;
                continue;
            }
            let stmt = script.body.remove(i);
            match self.rewrite_define(stmt, &mut globals, &mut front, &source_name) {
                Ok(body) => {
                    let inlined = body.len();
                    script.body.splice(i..i, body);
                    // The inlined statements are final; do not rescan them.
                    i += inlined;
                    self.changed = true;
                }
                Err(stmt) => {
                    script.body.insert(i, stmt);
                    i += 1;
                }
            }
        }
        script.body.splice(0..0, front);
    }

    /// Rewrites one top level `define(...)` statement, returning the
    /// statements that replace it in place. The synthesized `var` bindings
    /// go through `front` instead, since dependency establishment may be
    /// reordered to the top of the script. On an unsupported signature the
    /// original statement is handed back untouched.
    fn rewrite_define(
        &mut self,
        stmt: Stmt,
        globals: &mut FxIndexSet<JsWord>,
        front: &mut Vec<Stmt>,
        source_name: &str,
    ) -> Result<Vec<Stmt>, Stmt> {
        let call = match &stmt {
            Stmt::Expr(expr_stmt) => match &*expr_stmt.expr {
                Expr::Call(call) => call,
                _ => unreachable!("checked by as_define_call"),
            },
            _ => unreachable!("checked by as_define_call"),
        };
        let call_id = call.node_id;

        let shape = match call.args.len() {
            1 => match &call.args[0] {
                Expr::Object(_) => Some(DefineShape::ObjectLit),
                Expr::Fn(_) => Some(DefineShape::Factory),
                _ => None,
            },
            2 => {
                let deps_ok = match &call.args[0] {
                    Expr::Array(arr) => arr
                        .elems
                        .iter()
                        .all(|e| matches!(e.as_deref(), Some(Expr::Lit(Lit::Str(_))))),
                    _ => false,
                };
                let factory_ok = matches!(&call.args[1], Expr::Fn(_));
                if deps_ok && factory_ok {
                    Some(DefineShape::Factory)
                } else {
                    None
                }
            }
            _ => None,
        };
        let shape = match shape {
            Some(shape) => shape,
            None => {
                self.report(source_name, call_id, &UNSUPPORTED_DEFINE_SIGNATURE, &[]);
                return Err(stmt);
            }
        };

        let expr_stmt = match stmt {
            Stmt::Expr(expr_stmt) => expr_stmt,
            _ => unreachable!(),
        };
        let call = match *expr_stmt.expr {
            Expr::Call(call) => call,
            _ => unreachable!(),
        };
        let mut args = call.args;

        match shape {
            // define({...}) assigns the object to exports and we're done.
            DefineShape::ObjectLit => {
                let obj = args.pop().unwrap();
                let donor = obj.node_id();
                let exports = ir::name_expr(self.program_data, donor, "exports".into());
                let assign = ir::assign(self.program_data, donor, exports, obj);
                Ok(vec![ir::expr_stmt(self.program_data, donor, assign)])
            }
            DefineShape::Factory => {
                let (deps, factory) = if args.len() == 2 {
                    let factory = args.pop().unwrap();
                    let deps = match args.pop().unwrap() {
                        Expr::Array(arr) => arr
                            .elems
                            .into_iter()
                            .map(|e| match *e.unwrap() {
                                Expr::Lit(Lit::Str(s)) => (s.value, s.node_id),
                                _ => unreachable!("checked above"),
                            })
                            .collect(),
                        _ => unreachable!("checked above"),
                    };
                    (deps, factory)
                } else {
                    (Vec::new(), args.pop().unwrap())
                };
                let mut function = match factory {
                    Expr::Fn(f) => f.function,
                    _ => unreachable!("checked above"),
                };

                let pairs = deps.len().max(function.params.len());
                for k in 0..pairs {
                    self.handle_require(
                        &mut function,
                        k,
                        deps.get(k).cloned(),
                        globals,
                        front,
                        source_name,
                    );
                }

                rewrite_returns(self.program_data, &mut function.body);
                Ok(function.body)
            }
        }
    }

    /// One (parameter, dependency) pair: emits the `var alias = require(...)`
    /// binding, a bare `require(...)` for an unnamed dependency, or a bare
    /// `var alias;` for a parameter with no dependency left.
    fn handle_require(
        &mut self,
        function: &mut Function,
        k: usize,
        dep: Option<(JsWord, NodeId)>,
        globals: &mut FxIndexSet<JsWord>,
        front: &mut Vec<Stmt>,
        source_name: &str,
    ) {
        let mut module_name = None;
        let mut dep_donor = None;
        if let Some((dep_sym, dep_id)) = dep {
            module_name = self.handle_plugins(source_name, &dep_sym, dep_id);
            dep_donor = Some(dep_id);
        }

        // exports, require and module are implicit in CJS.
        if is_virtual_module_name(module_name.as_deref()) {
            return;
        }

        let mut alias = function
            .params
            .get(k)
            .map(|p| (p.sym.clone(), p.node_id));

        // The binding lands at script scope; dodge anything already
        // declared there, including bindings this pass just made.
        let collides = alias
            .as_ref()
            .map_or(false, |(sym, _)| globals.contains(sym));
        if collides {
            let (alias_sym, alias_id) = alias.take().unwrap();
            let fresh = loop {
                let renamed: JsWord =
                    format!("{}{}{}", alias_sym, VAR_RENAME_SUFFIX, self.rename_index).into();
                if !globals.contains(&renamed) {
                    break renamed;
                }
                self.rename_index += 1;
            };
            let mut renamer = RenameVarsCallback {
                from: alias_sym,
                to: fresh.clone(),
            };
            function.visit_mut_with(&mut renamer);
            alias = Some((fresh, alias_id));
        }

        let stmt = match (module_name, alias) {
            (Some(module_name), Some((alias_sym, alias_id))) => {
                let arg = ir::string_expr(self.program_data, alias_id, module_name);
                let require = ir::free_call(self.program_data, alias_id, "require".into(), vec![arg]);
                globals.insert(alias_sym.clone());
                ir::var_stmt(self.program_data, alias_id, alias_sym, Some(require))
            }
            (Some(module_name), None) => {
                // No parameter to bind to; the module is still loaded for
                // its side effects.
                let donor = dep_donor.unwrap();
                let arg = ir::string_expr(self.program_data, donor, module_name);
                let require = ir::free_call(self.program_data, donor, "require".into(), vec![arg]);
                ir::expr_stmt(self.program_data, donor, require)
            }
            (None, Some((alias_sym, alias_id))) => {
                if is_virtual_module_name(Some(&*alias_sym)) {
                    return;
                }
                globals.insert(alias_sym.clone());
                ir::var_stmt(self.program_data, alias_id, alias_sym, None)
            }
            (None, None) => return,
        };
        front.insert(0, stmt);
    }

    /// Dependency strings with a `!` use a requirejs plugin we cannot load.
    /// The `cond?real` conditional-dependency form is salvaged by taking the
    /// branch after `?`; everything else drops the dependency.
    fn handle_plugins(
        &mut self,
        source_name: &str,
        module_name: &str,
        dep_node: NodeId,
    ) -> Option<JsWord> {
        if !module_name.contains('!') {
            return Some(module_name.into());
        }
        self.report(
            source_name,
            dep_node,
            &REQUIREJS_PLUGINS_NOT_SUPPORTED,
            &[module_name],
        );
        match module_name.find('?') {
            Some(q) if q > 0 => {
                if module_name.contains(':') {
                    None
                } else {
                    self.handle_plugins(source_name, &module_name[q + 1..], dep_node)
                }
            }
            _ => None,
        }
    }

    fn source_name_of(&self, node: NodeId) -> String {
        let span = self.program_data.get_span(node);
        self.cm
            .span_to_filename(span)
            .map(|f| f.to_string())
            .unwrap_or_default()
    }

    fn report(
        &mut self,
        source_name: &str,
        node: NodeId,
        diagnostic: &'static DiagnosticType,
        args: &[&str],
    ) {
        let span = self.program_data.get_span(node);
        self.reporter
            .report(JsError::make(source_name, span, diagnostic, args));
    }
}

/// Statement-only walk over the factory body replacing `return x;` with
/// `module.exports = x;`. Does not descend into nested functions; a bare
/// `return;` is left alone.
fn rewrite_returns(program_data: &mut ProgramData, stmts: &mut Vec<Stmt>) {
    for stmt in stmts {
        rewrite_return_in_stmt(program_data, stmt);
    }
}

fn rewrite_return_in_stmt(program_data: &mut ProgramData, stmt: &mut Stmt) {
    match stmt {
        Stmt::Return(ret) => {
            if let Some(arg) = ret.arg.take() {
                let donor = ret.node_id;
                let module = ir::name_expr(program_data, donor, "module".into());
                let target = ir::getprop(program_data, donor, module, "exports".into());
                let assign = ir::assign(program_data, donor, target, *arg);
                *stmt = ir::expr_stmt(program_data, donor, assign);
            }
        }
        Stmt::Block(block) => rewrite_returns(program_data, &mut block.stmts),
        Stmt::If(stmt) => {
            rewrite_return_in_stmt(program_data, &mut stmt.cons);
            if let Some(alt) = &mut stmt.alt {
                rewrite_return_in_stmt(program_data, alt);
            }
        }
        Stmt::Labeled(stmt) => rewrite_return_in_stmt(program_data, &mut stmt.body),
        Stmt::While(stmt) => rewrite_return_in_stmt(program_data, &mut stmt.body),
        Stmt::DoWhile(stmt) => rewrite_return_in_stmt(program_data, &mut stmt.body),
        Stmt::For(stmt) => rewrite_return_in_stmt(program_data, &mut stmt.body),
        Stmt::ForIn(stmt) => rewrite_return_in_stmt(program_data, &mut stmt.body),
        Stmt::Switch(stmt) => {
            for case in &mut stmt.cases {
                rewrite_returns(program_data, &mut case.cons);
            }
        }
        Stmt::Try(stmt) => {
            rewrite_returns(program_data, &mut stmt.block.stmts);
            if let Some(handler) = &mut stmt.handler {
                rewrite_returns(program_data, &mut handler.body.stmts);
            }
            if let Some(finalizer) = &mut stmt.finalizer {
                rewrite_returns(program_data, &mut finalizer.stmts);
            }
        }
        _ => {}
    }
}

/// Finds calls to a global (or unbound) `define` that are not top level
/// statements. Top level `define` statements are not walked into here
/// except for their arguments.
#[derive(Default)]
struct MisplacedDefineFinder {
    scopes: Vec<FxIndexSet<JsWord>>,
    misplaced: Vec<NodeId>,
}

impl MisplacedDefineFinder {
    fn define_is_local(&self) -> bool {
        let define = JsWord::from("define");
        self.scopes.iter().any(|scope| scope.contains(&define))
    }
}

impl Visit for MisplacedDefineFinder {
    fn visit_call_expr(&mut self, n: &CallExpr) {
        n.visit_children_with(self);
        if let Expr::Ident(callee) = &*n.callee {
            if &*callee.sym == "define" && !self.define_is_local() {
                self.misplaced.push(n.node_id);
            }
        }
    }

    fn visit_fn_decl(&mut self, n: &FnDecl) {
        self.scopes
            .push(find_vars_declared_in_fn(&n.function).ordered_vars);
        n.function.visit_with(self);
        self.scopes.pop();
    }

    fn visit_fn_expr(&mut self, n: &FnExpr) {
        let mut scope = find_vars_declared_in_fn(&n.function).ordered_vars;
        if let Some(ident) = &n.ident {
            scope.insert(ident.sym.clone());
        }
        self.scopes.push(scope);
        n.function.visit_with(self);
        self.scopes.pop();
    }

    fn visit_getter_prop(&mut self, n: &GetterProp) {
        self.scopes
            .push(find_vars_declared_in_stmts(&n.body).ordered_vars);
        n.body.visit_with(self);
        self.scopes.pop();
    }

    fn visit_setter_prop(&mut self, n: &SetterProp) {
        let mut scope = find_vars_declared_in_stmts(&n.body).ordered_vars;
        scope.insert(n.param.sym.clone());
        self.scopes.push(scope);
        n.body.visit_with(self);
        self.scopes.pop();
    }
}

/// Renames every reference to one name inside the factory. AMD factories do
/// not redeclare their own parameters, so no scope tracking is needed;
/// property names are not references and are skipped.
struct RenameVarsCallback {
    from: JsWord,
    to: JsWord,
}

impl VisitMut for RenameVarsCallback {
    fn visit_mut_ident(&mut self, n: &mut Ident) {
        if n.sym == self.from {
            n.sym = self.to.clone();
        }
    }

    fn visit_mut_member_expr(&mut self, n: &mut MemberExpr) {
        n.obj.visit_mut_with(self);
        if n.computed {
            n.prop.visit_mut_with(self);
        }
    }

    fn visit_mut_prop_name(&mut self, _: &mut PropName) {}

    fn visit_mut_labeled_stmt(&mut self, n: &mut LabeledStmt) {
        n.body.visit_mut_with(self);
    }

    fn visit_mut_break_stmt(&mut self, _: &mut BreakStmt) {}

    fn visit_mut_continue_stmt(&mut self, _: &mut ContinueStmt) {}
}

#[cfg(test)]
mod tests {
    use crate::testing::{assert_synthesized_spans, run_transform, test_transform_with_name};

    fn test_transform(input: &str, expected: &str) {
        test_transform_with_name(
            "test.js",
            |program, program_data, cm, reporter| {
                super::process(program, program_data, cm, reporter);
            },
            input,
            expected,
            &[],
        );
    }

    fn test_transform_diag(input: &str, expected: &str, diagnostics: &[&str]) {
        test_transform_with_name(
            "test.js",
            |program, program_data, cm, reporter| {
                super::process(program, program_data, cm, reporter);
            },
            input,
            expected,
            diagnostics,
        );
    }

    #[test]
    fn test_define() {
        test_transform(
            "define(['foo', 'bar'], function(foo, bar) { foo(bar); bar+1; })",
            "var bar=require(\"bar\");var foo=require(\"foo\");foo(bar);bar+1;",
        );
        test_transform(
            "define(['foo', 'bar'], function(foo, bar, baz) { foo(bar); bar+1; })",
            "var baz;var bar=require(\"bar\");var foo=require(\"foo\");foo(bar);bar+1;",
        );
        test_transform(
            "define(['foo', 'bar'], function(foo, bar) { return { test: 1 } })",
            "var bar=require(\"bar\");var foo=require(\"foo\");module.exports={test:1};",
        );
        test_transform(
            "define(['foo', 'bar'], function(foo, bar, exports) { return { test: 1 } })",
            "var bar=require(\"bar\");var foo=require(\"foo\");module.exports={test:1};",
        );
        test_transform(
            "define(['foo', 'bar'], function(foo, bar, exports, module) { return { test: 1 } })",
            "var bar=require(\"bar\");var foo=require(\"foo\");module.exports={test:1};",
        );
        test_transform(
            "define(['foo', 'bar'], function(foo, bar, exports, module, baz) { return { test: 1 } })",
            "var baz;var bar=require(\"bar\");var foo=require(\"foo\");module.exports={test:1};",
        );
    }

    #[test]
    fn test_define_only_function() {
        test_transform(
            "define(function() { return { test: 1 } })",
            "module.exports={test:1};",
        );
        test_transform(
            "define(function(exports, module) { return { test: 1 } })",
            "module.exports={test:1};",
        );
    }

    #[test]
    fn test_virtual_deps_dropped() {
        test_transform(
            "define(['require', 'exports', 'module', 'foo'], \
             function(require, exports, module, foo) { foo(); })",
            "var foo=require(\"foo\");foo();",
        );
    }

    #[test]
    fn test_object_lit() {
        test_transform("define({foo: 'bar'})", "exports={foo: 'bar'};");
    }

    #[test]
    fn test_ignored_forms() {
        test_transform_diag(
            "var x = define({foo: 'bar'})",
            "var x = define({foo: 'bar'})",
            &["NON_TOP_LEVEL_STATEMENT_DEFINE"],
        );
        test_transform_diag(
            "function f() { define([], function() {}); }",
            "function f() { define([], function() {}); }",
            &["NON_TOP_LEVEL_STATEMENT_DEFINE"],
        );
    }

    #[test]
    fn test_local_define_ignored() {
        // A define bound in a function scope is not the AMD loader.
        test_transform(
            "function f(define) { define([], function() {}); }",
            "function f(define) { define([], function() {}); }",
        );
        test_transform(
            "function f() { var define = function() {}; define([], function() {}); }",
            "function f() { var define = function() {}; define([], function() {}); }",
        );
    }

    #[test]
    fn test_script_level_define_binding_is_global() {
        test_transform(
            "var define = function() {}; define(['a'], function(a) { a(); })",
            "var a = require(\"a\"); var define = function() {}; a();",
        );
    }

    #[test]
    fn test_unsupported_signatures() {
        test_transform_diag("define()", "define()", &["UNSUPPORTED_DEFINE_SIGNATURE"]);
        test_transform_diag("define(1)", "define(1)", &["UNSUPPORTED_DEFINE_SIGNATURE"]);
        test_transform_diag(
            "define('a', function() {})",
            "define('a', function() {})",
            &["UNSUPPORTED_DEFINE_SIGNATURE"],
        );
        test_transform_diag(
            "define(['a'], {})",
            "define(['a'], {})",
            &["UNSUPPORTED_DEFINE_SIGNATURE"],
        );
        test_transform_diag(
            "define([a], function(a) {})",
            "define([a], function(a) {})",
            &["UNSUPPORTED_DEFINE_SIGNATURE"],
        );
        test_transform_diag(
            "define(['a'], function(a) {}, 1)",
            "define(['a'], function(a) {}, 1)",
            &["UNSUPPORTED_DEFINE_SIGNATURE"],
        );
    }

    #[test]
    fn test_plugins() {
        test_transform_diag(
            "define(['css!foo.css'], function(css) { css; })",
            "var css; css;",
            &["REQUIREJS_PLUGINS_NOT_SUPPORTED"],
        );
        test_transform_diag(
            "define(['has!feature?real'], function(mod) { mod(); })",
            "var mod = require(\"real\"); mod();",
            &["REQUIREJS_PLUGINS_NOT_SUPPORTED"],
        );
        test_transform_diag(
            "define(['has!feature?yes:no'], function(mod) { mod; })",
            "var mod; mod;",
            &["REQUIREJS_PLUGINS_NOT_SUPPORTED"],
        );
    }

    #[test]
    fn test_alias_collision() {
        test_transform(
            "var foo = 42; define(['foo'], function(foo) { foo.bar(); })",
            "var foo__alias0 = require(\"foo\"); var foo = 42; foo__alias0.bar();",
        );
        // Property names keep their spelling; only references are renamed.
        test_transform(
            "var foo = 42; define(['foo'], function(foo) { foo.foo({foo: foo}); })",
            "var foo__alias0 = require(\"foo\"); var foo = 42; \
             foo__alias0.foo({foo: foo__alias0});",
        );
    }

    #[test]
    fn test_rename_injectivity() {
        // Two factories with the same parameter name must not produce two
        // bindings with the same identifier.
        test_transform(
            "define(['a'], function(foo) { foo.x(); });\
             define(['b'], function(foo) { foo.y(); });",
            "var foo__alias0 = require(\"b\"); var foo = require(\"a\"); \
             foo.x(); foo__alias0.y();",
        );
    }

    #[test]
    fn test_side_effect_require() {
        test_transform(
            "define(['a', 'b'], function(a) { a(); })",
            "require(\"b\"); var a = require(\"a\"); a();",
        );
    }

    #[test]
    fn test_returns_in_control_flow() {
        test_transform(
            "define(function() { if (x) { return 1; } return; })",
            "if (x) { module.exports = 1; } return;",
        );
        test_transform(
            "define(function() { var f = function() { return 1; }; return 2; })",
            "var f = function() { return 1; }; module.exports = 2;",
        );
        test_transform(
            "define(function() { function g() { return 1; } return 2; })",
            "function g() { return 1; } module.exports = 2;",
        );
    }

    #[test]
    fn test_nested_define_in_factory() {
        // The inner define was visited (and diagnosed) before the splice;
        // it is not rewritten on this run.
        test_transform_diag(
            "define(function() { define(function() {}); })",
            "define(function() {});",
            &["NON_TOP_LEVEL_STATEMENT_DEFINE"],
        );
    }

    #[test]
    fn test_idempotent_on_clean_output() {
        test_transform_with_name(
            "test.js",
            |program, program_data, cm, reporter| {
                super::process(program, program_data, cm, reporter);
                super::process(program, program_data, cm, reporter);
            },
            "define(['foo', 'bar'], function(foo, bar) { foo(bar); bar+1; })",
            "var bar=require(\"bar\");var foo=require(\"foo\");foo(bar);bar+1;",
            &[],
        );
    }

    #[test]
    fn test_synthesized_nodes_carry_source_info() {
        let out = run_transform(
            "test.js",
            |program, program_data, cm, reporter| {
                super::process(program, program_data, cm, reporter);
            },
            "define(['foo', 'bar'], function(foo, bar, baz) { return { test: 1 } })",
        );
        assert!(out.reporter.diagnostics.is_empty());
        assert_synthesized_spans(&out);
    }
}
