use ast::*;
use ecma_visit::{VisitMut, VisitMutWith};
use global_common::SourceMap;
use swc_atoms::JsWord;

use crate::find_vars::{
    find_vars_declared_in_fn, find_vars_declared_in_script, find_vars_declared_in_stmts,
    FxIndexSet,
};
use crate::ir;

pub const DEFAULT_FILENAME_PREFIX: &str = "./";

const MODULE_SLASH: char = '/';

/// Per-input dependency annotations emitted for the build driver when
/// dependency reporting is on.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerInput {
    pub name: String,
    pub provides: Vec<JsWord>,
    pub requires: Vec<JsWord>,
}

/// A single-file module record, one per processed script.
#[derive(Debug, Clone, PartialEq)]
pub struct JsModule {
    pub name: JsWord,
    pub inputs: Vec<String>,
}

/// Rewrites a CommonJS module http://wiki.commonjs.org/wiki/Modules/1.1.1
/// into a form that all the files can be concatenated together: the file
/// becomes one `module$...` object, `require` calls become references to the
/// required module's object, and every file-scope name gets a file-derived
/// suffix so concatenation cannot collide.
pub struct ProcessCommonJsModules {
    filename_prefix: String,
    report_dependencies: bool,
    inputs: Vec<CompilerInput>,
    modules: Vec<JsModule>,
}

/// Turns a filename into a valid JS identifier: `./` stripped, `/` becomes
/// `$`, the `.js` extension dropped and `-` replaced with `_`.
pub fn to_module_name(filename: &str) -> JsWord {
    let filename = filename.strip_prefix("./").unwrap_or(filename);
    let filename = filename.strip_suffix(".js").unwrap_or(filename);
    format!(
        "module${}",
        filename.replace(MODULE_SLASH, "$").replace('-', "_")
    )
    .into()
}

/// Resolves `required` against the file it is required from, then derives
/// the module name. Only `./` and `../` paths are relative; anything else
/// names a module directly.
pub fn to_module_name_relative(required: &str, current: &str) -> JsWord {
    let required = required.strip_suffix(".js").unwrap_or(required);
    let current = current.strip_suffix(".js").unwrap_or(current);

    if required.starts_with("./") || required.starts_with("../") {
        let mut required_parts: Vec<&str> = required.split(MODULE_SLASH).collect();
        let mut current_parts: Vec<&str> = current.split(MODULE_SLASH).collect();
        // Drop the requiring file itself.
        current_parts.pop();
        while let Some(&part) = required_parts.first() {
            match part {
                "." => {
                    required_parts.remove(0);
                }
                ".." => {
                    required_parts.remove(0);
                    current_parts.pop();
                }
                _ => break,
            }
        }
        current_parts.extend(required_parts);
        return to_module_name(&current_parts.join("/"));
    }
    to_module_name(required)
}

impl ProcessCommonJsModules {
    pub fn new(filename_prefix: &str, report_dependencies: bool) -> Self {
        ProcessCommonJsModules {
            filename_prefix: filename_prefix.to_string(),
            report_dependencies,
            inputs: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// Processes each script of the program independently. Returns whether
    /// any code changed (it always does: even an empty script gains the
    /// provide/var prologue and the exports override epilogue).
    pub fn process(
        &mut self,
        program: &mut Program,
        program_data: &mut ProgramData,
        cm: &SourceMap,
    ) -> bool {
        let mut changed = false;
        for script in &mut program.scripts {
            self.process_script(script, program_data, cm);
            changed = true;
        }
        changed
    }

    /// The record for the most recently processed script.
    pub fn module(&self) -> Option<&JsModule> {
        self.modules.last()
    }

    pub fn modules(&self) -> &[JsModule] {
        &self.modules
    }

    pub fn inputs(&self) -> &[CompilerInput] {
        &self.inputs
    }

    fn guess_cjs_module_name(&self, filename: &str) -> JsWord {
        to_module_name(self.normalize_source_name(filename))
    }

    fn normalize_source_name<'f>(&self, filename: &'f str) -> &'f str {
        let filename = filename
            .strip_prefix(self.filename_prefix.as_str())
            .unwrap_or(filename);
        filename.strip_prefix(MODULE_SLASH).unwrap_or(filename)
    }

    fn process_script(
        &mut self,
        script: &mut Script,
        program_data: &mut ProgramData,
        cm: &SourceMap,
    ) {
        let span = program_data.get_span(script.node_id);
        let source_name = cm
            .span_to_filename(span)
            .map(|f| f.to_string())
            .unwrap_or_default();
        let current_file = self.normalize_source_name(&source_name).to_string();
        let module_name = self.guess_cjs_module_name(&source_name);

        // Rewrite require("...") calls and module.exports accesses first;
        // the script node itself is handled last, like a post-order visit.
        let requires = {
            let mut callback = ProcessCommonJsModulesCallback {
                program_data: &mut *program_data,
                module_name: module_name.clone(),
                current_file,
                requires: Vec::new(),
            };
            script.body.visit_mut_with(&mut callback);
            callback.requires
        };

        let script_donor = script.node_id;
        let mut front: Vec<Stmt> = Vec::new();
        for (required, donor) in &requires {
            front.insert(
                0,
                goog_call(program_data, *donor, "require", required.clone()),
            );
        }
        let obj = ir::object_lit(program_data, script_donor);
        front.insert(
            0,
            ir::var_stmt(program_data, script_donor, module_name.clone(), Some(obj)),
        );
        front.insert(
            0,
            goog_call(program_data, script_donor, "provide", module_name.clone()),
        );
        script.body.splice(0..0, front);

        // A factory may replace its exports object wholesale:
        // if (mod.module$exports) { mod = mod.module$exports; }
        let module_name_expr = ir::name_expr(program_data, script_donor, module_name.clone());
        let test = ir::getprop(
            program_data,
            script_donor,
            module_name_expr,
            "module$exports".into(),
        );
        let replacement = test.clone_node(program_data);
        let target = ir::name_expr(program_data, script_donor, module_name.clone());
        let assign = ir::assign(program_data, script_donor, target, replacement);
        let override_stmt = ir::expr_stmt(program_data, script_donor, assign);
        script
            .body
            .push(ir::if_stmt(program_data, script_donor, test, vec![override_stmt]));

        if self.report_dependencies {
            self.inputs.push(CompilerInput {
                name: source_name.clone(),
                provides: vec![module_name.clone()],
                requires: requires.iter().map(|(m, _)| m.clone()).collect(),
            });
            self.modules.push(JsModule {
                name: module_name.clone(),
                inputs: vec![source_name],
            });
        }

        // Rename file-scope vars so concatenated files cannot conflict.
        let globals = find_vars_declared_in_script(script).ordered_vars;
        let mut suffix = SuffixVarsCallback {
            suffix: module_name,
            globals,
            scopes: Vec::new(),
        };
        script.body.visit_mut_with(&mut suffix);
    }
}

fn goog_call(program_data: &mut ProgramData, donor: NodeId, method: &str, arg: JsWord) -> Stmt {
    let goog = ir::name_expr(program_data, donor, "goog".into());
    let callee = ir::getprop(program_data, donor, goog, method.into());
    let arg = ir::string_expr(program_data, donor, arg);
    let call = ir::method_call(program_data, donor, callee, vec![arg]);
    ir::expr_stmt(program_data, donor, call)
}

struct ProcessCommonJsModulesCallback<'a> {
    program_data: &'a mut ProgramData,
    module_name: JsWord,
    current_file: String,
    /// Module name and donor node of every rewritten require call, in visit
    /// order.
    requires: Vec<(JsWord, NodeId)>,
}

impl ProcessCommonJsModulesCallback<'_> {
    fn match_require(&self, expr: &Expr) -> Option<JsWord> {
        if let Expr::Call(call) = expr {
            if let Expr::Ident(callee) = &*call.callee {
                if &*callee.sym == "require" && call.args.len() == 1 {
                    if let Expr::Lit(Lit::Str(arg)) = &call.args[0] {
                        return Some(to_module_name_relative(&arg.value, &self.current_file));
                    }
                }
            }
        }
        None
    }
}

impl VisitMut for ProcessCommonJsModulesCallback<'_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        expr.visit_mut_children_with(self);

        // require("x") becomes a direct reference to the required module's
        // object. Non-literal requires are outside this pass's domain and
        // stay untouched.
        if let Some(module_name) = self.match_require(expr) {
            let donor = match expr {
                Expr::Call(call) => call.node_id,
                _ => unreachable!(),
            };
            self.requires.push((module_name.clone(), donor));
            *expr = Expr::Ident(Ident {
                node_id: self.program_data.new_id_from(donor),
                sym: module_name,
            });
            return;
        }

        // module.exports becomes <moduleName>.module$exports, a property
        // that cannot collide with anything after suffixing.
        if let Expr::Member(member) = expr {
            if !member.computed
                && matches!(&*member.obj, Expr::Ident(obj) if &*obj.sym == "module")
                && matches!(&*member.prop, Expr::Ident(prop) if &*prop.sym == "exports")
            {
                if let Expr::Ident(obj) = &mut *member.obj {
                    obj.sym = self.module_name.clone();
                }
                if let Expr::Ident(prop) = &mut *member.prop {
                    prop.sym = "module$exports".into();
                }
            }
        }
    }
}

/// Appends `$$<moduleName>` to every file-scope name so concatenated files
/// stay collision free, and redirects `exports` to the module object. The
/// module object's own name, locals, and unresolved names are untouched;
/// property names are not name references and are never rewritten.
struct SuffixVarsCallback {
    suffix: JsWord,
    globals: FxIndexSet<JsWord>,
    scopes: Vec<FxIndexSet<JsWord>>,
}

impl SuffixVarsCallback {
    fn is_local(&self, sym: &JsWord) -> bool {
        self.scopes.iter().any(|scope| scope.contains(sym))
    }
}

impl VisitMut for SuffixVarsCallback {
    fn visit_mut_ident(&mut self, n: &mut Ident) {
        if n.sym == self.suffix {
            return;
        }
        if &*n.sym == "exports" {
            n.sym = self.suffix.clone();
            return;
        }
        if self.is_local(&n.sym) {
            return;
        }
        if self.globals.contains(&n.sym) {
            n.sym = format!("{}$${}", n.sym, self.suffix).into();
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

    // The name of a function declaration belongs to the enclosing scope;
    // everything inside the function is a fresh scope.
    fn visit_mut_fn_decl(&mut self, n: &mut FnDecl) {
        n.ident.visit_mut_with(self);
        self.scopes
            .push(find_vars_declared_in_fn(&n.function).ordered_vars);
        n.function.visit_mut_with(self);
        self.scopes.pop();
    }

    // A function expression's own name is only visible inside it.
    fn visit_mut_fn_expr(&mut self, n: &mut FnExpr) {
        let mut scope = find_vars_declared_in_fn(&n.function).ordered_vars;
        if let Some(ident) = &n.ident {
            scope.insert(ident.sym.clone());
        }
        self.scopes.push(scope);
        n.ident.visit_mut_with(self);
        n.function.visit_mut_with(self);
        self.scopes.pop();
    }

    fn visit_mut_getter_prop(&mut self, n: &mut GetterProp) {
        self.scopes
            .push(find_vars_declared_in_stmts(&n.body).ordered_vars);
        n.body.visit_mut_with(self);
        self.scopes.pop();
    }

    fn visit_mut_setter_prop(&mut self, n: &mut SetterProp) {
        let mut scope = find_vars_declared_in_stmts(&n.body).ordered_vars;
        scope.insert(n.param.sym.clone());
        self.scopes.push(scope);
        n.param.visit_mut_with(self);
        n.body.visit_mut_with(self);
        self.scopes.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_synthesized_spans, run_transform, test_transform_with_name};

    fn test_cjs(name: &str, input: &str, expected: &str) {
        test_transform_with_name(
            name,
            |program, program_data, cm, _reporter| {
                let mut pass = ProcessCommonJsModules::new(DEFAULT_FILENAME_PREFIX, false);
                pass.process(program, program_data, cm);
            },
            input,
            expected,
            &[],
        );
    }

    #[test]
    fn test_to_module_name() {
        assert_eq!(&*to_module_name("./test.js"), "module$test");
        assert_eq!(&*to_module_name("test.js"), "module$test");
        assert_eq!(&*to_module_name("a/b.js"), "module$a$b");
        assert_eq!(&*to_module_name("a/b-c.js"), "module$a$b_c");
        assert_eq!(&*to_module_name("foo"), "module$foo");
    }

    #[test]
    fn test_to_module_name_relative() {
        assert_eq!(&*to_module_name_relative("./c", "a/b"), "module$a$c");
        assert_eq!(&*to_module_name_relative("./c.js", "a/b.js"), "module$a$c");
        assert_eq!(&*to_module_name_relative("../x", "a/b/c.js"), "module$a$x");
        assert_eq!(
            &*to_module_name_relative("../../x", "a/b/c.js"),
            "module$x"
        );
        assert_eq!(&*to_module_name_relative("foo", "a/b.js"), "module$foo");
    }

    #[test]
    fn test_module_name_determinism_and_injectivity() {
        assert_eq!(to_module_name("a/b.js"), to_module_name("a/b.js"));
        assert_ne!(to_module_name("a/b.js"), to_module_name("a/c.js"));
        assert_ne!(to_module_name("a/b.js"), to_module_name("a-b.js"));
    }

    #[test]
    fn test_require_and_module_exports() {
        test_cjs(
            "a/b.js",
            "var q = require('./c'); module.exports = q;",
            "goog.provide(\"module$a$b\"); var module$a$b = {}; \
             goog.require(\"module$a$c\"); \
             var q$$module$a$b = module$a$c; \
             module$a$b.module$exports = q$$module$a$b; \
             if (module$a$b.module$exports) { module$a$b = module$a$b.module$exports; }",
        );
    }

    #[test]
    fn test_bare_require_name() {
        test_cjs(
            "test.js",
            "var x = require('other'); x();",
            "goog.provide(\"module$test\"); var module$test = {}; \
             goog.require(\"module$other\"); \
             var x$$module$test = module$other; x$$module$test(); \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_require_order_reversed_at_top() {
        test_cjs(
            "test.js",
            "var a = require('x'); var b = require('y');",
            "goog.provide(\"module$test\"); var module$test = {}; \
             goog.require(\"module$y\"); goog.require(\"module$x\"); \
             var a$$module$test = module$x; var b$$module$test = module$y; \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_dynamic_require_untouched() {
        // Only literal requires are rewritten; computed module names are
        // out of this pass's domain.
        test_cjs(
            "test.js",
            "var a = require(b);",
            "goog.provide(\"module$test\"); var module$test = {}; \
             var a$$module$test = require(b); \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_free_exports() {
        test_cjs(
            "test.js",
            "exports.foo = 1;",
            "goog.provide(\"module$test\"); var module$test = {}; \
             module$test.foo = 1; \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_module_exports_function() {
        test_cjs(
            "test.js",
            "module.exports = function() { return 1; };",
            "goog.provide(\"module$test\"); var module$test = {}; \
             module$test.module$exports = function() { return 1; }; \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_suffix_skips_locals_and_unresolved() {
        test_cjs(
            "test.js",
            "var a = 1; function f(b) { var c; return a + b + c; } f(a, window);",
            "goog.provide(\"module$test\"); var module$test = {}; \
             var a$$module$test = 1; \
             function f$$module$test(b) { var c; return a$$module$test + b + c; } \
             f$$module$test(a$$module$test, window); \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_suffix_skips_property_names() {
        test_cjs(
            "test.js",
            "var a = 1; var o = {a: a}; o.a = a; o['a'] = a;",
            "goog.provide(\"module$test\"); var module$test = {}; \
             var a$$module$test = 1; \
             var o$$module$test = {a: a$$module$test}; \
             o$$module$test.a = a$$module$test; \
             o$$module$test['a'] = a$$module$test; \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_function_expression_name_is_local() {
        test_cjs(
            "test.js",
            "var f = function g() { return g; };",
            "goog.provide(\"module$test\"); var module$test = {}; \
             var f$$module$test = function g() { return g; }; \
             if (module$test.module$exports) { module$test = module$test.module$exports; }",
        );
    }

    #[test]
    fn test_filename_prefix_stripped() {
        test_transform_with_name(
            "foo/bar.js",
            |program, program_data, cm, _reporter| {
                let mut pass = ProcessCommonJsModules::new("foo/", false);
                pass.process(program, program_data, cm);
            },
            "exports.x = 1;",
            "goog.provide(\"module$bar\"); var module$bar = {}; \
             module$bar.x = 1; \
             if (module$bar.module$exports) { module$bar = module$bar.module$exports; }",
            &[],
        );
    }

    #[test]
    fn test_dependency_reporting() {
        let mut pass = ProcessCommonJsModules::new(DEFAULT_FILENAME_PREFIX, true);
        let out = run_transform(
            "a/b.js",
            |program, program_data, cm, _reporter| {
                pass.process(program, program_data, cm);
            },
            "var c = require('./c'); var d = require('other'); module.exports = c;",
        );
        assert!(out.reporter.diagnostics.is_empty());

        let module = pass.module().expect("module record");
        assert_eq!(&*module.name, "module$a$b");
        assert_eq!(module.inputs, vec!["a/b.js".to_string()]);

        let inputs = pass.inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].provides, vec![JsWord::from("module$a$b")]);
        assert_eq!(
            inputs[0].requires,
            vec![JsWord::from("module$a$c"), JsWord::from("module$other")]
        );
    }

    #[test]
    fn test_synthesized_nodes_carry_source_info() {
        let out = run_transform(
            "a/b.js",
            |program, program_data, cm, _reporter| {
                let mut pass = ProcessCommonJsModules::new(DEFAULT_FILENAME_PREFIX, false);
                pass.process(program, program_data, cm);
            },
            "var q = require('./c'); module.exports = q;",
        );
        assert_synthesized_spans(&out);
    }
}
