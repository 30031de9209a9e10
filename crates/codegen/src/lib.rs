//! Compact JavaScript printer. Parentheses are re-derived from precedence,
//! since the AST does not materialize them.

pub use text_writer::JsWriter;

use ast::*;
use std::io;

pub mod text_writer;

pub type Result = io::Result<()>;

pub struct Emitter<'a> {
    wr: JsWriter<'a>,
}

/// Binding strength of an expression, used to decide parenthesization.
fn prec_of(e: &Expr) -> u8 {
    match e {
        Expr::Seq(_) => 1,
        Expr::Assign(_) => 2,
        Expr::Cond(_) => 3,
        Expr::Bin(b) => 3 + b.op.precedence(),
        Expr::Unary(_) => 14,
        Expr::Update(u) => {
            if u.prefix {
                14
            } else {
                15
            }
        }
        Expr::New(n) => {
            if n.args.is_none() {
                16
            } else {
                17
            }
        }
        Expr::Call(_) => 17,
        Expr::Member(_) => 18,
        _ => 19,
    }
}

/// Whether an expression statement starting with this expression would be
/// misparsed as a block or function declaration.
fn stmt_starts_with_curly_or_fn(e: &Expr) -> bool {
    match e {
        Expr::Object(_) | Expr::Fn(_) => true,
        Expr::Seq(s) => s.exprs.first().map(stmt_starts_with_curly_or_fn).unwrap_or(false),
        Expr::Assign(a) => stmt_starts_with_curly_or_fn(&a.left),
        Expr::Cond(c) => stmt_starts_with_curly_or_fn(&c.test),
        Expr::Bin(b) => stmt_starts_with_curly_or_fn(&b.left),
        Expr::Member(m) => stmt_starts_with_curly_or_fn(&m.obj),
        Expr::Call(c) => stmt_starts_with_curly_or_fn(&c.callee),
        Expr::Update(u) if !u.prefix => stmt_starts_with_curly_or_fn(&u.arg),
        _ => false,
    }
}

impl<'a> Emitter<'a> {
    pub fn new(wr: JsWriter<'a>) -> Self {
        Emitter { wr }
    }

    pub fn emit_program(&mut self, program: &Program) -> Result {
        for script in &program.scripts {
            self.emit_script(script)?;
        }
        Ok(())
    }

    pub fn emit_script(&mut self, script: &Script) -> Result {
        for stmt in &script.body {
            self.emit_stmt(stmt)?;
        }
        Ok(())
    }

    fn w(&mut self, s: &str) -> Result {
        self.wr.write(s)
    }

    pub fn emit_stmt(&mut self, stmt: &Stmt) -> Result {
        match stmt {
            Stmt::Block(b) => self.emit_block(b)?,
            Stmt::Empty(_) => self.w(";")?,
            Stmt::Debugger(_) => self.w("debugger;")?,
            Stmt::Expr(e) => {
                if stmt_starts_with_curly_or_fn(&e.expr) {
                    self.w("(")?;
                    self.emit_expr(&e.expr, 1)?;
                    self.w(")")?;
                } else {
                    self.emit_expr(&e.expr, 1)?;
                }
                self.w(";")?;
            }
            Stmt::If(s) => {
                self.w("if (")?;
                self.emit_expr(&s.test, 1)?;
                self.w(") ")?;
                if s.alt.is_some() {
                    // Brace the consequent so a dangling `else` cannot
                    // reattach to a nested `if`.
                    match &*s.cons {
                        Stmt::Block(b) => self.emit_block(b)?,
                        other => {
                            self.w("{")?;
                            self.wr.write_line()?;
                            self.wr.inc_indent();
                            self.emit_stmt(other)?;
                            self.wr.write_line()?;
                            self.wr.dec_indent();
                            self.w("}")?;
                        }
                    }
                    self.w(" else ")?;
                    self.emit_stmt(s.alt.as_ref().unwrap())?;
                } else {
                    self.emit_stmt(&s.cons)?;
                }
            }
            Stmt::Return(s) => {
                match &s.arg {
                    Some(arg) => {
                        self.w("return ")?;
                        self.emit_expr(arg, 1)?;
                    }
                    None => self.w("return")?,
                }
                self.w(";")?;
            }
            Stmt::Labeled(s) => {
                self.w(&s.label.sym)?;
                self.w(": ")?;
                self.emit_stmt(&s.body)?;
            }
            Stmt::Break(s) => {
                self.w("break")?;
                if let Some(label) = &s.label {
                    self.w(" ")?;
                    self.w(&label.sym)?;
                }
                self.w(";")?;
            }
            Stmt::Continue(s) => {
                self.w("continue")?;
                if let Some(label) = &s.label {
                    self.w(" ")?;
                    self.w(&label.sym)?;
                }
                self.w(";")?;
            }
            Stmt::While(s) => {
                self.w("while (")?;
                self.emit_expr(&s.test, 1)?;
                self.w(") ")?;
                self.emit_stmt(&s.body)?;
            }
            Stmt::DoWhile(s) => {
                self.w("do ")?;
                self.emit_stmt(&s.body)?;
                self.w(" while (")?;
                self.emit_expr(&s.test, 1)?;
                self.w(");")?;
            }
            Stmt::For(s) => {
                self.w("for (")?;
                match &s.init {
                    Some(VarDeclOrExpr::VarDecl(d)) => self.emit_var_decl(d)?,
                    Some(VarDeclOrExpr::Expr(e)) => self.emit_expr(e, 1)?,
                    None => {}
                }
                self.w("; ")?;
                if let Some(test) = &s.test {
                    self.emit_expr(test, 1)?;
                }
                self.w("; ")?;
                if let Some(update) = &s.update {
                    self.emit_expr(update, 1)?;
                }
                self.w(") ")?;
                self.emit_stmt(&s.body)?;
            }
            Stmt::ForIn(s) => {
                self.w("for (")?;
                match &s.left {
                    VarDeclOrExpr::VarDecl(d) => self.emit_var_decl(d)?,
                    VarDeclOrExpr::Expr(e) => self.emit_expr(e, 14)?,
                }
                self.w(" in ")?;
                self.emit_expr(&s.right, 1)?;
                self.w(") ")?;
                self.emit_stmt(&s.body)?;
            }
            Stmt::Switch(s) => {
                self.w("switch (")?;
                self.emit_expr(&s.discriminant, 1)?;
                self.w(") {")?;
                self.wr.write_line()?;
                self.wr.inc_indent();
                for case in &s.cases {
                    match &case.test {
                        Some(test) => {
                            self.w("case ")?;
                            self.emit_expr(test, 1)?;
                            self.w(":")?;
                        }
                        None => self.w("default:")?,
                    }
                    self.wr.write_line()?;
                    self.wr.inc_indent();
                    for stmt in &case.cons {
                        self.emit_stmt(stmt)?;
                        self.wr.write_line()?;
                    }
                    self.wr.dec_indent();
                }
                self.wr.dec_indent();
                self.w("}")?;
            }
            Stmt::Throw(s) => {
                self.w("throw ")?;
                self.emit_expr(&s.arg, 1)?;
                self.w(";")?;
            }
            Stmt::Try(s) => {
                self.w("try ")?;
                self.emit_block(&s.block)?;
                if let Some(handler) = &s.handler {
                    self.w(" catch (")?;
                    self.w(&handler.param.sym)?;
                    self.w(") ")?;
                    self.emit_block(&handler.body)?;
                }
                if let Some(finalizer) = &s.finalizer {
                    self.w(" finally ")?;
                    self.emit_block(finalizer)?;
                }
            }
            Stmt::Decl(Decl::Var(d)) => {
                self.emit_var_decl(d)?;
                self.w(";")?;
            }
            Stmt::Decl(Decl::Fn(d)) => {
                self.w("function ")?;
                self.w(&d.ident.sym)?;
                self.emit_fn_rest(&d.function)?;
            }
        }
        self.wr.write_line()
    }

    fn emit_block(&mut self, block: &BlockStmt) -> Result {
        self.emit_stmt_list(&block.stmts)
    }

    fn emit_stmt_list(&mut self, stmts: &[Stmt]) -> Result {
        self.w("{")?;
        self.wr.write_line()?;
        self.wr.inc_indent();
        for stmt in stmts {
            self.emit_stmt(stmt)?;
        }
        self.wr.dec_indent();
        self.w("}")
    }

    fn emit_var_decl(&mut self, d: &VarDecl) -> Result {
        self.w("var ")?;
        let mut first = true;
        for decl in &d.decls {
            if !first {
                self.w(", ")?;
            }
            first = false;
            self.w(&decl.name.sym)?;
            if let Some(init) = &decl.init {
                self.w(" = ")?;
                self.emit_expr(init, 2)?;
            }
        }
        Ok(())
    }

    fn emit_fn_rest(&mut self, f: &Function) -> Result {
        self.w("(")?;
        let mut first = true;
        for param in &f.params {
            if !first {
                self.w(", ")?;
            }
            first = false;
            self.w(&param.sym)?;
        }
        self.w(") ")?;
        self.emit_stmt_list(&f.body)
    }

    fn emit_expr(&mut self, e: &Expr, min_prec: u8) -> Result {
        if prec_of(e) < min_prec {
            self.w("(")?;
            self.emit_expr(e, 1)?;
            return self.w(")");
        }
        match e {
            Expr::This(_) => self.w("this"),
            Expr::Ident(i) => self.w(&i.sym),
            Expr::Lit(l) => self.emit_lit(l),
            Expr::Array(a) => {
                self.w("[")?;
                let mut first = true;
                for elem in &a.elems {
                    if !first {
                        self.w(",")?;
                    }
                    first = false;
                    if let Some(elem) = elem {
                        self.emit_expr(elem, 2)?;
                    }
                }
                // A trailing elision needs its comma kept to survive a
                // round trip.
                if matches!(a.elems.last(), Some(None)) {
                    self.w(",")?;
                }
                self.w("]")
            }
            Expr::Object(o) => {
                if o.props.is_empty() {
                    return self.w("{}");
                }
                self.w("{")?;
                let mut first = true;
                for prop in &o.props {
                    if !first {
                        self.w(", ")?;
                    }
                    first = false;
                    self.emit_prop(prop)?;
                }
                self.w("}")
            }
            Expr::Fn(f) => {
                self.w("function")?;
                if let Some(ident) = &f.ident {
                    self.w(" ")?;
                    self.w(&ident.sym)?;
                }
                self.emit_fn_rest(&f.function)
            }
            Expr::Unary(u) => {
                self.w(u.op.as_str())?;
                if u.op.is_keyword() || needs_space_before(&u.arg, u.op) {
                    self.w(" ")?;
                }
                self.emit_expr(&u.arg, 14)
            }
            Expr::Update(u) => {
                if u.prefix {
                    self.w(u.op.as_str())?;
                    self.emit_expr(&u.arg, 14)
                } else {
                    self.emit_expr(&u.arg, 15)?;
                    self.w(u.op.as_str())
                }
            }
            Expr::Bin(b) => {
                let prec = 3 + b.op.precedence();
                self.emit_expr(&b.left, prec)?;
                if matches!(b.op, BinaryOp::In | BinaryOp::InstanceOf) {
                    self.w(" ")?;
                    self.w(b.op.as_str())?;
                    self.w(" ")?;
                } else {
                    self.w(b.op.as_str())?;
                    // `a - -b` must not fuse into `a--b`.
                    let clash = match b.op {
                        BinaryOp::Sub => leading_sign(&b.right) == Some('-'),
                        BinaryOp::Add => leading_sign(&b.right) == Some('+'),
                        _ => false,
                    };
                    if clash {
                        self.w(" ")?;
                    }
                }
                self.emit_expr(&b.right, prec + 1)
            }
            Expr::Assign(a) => {
                self.emit_expr(&a.left, 18)?;
                self.w(" ")?;
                self.w(a.op.as_str())?;
                self.w(" ")?;
                self.emit_expr(&a.right, 2)
            }
            Expr::Member(m) => {
                if matches!(&*m.obj, Expr::Lit(Lit::Num(_))) {
                    self.w("(")?;
                    self.emit_expr(&m.obj, 1)?;
                    self.w(")")?;
                } else {
                    self.emit_expr(&m.obj, 17)?;
                }
                if m.computed {
                    self.w("[")?;
                    self.emit_expr(&m.prop, 1)?;
                    self.w("]")
                } else {
                    self.w(".")?;
                    match &*m.prop {
                        Expr::Ident(i) => self.w(&i.sym),
                        // A non-computed prop is always an identifier.
                        other => self.emit_expr(other, 1),
                    }
                }
            }
            Expr::Cond(c) => {
                self.emit_expr(&c.test, 4)?;
                self.w(" ? ")?;
                self.emit_expr(&c.cons, 2)?;
                self.w(" : ")?;
                self.emit_expr(&c.alt, 2)
            }
            Expr::Call(c) => {
                self.emit_expr(&c.callee, 17)?;
                self.emit_args(&c.args)
            }
            Expr::New(n) => {
                self.w("new ")?;
                self.emit_expr(&n.callee, 18)?;
                if let Some(args) = &n.args {
                    self.emit_args(args)?;
                }
                Ok(())
            }
            Expr::Seq(s) => {
                let mut first = true;
                for expr in &s.exprs {
                    if !first {
                        self.w(", ")?;
                    }
                    first = false;
                    self.emit_expr(expr, 2)?;
                }
                Ok(())
            }
        }
    }

    fn emit_args(&mut self, args: &[Expr]) -> Result {
        self.w("(")?;
        let mut first = true;
        for arg in args {
            if !first {
                self.w(", ")?;
            }
            first = false;
            self.emit_expr(arg, 2)?;
        }
        self.w(")")
    }

    fn emit_prop(&mut self, prop: &Prop) -> Result {
        match prop {
            Prop::KeyValue(p) => {
                self.emit_prop_name(&p.key)?;
                self.w(": ")?;
                self.emit_expr(&p.value, 2)
            }
            Prop::Getter(p) => {
                self.w("get ")?;
                self.emit_prop_name(&p.key)?;
                self.w("() ")?;
                self.emit_stmt_list(&p.body)
            }
            Prop::Setter(p) => {
                self.w("set ")?;
                self.emit_prop_name(&p.key)?;
                self.w("(")?;
                self.w(&p.param.sym)?;
                self.w(") ")?;
                self.emit_stmt_list(&p.body)
            }
        }
    }

    fn emit_prop_name(&mut self, name: &PropName) -> Result {
        match name {
            PropName::Ident(i) => self.w(&i.sym),
            PropName::Str(s) => {
                let quoted = quote_str(&s.value);
                self.w(&quoted)
            }
            PropName::Num(n) => {
                let formatted = fmt_num(n.value);
                self.w(&formatted)
            }
        }
    }

    fn emit_lit(&mut self, lit: &Lit) -> Result {
        match lit {
            Lit::Str(s) => {
                let quoted = quote_str(&s.value);
                self.w(&quoted)
            }
            Lit::Bool(b) => self.w(if b.value { "true" } else { "false" }),
            Lit::Null(_) => self.w("null"),
            Lit::Num(n) => {
                let formatted = fmt_num(n.value);
                self.w(&formatted)
            }
            Lit::Regex(r) => {
                self.w("/")?;
                self.w(&r.exp)?;
                self.w("/")?;
                self.w(&r.flags)
            }
        }
    }
}

/// First printed character of an unparenthesized sign-leading expression.
/// Over-approximates through left operands; a spurious space is harmless.
fn leading_sign(e: &Expr) -> Option<char> {
    match e {
        Expr::Unary(u) => match u.op {
            UnaryOp::Minus => Some('-'),
            UnaryOp::Plus => Some('+'),
            _ => None,
        },
        Expr::Update(u) if u.prefix => Some(match u.op {
            UpdateOp::MinusMinus => '-',
            UpdateOp::PlusPlus => '+',
        }),
        Expr::Bin(b) => leading_sign(&b.left),
        _ => None,
    }
}

/// `-(-x)` and `-(--x)` must not print as `--x` / `---x`.
fn needs_space_before(arg: &Expr, op: UnaryOp) -> bool {
    match (op, arg) {
        (UnaryOp::Minus, Expr::Unary(u)) => u.op == UnaryOp::Minus,
        (UnaryOp::Minus, Expr::Update(u)) => u.prefix && u.op == UpdateOp::MinusMinus,
        (UnaryOp::Plus, Expr::Unary(u)) => u.op == UnaryOp::Plus,
        (UnaryOp::Plus, Expr::Update(u)) => u.prefix && u.op == UpdateOp::PlusPlus,
        _ => false,
    }
}

fn fmt_num(value: f64) -> String {
    // Exact-integer f64s print without a fraction; 2^53 bounds the exact
    // range.
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= 9007199254740992.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn quote_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(255.0), "255");
        // Display for f64 never uses exponent notation.
        assert_eq!(fmt_num(1e21), "1000000000000000000000");
    }

    #[test]
    fn string_quoting() {
        assert_eq!(quote_str("bar"), "\"bar\"");
        assert_eq!(quote_str("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_str("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_str("a\nb"), "\"a\\nb\"");
        assert_eq!(quote_str("\u{1}"), "\"\\x01\"");
    }
}
