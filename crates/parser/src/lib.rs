//! Hand-written ES5 parser. Produces [ast::Script] values whose node ids are
//! registered, with spans, in the shared [ast::ProgramData].

pub use crate::error::{Error, SyntaxError};
pub use crate::token::{Keyword, Token, TokenAndSpan};

use ast::ProgramData;
use global_common::{BytePos, SourceFile, Span};

use crate::lexer::Lexer;

pub mod error;
mod expr;
pub mod lexer;
mod stmt;
pub mod token;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur: Option<TokenAndSpan>,
    peeked: Option<TokenAndSpan>,
    /// End of the most recently consumed token; the `hi` of finished nodes.
    prev_hi: BytePos,
    file_span: Span,
    program_data: &'a mut ProgramData,
    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    pub fn new(fm: &'a SourceFile, program_data: &'a mut ProgramData) -> Self {
        Parser {
            lexer: Lexer::new(&fm.src, fm.start_pos),
            cur: None,
            peeked: None,
            prev_hi: fm.start_pos,
            file_span: fm.span(),
            program_data,
            errors: Vec::new(),
        }
    }

    pub fn parse_script(&mut self) -> Result<ast::Script, Error> {
        let mut body = Vec::new();
        while !self.is_eof()? {
            body.push(self.parse_stmt()?);
        }
        Ok(ast::Script {
            node_id: self.program_data.new_id(self.file_span),
            body,
        })
    }

    /// Errors recovered from without aborting the parse.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    // ---- token plumbing ----

    fn ensure(&mut self) -> Result<(), Error> {
        if self.cur.is_none() {
            self.cur = Some(match self.peeked.take() {
                Some(t) => t,
                None => self.lexer.next_token()?,
            });
        }
        Ok(())
    }

    fn cur(&mut self) -> Result<&Token, Error> {
        self.ensure()?;
        Ok(&self.cur.as_ref().unwrap().token)
    }

    fn cur_span(&mut self) -> Result<Span, Error> {
        self.ensure()?;
        Ok(self.cur.as_ref().unwrap().span)
    }

    fn had_line_break(&mut self) -> Result<bool, Error> {
        self.ensure()?;
        Ok(self.cur.as_ref().unwrap().had_line_break)
    }

    fn peek(&mut self) -> Result<&Token, Error> {
        self.ensure()?;
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(&self.peeked.as_ref().unwrap().token)
    }

    fn bump(&mut self) -> Result<TokenAndSpan, Error> {
        self.ensure()?;
        let t = self.cur.take().unwrap();
        self.prev_hi = t.span.hi;
        Ok(t)
    }

    fn is(&mut self, t: &Token) -> Result<bool, Error> {
        Ok(self.cur()? == t)
    }

    fn is_eof(&mut self) -> Result<bool, Error> {
        Ok(matches!(self.cur()?, Token::Eof))
    }

    fn eat(&mut self, t: &Token) -> Result<bool, Error> {
        if self.is(t)? {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, t: &Token, expected: &'static str) -> Result<TokenAndSpan, Error> {
        if self.is(t)? {
            self.bump()
        } else {
            Err(self.expected_err(expected))
        }
    }

    fn expected_err(&mut self, expected: &'static str) -> Error {
        let span = self.cur_span().unwrap_or(self.file_span);
        let got = self
            .cur
            .as_ref()
            .map(|t| t.token.to_string())
            .unwrap_or_else(|| "<eof>".to_string());
        Error::new(span, SyntaxError::Expected { expected, got })
    }

    fn unexpected(&mut self) -> Error {
        let span = self.cur_span().unwrap_or(self.file_span);
        let got = self
            .cur
            .as_ref()
            .map(|t| t.token.to_string())
            .unwrap_or_else(|| "<eof>".to_string());
        Error::new(span, SyntaxError::UnexpectedToken { got })
    }

    // ---- span plumbing ----

    fn start(&mut self) -> Result<BytePos, Error> {
        Ok(self.cur_span()?.lo)
    }

    fn finish(&mut self, start: BytePos) -> ast::NodeId {
        self.program_data.new_id(Span::new(start, self.prev_hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::*;
    use global_common::{FileName, SourceMap};

    fn parse(src: &str) -> Script {
        let cm = SourceMap::default();
        let fm = cm.new_source_file(FileName::Custom("test.js".into()), src.to_string());
        let mut program_data = ProgramData::default();
        let mut parser = Parser::new(&fm, &mut program_data);
        let script = parser
            .parse_script()
            .unwrap_or_else(|e| panic!("parse failed for {:?}: {}", src, e));
        assert!(parser.take_errors().is_empty());
        script
    }

    fn parse_err(src: &str) {
        let cm = SourceMap::default();
        let fm = cm.new_source_file(FileName::Custom("test.js".into()), src.to_string());
        let mut program_data = ProgramData::default();
        let mut parser = Parser::new(&fm, &mut program_data);
        assert!(parser.parse_script().is_err(), "expected error for {:?}", src);
    }

    /// Parse, print, reparse, and require identical printed output. Covers
    /// the parser and printer against each other.
    fn round_trip(src: &str) {
        let first = print(&parse(src));
        let second = print(&parse(&first));
        assert_eq!(first, second, "round trip diverged for {:?}", src);
    }

    fn print(script: &Script) -> String {
        let mut buf = Vec::new();
        {
            let mut emitter = codegen::Emitter::new(codegen::JsWriter::new("\n", &mut buf));
            emitter.emit_script(script).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn asi_terminates_statements() {
        let script = parse("a = 1\nb = 2");
        assert_eq!(script.body.len(), 2);
    }

    #[test]
    fn asi_requires_line_break() {
        parse_err("a = 1 b = 2");
    }

    #[test]
    fn return_is_a_restricted_production() {
        let script = parse("function f() { return\n1; }");
        let body = match &script.body[0] {
            Stmt::Decl(Decl::Fn(f)) => &f.function.body,
            other => panic!("expected function, got {:?}", other),
        };
        assert!(matches!(&body[0], Stmt::Return(r) if r.arg.is_none()));
        assert!(matches!(&body[1], Stmt::Expr(_)));
    }

    #[test]
    fn regex_vs_division() {
        let script = parse("var a = b / c; var r = /x[/]*/g;");
        match &script.body[1] {
            Stmt::Decl(Decl::Var(v)) => {
                assert!(matches!(
                    v.decls[0].init.as_deref(),
                    Some(Expr::Lit(Lit::Regex(_)))
                ));
            }
            other => panic!("expected var, got {:?}", other),
        }
    }

    #[test]
    fn free_call_flag_tracks_bare_callees() {
        let script = parse("f(); o.m(); (f)();");
        let call_of = |stmt: &Stmt| match stmt {
            Stmt::Expr(e) => match &*e.expr {
                Expr::Call(c) => c.free_call,
                other => panic!("expected call, got {:?}", other),
            },
            other => panic!("expected expr stmt, got {:?}", other),
        };
        assert!(call_of(&script.body[0]));
        assert!(!call_of(&script.body[1]));
        // Parens are not materialized, so this callee is a bare name again.
        assert!(call_of(&script.body[2]));
    }

    #[test]
    fn for_in_forms() {
        parse("for (var k in o) { k; }");
        parse("for (k in o) k;");
        parse("for (var i = 0; i < n; i++) { i; }");
        parse_err("for (1 in o) {}");
    }

    #[test]
    fn round_trips() {
        round_trip("var a = 1, b;");
        round_trip("define(['foo', 'bar'], function(foo, bar) { foo(bar); bar+1; })");
        round_trip("if (a) b(); else { c(); }");
        round_trip("a ? b : c ? d : e;");
        round_trip("x = (a, b);");
        round_trip("(function() { return 1; })();");
        round_trip("var o = {a: 1, 'b': 2, 3: c, get d() { return 4; }};");
        round_trip("a[\"x\"] = -(-b);");
        round_trip("try { f(); } catch (e) { g(e); } finally { h(); }");
        round_trip("switch (x) {case 1: f(); break; default: g();}");
        round_trip("out: while (a) { do { continue out; } while (b); }");
        round_trip("new Foo(1).bar()();");
        round_trip("throw typeof new Foo;");
    }
}
