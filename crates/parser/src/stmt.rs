use ast::*;
use swc_atoms::JsWord;

use crate::error::{Error, SyntaxError};
use crate::token::{Keyword, Token};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        match self.cur()? {
            Token::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            Token::Semi => {
                let start = self.start()?;
                self.bump()?;
                Ok(Stmt::Empty(EmptyStmt {
                    node_id: self.finish(start),
                }))
            }
            Token::Keyword(k) => match k {
                Keyword::Var => {
                    let decl = self.parse_var_decl(false)?;
                    self.semi()?;
                    Ok(Stmt::Decl(Decl::Var(decl)))
                }
                Keyword::Function => self.parse_fn_decl().map(|d| Stmt::Decl(Decl::Fn(d))),
                Keyword::If => self.parse_if_stmt(),
                Keyword::Return => self.parse_return_stmt(),
                Keyword::While => self.parse_while_stmt(),
                Keyword::Do => self.parse_do_while_stmt(),
                Keyword::For => self.parse_for_stmt(),
                Keyword::Switch => self.parse_switch_stmt(),
                Keyword::Throw => self.parse_throw_stmt(),
                Keyword::Try => self.parse_try_stmt(),
                Keyword::Break => self.parse_break_continue(true),
                Keyword::Continue => self.parse_break_continue(false),
                Keyword::Debugger => {
                    let start = self.start()?;
                    self.bump()?;
                    self.semi()?;
                    Ok(Stmt::Debugger(DebuggerStmt {
                        node_id: self.finish(start),
                    }))
                }
                _ => self.parse_expr_stmt(),
            },
            Token::Ident(_) => {
                if matches!(self.peek()?, Token::Colon) {
                    self.parse_labeled_stmt()
                } else {
                    self.parse_expr_stmt()
                }
            }
            _ => self.parse_expr_stmt(),
        }
    }

    /// Consumes a statement terminator, applying automatic semicolon
    /// insertion: a real `;`, a following `}`, end of input, or a line
    /// terminator before the next token all end the statement.
    fn semi(&mut self) -> Result<(), Error> {
        if self.eat(&Token::Semi)? {
            return Ok(());
        }
        if matches!(self.cur()?, Token::RBrace | Token::Eof) || self.had_line_break()? {
            return Ok(());
        }
        Err(self.expected_err(";"))
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        let expr = self.parse_expr(false)?;
        self.semi()?;
        Ok(Stmt::Expr(ExprStmt {
            node_id: self.finish(start),
            expr: Box::new(expr),
        }))
    }

    pub(crate) fn parse_block(&mut self) -> Result<BlockStmt, Error> {
        let start = self.start()?;
        self.expect(&Token::LBrace, "{")?;
        let mut stmts = Vec::new();
        while !self.is(&Token::RBrace)? {
            if self.is_eof()? {
                return Err(self.expected_err("}"));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.bump()?;
        Ok(BlockStmt {
            node_id: self.finish(start),
            stmts,
        })
    }

    fn parse_var_decl(&mut self, no_in: bool) -> Result<VarDecl, Error> {
        let start = self.start()?;
        self.bump()?; // var
        let mut decls = Vec::new();
        loop {
            let d_start = self.start()?;
            let name = self.parse_binding_ident()?;
            let init = if self.eat(&Token::AssignOp(AssignOp::Assign))? {
                Some(Box::new(self.parse_assign_expr(no_in)?))
            } else {
                None
            };
            decls.push(VarDeclarator {
                node_id: self.finish(d_start),
                name,
                init,
            });
            if !self.eat(&Token::Comma)? {
                break;
            }
        }
        Ok(VarDecl {
            node_id: self.finish(start),
            decls,
        })
    }

    pub(crate) fn parse_binding_ident(&mut self) -> Result<Ident, Error> {
        let start = self.start()?;
        match self.cur()? {
            Token::Ident(_) => {
                let t = self.bump()?;
                let sym = match t.token {
                    Token::Ident(w) => w,
                    _ => unreachable!(),
                };
                Ok(Ident {
                    node_id: self.finish(start),
                    sym,
                })
            }
            _ => Err(self.expected_err("identifier")),
        }
    }

    fn parse_fn_decl(&mut self) -> Result<FnDecl, Error> {
        let start = self.start()?;
        self.bump()?; // function
        let ident = self.parse_binding_ident()?;
        let function = self.parse_fn_rest(start)?;
        Ok(FnDecl {
            node_id: self.finish(start),
            ident,
            function,
        })
    }

    /// Parses `( params ) { body }`, the part shared between function
    /// declarations and expressions. `start` positions the [Function] span.
    pub(crate) fn parse_fn_rest(
        &mut self,
        start: global_common::BytePos,
    ) -> Result<Function, Error> {
        self.expect(&Token::LParen, "(")?;
        let mut params = Vec::new();
        if !self.is(&Token::RParen)? {
            loop {
                params.push(self.parse_binding_ident()?);
                if !self.eat(&Token::Comma)? {
                    break;
                }
            }
        }
        self.expect(&Token::RParen, ")")?;
        let body = self.parse_block()?.stmts;
        Ok(Function {
            node_id: self.finish(start),
            params,
            body,
        })
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // if
        self.expect(&Token::LParen, "(")?;
        let test = self.parse_expr(false)?;
        self.expect(&Token::RParen, ")")?;
        let cons = self.parse_stmt()?;
        let alt = if self.is(&Token::Keyword(Keyword::Else))? {
            self.bump()?;
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            node_id: self.finish(start),
            test: Box::new(test),
            cons: Box::new(cons),
            alt,
        }))
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // return
        // Restricted production: a line break ends the statement.
        let arg = if matches!(self.cur()?, Token::Semi | Token::RBrace | Token::Eof)
            || self.had_line_break()?
        {
            None
        } else {
            Some(Box::new(self.parse_expr(false)?))
        };
        self.semi()?;
        Ok(Stmt::Return(ReturnStmt {
            node_id: self.finish(start),
            arg,
        }))
    }

    fn parse_labeled_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        let label = self.parse_binding_ident()?;
        self.expect(&Token::Colon, ":")?;
        let body = self.parse_stmt()?;
        Ok(Stmt::Labeled(LabeledStmt {
            node_id: self.finish(start),
            label,
            body: Box::new(body),
        }))
    }

    fn parse_break_continue(&mut self, is_break: bool) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?;
        // Restricted production, like `return`.
        let label = if matches!(self.cur()?, Token::Ident(_)) && !self.had_line_break()? {
            Some(self.parse_binding_ident()?)
        } else {
            None
        };
        self.semi()?;
        let node_id = self.finish(start);
        Ok(if is_break {
            Stmt::Break(BreakStmt { node_id, label })
        } else {
            Stmt::Continue(ContinueStmt { node_id, label })
        })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // while
        self.expect(&Token::LParen, "(")?;
        let test = self.parse_expr(false)?;
        self.expect(&Token::RParen, ")")?;
        let body = self.parse_stmt()?;
        Ok(Stmt::While(WhileStmt {
            node_id: self.finish(start),
            test: Box::new(test),
            body: Box::new(body),
        }))
    }

    fn parse_do_while_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // do
        let body = self.parse_stmt()?;
        self.expect(&Token::Keyword(Keyword::While), "while")?;
        self.expect(&Token::LParen, "(")?;
        let test = self.parse_expr(false)?;
        self.expect(&Token::RParen, ")")?;
        // The semicolon after `do..while()` is always optional.
        self.eat(&Token::Semi)?;
        Ok(Stmt::DoWhile(DoWhileStmt {
            node_id: self.finish(start),
            body: Box::new(body),
            test: Box::new(test),
        }))
    }

    fn parse_for_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // for
        self.expect(&Token::LParen, "(")?;

        if self.eat(&Token::Semi)? {
            return self.parse_for_rest(start, None);
        }

        if self.is(&Token::Keyword(Keyword::Var))? {
            let decl = self.parse_var_decl(true)?;
            if self.is(&Token::Keyword(Keyword::In))? {
                if decl.decls.len() != 1 || decl.decls[0].init.is_some() {
                    return Err(Error::new(
                        self.cur_span()?,
                        SyntaxError::InvalidForInTarget,
                    ));
                }
                return self.parse_for_in_rest(start, VarDeclOrExpr::VarDecl(decl));
            }
            self.expect(&Token::Semi, ";")?;
            return self.parse_for_rest(start, Some(VarDeclOrExpr::VarDecl(decl)));
        }

        let init = self.parse_expr(true)?;
        if self.is(&Token::Keyword(Keyword::In))? {
            if !matches!(init, Expr::Ident(_) | Expr::Member(_)) {
                return Err(Error::new(
                    self.cur_span()?,
                    SyntaxError::InvalidForInTarget,
                ));
            }
            return self.parse_for_in_rest(start, VarDeclOrExpr::Expr(Box::new(init)));
        }
        self.expect(&Token::Semi, ";")?;
        self.parse_for_rest(start, Some(VarDeclOrExpr::Expr(Box::new(init))))
    }

    fn parse_for_rest(
        &mut self,
        start: global_common::BytePos,
        init: Option<VarDeclOrExpr>,
    ) -> Result<Stmt, Error> {
        let test = if self.is(&Token::Semi)? {
            None
        } else {
            Some(Box::new(self.parse_expr(false)?))
        };
        self.expect(&Token::Semi, ";")?;
        let update = if self.is(&Token::RParen)? {
            None
        } else {
            Some(Box::new(self.parse_expr(false)?))
        };
        self.expect(&Token::RParen, ")")?;
        let body = self.parse_stmt()?;
        Ok(Stmt::For(ForStmt {
            node_id: self.finish(start),
            init,
            test,
            update,
            body: Box::new(body),
        }))
    }

    fn parse_for_in_rest(
        &mut self,
        start: global_common::BytePos,
        left: VarDeclOrExpr,
    ) -> Result<Stmt, Error> {
        self.bump()?; // in
        let right = self.parse_expr(false)?;
        self.expect(&Token::RParen, ")")?;
        let body = self.parse_stmt()?;
        Ok(Stmt::ForIn(ForInStmt {
            node_id: self.finish(start),
            left,
            right: Box::new(right),
            body: Box::new(body),
        }))
    }

    fn parse_switch_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // switch
        self.expect(&Token::LParen, "(")?;
        let discriminant = self.parse_expr(false)?;
        self.expect(&Token::RParen, ")")?;
        self.expect(&Token::LBrace, "{")?;
        let mut cases = Vec::new();
        while !self.eat(&Token::RBrace)? {
            let c_start = self.start()?;
            let test = if self.eat(&Token::Keyword(Keyword::Case))? {
                let t = self.parse_expr(false)?;
                Some(Box::new(t))
            } else if self.eat(&Token::Keyword(Keyword::Default))? {
                None
            } else {
                return Err(self.expected_err("case or default"));
            };
            self.expect(&Token::Colon, ":")?;
            let mut cons = Vec::new();
            while !matches!(
                self.cur()?,
                Token::Keyword(Keyword::Case) | Token::Keyword(Keyword::Default) | Token::RBrace
            ) {
                cons.push(self.parse_stmt()?);
            }
            cases.push(SwitchCase {
                node_id: self.finish(c_start),
                test,
                cons,
            });
        }
        Ok(Stmt::Switch(SwitchStmt {
            node_id: self.finish(start),
            discriminant: Box::new(discriminant),
            cases,
        }))
    }

    fn parse_throw_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // throw
        if self.had_line_break()? {
            return Err(self.expected_err("expression"));
        }
        let arg = self.parse_expr(false)?;
        self.semi()?;
        Ok(Stmt::Throw(ThrowStmt {
            node_id: self.finish(start),
            arg: Box::new(arg),
        }))
    }

    fn parse_try_stmt(&mut self) -> Result<Stmt, Error> {
        let start = self.start()?;
        self.bump()?; // try
        let block = self.parse_block()?;
        let handler = if self.is(&Token::Keyword(Keyword::Catch))? {
            let c_start = self.start()?;
            self.bump()?;
            self.expect(&Token::LParen, "(")?;
            let param = self.parse_binding_ident()?;
            self.expect(&Token::RParen, ")")?;
            let body = self.parse_block()?;
            Some(CatchClause {
                node_id: self.finish(c_start),
                param,
                body,
            })
        } else {
            None
        };
        let finalizer = if self.is(&Token::Keyword(Keyword::Finally))? {
            self.bump()?;
            Some(self.parse_block()?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.expected_err("catch or finally"));
        }
        Ok(Stmt::Try(TryStmt {
            node_id: self.finish(start),
            block,
            handler,
            finalizer,
        }))
    }
}

pub(crate) fn ident_name_of(token: &Token) -> Option<JsWord> {
    match token {
        Token::Ident(w) => Some(w.clone()),
        Token::Keyword(k) => Some(JsWord::from(k.as_str())),
        _ => None,
    }
}
