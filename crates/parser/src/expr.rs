use ast::*;
use global_common::BytePos;

use crate::error::{Error, SyntaxError};
use crate::stmt::ident_name_of;
use crate::token::{Keyword, Token};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Full expression, including the comma operator.
    pub(crate) fn parse_expr(&mut self, no_in: bool) -> Result<Expr, Error> {
        let start = self.start()?;
        let first = self.parse_assign_expr(no_in)?;
        if !self.is(&Token::Comma)? {
            return Ok(first);
        }
        let mut exprs = vec![first];
        while self.eat(&Token::Comma)? {
            exprs.push(self.parse_assign_expr(no_in)?);
        }
        Ok(Expr::Seq(SeqExpr {
            node_id: self.finish(start),
            exprs,
        }))
    }

    pub(crate) fn parse_assign_expr(&mut self, no_in: bool) -> Result<Expr, Error> {
        let start = self.start()?;
        let lhs = self.parse_cond_expr(no_in)?;
        let op = match self.cur()? {
            Token::AssignOp(op) => *op,
            _ => return Ok(lhs),
        };
        if !matches!(lhs, Expr::Ident(_) | Expr::Member(_)) {
            return Err(Error::new(self.cur_span()?, SyntaxError::InvalidAssignTarget));
        }
        self.bump()?;
        let rhs = self.parse_assign_expr(no_in)?;
        Ok(Expr::Assign(AssignExpr {
            node_id: self.finish(start),
            op,
            left: Box::new(lhs),
            right: Box::new(rhs),
        }))
    }

    fn parse_cond_expr(&mut self, no_in: bool) -> Result<Expr, Error> {
        let start = self.start()?;
        let test = self.parse_bin_expr(no_in, 1)?;
        if !self.eat(&Token::QuestionMark)? {
            return Ok(test);
        }
        // `in` is unrestricted between `?` and `:`.
        let cons = self.parse_assign_expr(false)?;
        self.expect(&Token::Colon, ":")?;
        let alt = self.parse_assign_expr(no_in)?;
        Ok(Expr::Cond(CondExpr {
            node_id: self.finish(start),
            test: Box::new(test),
            cons: Box::new(cons),
            alt: Box::new(alt),
        }))
    }

    /// Precedence-climbing binary expression parser.
    fn parse_bin_expr(&mut self, no_in: bool, min_prec: u8) -> Result<Expr, Error> {
        let start = self.start()?;
        let mut left = self.parse_unary_expr()?;
        loop {
            let op = match self.cur()? {
                Token::BinOp(op) => *op,
                Token::Keyword(Keyword::In) if !no_in => BinaryOp::In,
                Token::Keyword(Keyword::InstanceOf) => BinaryOp::InstanceOf,
                _ => break,
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.bump()?;
            let right = self.parse_bin_expr(no_in, prec + 1)?;
            left = Expr::Bin(BinExpr {
                node_id: self.finish(start),
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        let op = match self.cur()? {
            Token::PlusPlus | Token::MinusMinus => {
                let t = self.bump()?;
                let op = if t.token == Token::PlusPlus {
                    UpdateOp::PlusPlus
                } else {
                    UpdateOp::MinusMinus
                };
                let arg = self.parse_unary_expr()?;
                return Ok(Expr::Update(UpdateExpr {
                    node_id: self.finish(start),
                    op,
                    prefix: true,
                    arg: Box::new(arg),
                }));
            }
            Token::Bang => UnaryOp::Bang,
            Token::Tilde => UnaryOp::Tilde,
            Token::BinOp(BinaryOp::Add) => UnaryOp::Plus,
            Token::BinOp(BinaryOp::Sub) => UnaryOp::Minus,
            Token::Keyword(Keyword::TypeOf) => UnaryOp::TypeOf,
            Token::Keyword(Keyword::Void) => UnaryOp::Void,
            Token::Keyword(Keyword::Delete) => UnaryOp::Delete,
            _ => return self.parse_postfix_expr(),
        };
        self.bump()?;
        let arg = self.parse_unary_expr()?;
        Ok(Expr::Unary(UnaryExpr {
            node_id: self.finish(start),
            op,
            arg: Box::new(arg),
        }))
    }

    fn parse_postfix_expr(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        let arg = self.parse_lhs_expr()?;
        // Restricted production: no line break before postfix `++`/`--`.
        if matches!(self.cur()?, Token::PlusPlus | Token::MinusMinus) && !self.had_line_break()? {
            let t = self.bump()?;
            let op = if t.token == Token::PlusPlus {
                UpdateOp::PlusPlus
            } else {
                UpdateOp::MinusMinus
            };
            return Ok(Expr::Update(UpdateExpr {
                node_id: self.finish(start),
                op,
                prefix: false,
                arg: Box::new(arg),
            }));
        }
        Ok(arg)
    }

    fn parse_lhs_expr(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        let base = if self.is(&Token::Keyword(Keyword::New))? {
            self.parse_new_expr()?
        } else {
            self.parse_primary_expr()?
        };
        self.parse_call_and_member_tail(start, base, true)
    }

    /// `new Callee(args)` — the callee itself may only use member accesses;
    /// a nested `new` binds tighter than the argument list.
    fn parse_new_expr(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        self.bump()?; // new
        let callee_start = self.start()?;
        let callee_base = if self.is(&Token::Keyword(Keyword::New))? {
            self.parse_new_expr()?
        } else {
            self.parse_primary_expr()?
        };
        let callee = self.parse_call_and_member_tail(callee_start, callee_base, false)?;
        let args = if self.is(&Token::LParen)? {
            Some(self.parse_args()?)
        } else {
            None
        };
        Ok(Expr::New(NewExpr {
            node_id: self.finish(start),
            callee: Box::new(callee),
            args,
        }))
    }

    fn parse_call_and_member_tail(
        &mut self,
        start: BytePos,
        mut expr: Expr,
        allow_call: bool,
    ) -> Result<Expr, Error> {
        loop {
            match self.cur()? {
                Token::Dot => {
                    self.bump()?;
                    let p_start = self.start()?;
                    let sym = match ident_name_of(self.cur()?) {
                        Some(sym) => sym,
                        None => return Err(self.expected_err("property name")),
                    };
                    self.bump()?;
                    let prop = Ident {
                        node_id: self.finish(p_start),
                        sym,
                    };
                    expr = Expr::Member(MemberExpr {
                        node_id: self.finish(start),
                        obj: Box::new(expr),
                        prop: Box::new(Expr::Ident(prop)),
                        computed: false,
                    });
                }
                Token::LBracket => {
                    self.bump()?;
                    let prop = self.parse_expr(false)?;
                    self.expect(&Token::RBracket, "]")?;
                    expr = Expr::Member(MemberExpr {
                        node_id: self.finish(start),
                        obj: Box::new(expr),
                        prop: Box::new(prop),
                        computed: true,
                    });
                }
                Token::LParen if allow_call => {
                    let args = self.parse_args()?;
                    let free_call = matches!(expr, Expr::Ident(_));
                    expr = Expr::Call(CallExpr {
                        node_id: self.finish(start),
                        callee: Box::new(expr),
                        args,
                        free_call,
                    });
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, Error> {
        self.expect(&Token::LParen, "(")?;
        let mut args = Vec::new();
        if !self.is(&Token::RParen)? {
            loop {
                args.push(self.parse_assign_expr(false)?);
                if !self.eat(&Token::Comma)? {
                    break;
                }
            }
        }
        self.expect(&Token::RParen, ")")?;
        Ok(args)
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        match self.cur()? {
            Token::Ident(_) => {
                let t = self.bump()?;
                let sym = match t.token {
                    Token::Ident(w) => w,
                    _ => unreachable!(),
                };
                Ok(Expr::Ident(Ident {
                    node_id: self.finish(start),
                    sym,
                }))
            }
            Token::Num(_) => {
                let t = self.bump()?;
                let value = match t.token {
                    Token::Num(n) => n,
                    _ => unreachable!(),
                };
                Ok(Expr::Lit(Lit::Num(Number {
                    node_id: self.finish(start),
                    value,
                })))
            }
            Token::Str(_) => {
                let t = self.bump()?;
                let value = match t.token {
                    Token::Str(w) => w,
                    _ => unreachable!(),
                };
                Ok(Expr::Lit(Lit::Str(Str {
                    node_id: self.finish(start),
                    value,
                })))
            }
            Token::Regex(..) => {
                let t = self.bump()?;
                let (exp, flags) = match t.token {
                    Token::Regex(e, f) => (e, f),
                    _ => unreachable!(),
                };
                Ok(Expr::Lit(Lit::Regex(Regex {
                    node_id: self.finish(start),
                    exp,
                    flags,
                })))
            }
            Token::Keyword(Keyword::This) => {
                self.bump()?;
                Ok(Expr::This(ThisExpr {
                    node_id: self.finish(start),
                }))
            }
            Token::Keyword(Keyword::True) | Token::Keyword(Keyword::False) => {
                let t = self.bump()?;
                Ok(Expr::Lit(Lit::Bool(Bool {
                    node_id: self.finish(start),
                    value: t.token == Token::Keyword(Keyword::True),
                })))
            }
            Token::Keyword(Keyword::Null) => {
                self.bump()?;
                Ok(Expr::Lit(Lit::Null(Null {
                    node_id: self.finish(start),
                })))
            }
            Token::Keyword(Keyword::Function) => {
                self.bump()?;
                let ident = if matches!(self.cur()?, Token::Ident(_)) {
                    Some(self.parse_binding_ident()?)
                } else {
                    None
                };
                let function = self.parse_fn_rest(start)?;
                Ok(Expr::Fn(FnExpr {
                    node_id: self.finish(start),
                    ident,
                    function,
                }))
            }
            Token::LParen => {
                // Parentheses are not materialized; the printer re-derives
                // them from precedence.
                self.bump()?;
                let expr = self.parse_expr(false)?;
                self.expect(&Token::RParen, ")")?;
                Ok(expr)
            }
            Token::LBracket => self.parse_array_lit(),
            Token::LBrace => self.parse_object_lit(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_array_lit(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        self.bump()?; // [
        let mut elems = Vec::new();
        loop {
            if self.eat(&Token::RBracket)? {
                break;
            }
            if self.is(&Token::Comma)? {
                self.bump()?;
                elems.push(None);
                continue;
            }
            elems.push(Some(Box::new(self.parse_assign_expr(false)?)));
            if !self.is(&Token::RBracket)? {
                self.expect(&Token::Comma, ",")?;
            }
        }
        Ok(Expr::Array(ArrayLit {
            node_id: self.finish(start),
            elems,
        }))
    }

    fn parse_object_lit(&mut self) -> Result<Expr, Error> {
        let start = self.start()?;
        self.bump()?; // {
        let mut props = Vec::new();
        while !self.eat(&Token::RBrace)? {
            props.push(self.parse_prop()?);
            if !self.is(&Token::RBrace)? {
                self.expect(&Token::Comma, ",")?;
            }
        }
        Ok(Expr::Object(ObjectLit {
            node_id: self.finish(start),
            props,
        }))
    }

    fn parse_prop(&mut self) -> Result<Prop, Error> {
        let start = self.start()?;

        // `get`/`set` introduce an accessor only when followed by a key.
        let accessor = match self.cur()? {
            Token::Ident(w) => match &**w {
                "get" => Some(true),
                "set" => Some(false),
                _ => None,
            },
            _ => None,
        };
        if let Some(is_getter) = accessor {
            if !matches!(self.peek()?, Token::Colon | Token::Comma | Token::RBrace) {
                self.bump()?;
                let key = self.parse_prop_name()?;
                self.expect(&Token::LParen, "(")?;
                if is_getter {
                    self.expect(&Token::RParen, ")")?;
                    let body = self.parse_block()?.stmts;
                    return Ok(Prop::Getter(GetterProp {
                        node_id: self.finish(start),
                        key,
                        body,
                    }));
                }
                let param = self.parse_binding_ident()?;
                self.expect(&Token::RParen, ")")?;
                let body = self.parse_block()?.stmts;
                return Ok(Prop::Setter(SetterProp {
                    node_id: self.finish(start),
                    key,
                    param,
                    body,
                }));
            }
        }

        let key = self.parse_prop_name()?;
        self.expect(&Token::Colon, ":")?;
        let value = self.parse_assign_expr(false)?;
        Ok(Prop::KeyValue(KeyValueProp {
            node_id: self.finish(start),
            key,
            value: Box::new(value),
        }))
    }

    fn parse_prop_name(&mut self) -> Result<PropName, Error> {
        let start = self.start()?;
        match self.cur()? {
            Token::Str(_) => {
                let t = self.bump()?;
                let value = match t.token {
                    Token::Str(w) => w,
                    _ => unreachable!(),
                };
                Ok(PropName::Str(Str {
                    node_id: self.finish(start),
                    value,
                }))
            }
            Token::Num(_) => {
                let t = self.bump()?;
                let value = match t.token {
                    Token::Num(n) => n,
                    _ => unreachable!(),
                };
                Ok(PropName::Num(Number {
                    node_id: self.finish(start),
                    value,
                }))
            }
            tok => match ident_name_of(tok) {
                Some(sym) => {
                    self.bump()?;
                    Ok(PropName::Ident(Ident {
                        node_id: self.finish(start),
                        sym,
                    }))
                }
                None => Err(self.expected_err("property name")),
            },
        }
    }
}
