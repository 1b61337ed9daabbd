//! Precedence-climbing expression grammar:
//!
//! ```text
//! Expr    := AddSub
//! AddSub  := MulDiv (("+"|"-") MulDiv)*     -- left-assoc
//! MulDiv  := Paren  (("*"|"/") Paren)*      -- left-assoc
//! Paren   := "(" Expr ")" | Leaf
//! Leaf    := CharLit | IntLit | StrLit | Call | IdentRef
//! Call    := Name "(" (Expr ("," Expr)*)? ")"
//! ```
//!
//! Left recursion is encoded as iteration: each level parses one operand
//! at the level below, then folds in further operands of its own
//! operators one at a time, building a left-leaning tree.

use std::rc::Rc;

use sanic_lex::{Token, TokenKind};
use sanic_util::{CompileError, CompileResult};

use crate::ast::{BinOpKind, Expr};
use crate::Parser;

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> CompileResult<Expr> {
        self.parse_add_sub()
    }

    fn parse_add_sub(&mut self) -> CompileResult<Expr> {
        let mut left = self.parse_mul_div()?;
        loop {
            let kind = match self.peek() {
                Some(t) if t.text == "+" => BinOpKind::Add,
                Some(t) if t.text == "-" => BinOpKind::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_mul_div()?;
            left = Expr::BinOp { kind, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn parse_mul_div(&mut self) -> CompileResult<Expr> {
        let mut left = self.parse_paren()?;
        loop {
            let kind = match self.peek() {
                Some(t) if t.text == "*" => BinOpKind::Mul,
                Some(t) if t.text == "/" => BinOpKind::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_paren()?;
            left = Expr::BinOp { kind, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn parse_paren(&mut self) -> CompileResult<Expr> {
        if self.peek_is_text("(") {
            self.advance();
            let inner = self.parse_expr()?;
            self.expect_text(")")?;
            Ok(inner)
        } else {
            self.parse_leaf()
        }
    }

    fn parse_leaf(&mut self) -> CompileResult<Expr> {
        let Some(tok) = self.peek().cloned() else {
            return Err(CompileError::parse("Expected \"expression\", but got EOF."));
        };

        match tok.kind {
            TokenKind::Integer => {
                self.advance();
                let value = tok
                    .text
                    .parse::<i32>()
                    .map_err(|_| CompileError::parse(format!("Invalid integer literal: {}", tok.text)))?;
                Ok(Expr::Integer { token: tok, value })
            }
            TokenKind::Char => {
                self.advance();
                let value = tok
                    .text
                    .chars()
                    .next()
                    .ok_or_else(|| CompileError::illegal_state("char literal token had no text"))?
                    as i32;
                Ok(Expr::Char { token: tok, value })
            }
            TokenKind::Str => {
                self.advance();
                let value = tok.text.clone();
                Ok(Expr::Str { token: tok, value })
            }
            TokenKind::Word => {
                self.advance();
                if self.peek_is_text("(") {
                    self.parse_call(tok)
                } else {
                    let name = tok.text.clone();
                    Ok(Expr::Ident { token: tok, name })
                }
            }
            TokenKind::Punct => Err(CompileError::parse(format!(
                "Expected \"expression\", but got \"{}\" ({})",
                tok.text, tok.span
            ))),
        }
    }

    fn parse_call(&mut self, callee_token: Rc<Token>) -> CompileResult<Expr> {
        self.expect_text("(")?;
        let mut args = Vec::new();
        if !self.peek_is_text(")") {
            args.push(self.parse_expr()?);
            while self.peek_is_text(",") {
                self.advance();
                args.push(self.parse_expr()?);
            }
        }
        self.expect_text(")")?;
        let callee = callee_token.text.clone();
        Ok(Expr::Call { callee_token, callee, args })
    }
}
