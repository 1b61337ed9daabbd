//! `Type := "int" | "string" | FuncType`
//! `FuncType := "(" (Type ("," Type)*)? ")" "->" Type`

use sanic_util::{CompileError, CompileResult};

use crate::ast::{FuncType, Type};
use crate::Parser;

impl Parser {
    pub(crate) fn parse_type(&mut self) -> CompileResult<Type> {
        match self.peek() {
            Some(tok) if tok.text == "int" => {
                self.advance();
                Ok(Type::Int)
            }
            Some(tok) if tok.text == "string" => {
                self.advance();
                Ok(Type::Str)
            }
            Some(tok) if tok.text == "(" => Ok(Type::Func(self.parse_func_type()?)),
            Some(tok) => Err(CompileError::parse(format!(
                "Expected \"type\", but got \"{}\" ({})",
                tok.text, tok.span
            ))),
            None => Err(CompileError::parse("Expected \"type\", but got EOF.")),
        }
    }

    pub(crate) fn parse_func_type(&mut self) -> CompileResult<FuncType> {
        self.expect_text("(")?;
        let mut params = Vec::new();
        if !self.peek_is_text(")") {
            params.push(self.parse_type()?);
            while self.peek_is_text(",") {
                self.advance();
                params.push(self.parse_type()?);
            }
        }
        self.expect_text(")")?;
        self.expect_text("->")?;
        let ret = Box::new(self.parse_type()?);
        Ok(FuncType { params, ret })
    }
}
