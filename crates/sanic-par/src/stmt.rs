//! `Statement := "let" Name ":" Type "=" Expr ";" | Expr ";"`

use sanic_lex::TokenKind;
use sanic_util::CompileResult;

use crate::ast::Stmt;
use crate::Parser;

impl Parser {
    pub(crate) fn parse_statement(&mut self) -> CompileResult<Stmt> {
        if self.peek_is_text("let") {
            self.parse_let()
        } else {
            let expr = self.parse_expr()?;
            self.expect_text(";")?;
            Ok(Stmt::Expr(expr))
        }
    }

    fn parse_let(&mut self) -> CompileResult<Stmt> {
        self.expect_text("let")?;
        let name = self.expect(|t| t.kind == TokenKind::Word, "identifier")?;
        self.expect_text(":")?;
        let ty = self.parse_type()?;
        self.expect_text("=")?;
        let value = self.parse_expr()?;
        self.expect_text(";")?;
        Ok(Stmt::Let { name: name.text.clone(), ty, value })
    }
}
