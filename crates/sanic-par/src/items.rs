//! `File := (Extern | Statement)*`
//! `Extern := "extern" Name ":" FuncType ";"`

use sanic_lex::TokenKind;
use sanic_util::CompileResult;

use crate::ast::{Extern, File};
use crate::Parser;

impl Parser {
    pub fn parse_file(&mut self) -> CompileResult<File> {
        let mut file = File::default();
        while self.peek().is_some() {
            if self.peek_is_text("extern") {
                file.externs.push(self.parse_extern()?);
            } else {
                file.statements.push(self.parse_statement()?);
            }
        }
        Ok(file)
    }

    fn parse_extern(&mut self) -> CompileResult<Extern> {
        self.expect_text("extern")?;
        let name = self.expect(|t| t.kind == TokenKind::Word, "identifier")?;
        self.expect_text(":")?;
        let ty = self.parse_func_type()?;
        self.expect_text(";")?;
        Ok(Extern { name: name.text.clone(), ty })
    }
}
