//! C6: lowering from the AST directly to LLVM IR. There is no MIR or
//! LIR stage — each AST node is translated to instructions the moment
//! it is visited, matching the emitter to the teacher's single-pass
//! `LlvmBackend` rather than a multi-stage pipeline.

use std::collections::HashMap;

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::{Linkage, Module};
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, FunctionValue, IntValue};

use sanic_par::ast::{BinOpKind, Expr, Extern, File, Stmt};
use sanic_util::{CompileError, CompileResult, Interner, Symbol};

use crate::types::{basic_type, function_type};

/// Owns every piece of mutable LLVM state for one compilation unit.
/// The teacher's original backend reached into global LLVM context;
/// here everything a lowering rule needs is a field on this struct.
pub struct Emitter<'ctx> {
    context: &'ctx Context,
    module: Module<'ctx>,
    builder: Builder<'ctx>,
    /// Every extern/let/call name the emitter has seen goes through here
    /// before it is used as a map key, so name comparisons are symbol
    /// comparisons rather than string comparisons.
    interner: Interner,
    /// Declared externs, keyed by interned name.
    functions: HashMap<Symbol, FunctionValue<'ctx>>,
    /// Name to last-bound SSA value, scoped to the synthesized `main`.
    /// `let` never allocates: it just extends this map.
    locals: HashMap<Symbol, BasicValueEnum<'ctx>>,
}

impl<'ctx> Emitter<'ctx> {
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();
        Emitter {
            context,
            module,
            builder,
            interner: Interner::new(),
            functions: HashMap::new(),
            locals: HashMap::new(),
        }
    }

    /// Lowers a whole file: externs, then a synthesized `main` wrapping
    /// the statements, terminated by `ret i32 0`.
    pub fn emit_file(&mut self, file: &File) -> CompileResult<()> {
        for ext in &file.externs {
            self.emit_extern(ext)?;
        }

        let main_type = self.context.i32_type().fn_type(&[], false);
        let main_fn = self.module.add_function("main", main_type, None);
        let entry = self.context.append_basic_block(main_fn, "entry");
        self.builder.position_at_end(entry);

        for stmt in &file.statements {
            self.emit_stmt(stmt)?;
        }

        let zero = self.context.i32_type().const_int(0, false);
        self.builder
            .build_return(Some(&zero))
            .map_err(|e| CompileError::illegal_state(format!("failed to build return: {e}")))?;

        if !main_fn.verify(true) {
            return Err(CompileError::illegal_state("generated `main` failed LLVM verification"));
        }

        Ok(())
    }

    /// Renders the module to textual LLVM IR. Consumes nothing; callers
    /// may keep emitting into the same module afterward if ever needed.
    pub fn emit_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    fn emit_extern(&mut self, ext: &Extern) -> CompileResult<()> {
        let symbol = self.interner.intern(&ext.name);
        if self.functions.contains_key(&symbol) {
            return Err(CompileError::redeclared(ext.name.clone()));
        }
        let fn_type = function_type(self.context, &ext.ty);
        let function = self.module.add_function(&ext.name, fn_type, Some(Linkage::External));
        self.functions.insert(symbol, function);
        Ok(())
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> CompileResult<()> {
        match stmt {
            Stmt::Expr(expr) => {
                self.emit_expr(expr)?;
                Ok(())
            }
            Stmt::Let { name, ty, value } => {
                let val = self.emit_expr(value)?;
                let expected = basic_type(self.context, ty);
                if val.get_type() != expected {
                    return Err(CompileError::ty(format!(
                        "`{name}` declared as `{ty}` but bound to a value of a different type"
                    )));
                }
                let symbol = self.interner.intern(name);
                self.locals.insert(symbol, val);
                Ok(())
            }
        }
    }

    fn emit_expr(&mut self, expr: &Expr) -> CompileResult<BasicValueEnum<'ctx>> {
        match expr {
            Expr::Integer { value, .. } => {
                Ok(self.context.i32_type().const_int(*value as u64, true).into())
            }
            Expr::Char { value, .. } => {
                Ok(self.context.i32_type().const_int(*value as u64, true).into())
            }
            Expr::Str { value, .. } => {
                let global = self
                    .builder
                    .build_global_string_ptr(value, "str")
                    .map_err(|e| CompileError::illegal_state(format!("failed to build string constant: {e}")))?;
                Ok(global.as_pointer_value().into())
            }
            Expr::Ident { name, .. } => {
                let symbol = self.interner.intern(name);
                self.locals.get(&symbol).copied().ok_or_else(|| CompileError::undeclared(name.clone()))
            }
            Expr::Call { callee, args, .. } => self.emit_call(callee, args),
            Expr::BinOp { kind, left, right } => self.emit_binop(*kind, left, right),
        }
    }

    fn emit_call(&mut self, callee: &str, args: &[Expr]) -> CompileResult<BasicValueEnum<'ctx>> {
        let symbol = self.interner.intern(callee);
        let function = self
            .functions
            .get(&symbol)
            .copied()
            .ok_or_else(|| CompileError::undeclared(callee.to_string()))?;

        let expected = function.count_params() as usize;
        if expected != args.len() {
            return Err(CompileError::ty(format!(
                "`{callee}` expects {expected} argument(s), got {}",
                args.len()
            )));
        }

        let mut arg_values: Vec<BasicMetadataValueEnum<'ctx>> = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.emit_expr(arg)?.into());
        }

        let call_site = self
            .builder
            .build_call(function, &arg_values, "calltmp")
            .map_err(|e| CompileError::illegal_state(format!("failed to build call: {e}")))?;

        call_site
            .try_as_basic_value()
            .left()
            .ok_or_else(|| CompileError::illegal_state(format!("`{callee}` has no return value to use here")))
    }

    fn emit_binop(&mut self, kind: BinOpKind, left: &Expr, right: &Expr) -> CompileResult<BasicValueEnum<'ctx>> {
        let lhs = self.as_int(self.emit_expr(left)?)?;
        let rhs = self.as_int(self.emit_expr(right)?)?;

        let result = match kind {
            BinOpKind::Add => self.builder.build_int_add(lhs, rhs, "addtmp"),
            BinOpKind::Sub => self.builder.build_int_sub(lhs, rhs, "subtmp"),
            BinOpKind::Mul => self.builder.build_int_mul(lhs, rhs, "multmp"),
            BinOpKind::Div => self.builder.build_int_signed_div(lhs, rhs, "divtmp"),
        }
        .map_err(|e| CompileError::illegal_state(format!("failed to build `{kind}`: {e}")))?;

        Ok(result.into())
    }

    fn as_int(&self, value: BasicValueEnum<'ctx>) -> CompileResult<IntValue<'ctx>> {
        match value {
            BasicValueEnum::IntValue(v) => Ok(v),
            other => Err(CompileError::ty(format!(
                "expected an integer operand, got a value of type `{}`",
                other.get_type()
            ))),
        }
    }

    pub fn main_function(&self) -> Option<FunctionValue<'ctx>> {
        self.module.get_function("main")
    }

    /// Exposes the underlying module so the driver can hand it to
    /// `inkwell`'s target-machine APIs (object emission, triple/data-layout
    /// configuration). The emitter itself never touches target machinery.
    pub fn module(&self) -> &Module<'ctx> {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use sanic_lex::Lexer;
    use sanic_par::Parser;
    use sanic_util::FileId;

    use super::*;

    fn emit(src: &str) -> CompileResult<String> {
        let tokens = Lexer::new(src, FileId::DUMMY).tokenize()?;
        let file = Parser::parse(tokens)?;
        let context = Context::create();
        let mut emitter = Emitter::new(&context, "test");
        emitter.emit_file(&file)?;
        Ok(emitter.emit_to_string())
    }

    #[test]
    fn hello_character_emits_a_putchar_call() {
        let ir = emit("extern putchar: (int) -> int;\nputchar('H');\n").unwrap();
        assert!(ir.contains("declare i32 @putchar(i32)"));
        assert!(ir.contains("call i32 @putchar(i32 72)"));
        assert!(ir.contains("ret i32 0"));
    }

    #[test]
    fn let_binding_is_a_pure_ssa_value_with_no_alloca() {
        let ir = emit("let x: int = 2 + 3;\n").unwrap();
        assert!(!ir.contains("alloca"));
        assert!(ir.contains("add i32 2, 3"));
    }

    #[test]
    fn calling_an_undeclared_function_is_undeclared_error() {
        let err = emit("foo();\n").unwrap_err();
        assert_eq!(err.kind(), "Undeclared");
        assert_eq!(err.to_string(), "Undeclared: foo");
    }

    #[test]
    fn wrong_arity_call_is_a_type_error() {
        let err = emit("extern putchar: (int) -> int;\nputchar(1, 2);\n").unwrap_err();
        assert_eq!(err.kind(), "Type");
    }

    #[test]
    fn redeclaring_an_extern_is_a_redeclared_error() {
        let src = "extern putchar: (int) -> int;\nextern putchar: (int) -> int;\n";
        let err = emit(src).unwrap_err();
        assert_eq!(err.kind(), "Redeclared");
    }

    #[test]
    fn precedence_scenario_lowers_to_nested_arithmetic() {
        let ir = emit("let x: int = 1 + 2 * 3 - 4 / (5 + 6);\n").unwrap();
        assert!(ir.contains("mul"));
        assert!(ir.contains("sdiv"));
        assert!(ir.contains("sub"));
    }

    #[test]
    fn string_literal_lowers_to_a_global_constant_pointer() {
        let ir = emit("let s: string = \"hi\";\n").unwrap();
        assert!(ir.contains("private unnamed_addr constant"));
    }
}
