//! Lowering from the AST's two-type system to LLVM types.
//!
//! Only two shapes are ever materialized: `int` becomes `i32` and
//! `string` becomes a pointer to bytes (SPEC_FULL's Open Question:
//! no wider integers are invented even though the grammar has room for
//! them). A function-typed annotation — never actually instantiated as
//! a value since this language has no first-class functions — lowers to
//! the same opaque pointer for grammar completeness.

use inkwell::context::Context;
use inkwell::types::{BasicMetadataTypeEnum, BasicTypeEnum, FunctionType};
use inkwell::AddressSpace;

use sanic_par::ast::{FuncType, Type};

/// The bit width chosen for character literals: wide enough for a
/// `putchar`-style call, which is the only consumer in practice.
pub const CHAR_BIT_WIDTH: u32 = 32;
/// The bit width for `int`.
pub const INT_BIT_WIDTH: u32 = 32;

pub fn basic_type<'ctx>(context: &'ctx Context, ty: &Type) -> BasicTypeEnum<'ctx> {
    match ty {
        Type::Int => context.i32_type().into(),
        Type::Str => context.ptr_type(AddressSpace::default()).into(),
        Type::Func(_) => context.ptr_type(AddressSpace::default()).into(),
    }
}

pub fn function_type<'ctx>(context: &'ctx Context, proto: &FuncType) -> FunctionType<'ctx> {
    let params: Vec<BasicMetadataTypeEnum<'ctx>> =
        proto.params.iter().map(|p| basic_type(context, p).into()).collect();
    let ret = basic_type(context, &proto.ret);
    ret.fn_type(&params, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_string_map_to_i32_and_pointer() {
        let context = Context::create();
        assert!(basic_type(&context, &Type::Int).is_int_type());
        assert!(basic_type(&context, &Type::Str).is_pointer_type());
    }

    #[test]
    fn function_type_has_matching_arity() {
        let context = Context::create();
        let proto = FuncType { params: vec![Type::Int, Type::Str], ret: Box::new(Type::Int) };
        let fn_ty = function_type(&context, &proto);
        assert_eq!(fn_ty.count_param_types(), 2);
    }
}
