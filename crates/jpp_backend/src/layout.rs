use cranelift::codegen::ir::{types, AbiParam, Type as ClifType};
use jpp_ir::ast::IntegerLiteral;
use jpp_ir::Type;

pub trait TypeExt {
    /// The cranelift integer type of the same width.
    fn clif_type(&self) -> ClifType;

    /// A return value of this type, extended according to its signedness.
    fn abi_param(&self) -> AbiParam;
}

impl TypeExt for Type {
    fn clif_type(&self) -> ClifType {
        match self.bits() {
            8 => types::I8,
            16 => types::I16,
            32 => types::I32,
            _ => types::I64,
        }
    }

    fn abi_param(&self) -> AbiParam {
        let param = AbiParam::new(self.clif_type());

        if self.is_signed() {
            param.sext()
        } else {
            param.uext()
        }
    }
}

pub trait LiteralAsImm {
    /// Get this literal as an immediate value.
    ///
    /// Only `uint64` literals can exceed `i64::MAX`, and those keep their bits.
    fn as_imm(&self) -> i64;
}

impl LiteralAsImm for IntegerLiteral {
    fn as_imm(&self) -> i64 {
        self.value as i64
    }
}
