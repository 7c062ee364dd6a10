use std::collections::HashMap;

use cranelift::codegen::ir::types::I32;
use cranelift::codegen::verify_function;
use cranelift::prelude::*;
use cranelift_module::{FuncId, Linkage, Module as _};
use cranelift_object::{ObjectBuilder, ObjectModule, ObjectProduct};
use jpp_ir::ast::*;
use jpp_ir::ENTRY_SYMBOL;
use target_lexicon::Triple;

use crate::layout::{LiteralAsImm, TypeExt};
use crate::{BackendError, BackendResult};

type IrType = jpp_ir::Type;

/// One compilation's worth of backend state.
///
/// Owns the cranelift context, builder context and object module. Consumed by
/// [`Codegen::finish`], which hands back the object to be written out.
pub struct Codegen {
    ctx: codegen::Context,
    builder_ctx: FunctionBuilderContext,
    module: ObjectModule,

    funcs: HashMap<String, FuncId>,
}

impl Codegen {
    pub fn new(target: Triple, module_name: &str) -> BackendResult<Self> {
        let mut flag_builder = settings::builder();
        flag_builder.set("is_pic", "true")?;
        flag_builder.set("opt_level", "none")?;

        let flags = settings::Flags::new(flag_builder);

        let isa = match isa::lookup(target.clone()) {
            Ok(isa_builder) => isa_builder.finish(flags)?,
            Err(_) => {
                return Err(BackendError::UnsupportedArch(target.architecture));
            }
        };

        log::debug!("generating code for target `{target}`");

        let module_builder =
            ObjectBuilder::new(isa, module_name, cranelift_module::default_libcall_names())?;

        let module = ObjectModule::new(module_builder);

        Ok(Self {
            ctx: module.make_context(),
            builder_ctx: FunctionBuilderContext::new(),
            module,

            funcs: HashMap::new(),
        })
    }

    pub fn compile_program(&mut self, program: &Program) -> BackendResult<()> {
        for func in &program.functions {
            self.gen_func_decl(func)?;
        }

        Ok(())
    }

    /// Define a `main` symbol that calls `entry` and returns its result as
    /// the process exit status.
    pub fn define_entry_stub(&mut self, entry: &FunctionDecl) -> BackendResult<()> {
        let callee_id = *self
            .funcs
            .get(&entry.name)
            .ok_or_else(|| BackendError::UndefinedEntryPoint(entry.name.clone()))?;

        self.module.clear_context(&mut self.ctx);
        self.ctx.func.signature.returns.push(AbiParam::new(I32));

        let mut builder = FunctionBuilder::new(&mut self.ctx.func, &mut self.builder_ctx);

        let block = builder.create_block();
        builder.switch_to_block(block);
        builder.seal_block(block);

        let callee = self.module.declare_func_in_func(callee_id, builder.func);
        let call = builder.ins().call(callee, &[]);
        let value = builder.inst_results(call)[0];

        let ret_ty = entry.return_type;
        let status = match ret_ty.bits() {
            32 => value,
            64 => builder.ins().ireduce(I32, value),
            _ if ret_ty.is_signed() => builder.ins().sextend(I32, value),
            _ => builder.ins().uextend(I32, value),
        };

        builder.ins().return_(&[status]);
        builder.finalize();

        self.define(ENTRY_SYMBOL)?;

        Ok(())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn finish(self) -> ObjectProduct {
        self.module.finish()
    }

    fn gen_func_decl(&mut self, func_decl: &FunctionDecl) -> BackendResult<()> {
        self.module.clear_context(&mut self.ctx);

        self.ctx
            .func
            .signature
            .returns
            .push(func_decl.return_type.abi_param());

        let mut builder = FunctionBuilder::new(&mut self.ctx.func, &mut self.builder_ctx);

        let entry_block = builder.create_block();
        builder.switch_to_block(entry_block);
        builder.seal_block(entry_block); // no predecessors

        let mut func_codegen = FuncCodegen {
            builder,
            ret_ty: func_decl.return_type,
        };

        for stmt in &func_decl.body {
            func_codegen.gen_stmt(stmt);
        }

        func_codegen.builder.finalize();

        self.define(&func_decl.name)?;

        Ok(())
    }

    /// Verify the function in the context, then declare and define it.
    fn define(&mut self, name: &str) -> BackendResult<FuncId> {
        verify_function(&self.ctx.func, self.module.isa()).map_err(|errors| {
            BackendError::Verifier {
                func: name.to_owned(),
                errors,
            }
        })?;

        log::debug!("ir for `{name}`:\n{}", self.ctx.func.display());

        let id = self
            .module
            .declare_function(name, Linkage::Export, &self.ctx.func.signature)?;
        self.module.define_function(id, &mut self.ctx)?;

        self.funcs.insert(name.to_owned(), id);

        Ok(id)
    }
}

struct FuncCodegen<'a> {
    builder: FunctionBuilder<'a>,
    ret_ty: IrType,
}

impl FuncCodegen<'_> {
    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(ret) => {
                let value = self.gen_expr(&ret.value);
                self.builder.ins().return_(&[value]);

                let after_return = self.builder.create_block();
                self.builder.switch_to_block(after_return);
                self.builder.seal_block(after_return); // nothing jumps here, dead code
            }
        }
    }

    fn gen_expr(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::IntegerLiteral(literal) => self
                .builder
                .ins()
                .iconst(self.ret_ty.clif_type(), literal.as_imm()),
        }
    }
}
