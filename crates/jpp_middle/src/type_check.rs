use std::collections::HashMap;

use jpp_ir::ast::*;
use jpp_ir::Type;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("line {line}: literal `{value}` is out of range for type `{ty}` (max {})", .ty.max_value())]
    LiteralOutOfRange { value: u64, ty: Type, line: usize },

    #[error("line {line}: missing return statement in function `{func}` that returns type `{ty}`")]
    MissingReturn { func: String, ty: Type, line: usize },

    #[error("line {line}: function `{func}` is already defined at line {first_line}")]
    DuplicateFunction {
        func: String,
        line: usize,
        first_line: usize,
    },
}

/// Check every function of the program, collecting all errors found.
pub fn type_check(program: &Program) -> Vec<TypeError> {
    let mut checker = TypeChecker::default();

    for func in &program.functions {
        checker.check_func_decl(func);
    }

    checker.errors
}

#[derive(Default)]
struct TypeChecker<'p> {
    seen: HashMap<&'p str, usize>,
    errors: Vec<TypeError>,
}

impl<'p> TypeChecker<'p> {
    fn check_func_decl(&mut self, func: &'p FunctionDecl) {
        if let Some(&first_line) = self.seen.get(func.name.as_str()) {
            self.errors.push(TypeError::DuplicateFunction {
                func: func.name.clone(),
                line: func.line,
                first_line,
            });
        } else {
            self.seen.insert(&func.name, func.line);
        }

        let mut returns = false;

        for stmt in &func.body {
            match stmt {
                Stmt::Return(ret) => {
                    self.check_expr(&ret.value, func.return_type);
                    returns = true;
                }
            }
        }

        if !returns {
            self.errors.push(TypeError::MissingReturn {
                func: func.name.clone(),
                ty: func.return_type,
                line: func.line,
            });
        }
    }

    fn check_expr(&mut self, expr: &Expr, expected: Type) {
        match expr {
            Expr::IntegerLiteral(literal) => {
                if !expected.fits(literal.value) {
                    self.errors.push(TypeError::LiteralOutOfRange {
                        value: literal.value,
                        ty: expected,
                        line: literal.line,
                    });
                }
            }
        }
    }
}
