use jpp_ir::ast::{FunctionDecl, Program};
use jpp_ir::ENTRY_SYMBOL;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryPointError {
    #[error("program has no functions, so there is no entry point")]
    Missing,

    #[error("no `main` function, and {count} functions could serve as the entry point")]
    Ambiguous { count: usize },
}

/// The function the executable starts in.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoint<'p> {
    pub func: &'p FunctionDecl,
}

impl EntryPoint<'_> {
    /// Whether a `main` symbol has to be generated to call the entry point.
    pub fn needs_stub(&self) -> bool {
        self.func.name != ENTRY_SYMBOL
    }
}

/// Use `main` if there is one, otherwise the only function in the program.
pub fn find_entry_point(program: &Program) -> Result<EntryPoint<'_>, EntryPointError> {
    if let Some(func) = program.function(ENTRY_SYMBOL) {
        return Ok(EntryPoint { func });
    }

    match program.functions.as_slice() {
        [] => Err(EntryPointError::Missing),
        [func] => {
            log::debug!("using `{}` as the entry point", func.name);
            Ok(EntryPoint { func })
        }
        funcs => Err(EntryPointError::Ambiguous { count: funcs.len() }),
    }
}
