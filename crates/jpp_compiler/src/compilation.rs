use std::path::PathBuf;

use jpp_backend::codegen::Codegen;
use jpp_backend::linker::Linker;
use jpp_backend::ObjectProduct;
use jpp_ir::ast::Program;
use jpp_middle::{find_entry_point, type_check, EntryPoint};
use target_lexicon::Triple;

use crate::{CompilerError, CompilerResult};

/// Where and how to build one program.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_name: String,
    pub build_dir: PathBuf,
    pub target: Triple,

    /// `None` to stop after writing the object file.
    pub linker: Option<Linker>,
}

impl BuildOptions {
    pub fn output_dir(&self) -> PathBuf {
        self.build_dir.join(&self.output_name)
    }

    pub fn object_path(&self) -> PathBuf {
        self.output_dir().join(format!("{}.o", self.output_name))
    }

    pub fn executable_path(&self) -> PathBuf {
        self.output_dir().join(&self.output_name)
    }
}

#[derive(Debug)]
pub struct Artifacts {
    pub object: PathBuf,
    pub executable: Option<PathBuf>,
}

pub fn parse(source: &str) -> CompilerResult<Program> {
    Ok(jpp_frontend::parse_source(source)?)
}

pub fn check(program: &Program) -> CompilerResult<EntryPoint<'_>> {
    let errors = type_check(program);

    if !errors.is_empty() {
        for error in &errors {
            log::error!("{error}");
        }
        return Err(CompilerError::Type(errors));
    }

    Ok(find_entry_point(program)?)
}

/// Check and translate a program into an object.
pub fn compile(program: &Program, target: &Triple, name: &str) -> CompilerResult<ObjectProduct> {
    let entry = check(program)?;

    let mut codegen = Codegen::new(target.clone(), name)?;
    codegen.compile_program(program)?;

    if entry.needs_stub() {
        codegen.define_entry_stub(entry.func)?;
    }

    Ok(codegen.finish())
}

/// Compile `source`, write the object file and link it.
///
/// If linking fails the object file is left in place.
pub fn build(source: &str, options: &BuildOptions) -> CompilerResult<Artifacts> {
    let program = parse(source)?;
    let object = compile(&program, &options.target, &options.output_name)?;

    let output_dir = options.output_dir();
    std::fs::create_dir_all(&output_dir)?;

    let object_path = options.object_path();
    std::fs::write(&object_path, object.emit()?)?;

    log::info!("wrote object file {}", object_path.display());

    let Some(linker) = &options.linker else {
        return Ok(Artifacts {
            object: object_path,
            executable: None,
        });
    };

    let executable = options.executable_path();
    linker.link(&[&object_path], &executable)?;

    Ok(Artifacts {
        object: object_path,
        executable: Some(executable),
    })
}
