use std::path::Path;

use compiler::codegen::emitter::CodeBuffer;
use compiler::codegen::module::write_module;
use compiler::codegen::translator::Translator;
use compiler::config::Config;
use compiler::context::Context;
use compiler::err::CompileError;
use compiler::syntax::ast::Program;

pub mod compiler;
pub mod constants;
pub mod util;

pub type CompileResult<T> = Result<T, CompileError>;

/// Lowers `program` into a fully resolved instruction buffer.
///
/// # Errors
pub fn generate(context: &mut Context, program: &Program, config: &Config) -> CompileResult<CodeBuffer> {
    Translator::new(config).translate(context, program)
}

/// # Errors
pub fn emit_module(buffer: &CodeBuffer, path: &Path) -> CompileResult<()> {
    write_module(buffer, path)
}

/// Generates `program` and writes the module to `path`. Nothing is written
/// unless generation succeeds.
///
/// # Errors
pub fn compile(context: &mut Context, program: &Program, config: &Config, path: &Path) -> CompileResult<CodeBuffer> {
    let buffer = generate(context, program, config)?;
    emit_module(&buffer, path)?;
    Ok(buffer)
}
