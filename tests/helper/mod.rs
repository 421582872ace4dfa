#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use stackc::compile;
use stackc::compiler::codegen::emitter::CodeBuffer;
use stackc::compiler::config::Config;
use stackc::compiler::context::Context;
use stackc::compiler::err::CompileError;
use stackc::compiler::symbol::SymbolTable;
use stackc::compiler::syntax::ast::crumb::Declaration;
use stackc::compiler::syntax::ast::crumb::Position;
use stackc::compiler::syntax::ast::crumb::Variable;
use stackc::compiler::syntax::ast::expression::Expression;
use stackc::compiler::syntax::ast::operator::Binary;
use stackc::compiler::syntax::ast::statement::Statement;
use stackc::compiler::syntax::ast::ty::DataType;
use stackc::compiler::syntax::ast::Program;
use stackc::generate;
use stackc::util::common::Array;
use stackc::util::file::gen_tmp_module_path;

pub fn array<T>(items: Vec<T>) -> Array<T> {
    items.into_iter().map(Rc::new).collect()
}

pub fn name(identifier: &str) -> Rc<String> {
    Rc::new(identifier.to_string())
}

pub fn var(identifier: &str) -> Rc<Expression> {
    Rc::new(Expression::Identifier(name(identifier)))
}

pub fn int(literal: &str) -> Rc<Expression> {
    Rc::new(Expression::IntLiteral(name(literal)))
}

pub fn float(literal: &str) -> Rc<Expression> {
    Rc::new(Expression::FloatLiteral(name(literal)))
}

pub fn binary(operator: Binary, data_type: DataType, left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    Rc::new(Expression::Binary(operator, Rc::new(data_type), left, right))
}

pub fn variable(identifier: &str, data_type: DataType) -> Declaration {
    Declaration::Variable(Variable(name(identifier), Rc::new(data_type), Position::default()))
}

pub fn program(statements: Vec<Statement>) -> Program {
    Program::new(array(statements))
}

/// A context whose table already places `variables` at offsets 0, 1, ...
pub fn context_with(variables: &[(&str, DataType)]) -> Context {
    let mut symbol_table = SymbolTable::new();
    for (identifier, data_type) in variables {
        let data_type = match data_type {
            DataType::Integer => DataType::Integer,
            DataType::Float => DataType::Float,
            DataType::Boolean => DataType::Boolean,
            _ => panic!("test variables are scalars"),
        };
        symbol_table.declare(name(identifier), Rc::new(data_type));
        symbol_table.allocate(name(identifier)).unwrap();
    }
    Context::with_symbol_table(symbol_table)
}

pub fn words(buffer: &CodeBuffer) -> Vec<&str> {
    buffer.words().iter().map(String::as_str).collect()
}

pub fn generate_words(context: &mut Context, program: &Program) -> Vec<String> {
    match generate(context, program, &Config::default()) {
        Ok(buffer) => buffer.words().to_vec(),
        Err(e) => e.report(),
    }
}

/// Compiles into a fresh temp module and returns its path and, when written,
/// its content.
pub fn compile_to_tmp(context: &mut Context, program: &Program) -> (PathBuf, Result<String, CompileError>) {
    let path = gen_tmp_module_path();
    let result = compile(context, program, &Config::default(), &path)
        .map(|_| fs::read_to_string(&path).unwrap());
    (path, result)
}
