pub mod codegen;
pub mod config;
pub mod context;
pub mod err;
pub mod symbol;
pub mod syntax;
