pub mod emitter;
pub mod encoder;
pub mod err;
pub mod module;
pub mod opcode;
pub mod patch;
pub mod translator;
