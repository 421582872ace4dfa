use log::debug;
use log::trace;

use crate::constants::common::OPERAND_WORDS;
use crate::sys_error;
use crate::CompileResult;

use super::encoder::decode_operand;
use super::encoder::encode_operand;
use super::opcode::Opcode;
use super::patch::Backpatcher;
use super::patch::PatchSite;

/// Finished, fully resolved instruction words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBuffer {
    base: u32,
    words: Vec<String>,
}

impl CodeBuffer {
    #[must_use]
    pub fn new(base: u32, words: Vec<String>) -> CodeBuffer {
        CodeBuffer { base, words }
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Address of the word following the last one.
    ///
    /// # Panics
    #[must_use]
    pub fn pc(&self) -> u32 {
        let Ok(emitted) = u32::try_from(self.words.len()) else {
            sys_error!("instruction buffer outgrew the address space");
        };
        self.base.saturating_add(emitted)
    }

    /// Decodes the four-word operand starting at `index`.
    #[must_use]
    pub fn operand_at(&self, index: usize) -> Option<u32> {
        self.words
            .get(index..index + OPERAND_WORDS)
            .and_then(decode_operand)
    }
}

/// Appends words to the buffer and keeps track of open patch sites.
pub struct Emitter {
    buffer: CodeBuffer,
    backpatcher: Backpatcher,
}

impl Emitter {
    #[must_use]
    pub fn new(base: u32) -> Emitter {
        Emitter {
            buffer: CodeBuffer::new(base, Vec::new()),
            backpatcher: Backpatcher::new(),
        }
    }

    #[must_use]
    pub fn pc(&self) -> u32 {
        self.buffer.pc()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        self.buffer.words()
    }

    /// Appends the opcode of `token` when it is a mnemonic, `token` itself
    /// otherwise. Returns the index of the new word.
    pub fn emit(&mut self, token: &str) -> usize {
        let word = match Opcode::of(token) {
            Some(opcode) => opcode.code(),
            None => token,
        };
        let index = self.buffer.words.len();
        trace!("{:>6} {word:>3} ; {token}", self.pc());
        self.buffer.words.push(word.to_string());
        index
    }

    pub fn emit_opcode(&mut self, opcode: Opcode) -> usize {
        self.emit(opcode.mnemonic())
    }

    pub fn emit_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().for_each(|token| {
            self.emit(token.as_ref());
        });
    }

    /// # Errors
    pub fn emit_operand(&mut self, value: u32) -> CompileResult<usize> {
        let index = self.len();
        self.emit_all(encode_operand(value)?);
        Ok(index)
    }

    /// # Errors
    pub fn emit_with_operand(&mut self, opcode: Opcode, value: u32) -> CompileResult<usize> {
        let index = self.emit_opcode(opcode);
        self.emit_operand(value)?;
        Ok(index)
    }

    /// Emits `opcode` whose operand is its own address until patched.
    ///
    /// # Errors
    pub fn emit_placeholder(&mut self, opcode: Opcode) -> CompileResult<PatchSite> {
        let pc = self.pc();
        self.emit_opcode(opcode);
        let index = self.emit_operand(pc)?;
        debug!("placeholder {opcode} at word {index}");
        Ok(self.backpatcher.register(index))
    }

    /// # Errors
    pub fn resolve(&mut self, site: PatchSite, target: u32) -> CompileResult<()> {
        self.backpatcher
            .resolve(&mut self.buffer.words, site, target)
    }

    /// # Errors
    pub fn finish(self) -> CompileResult<CodeBuffer> {
        self.backpatcher.ensure_resolved()?;
        Ok(self.buffer)
    }
}
