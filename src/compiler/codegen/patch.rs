use std::collections::BTreeSet;

use log::debug;

use crate::constants::common::OPERAND_WORDS;
use crate::CompileResult;

use super::encoder::encode_operand;
use super::err::CodegenError;

/// Four operand words whose value is only known later, such as the target of
/// a forward branch.
///
/// The handle is consumed when the site is resolved, so no site can be
/// written twice.
#[must_use = "a patch site left unresolved fails the whole unit"]
#[derive(Debug, PartialEq, Eq)]
pub struct PatchSite {
    index: usize,
}

impl PatchSite {
    /// Buffer index of the first operand word.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Default)]
pub struct Backpatcher {
    pending: BTreeSet<usize>,
}

impl Backpatcher {
    #[must_use]
    pub fn new() -> Backpatcher {
        Backpatcher {
            pending: BTreeSet::new(),
        }
    }

    pub fn register(&mut self, index: usize) -> PatchSite {
        self.pending.insert(index);
        PatchSite { index }
    }

    /// Overwrites the four words of `site` in place with `target`.
    ///
    /// # Errors
    pub fn resolve(&mut self, words: &mut [String], site: PatchSite, target: u32) -> CompileResult<()> {
        let PatchSite { index } = site;
        let end = index + OPERAND_WORDS;
        if end > words.len() || !self.pending.remove(&index) {
            return Err(CodegenError::UnknownPatchSite(index).into());
        }
        let operand = encode_operand(target)?;
        words[index..end].clone_from_slice(&operand);
        debug!("patched word {index} with target {target}");
        Ok(())
    }

    /// # Errors
    pub fn ensure_resolved(&self) -> CompileResult<()> {
        match self.pending.first() {
            Some(index) => Err(CodegenError::UnresolvedPatchSite(*index).into()),
            None => Ok(()),
        }
    }
}
