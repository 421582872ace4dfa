//! Loader text format of a finished module:
//!
//! ```text
//! <ceil(words / 8)>
//!   w0 w1 w2 w3 w4 w5 w6 w7
//!   ...                      last line padded with 00
//! 0
//! 0
//! 0
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::constants::common::FOOTER_LINES;
use crate::constants::common::FOOTER_WORD;
use crate::constants::common::PAD_WORD;
use crate::constants::common::WORDS_PER_LINE;
use crate::CompileResult;

use super::emitter::CodeBuffer;

#[must_use]
pub fn render(buffer: &CodeBuffer) -> String {
    let words = buffer.words();
    let line_count = words.len().div_ceil(WORDS_PER_LINE);
    let mut module = format!("{line_count}\n");
    words.chunks(WORDS_PER_LINE).for_each(|chunk| {
        let padding = WORDS_PER_LINE - chunk.len();
        let line = chunk
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(PAD_WORD).take(padding))
            .collect::<Vec<_>>()
            .join(" ");
        module.push_str(&format!("  {line}\n"));
    });
    (0..FOOTER_LINES).for_each(|_| {
        module.push_str(FOOTER_WORD);
        module.push('\n');
    });
    module
}

/// # Errors
pub fn write_module(buffer: &CodeBuffer, path: &Path) -> CompileResult<()> {
    fs::write(path, render(buffer))?;
    debug!("wrote {} words to {}", buffer.len(), path.display());
    Ok(())
}
