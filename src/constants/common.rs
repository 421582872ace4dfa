use const_format::formatcp;

pub const STACKC: &str = "stackc";
pub const MODULE_EXT: &str = "stkm";
pub const SYSTEM_TMP: &str = "/tmp";
pub const TMP: &str = formatcp!("{SYSTEM_TMP}/{STACKC}");

pub const DEFAULT_BASE_ADDRESS: u32 = 0;

pub const OPERAND_WORDS: usize = 4;
pub const OPERAND_DIGITS: usize = OPERAND_WORDS * 2;
pub const MAX_OPERAND: u32 = 99_999_999;

pub const WORDS_PER_LINE: usize = 8;
pub const PAD_WORD: &str = "00";
pub const FOOTER_WORD: &str = "0";
pub const FOOTER_LINES: usize = 3;
