use crate::constants::common::DEFAULT_BASE_ADDRESS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Address of the first emitted word; the program counter starts here.
    pub base_address: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_address: DEFAULT_BASE_ADDRESS,
        }
    }
}
