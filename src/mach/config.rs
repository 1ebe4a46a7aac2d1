use super::Address;

/// Slots in the global store.
pub const GLOBALS_SIZE: usize = 512;

/// ## Construction parameters for a Runner
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Capacity of the operand stack.
    pub stack_size: usize,
    /// Address of the first instruction executed.
    pub main: Address,
    /// Emit a trace line for every executed instruction.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stack_size: 1024,
            main: 0,
            trace: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
