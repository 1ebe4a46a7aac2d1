/*!
## Rust Machine Module

This Rust module is an assembler and virtual machine for Run bytecode.

*/

pub type Address = usize;

mod assemble;
mod config;
mod instruction;
mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;

pub use assemble::assemble;
pub use config::Config;
pub use config::GLOBALS_SIZE;
pub use instruction::Instruction;
pub use link::Link;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runner;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
