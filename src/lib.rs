//! # Run
//!
//! A stack-based bytecode virtual machine and the assembler that feeds it.
//!
//! Assembly text is turned into a linked [`Program`](mach::Program), which a
//! [`Runner`](mach::Runner) executes one instruction at a time.
//! ```
//! use runvm::mach::{Config, Program, Runner, Val};
//!
//! let program = Program::assemble("const 10\nconst 20\nadd\nhalt").unwrap();
//! let mut runner = Runner::new(program, &Config::default());
//! runner.run().unwrap();
//! assert_eq!(runner.top(), Some(&Val::Number(30.0)));
//! ```
//!
//! The `runvm` executable assembles and runs a source file.
//! ```text
//! runvm program.asm --trace --stacksize 64
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod __Instructions;

#[path = "doc/calls.rs"]
#[allow(non_snake_case)]
pub mod __Calls;

pub mod lang;
pub mod mach;
pub mod term;
