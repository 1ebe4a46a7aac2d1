/// ## Virtual machine instruction set
///
/// The machine has no registers beside the instruction and frame pointers.
/// Every operation is performed on the stack.
///
/// For example: `10 - 2` assembles to `[const 10, const 2, sub]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Stop execution.
    Halt,

    // *** Stack manipulation
    /// Push literal value on to the stack.
    Const,
    /// Pop stack value to an addressed slot of the stack.
    Store,
    /// Push a copy of an addressed slot of the stack.
    Fetch,
    /// Pop stack value to an addressed global slot.
    GStore,
    /// Push a copy of an addressed global slot.
    GFetch,
    /// Discard the top of the stack.
    Pop,

    // *** Expression operations
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,

    // *** Branch control
    /// Pop two values and branch to Address if they are equal.
    IfEqual,
    IfLessThan,
    IfLessThanOrEqual,
    IfGreaterThan,
    IfGreaterThanOrEqual,
    /// Unconditional branch to Address.
    Goto,
    /// Push the argument count, frame pointer and return address,
    /// then branch to Address.
    Call,
    /// Unwind the frame of the innermost Call, leaving its return value.
    Return,

    // *** Statements
    /// Write the top of the stack to program output without popping it.
    Print,
}

static OPCODES: [(Opcode, &str, usize); 23] = [
    (Opcode::Halt, "halt", 0),
    (Opcode::Const, "const", 1),
    (Opcode::Store, "store", 1),
    (Opcode::Fetch, "fetch", 1),
    (Opcode::GStore, "gstore", 1),
    (Opcode::GFetch, "gfetch", 1),
    (Opcode::Pop, "pop", 0),
    (Opcode::Add, "add", 0),
    (Opcode::Sub, "sub", 0),
    (Opcode::Mul, "mul", 0),
    (Opcode::Div, "div", 0),
    (Opcode::And, "and", 0),
    (Opcode::Or, "or", 0),
    (Opcode::Xor, "xor", 0),
    (Opcode::IfEqual, "ifeq", 1),
    (Opcode::IfLessThan, "lt", 1),
    (Opcode::IfLessThanOrEqual, "lte", 1),
    (Opcode::IfGreaterThan, "gt", 1),
    (Opcode::IfGreaterThanOrEqual, "gte", 1),
    (Opcode::Goto, "goto", 1),
    (Opcode::Call, "call", 2),
    (Opcode::Return, "ret", 0),
    (Opcode::Print, "print", 0),
];

impl Opcode {
    fn entry(self) -> &'static (Opcode, &'static str, usize) {
        &OPCODES[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.entry().1
    }

    /// Number of operands that follow the mnemonic.
    pub fn arity(self) -> usize {
        self.entry().2
    }

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        OPCODES
            .iter()
            .find(|(_, mnemonic, _)| mnemonic.eq_ignore_ascii_case(s))
            .map(|(opcode, _, _)| *opcode)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
