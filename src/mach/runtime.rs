use super::{Address, Config, Instruction, Opcode, Operation, Program, Stack, Val, GLOBALS_SIZE};
use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Owns the instruction and frame pointers, the operand stack and the
/// global store. One Runner executes one program on the caller's thread.
/// The program itself is shared read-only and may back several Runners.

pub struct Runner {
    ip: Address,
    fp: usize,
    depth: usize,
    stack: Stack,
    globals: Stack,
    program: Arc<Program>,
    trace: bool,
    state: State,
    interrupted: bool,
    events: VecDeque<Event>,
}

/// Events are returned from `Runner::execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Errors(Error),
    Break(Address),
    Print(String),
    Trace(String),
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
    Failed,
}

enum Flow {
    Next,
    Jump(Address),
    Halt,
}

impl Runner {
    pub fn new<P: Into<Arc<Program>>>(program: P, config: &Config) -> Runner {
        Runner {
            ip: config.main,
            fp: 0,
            depth: 0,
            stack: Stack::new("stack", config.stack_size),
            globals: Stack::new("globals", GLOBALS_SIZE),
            program: program.into(),
            trace: config.trace,
            state: State::Running,
            interrupted: false,
            events: VecDeque::new(),
        }
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn fp(&self) -> usize {
        self.fp
    }

    /// Number of active calls.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn globals(&self) -> &Stack {
        &self.globals
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn top(&self) -> Option<&Val> {
        self.stack.peek().ok()
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Stop at the next step boundary. Safe to call between `execute` bursts.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Run until the program stops, collecting print and trace output.
    pub fn run(&mut self) -> Result<String> {
        let mut output = String::new();
        loop {
            match self.execute(usize::max_value()) {
                Event::Errors(error) => return Err(error),
                Event::Print(s) | Event::Trace(s) => output.push_str(&s),
                Event::Running => {}
                Event::Break(_) | Event::Stopped => return Ok(output),
            }
        }
    }

    /// Execute at most `cycles` instructions. Returns early with the
    /// first event produced so the caller can act on it.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        for _ in 0..cycles {
            if self.interrupted {
                self.interrupted = false;
                if self.state == State::Running {
                    self.state = State::Stopped;
                    return Event::Break(self.ip);
                }
            }
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => return Event::Errors(error),
            }
            if let Some(event) = self.events.pop_front() {
                return event;
            }
        }
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match self.state {
            State::Running => Event::Running,
            State::Stopped | State::Failed => Event::Stopped,
        }
    }

    /// Fetch, decode and execute one instruction.
    /// Returns false once the program has stopped.
    pub fn step(&mut self) -> Result<bool> {
        if self.state != State::Running {
            return Ok(false);
        }
        let addr = self.ip;
        let program = Arc::clone(&self.program);
        let instruction = match program.get(addr) {
            Some(instruction) => instruction,
            None => {
                self.state = State::Stopped;
                return Ok(false);
            }
        };
        let flow = match self.instruction(instruction) {
            Ok(flow) => flow,
            Err(error) => {
                self.state = State::Failed;
                return Err(error.at_address(addr));
            }
        };
        match flow {
            Flow::Next => self.ip += 1,
            Flow::Jump(target) => self.ip = target,
            Flow::Halt => self.state = State::Stopped,
        }
        if self.trace {
            self.trace_line(addr, instruction);
        }
        Ok(self.state == State::Running)
    }

    fn trace_line(&mut self, addr: Address, instruction: &Instruction) {
        let top = match self.stack.peek() {
            Ok(val) => format!("{:?}", val),
            Err(_) => "empty".to_string(),
        };
        self.events.push_back(Event::Trace(format!(
            "{:04} {:<16} stack {:?} ({}) *{}\n",
            addr,
            instruction.to_string(),
            self.stack,
            top,
            self.stack.pointer()
        )));
    }

    fn instruction(&mut self, instruction: &Instruction) -> Result<Flow> {
        use Opcode::*;
        match instruction.opcode() {
            Halt => Ok(Flow::Halt),
            Const => {
                let val = instruction.operand(0)?.clone();
                self.stack.push(val)?;
                Ok(Flow::Next)
            }
            Store => {
                self.stack.store(instruction.operand(0)?)?;
                Ok(Flow::Next)
            }
            Fetch => {
                self.stack.fetch(instruction.operand(0)?)?;
                Ok(Flow::Next)
            }
            GStore => {
                let address = instruction.operand(0)?;
                self.globals.slot(address)?;
                let val = self.stack.pop()?;
                self.globals.write(address, val)?;
                Ok(Flow::Next)
            }
            GFetch => {
                let val = self.globals.read(instruction.operand(0)?)?;
                self.stack.push(val)?;
                Ok(Flow::Next)
            }
            Pop => {
                self.stack.pop()?;
                Ok(Flow::Next)
            }
            Add => self.binary(Operation::sum),
            Sub => self.binary(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            Div => self.binary(Operation::divide),
            And => self.binary(Operation::and),
            Or => self.binary(Operation::or),
            Xor => self.binary(Operation::xor),
            IfEqual => self.branch(instruction, Operation::equal),
            IfLessThan => self.branch(instruction, Operation::less),
            IfLessThanOrEqual => self.branch(instruction, Operation::less_equal),
            IfGreaterThan => self.branch(instruction, Operation::greater),
            IfGreaterThanOrEqual => self.branch(instruction, Operation::greater_equal),
            Goto => Ok(Flow::Jump(instruction.operand(0)?.whole("target")?)),
            Call => self.call(instruction),
            Return => self.ret(),
            Print => {
                let line = format!("{}\n", self.stack.peek()?);
                self.events.push_back(Event::Print(line));
                Ok(Flow::Next)
            }
        }
    }

    fn binary(&mut self, op: fn(&Val, &Val) -> Result<Val>) -> Result<Flow> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(&lhs, &rhs)?)?;
        Ok(Flow::Next)
    }

    /// Relations read `top R next`: `const 1`, `const 2`, `lt L` does not branch.
    fn branch(
        &mut self,
        instruction: &Instruction,
        relation: fn(&Val, &Val) -> Result<bool>,
    ) -> Result<Flow> {
        let target = instruction.operand(0)?.whole("target")?;
        let (next, top) = self.stack.pop_2()?;
        if relation(&top, &next)? {
            Ok(Flow::Jump(target))
        } else {
            Ok(Flow::Next)
        }
    }

    /// Frame header, bottom to top: argc, caller fp, call site.
    /// `fp` is left addressing the call site slot.
    fn call(&mut self, instruction: &Instruction) -> Result<Flow> {
        let target = instruction.operand(0)?.whole("target")?;
        let argc = instruction.operand(1)?.whole("argument count")?;
        if argc > self.stack.len() {
            return Err(error!(StackError; format!(
                "call expects {} arguments, stack holds {}",
                argc,
                self.stack.len()
            )));
        }
        if self.stack.len() + 3 > self.stack.capacity() {
            return Err(error!(StackError; "cannot call because stack is full"));
        }
        self.stack.push(Val::from(argc))?;
        self.stack.push(Val::from(self.fp))?;
        self.stack.push(Val::from(self.ip))?;
        self.fp = self.stack.pointer() as usize;
        self.depth += 1;
        Ok(Flow::Jump(target))
    }

    fn ret(&mut self) -> Result<Flow> {
        if self.depth == 0 {
            return Err(error!(CodeError; "return without call"));
        }
        if self.stack.pointer() <= self.fp as isize {
            return Err(error!(CodeError; "no value returned from function"));
        }
        let result = self.stack.pop()?;
        self.stack.set_pointer(self.fp as isize)?;
        let call_site = self.stack.pop()?.whole("return address")?;
        let fp = self.stack.pop()?.whole("frame pointer")?;
        let argc = self.stack.pop()?.whole("argument count")?;
        for _ in 0..argc {
            self.stack.pop()?;
        }
        self.stack.push(result)?;
        self.fp = fp;
        self.depth -= 1;
        match call_site.checked_add(1) {
            Some(next) => Ok(Flow::Jump(next)),
            None => Err(error!(ValueError; format!(
                "return address must be a valid address, found {}",
                call_site
            ))),
        }
    }
}
