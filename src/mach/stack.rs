use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Fixed capacity value stack
///
/// Values are pushed from slot zero upward. Addressed slots for `store`
/// and `fetch` are counted from the far end, so the same array holds a
/// growing operand stack and a block of variable slots.

pub struct Stack {
    name: &'static str,
    pointer: isize,
    data: Vec<Val>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.live())
    }
}

impl Stack {
    pub fn new(name: &'static str, capacity: usize) -> Stack {
        Stack {
            name,
            pointer: -1,
            data: vec![Val::Nil; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Index of the top slot, -1 when empty.
    pub fn pointer(&self) -> isize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        (self.pointer + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.pointer < 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Slots from the bottom up to and including the top.
    pub fn live(&self) -> &[Val] {
        &self.data[..self.len()]
    }

    pub fn get(&self, index: usize) -> Option<&Val> {
        self.data.get(index)
    }

    fn overflow_error(&self) -> Error {
        error!(StackError; format!("cannot push because {} is full", self.name))
    }

    fn underflow_error(&self) -> Error {
        error!(StackError; format!("cannot pop because {} is empty", self.name))
    }

    pub fn push(&mut self, val: Val) -> Result<()> {
        if self.is_full() {
            return Err(self.overflow_error());
        }
        self.pointer += 1;
        self.data[self.pointer as usize] = val;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Val> {
        if self.is_empty() {
            return Err(self.underflow_error());
        }
        let val = self.data[self.pointer as usize].clone();
        self.pointer -= 1;
        Ok(val)
    }

    /// Pops the top two values as `(lhs, rhs)` where `lhs` was pushed first.
    /// Nothing is popped unless both are present.
    pub fn pop_2(&mut self) -> Result<(Val, Val)> {
        if self.len() < 2 {
            return Err(self.underflow_error());
        }
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        Ok((lhs, rhs))
    }

    pub fn peek(&self) -> Result<&Val> {
        if self.is_empty() {
            return Err(self.underflow_error());
        }
        Ok(&self.data[self.pointer as usize])
    }

    /// Move the top to `pointer` without touching slot contents.
    pub fn set_pointer(&mut self, pointer: isize) -> Result<()> {
        if pointer < -1 || pointer >= self.capacity() as isize {
            return Err(error!(StackError;
                format!("pointer {} out of range for {}", pointer, self.name)));
        }
        self.pointer = pointer;
        Ok(())
    }

    /// Array index of an addressed slot: `capacity - address - 1`.
    pub fn slot(&self, address: &Val) -> Result<usize> {
        let addr = address.whole("address")?;
        if addr >= self.capacity() {
            return Err(error!(StackError;
                format!("address {} out of range for {}", addr, self.name)));
        }
        Ok(self.capacity() - addr - 1)
    }

    pub fn read(&self, address: &Val) -> Result<Val> {
        let slot = self.slot(address)?;
        Ok(self.data[slot].clone())
    }

    pub fn write(&mut self, address: &Val, val: Val) -> Result<()> {
        let slot = self.slot(address)?;
        self.data[slot] = val;
        Ok(())
    }

    /// Pops the top and writes it to the addressed slot.
    pub fn store(&mut self, address: &Val) -> Result<Val> {
        let slot = self.slot(address)?;
        let val = self.pop()?;
        self.data[slot] = val.clone();
        Ok(val)
    }

    /// Pushes a copy of the addressed slot.
    pub fn fetch(&mut self, address: &Val) -> Result<Val> {
        let val = self.read(address)?;
        self.push(val.clone())?;
        Ok(val)
    }
}
