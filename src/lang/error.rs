use super::{Column, LineNumber};
use crate::mach::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    address: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Errors raised while executing carry the failing instruction address.
    /// Errors raised while assembling carry a source line instead.
    pub fn is_runtime(&self) -> bool {
        self.address.is_some()
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = line;
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        self.column = column.clone();
        self
    }

    pub fn at_address(mut self, address: Address) -> Error {
        if self.address.is_none() {
            self.address = Some(address);
        }
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackError,
    ValueError,
    CodeError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self {
            ErrorCode::StackError => "StackError",
            ErrorCode::ValueError => "ValueError",
            ErrorCode::CodeError => "CodeError",
        };
        write!(f, "{}", code_str)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" in line {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if let Some(address) = self.address {
            suffix.push_str(&format!(" at {:04}", address));
        }
        if self.message.is_empty() {
            write!(f, "{}{}", self.code, suffix)
        } else {
            write!(f, "{}: {}{}", self.code, self.message, suffix)
        }
    }
}
