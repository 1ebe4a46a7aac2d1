use crate::error;
use crate::lang::Error;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime value
///
/// Every stack slot, global slot and instruction operand holds one of these.
/// Values are replaced, never mutated in place.

#[derive(Clone, PartialEq)]
pub enum Val {
    Nil,
    Number(f64),
    String(Arc<str>),
}

/// Largest exact integer an f64 holds, 2^53.
const MAX_WHOLE: f64 = 9_007_199_254_740_992.0;

impl Default for Val {
    fn default() -> Val {
        Val::Nil
    }
}

impl Val {
    pub fn kind(&self) -> &'static str {
        match self {
            Val::Nil => "Nil",
            Val::Number(_) => "Number",
            Val::String(_) => "String",
        }
    }

    /// Interpret as an index: a non-negative whole Number.
    pub fn whole(&self, what: &str) -> Result<usize> {
        match self {
            Val::Number(n) => {
                if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n < MAX_WHOLE {
                    Ok(*n as usize)
                } else {
                    Err(error!(ValueError; format!("{} must be a whole number, found {}", what, n)))
                }
            }
            Val::Nil | Val::String(_) => Err(error!(ValueError;
                format!("{} must be a Number, found {} value", what, self.kind()))),
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<usize> for Val {
    fn from(n: usize) -> Val {
        Val::Number(n as f64)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::String(s.into())
    }
}

impl std::fmt::Debug for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{:?}", s),
            _ => write!(f, "{}", self),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Nil => write!(f, "nil"),
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
