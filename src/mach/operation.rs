use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Typed operators
///
/// `lhs` is always the value pushed first. Every operator matches
/// each value kind explicitly.

pub struct Operation {}

fn numbers(verb: &str, lhs: &Val, rhs: &Val) -> Result<(f64, f64)> {
    use Val::*;
    match (lhs, rhs) {
        (Number(l), Number(r)) => Ok((*l, *r)),
        (Nil, _) | (String(_), _) | (Number(_), Nil) | (Number(_), String(_)) => {
            Err(error!(ValueError; format!(
                "cannot {} {} value with {} value",
                verb,
                lhs.kind(),
                rhs.kind()
            )))
        }
    }
}

fn integers(verb: &str, lhs: &Val, rhs: &Val) -> Result<(i64, i64)> {
    let (l, r) = numbers(verb, lhs, rhs)?;
    Ok((l as i64, r as i64))
}

impl Operation {
    pub fn sum(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = numbers("add", lhs, rhs)?;
        Ok(Val::Number(l + r))
    }

    pub fn subtract(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = numbers("sub", lhs, rhs)?;
        Ok(Val::Number(l - r))
    }

    pub fn multiply(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = numbers("mul", lhs, rhs)?;
        Ok(Val::Number(l * r))
    }

    /// IEEE division; a zero divisor gives an infinity or NaN.
    pub fn divide(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = numbers("div", lhs, rhs)?;
        Ok(Val::Number(l / r))
    }

    pub fn and(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = integers("and", lhs, rhs)?;
        Ok(Val::Number((l & r) as f64))
    }

    pub fn or(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = integers("or", lhs, rhs)?;
        Ok(Val::Number((l | r) as f64))
    }

    pub fn xor(lhs: &Val, rhs: &Val) -> Result<Val> {
        let (l, r) = integers("xor", lhs, rhs)?;
        Ok(Val::Number((l ^ r) as f64))
    }

    pub fn equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l == r),
            (String(l), String(r)) => Ok(l == r),
            (Nil, _) | (Number(_), _) | (String(_), _) => Err(error!(ValueError; format!(
                "cannot compare {} value with {} value",
                lhs.kind(),
                rhs.kind()
            ))),
        }
    }

    pub fn less(lhs: &Val, rhs: &Val) -> Result<bool> {
        let (l, r) = numbers("compare", lhs, rhs)?;
        Ok(l < r)
    }

    pub fn less_equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        let (l, r) = numbers("compare", lhs, rhs)?;
        Ok(l <= r)
    }

    pub fn greater(lhs: &Val, rhs: &Val) -> Result<bool> {
        let (l, r) = numbers("compare", lhs, rhs)?;
        Ok(l > r)
    }

    pub fn greater_equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        let (l, r) = numbers("compare", lhs, rhs)?;
        Ok(l >= r)
    }
}
