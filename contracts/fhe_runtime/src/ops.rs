//! Homomorphic operations, evaluated on the clear bodies the mock coprocessor
//! keeps. Contract entry points check access and persist results; nothing in
//! here touches storage.

use common::{FheType, RuntimeError};

/// The value behind a handle, as the coprocessor evaluates it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Operand {
    pub fhe_type: FheType,
    pub value: u64,
}

impl Operand {
    pub fn trivial(fhe_type: FheType, value: u64) -> Self {
        Operand {
            fhe_type,
            value: fhe_type.wrap(value),
        }
    }
}

/// Wrapping addition of two values of the same integer type.
pub fn add(lhs: Operand, rhs: Operand) -> Result<Operand, RuntimeError> {
    if lhs.fhe_type != rhs.fhe_type || lhs.fhe_type == FheType::Bool {
        return Err(RuntimeError::TypeMismatch);
    }
    Ok(Operand::trivial(
        lhs.fhe_type,
        lhs.value.wrapping_add(rhs.value),
    ))
}

pub fn eq_scalar(lhs: Operand, scalar: u64) -> Operand {
    Operand::trivial(FheType::Bool, u64::from(lhs.value == scalar))
}

pub fn select(
    condition: Operand,
    if_true: Operand,
    if_false: Operand,
) -> Result<Operand, RuntimeError> {
    if condition.fhe_type != FheType::Bool || if_true.fhe_type != if_false.fhe_type {
        return Err(RuntimeError::TypeMismatch);
    }
    Ok(if condition.value == 1 {
        if_true
    } else {
        if_false
    })
}

/// `cell + select(answer == option, 1, 0)` in the cell's type.
pub fn one_hot_step(cell: Operand, answer: Operand, option: u64) -> Result<Operand, RuntimeError> {
    if answer.fhe_type == FheType::Bool {
        return Err(RuntimeError::TypeMismatch);
    }
    let hit = eq_scalar(answer, option);
    let indicator = select(
        hit,
        Operand::trivial(cell.fhe_type, 1),
        Operand::trivial(cell.fhe_type, 0),
    )?;
    add(cell, indicator)
}
