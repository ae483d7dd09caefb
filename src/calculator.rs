use crate::{error::EvalError, formula::Formula, operand::Operand, rational::Rational};

pub const DEFAULT_MAGNITUDE_CEILING: i64 = 10_000_000;

/// Stack machine that evaluates RPN formulas with exact arithmetic.
#[derive(Clone, Debug)]
pub struct Calculator {
    pending: Formula,
    stack: Vec<Rational>,
    ceiling: Rational,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            pending: Formula::new(),
            stack: Vec::new(),
            ceiling: Rational::from_integer(DEFAULT_MAGNITUDE_CEILING),
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formula(formula: Formula) -> Self {
        Self {
            pending: formula,
            ..Self::default()
        }
    }

    pub fn add_operand(&mut self, operand: Operand) {
        self.pending.push(operand);
    }

    pub fn add_formula(&mut self, formula: &Formula) {
        self.pending.extend_from(formula);
    }

    /// Consumes the front operand of the pending formula.
    ///
    /// Returns `Ok(false)` when nothing was pending. On error the value stack
    /// is left exactly as it was before the step.
    pub fn step(&mut self) -> Result<bool, EvalError> {
        let Some(operand) = self.pending.pop_front() else {
            return Ok(false);
        };
        match operand {
            Operand::Number(value) => self.push_checked(value)?,
            Operand::Invalid => {}
            op => {
                let available = self.stack.len();
                if available < op.required_stack_depth() {
                    return Err(EvalError::InsufficientStack {
                        required: op.required_stack_depth(),
                        available,
                    });
                }
                let lhs = self.stack[available - 2];
                let rhs = self.stack[available - 1];
                let value = apply(op, lhs, rhs)?;
                self.check_magnitude(value)?;
                self.stack.truncate(available - 2);
                self.stack.push(value);
            }
        }
        Ok(true)
    }

    pub fn run(&mut self) -> Result<(), EvalError> {
        while self.step()? {}
        Ok(())
    }

    pub fn peek_result(&self) -> Result<Rational, EvalError> {
        self.stack.last().copied().ok_or(EvalError::EmptyStack)
    }

    pub fn drop_last(&mut self) -> Option<Rational> {
        self.stack.pop()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub fn flush_pending(&mut self) {
        self.pending.clear();
    }

    pub fn reset(&mut self) {
        self.clear_stack();
        self.flush_pending();
    }

    pub fn stack(&self) -> &[Rational] {
        &self.stack
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn pending(&self) -> &Formula {
        &self.pending
    }

    pub fn magnitude_ceiling(&self) -> Rational {
        self.ceiling
    }

    /// A non-positive ceiling disables the bound.
    pub fn set_magnitude_ceiling(&mut self, ceiling: Rational) {
        self.ceiling = ceiling;
    }

    fn push_checked(&mut self, value: Rational) -> Result<(), EvalError> {
        self.check_magnitude(value)?;
        self.stack.push(value);
        Ok(())
    }

    fn check_magnitude(&self, value: Rational) -> Result<(), EvalError> {
        if !self.ceiling.is_positive() {
            return Ok(());
        }
        let magnitude = value.checked_abs().ok_or(EvalError::Overflow)?;
        if magnitude > self.ceiling {
            return Err(EvalError::MagnitudeExceeded {
                value,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

fn apply(op: Operand, lhs: Rational, rhs: Rational) -> Result<Rational, EvalError> {
    let value = match op {
        Operand::Plus => lhs.checked_add(&rhs),
        Operand::Minus => lhs.checked_sub(&rhs),
        Operand::Multiply => lhs.checked_mul(&rhs),
        Operand::Divide => {
            if rhs.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            lhs.checked_div(&rhs)
        }
        Operand::Number(_) | Operand::Invalid => unreachable!("not a binary operator: {op:?}"),
    };
    value.ok_or(EvalError::Overflow)
}
