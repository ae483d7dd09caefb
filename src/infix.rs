use crate::{
    error::PresentError,
    formula::Formula,
    operand::{Operand, Priority},
};

struct Progress {
    text: String,
    priority: Priority,
}

/// Renders RPN formulas as infix text with as few parentheses as the
/// precedence of `+ - * /` allows.
#[derive(Default)]
pub struct InfixPresenter {
    stack: Vec<Progress>,
}

impl InfixPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, formula: &Formula) -> Result<String, PresentError> {
        self.stack.clear();
        for (position, operand) in formula.iter().enumerate() {
            self.proceed(position, *operand)?;
        }
        match self.stack.as_mut_slice() {
            [progress] => Ok(std::mem::take(&mut progress.text)),
            rest => Err(PresentError::Unbalanced(rest.len())),
        }
    }

    fn proceed(&mut self, position: usize, operand: Operand) -> Result<(), PresentError> {
        let priority = operand.code().priority();
        match operand {
            Operand::Number(value) => self.stack.push(Progress {
                text: value.to_string(),
                priority,
            }),
            Operand::Invalid => {}
            op => {
                let (Some(rhs), Some(lhs)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(PresentError::MissingOperands {
                        operator: op.to_string(),
                        position,
                    });
                };
                let lhs = if lhs.priority > priority {
                    format!("({})", lhs.text)
                } else {
                    lhs.text
                };
                let rhs = if rhs.priority == Priority::Number {
                    rhs.text
                } else {
                    format!("({})", rhs.text)
                };
                self.stack.push(Progress {
                    text: format!("{lhs} {op} {rhs}"),
                    priority,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InfixPresenter;
    use crate::{error::PresentError, formula::Formula};

    fn infix(s: &str) -> Result<String, PresentError> {
        InfixPresenter::new().render(&s.parse::<Formula>().unwrap())
    }

    #[test]
    fn precedence() {
        assert_eq!(infix("2 3 + 4 *").unwrap(), "(2 + 3) * 4");
        assert_eq!(infix("2 3 * 4 +").unwrap(), "2 * 3 + 4");
        assert_eq!(infix("2 3 4 * +").unwrap(), "2 + (3 * 4)");
        assert_eq!(infix("2 3 4 + -").unwrap(), "2 - (3 + 4)");
        assert_eq!(infix("1 2 - 3 -").unwrap(), "1 - 2 - 3");
        assert_eq!(infix("8 2 / 2 /").unwrap(), "8 / 2 / 2");
        assert_eq!(infix("1 2 + 3 4 + /").unwrap(), "(1 + 2) / (3 + 4)");
        assert_eq!(infix("5 2 3 4 * + 5 - *").unwrap(), "5 * (2 + (3 * 4) - 5)");
    }

    #[test]
    fn numbers() {
        assert_eq!(infix("7").unwrap(), "7");
        assert_eq!(infix("(5/2) 2 *").unwrap(), "(5/2) * 2");
    }

    #[test]
    fn presenter_is_reusable() {
        let mut presenter = InfixPresenter::new();
        let formula = "1 2 +".parse::<Formula>().unwrap();
        assert_eq!(presenter.render(&formula).unwrap(), "1 + 2");
        assert_eq!(presenter.render(&formula).unwrap(), "1 + 2");
    }

    #[test]
    fn malformed() {
        assert_eq!(infix("").unwrap_err(), PresentError::Unbalanced(0));
        assert_eq!(infix("1 2").unwrap_err(), PresentError::Unbalanced(2));
        assert_eq!(
            infix("1 +").unwrap_err(),
            PresentError::MissingOperands {
                operator: "+".to_string(),
                position: 1
            }
        );
    }
}
