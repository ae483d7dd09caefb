use crate::{error::ParseError, rational::Rational};
use std::{fmt::Display, str::FromStr};

/// Tag of an [`Operand`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    Invalid,
}

/// Binding strength used when rendering infix text. Declaration order is the
/// precedence rank: a bare number binds tightest, addition and subtraction loosest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Number,
    High,
    Low,
}

impl Code {
    pub fn required_stack_depth(self) -> usize {
        match self {
            Code::Plus | Code::Minus | Code::Multiply | Code::Divide => 2,
            Code::Number | Code::Invalid => 0,
        }
    }

    pub fn produced_values(self) -> usize {
        match self {
            Code::Invalid => 0,
            _ => 1,
        }
    }

    pub fn is_binary(self) -> bool {
        self.required_stack_depth() == 2
    }

    pub fn priority(self) -> Priority {
        match self {
            Code::Multiply | Code::Divide => Priority::High,
            Code::Plus | Code::Minus => Priority::Low,
            Code::Number | Code::Invalid => Priority::Number,
        }
    }
}

/// A single RPN token.
///
/// Ordering compares the tag first and the payload second, so every number
/// sorts before every operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operand {
    Number(Rational),
    Plus,
    Minus,
    Multiply,
    Divide,
    Invalid,
}

impl Operand {
    pub const OPERATORS: [Operand; 4] = [
        Operand::Plus,
        Operand::Minus,
        Operand::Multiply,
        Operand::Divide,
    ];

    /// Builds an operand from a tag and its arguments.
    ///
    /// A `Number` needs exactly one argument; any other count collapses the
    /// operand to `Invalid`. Operator tags ignore their arguments.
    pub fn with_args(code: Code, args: &[Rational]) -> Self {
        match (code, args) {
            (Code::Number, [value]) => Operand::Number(*value),
            (Code::Number, _) | (Code::Invalid, _) => Operand::Invalid,
            (Code::Plus, _) => Operand::Plus,
            (Code::Minus, _) => Operand::Minus,
            (Code::Multiply, _) => Operand::Multiply,
            (Code::Divide, _) => Operand::Divide,
        }
    }

    pub fn number(value: impl Into<Rational>) -> Self {
        Operand::Number(value.into())
    }

    pub fn code(&self) -> Code {
        match self {
            Operand::Number(_) => Code::Number,
            Operand::Plus => Code::Plus,
            Operand::Minus => Code::Minus,
            Operand::Multiply => Code::Multiply,
            Operand::Divide => Code::Divide,
            Operand::Invalid => Code::Invalid,
        }
    }

    pub fn value(&self) -> Option<Rational> {
        match self {
            Operand::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn required_stack_depth(&self) -> usize {
        self.code().required_stack_depth()
    }

    pub fn produced_values(&self) -> usize {
        self.code().produced_values()
    }

    pub fn stack_effect(&self) -> isize {
        self.produced_values() as isize - self.required_stack_depth() as isize
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Number(value) => write!(f, "{value}"),
            Operand::Plus => write!(f, "+"),
            Operand::Minus => write!(f, "-"),
            Operand::Multiply => write!(f, "*"),
            Operand::Divide => write!(f, "/"),
            Operand::Invalid => Ok(()),
        }
    }
}

impl FromStr for Operand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operand::Plus),
            "-" | "−" => Ok(Operand::Minus),
            "*" | "×" => Ok(Operand::Multiply),
            "/" | "÷" => Ok(Operand::Divide),
            token if token.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '(') => {
                token.parse().map(Operand::Number)
            }
            token => Err(ParseError::UnknownToken(token.to_string())),
        }
    }
}
