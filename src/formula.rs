use crate::{error::ParseError, operand::Operand};
use std::{cmp::Ordering, collections::VecDeque, fmt::Display, str::FromStr};

/// An RPN program, executed front to back.
///
/// Formulas order by length first and then operand by operand, which is what
/// lets the solver deduplicate answers with a sort followed by `dedup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Formula {
    operands: VecDeque<Operand>,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operand: Operand) {
        self.operands.push_back(operand);
    }

    pub fn extend_from(&mut self, other: &Formula) {
        self.operands.extend(other.operands.iter().copied());
    }

    pub fn pop_front(&mut self) -> Option<Operand> {
        self.operands.pop_front()
    }

    pub fn clear(&mut self) {
        self.operands.clear();
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// An empty formula doubles as the "nothing found" sentinel of the
    /// generator and the solver.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operand> {
        self.operands.iter()
    }

    /// Net number of values left on the stack after running the whole formula.
    pub fn stack_depth(&self) -> isize {
        self.operands.iter().map(Operand::stack_effect).sum()
    }

    pub fn to_rpn_string(&self) -> String {
        self.to_string()
    }
}

impl Ord for Formula {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.operands.iter().cmp(other.operands.iter()))
    }
}

impl PartialOrd for Formula {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<Operand> for Formula {
    fn from_iter<T: IntoIterator<Item = Operand>>(iter: T) -> Self {
        Self {
            operands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Operand;
    type IntoIter = std::collections::vec_deque::Iter<'a, Operand>;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{operand}")?;
        }
        Ok(())
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}
