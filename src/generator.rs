use crate::{formula::Formula, operand::Operand};
use tracing::warn;

#[derive(Clone, Debug)]
struct Progress {
    formula: Formula,
    remaining: Vec<Operand>,
    depth: usize,
}

impl Progress {
    fn is_complete(&self) -> bool {
        self.remaining.is_empty() && self.depth == 1
    }

    fn with_number(&self, number: Operand) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.remaining.iter().position(|n| *n == number) {
            next.remaining.remove(index);
        }
        next.formula.push(number);
        next.depth += 1;
        next
    }

    fn with_operator(&self, operator: Operand) -> Self {
        let mut next = self.clone();
        next.formula.push(operator);
        next.depth -= 1;
        next
    }
}

/// Lazily enumerates every well-formed RPN formula that uses each input
/// number exactly once, interleaved with operators from a fixed set.
///
/// The search is a depth-first walk over an explicit work stack, so each call
/// to [`generate_next`](Self::generate_next) resumes exactly where the last one
/// stopped. Equal input numbers are interchangeable: the same formula is never
/// produced twice.
#[derive(Clone, Debug)]
pub struct FormulaGenerator {
    stack: Vec<Progress>,
    operators: Vec<Operand>,
}

impl FormulaGenerator {
    pub fn new(
        numbers: impl IntoIterator<Item = Operand>,
        operators: impl IntoIterator<Item = Operand>,
    ) -> Self {
        let numbers: Vec<_> = numbers
            .into_iter()
            .filter(|operand| {
                let keep = matches!(operand, Operand::Number(_));
                if !keep {
                    warn!(?operand, "ignoring non-number operand");
                }
                keep
            })
            .collect();
        let operators: Vec<_> = operators
            .into_iter()
            .filter(|operand| {
                let keep = operand.code().is_binary();
                if !keep {
                    warn!(?operand, "ignoring non-operator operand");
                }
                keep
            })
            .collect();
        Self {
            stack: vec![Progress {
                formula: Formula::new(),
                remaining: numbers,
                depth: 0,
            }],
            operators,
        }
    }

    /// Returns the next complete formula, or an empty formula once the search
    /// space is exhausted.
    pub fn generate_next(&mut self) -> Formula {
        while let Some(progress) = self.stack.pop() {
            if progress.is_complete() {
                return progress.formula;
            }

            // equal numbers expand once, at their last copy
            for (i, &number) in progress.remaining.iter().enumerate() {
                if progress.remaining[i + 1..].contains(&number) {
                    continue;
                }
                self.stack.push(progress.with_number(number));
            }

            if progress.depth >= 2 {
                for &operator in &self.operators {
                    self.stack.push(progress.with_operator(operator));
                }
            }
        }
        Formula::new()
    }

    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Iterator for FormulaGenerator {
    type Item = Formula;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_next()).filter(|formula| !formula.is_empty())
    }
}
