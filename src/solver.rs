use crate::{
    calculator::{Calculator, DEFAULT_MAGNITUDE_CEILING},
    formula::Formula,
    generator::FormulaGenerator,
    operand::Operand,
    rational::Rational,
};
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub operators: Vec<Operand>,
    pub magnitude_ceiling: Rational,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            operators: Operand::OPERATORS.to_vec(),
            magnitude_ceiling: Rational::from_integer(DEFAULT_MAGNITUDE_CEILING),
        }
    }
}

/// Finds formulas that combine every given number exactly once into a target.
#[derive(Clone, Debug)]
pub struct Solver {
    operators: Vec<Operand>,
    calculator: Calculator,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        let mut calculator = Calculator::new();
        calculator.set_magnitude_ceiling(config.magnitude_ceiling);
        Self {
            operators: config.operators,
            calculator,
        }
    }

    pub fn operators(&self) -> &[Operand] {
        &self.operators
    }

    pub fn set_operators(&mut self, operators: impl IntoIterator<Item = Operand>) {
        self.operators = operators.into_iter().collect();
    }

    pub fn set_magnitude_ceiling(&mut self, ceiling: Rational) {
        self.calculator.set_magnitude_ceiling(ceiling);
    }

    pub fn generator(&self, numbers: &[i64]) -> FormulaGenerator {
        FormulaGenerator::new(
            numbers.iter().map(|&n| Operand::number(n)),
            self.operators.iter().copied(),
        )
    }

    /// Every distinct formula reaching `target`, sorted.
    pub fn solve_all(&mut self, target: i64, numbers: &[i64]) -> Vec<Formula> {
        let target = Rational::from_integer(target);
        let mut generator = self.generator(numbers);
        let mut candidates = 0usize;
        let mut answers = Vec::new();
        loop {
            let formula = generator.generate_next();
            if formula.is_empty() {
                break;
            }
            candidates += 1;
            if self.judge(target, &formula) {
                answers.push(formula);
            }
        }
        answers.sort();
        answers.dedup();
        debug!(%target, ?numbers, candidates, answers = answers.len(), "solved");
        answers
    }

    pub fn solve_first(&mut self, target: i64, numbers: &[i64]) -> Option<Formula> {
        let target = Rational::from_integer(target);
        let mut generator = self.generator(numbers);
        let found = generator.find(|formula| self.judge(target, formula));
        debug!(%target, ?numbers, found = found.is_some(), "searched for first answer");
        found
    }

    fn judge(&mut self, target: Rational, formula: &Formula) -> bool {
        self.calculator.reset();
        self.calculator.add_formula(formula);
        if let Err(error) = self.calculator.run() {
            trace!(%formula, %error, "candidate rejected");
            return false;
        }
        self.calculator.stack_len() == 1 && self.calculator.peek_result() == Ok(target)
    }
}

/// [`Solver::solve_all`] with the default operators and ceiling.
pub fn solve_all(target: i64, numbers: &[i64]) -> Vec<Formula> {
    Solver::new().solve_all(target, numbers)
}

/// [`Solver::solve_first`] with the default operators and ceiling.
pub fn solve_first(target: i64, numbers: &[i64]) -> Option<Formula> {
    Solver::new().solve_first(target, numbers)
}
