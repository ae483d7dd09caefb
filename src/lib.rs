//! Solver for the Jamaica dice puzzle.
//!
//! Given a target and a handful of numbers, find every arithmetic expression
//! that uses each number exactly once with `+ - * /` and evaluates to the
//! target. Candidates are RPN formulas produced by [`FormulaGenerator`],
//! checked with exact rational arithmetic by [`Calculator`] and rendered back
//! to infix text by [`InfixPresenter`].
//!
//! ```
//! use jamaica::{solve_all, InfixPresenter};
//!
//! let mut presenter = InfixPresenter::new();
//! let answers = solve_all(6, &[2, 3]);
//! assert_eq!(presenter.render(&answers[0]).unwrap(), "2 * 3");
//! ```

pub mod calculator;
pub mod error;
pub mod formula;
pub mod game;
pub mod generator;
pub mod infix;
pub mod operand;
pub mod rational;
pub mod solver;

pub use calculator::Calculator;
pub use error::{EvalError, ParseError, PresentError};
pub use formula::Formula;
pub use generator::FormulaGenerator;
pub use infix::InfixPresenter;
pub use operand::{Code, Operand, Priority};
pub use rational::Rational;
pub use solver::{solve_all, solve_first, Solver, SolverConfig};
