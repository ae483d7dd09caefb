//! End-to-end checks of the solver against an independent enumeration.

use jamaica::{
    solve_all, solve_first, Calculator, EvalError, Formula, InfixPresenter, Operand, Rational,
};
use std::collections::BTreeSet;

/// Every well-formed RPN program over `numbers` (each used once) and the four
/// operators, built recursively token by token.
fn enumerate(
    prefix: &mut Vec<Operand>,
    remaining: &mut Vec<i64>,
    depth: usize,
    out: &mut BTreeSet<Formula>,
) {
    if remaining.is_empty() && depth == 1 {
        out.insert(prefix.iter().copied().collect());
        return;
    }
    for i in 0..remaining.len() {
        let n = remaining.remove(i);
        prefix.push(Operand::number(n));
        enumerate(prefix, remaining, depth + 1, out);
        prefix.pop();
        remaining.insert(i, n);
    }
    if depth >= 2 {
        for op in Operand::OPERATORS {
            prefix.push(op);
            enumerate(prefix, remaining, depth - 1, out);
            prefix.pop();
        }
    }
}

fn evaluate(formula: &Formula) -> Option<Rational> {
    let mut stack: Vec<Rational> = Vec::new();
    for operand in formula {
        match *operand {
            Operand::Number(n) => stack.push(n),
            op => {
                let rhs = stack.pop()?;
                let lhs = stack.pop()?;
                stack.push(match op {
                    Operand::Plus => lhs + rhs,
                    Operand::Minus => lhs - rhs,
                    Operand::Multiply => lhs * rhs,
                    _ if rhs.is_zero() => return None,
                    _ => lhs / rhs,
                });
            }
        }
    }
    match stack[..] {
        [value] => Some(value),
        _ => None,
    }
}

fn brute_force(target: i64, numbers: &[i64]) -> Vec<Formula> {
    let mut all = BTreeSet::new();
    enumerate(&mut Vec::new(), &mut numbers.to_vec(), 0, &mut all);
    all.into_iter()
        .filter(|formula| evaluate(formula) == Some(Rational::from_integer(target)))
        .collect()
}

fn run(formula: &Formula) -> Result<Calculator, EvalError> {
    let mut calc = Calculator::with_formula(formula.clone());
    calc.run()?;
    Ok(calc)
}

#[test]
fn matches_brute_force_enumeration() {
    let answers = solve_all(13, &[5, 2, 3, 4, 5]);
    assert!(!answers.is_empty());
    assert_eq!(answers, brute_force(13, &[5, 2, 3, 4, 5]));
}

#[test]
fn matches_brute_force_with_fractions() {
    assert_eq!(solve_all(24, &[1, 5, 5, 5]), brute_force(24, &[1, 5, 5, 5]));
    assert_eq!(solve_all(2, &[1, 3, 6]), brute_force(2, &[1, 3, 6]));
}

#[test]
fn every_answer_is_correct_unique_and_well_sized() {
    let numbers = [5, 2, 3, 4, 5];
    let answers = solve_all(13, &numbers);
    for formula in &answers {
        let calc = run(formula).unwrap();
        assert_eq!(calc.stack_len(), 1, "{formula}");
        assert_eq!(calc.peek_result(), Ok(Rational::from_integer(13)), "{formula}");
        assert_eq!(formula.len(), 2 * numbers.len() - 1);
    }
    assert!(answers.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn deterministic() {
    assert_eq!(solve_all(31, &[1, 2, 3, 4, 5]), solve_all(31, &[1, 2, 3, 4, 5]));
}

#[test]
fn first_answer_evaluates_to_target() {
    let first = solve_first(13, &[5, 2, 3, 4, 5]).unwrap();
    let rendered = first.to_rpn_string();
    let calc = run(&rendered.parse().unwrap()).unwrap();
    assert_eq!(calc.peek_result(), Ok(Rational::from_integer(13)));
}

#[test]
fn first_answer_with_repeated_dice() {
    let first = solve_first(13, &[5, 2, 3, 4, 5]).unwrap();
    assert_eq!(first.to_rpn_string(), "5 5 / 4 + 3 * 2 -");
}

#[test]
fn unreachable_targets() {
    assert!(solve_all(1000, &[1, 2, 3, 4, 5]).is_empty());
    assert_eq!(solve_first(999_983, &[1, 2, 3, 4, 5]), None);
}

#[test]
fn division_by_zero_never_answers() {
    let formula: Formula = "5 0 /".parse().unwrap();
    assert_eq!(run(&formula).unwrap_err(), EvalError::DivisionByZero);
    for target in -2..=2 {
        for formula in solve_all(target, &[5, 0, 1]) {
            assert!(run(&formula).is_ok(), "{formula}");
        }
    }
}

#[test]
fn renders_answers_as_infix() {
    let mut presenter = InfixPresenter::new();
    let rendered: Vec<_> = solve_all(20, &[2, 3, 4])
        .iter()
        .map(|f| presenter.render(f).unwrap())
        .collect();
    assert!(rendered.contains(&"(2 + 3) * 4".to_string()));
    assert!(rendered.contains(&"4 * (2 + 3)".to_string()));
}
