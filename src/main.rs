use anyhow::{bail, Result};
use clap::Parser;
use jamaica::{game::Roll, Formula, InfixPresenter, Operand, Rational, Solver, SolverConfig};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Find every way to reach a target with + - * / using each number once")]
struct Args {
    /// Fixed target; otherwise the first number of each line is the target
    #[arg(short, long)]
    target: Option<i64>,

    /// Print only the first answer found
    #[arg(short, long)]
    first: bool,

    /// Print answers in reverse Polish notation instead of infix
    #[arg(long)]
    rpn: bool,

    /// Reject intermediate values larger than this in magnitude (0 disables)
    #[arg(long, default_value_t = jamaica::calculator::DEFAULT_MAGNITUDE_CEILING)]
    ceiling: i64,

    /// Operators the answers may use
    #[arg(long, default_value = "+-*/")]
    operators: String,

    /// Roll the dice and play rounds instead of reading questions
    #[arg(short, long)]
    game: bool,
}

impl Args {
    fn config(&self) -> Result<SolverConfig> {
        let operators = self
            .operators
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string().parse::<Operand>())
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(op) = operators.iter().find(|op| !op.code().is_binary()) {
            bail!("'{op}' is not an operator");
        }
        Ok(SolverConfig {
            operators,
            magnitude_ceiling: Rational::from_integer(self.ceiling),
        })
    }
}

struct Session {
    solver: Solver,
    presenter: InfixPresenter,
    first: bool,
    rpn: bool,
}

impl Session {
    fn solve(&mut self, target: i64, numbers: &[i64]) -> Vec<Formula> {
        if self.first {
            self.solver.solve_first(target, numbers).into_iter().collect()
        } else {
            self.solver.solve_all(target, numbers)
        }
    }

    fn report(&mut self, out: &mut impl Write, answers: &[Formula]) -> Result<()> {
        for answer in answers {
            if self.rpn {
                writeln!(out, "{answer}")?;
            } else {
                writeln!(out, "{}", self.presenter.render(answer)?)?;
            }
        }
        writeln!(
            out,
            "{} answer{} found.",
            answers.len(),
            if answers.len() == 1 { "" } else { "s" }
        )?;
        Ok(())
    }

    fn answer(&mut self, target: i64, numbers: &[i64]) -> Result<()> {
        let answers = self.solve(target, numbers);
        self.report(&mut io::stdout().lock(), &answers)
    }
}

fn parse_question(line: &str, target: Option<i64>) -> Result<(i64, Vec<i64>)> {
    let mut ns = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;
    let target = match target {
        Some(target) => target,
        None if ns.len() >= 2 => ns.remove(0),
        None => bail!("expected a target followed by numbers"),
    };
    if ns.is_empty() {
        bail!("expected at least one number");
    }
    Ok((target, ns))
}

fn wait(rl: &mut DefaultEditor, prompt: &str) -> Result<bool> {
    match rl.readline(prompt) {
        Ok(_) => Ok(true),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
        Err(error) => Err(error.into()),
    }
}

fn play(rl: &mut DefaultEditor, session: &mut Session) -> Result<()> {
    let mut rng = rand::rng();
    loop {
        let roll = Roll::random(&mut rng);
        println!("{roll}");
        let answers = session.solve(roll.target, &roll.numbers);
        if !wait(rl, "tap enter to show answer...")? {
            break;
        }
        session.report(&mut io::stdout().lock(), &answers)?;
        if !wait(rl, "tap enter for next question...")? {
            break;
        }
        println!("========================================");
    }
    Ok(())
}

fn repl(rl: &mut DefaultEditor, session: &mut Session, target: Option<i64>) -> Result<()> {
    match target {
        Some(target) => println!("Target {target}. Enter some integers separated by spaces:"),
        None => println!("Enter a target then some integers, separated by spaces:"),
    }
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                match parse_question(line, target) {
                    Ok((target, ns)) => session.answer(target, &ns)?,
                    Err(error) => println!("error: {error}"),
                }
                println!();
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => Err(error)?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut session = Session {
        solver: Solver::with_config(args.config()?),
        presenter: InfixPresenter::new(),
        first: args.first,
        rpn: args.rpn,
    };
    let mut rl = DefaultEditor::new()?;
    if args.game {
        play(&mut rl, &mut session)
    } else {
        repl(&mut rl, &mut session, args.target)
    }
}
