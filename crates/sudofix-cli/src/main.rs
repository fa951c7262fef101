//! Command-line front end for the sudofix propagation engine.
//!
//! Parses a puzzle string (or falls back to the built-in example), runs the
//! engine to completion, and prints the grid after every step. The exit code
//! reflects the outcome: success only when the puzzle is solved.

use std::process::ExitCode;

use clap::Parser;
use log::info;
use sudofix_core::Grid;
use sudofix_solver::{EXAMPLE_PUZZLE, Engine, Outcome};

mod display;

/// Solves a Sudoku puzzle by constraint propagation, printing each step.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 81-character puzzle string: digits 1-9 for givens, '.' for unknowns,
    /// row-major from A1 to I9. Defaults to a built-in example puzzle.
    puzzle: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let puzzle = args.puzzle.as_deref().unwrap_or(EXAMPLE_PUZZLE);

    let mut grid: Grid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new();
    let mut stats = engine.new_stats();

    let mut step = 1;
    display::print_step(&grid, step, grid.unsolved_count(), grid.is_solved());

    let outcome = engine.solve_with_observer(&mut grid, &mut stats, |grid, unsolved| {
        step += 1;
        display::print_step(grid, step, unsolved, grid.is_solved());
    });

    info!("finished after {} steps: {outcome}", stats.steps());
    match outcome {
        Outcome::Solved => ExitCode::SUCCESS,
        Outcome::Stalled => {
            println!("\n---- no solution found by propagation alone ----\n");
            ExitCode::FAILURE
        }
        Outcome::Contradicted => {
            println!("\n---- contradiction: the puzzle has no solution ----\n");
            ExitCode::FAILURE
        }
    }
}
