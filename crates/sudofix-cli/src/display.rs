//! Step-by-step grid rendering.

use sudofix_core::{Cell, Grid};

/// Prints a step header followed by the rendered grid.
pub fn print_step(grid: &Grid, step: usize, unsolved: usize, solved: bool) {
    if solved {
        println!("\nStep {step}: solution found!\n");
    } else {
        println!("\nStep {step}: {unsolved} unsolved cells\n");
    }
    print!("{}", render(grid));
}

/// Renders the grid as nine rows of candidate strings, centered to a uniform
/// width, with `|` separators between the 3×3 blocks and dashed lines between
/// the block bands.
#[must_use]
pub fn render(grid: &Grid) -> String {
    let width = 1 + Cell::all()
        .map(|cell| grid.candidates(cell).len())
        .max()
        .unwrap_or(1);
    let band = "-".repeat(width * 3);
    let line = format!("{band}+{band}+{band}");

    let mut out = String::new();
    for row in 0..9 {
        for col in 0..9 {
            let candidates = grid.candidates(Cell::new(row, col)).to_string();
            out.push_str(&center(&candidates, width));
            if col == 2 || col == 5 {
                out.push('|');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.chars().count());
    let left = pad / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use sudofix_core::{Digit, DigitSet};

    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(center("5", 3), " 5 ");
        assert_eq!(center("12", 4), " 12 ");
        assert_eq!(center("123", 2), "123");
    }

    #[test]
    fn test_render_solved_grid() {
        let mut grid = Grid::new();
        for cell in Cell::all() {
            grid.place(cell, Digit::D7);
        }
        let rendered = render(&grid);

        let lines: Vec<_> = rendered.lines().collect();
        // 9 cell rows plus 2 separator lines.
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "7 7 7 |7 7 7 |7 7 7 ");
        assert_eq!(lines[3], "------+------+------");
    }

    #[test]
    fn test_render_width_follows_widest_cell() {
        let mut grid = Grid::new();
        for cell in Cell::all() {
            grid.place(cell, Digit::D1);
        }
        grid.set_candidates(Cell::new(0, 0), DigitSet::from_iter([Digit::D1, Digit::D2]));

        let rendered = render(&grid);
        // Widest cell has 2 candidates, so every cell occupies 3 columns.
        assert!(rendered.lines().next().unwrap().starts_with("12  1  1 |"));
    }
}
