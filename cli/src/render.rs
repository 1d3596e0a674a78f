//! Plain-text rendering of the division trace and solver results.

use euclid_core::{DivisionStep, SolutionFamily};

use itertools::Itertools;

const RULE_WIDTH: usize = 48;

/// Formats the recorded steps as an aligned table, one `a = b * q + r`
/// division per row.
pub fn trace_table(steps: &[DivisionStep]) -> String {
    if steps.is_empty() {
        return "No division performed (trivial case).".to_string();
    }

    let rule = "-".repeat(RULE_WIDTH);
    let header = format!(
        "{:>2} | {:>10} | {:>10} | {:>6} | {:>8}",
        "n", "a", "b", "q", "r"
    );
    let rows = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{:2} | {:10} | {:10} | {:6} | {:8}",
                i + 1,
                step.dividend,
                step.divisor,
                step.quotient,
                step.remainder
            )
        })
        .join("\n");

    format!(
        "Division steps (format: a = b * q + r):\n{rule}\n{header}\n{rule}\n{rows}\n{rule}"
    )
}

/// Formats the particular solution, its verification, and the general
/// family of `a*u + b*v = c`.
pub fn solution_report(a: i64, b: i64, c: i64, gcd: i64, family: &SolutionFamily) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "The equation {a}*u + {b}*v = {c} has integer solutions, since {gcd} | {c}.\n\n"
    ));
    out.push_str(&format!(
        "Particular solution: u0 = {}, v0 = {}\n",
        family.u0, family.v0
    ));
    out.push_str(&format!(
        "Check: {a}*{} + {b}*{} = {}\n\n",
        family.u0,
        family.v0,
        a * family.u0 + b * family.v0
    ));
    out.push_str(&format!(
        "General solution:\nu = {} + ({b}/{gcd})*t = {} + {}*t\nv = {} - ({a}/{gcd})*t = {} + {}*t  , t in Z",
        family.u0, family.u0, family.step_u, family.v0, family.v0, family.step_v
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use euclid_core::reduce;

    #[test]
    fn test_empty_trace_message() {
        assert_eq!(trace_table(&[]), "No division performed (trivial case).");
    }

    #[test]
    fn test_table_has_one_row_per_step() {
        let reduction = reduce(48, 18).unwrap();
        let table = trace_table(&reduction.steps);
        // rule, header, rule, 3 rows, rule + title line
        assert_eq!(table.lines().count(), 8);
        let first_row = table.lines().nth(4).unwrap();
        assert!(first_row.starts_with(" 1 |"));
        assert!(first_row.contains("48"));
    }

    #[test]
    fn test_solution_report_verifies_arithmetic() {
        let family = SolutionFamily {
            u0: 2,
            v0: -4,
            step_u: 3,
            step_v: -7,
        };
        let report = solution_report(35, 15, 10, 5, &family);
        assert!(report.contains("u0 = 2, v0 = -4"));
        assert!(report.contains("35*2 + 15*-4 = 10"));
        assert!(report.contains("t in Z"));
    }
}
