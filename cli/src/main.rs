mod input;
mod render;

use std::io;

use euclid_core::{DiophantineOutcome, reduce, solve_diophantine};

use input::read_integer;
use render::{solution_report, trace_table};

fn main() -> io::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    println!("GCD computation and resolution of the equation a*u + b*v = c");
    println!("Enter two integers (type 'q' to quit).");

    let Some(a) = read_integer("Integer a (first number): ")? else {
        return Ok(());
    };
    let Some(b) = read_integer("Integer b (second number): ")? else {
        return Ok(());
    };

    if a == 0 && b == 0 {
        println!("\ngcd(0, 0) is not defined.");
        return Ok(());
    }

    log::debug!("running Euclidean reduction on ({a}, {b})");
    let reduction = match reduce(a, b) {
        Ok(reduction) => reduction,
        Err(err) => {
            // Unreachable after the (0, 0) pre-check above.
            eprintln!("{err}");
            return Ok(());
        }
    };

    println!("\n{}", trace_table(&reduction.steps));
    print_conclusion(a, b, &reduction);

    println!("\nChecking for solutions of the equation a*u + b*v = c:");
    let Some(c) = read_integer("Enter the value of c: ")? else {
        return Ok(());
    };

    match solve_diophantine(a, b, c) {
        Ok(DiophantineOutcome::Solvable(family)) => {
            println!("\n{}", solution_report(a, b, c, reduction.gcd, &family));
        }
        Ok(DiophantineOutcome::NoSolution { gcd }) => {
            println!(
                "\nThe equation {a}*u + {b}*v = {c} has no integer solution, since {gcd} does not divide {c}."
            );
        }
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}

fn print_conclusion(a: i64, b: i64, reduction: &euclid_core::Reduction) {
    if a == 0 || b == 0 {
        println!(
            "\nConclusion: gcd({a}, {b}) = {} (one operand is zero).",
            reduction.gcd
        );
    } else {
        println!("\nConclusion: gcd({a}, {b}) = {}", reduction.gcd);
    }

    if reduction.is_coprime() {
        println!("The two numbers are coprime (gcd = 1).");
    } else {
        println!("The two numbers are not coprime (gcd != 1).");
    }
}
