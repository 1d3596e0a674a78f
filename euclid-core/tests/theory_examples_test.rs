use euclid_core::errors::EuclidError;
use euclid_core::{DiophantineOutcome, extended_gcd, reduce, solve_diophantine};

#[test]
fn gcd_48_18_with_full_trace() -> Result<(), EuclidError> {
    let reduction = reduce(48, 18)?;

    assert_eq!(reduction.gcd, 6);
    assert!(!reduction.is_coprime());

    let recorded: Vec<(i64, i64, i64, i64)> = reduction
        .steps
        .iter()
        .map(|s| (s.dividend, s.divisor, s.quotient, s.remainder))
        .collect();
    assert_eq!(recorded, vec![(48, 18, 2, 12), (18, 12, 1, 6), (12, 6, 2, 0)]);

    Ok(())
}

#[test]
fn gcd_of_zero_pair_is_undefined() {
    assert_eq!(reduce(0, 0), Err(EuclidError::UndefinedGcd));
    assert_eq!(solve_diophantine(0, 0, 3), Err(EuclidError::UndefinedGcd));
}

#[test]
fn zero_divisor_needs_no_division() -> Result<(), EuclidError> {
    let reduction = reduce(7, 0)?;
    assert_eq!(reduction.gcd, 7);
    assert!(reduction.steps.is_empty());
    Ok(())
}

#[test]
fn bezout_identity_for_35_and_15() {
    let bezout = extended_gcd(35, 15);
    assert_eq!(bezout.gcd, 5);
    assert_eq!(35 * bezout.u + 15 * bezout.v, 5);
}

#[test]
fn equation_35u_15v_eq_10_is_solvable() -> Result<(), EuclidError> {
    match solve_diophantine(35, 15, 10)? {
        DiophantineOutcome::Solvable(family) => {
            assert_eq!(35 * family.u0 + 15 * family.v0, 10);
            for t in [-1, 0, 1] {
                let (u, v) = family.solution_at(t);
                assert_eq!(35 * u + 15 * v, 10);
            }
        }
        DiophantineOutcome::NoSolution { gcd } => panic!("unexpectedly unsolvable, gcd {}", gcd),
    }
    Ok(())
}

#[test]
fn equation_6u_9v_eq_4_has_no_solution() -> Result<(), EuclidError> {
    assert_eq!(
        solve_diophantine(6, 9, 4)?,
        DiophantineOutcome::NoSolution { gcd: 3 }
    );
    Ok(())
}

#[test]
fn trace_survives_json_round_trip() -> Result<(), EuclidError> {
    let reduction = reduce(240, 46)?;
    let json = serde_json::to_string(&reduction).expect("serialize");
    let back: euclid_core::Reduction = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, reduction);
    Ok(())
}
