use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_preserves_state() {
    let ok: Result<i32, &str> = Ok(3);
    assert!(result_to_outcome(ok).is_success());

    let err: Result<i32, &str> = Err("fail");
    let outcome = result_to_outcome(err);
    assert!(outcome.is_failure());
    assert_eq!(outcome.get_failure(), Some(&"fail"));
}

#[test]
fn outcome_to_result_handles_both_variants() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("boom")), Err("boom"));
}

#[test]
fn option_to_outcome_uses_supplied_error() {
    assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::Success(1));
    assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::Failure("missing"));
}

#[test]
fn from_impls_round_trip_through_std_result() {
    let outcome: Outcome<i32, &str> = Err("nope").into();
    let back: Result<i32, &str> = outcome.into();
    assert_eq!(back, Err("nope"));

    let outcome = Outcome::from_result(Ok::<_, &str>(5));
    assert_eq!(outcome.into_result(), Ok(5));
}

#[test]
fn into_result_works_with_question_mark() {
    fn add_one(o: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
        Ok(o.into_result()? + 1)
    }

    assert_eq!(add_one(Outcome::success(1)), Ok(2));
    assert_eq!(add_one(Outcome::failure("stop")), Err("stop"));
}

#[test]
fn ok_discards_error() {
    assert_eq!(Outcome::<i32, &str>::success(1).ok(), Some(1));
    assert_eq!(Outcome::<i32, &str>::failure("x").ok(), None);
}
