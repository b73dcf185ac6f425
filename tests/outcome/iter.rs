use outcome_rail::Outcome;

#[test]
fn iter_yields_success_once() {
    let ok = Outcome::<i32, &str>::success(3);
    let items: Vec<_> = ok.iter().collect();
    assert_eq!(items, vec![&3]);
    assert_eq!(ok.iter().len(), 1);

    let err = Outcome::<i32, &str>::failure("x");
    assert_eq!(err.iter().count(), 0);
}

#[test]
fn into_iter_moves_success_value() {
    let values: Vec<String> = Outcome::<String, &str>::success("a".to_string())
        .into_iter()
        .chain(Outcome::<String, &str>::failure("skip"))
        .collect();
    assert_eq!(values, vec!["a".to_string()]);

    let mut sum = 0;
    for v in &Outcome::<i32, &str>::success(5) {
        sum += v;
    }
    assert_eq!(sum, 5);
}

#[test]
fn collect_gathers_all_successes() {
    let collected: Outcome<Vec<i32>, &str> =
        (1..=3).map(Outcome::success).collect();
    assert_eq!(collected, Outcome::Success(vec![1, 2, 3]));
}

#[test]
fn collect_stops_at_first_failure() {
    let mut pulled = 0;
    let items = vec![
        Outcome::success(1),
        Outcome::failure("first"),
        Outcome::failure("second"),
        Outcome::success(4),
    ];

    let collected: Outcome<Vec<i32>, &str> = items
        .into_iter()
        .inspect(|_| pulled += 1)
        .collect();

    assert_eq!(collected, Outcome::Failure("first"));
    assert_eq!(pulled, 2);
}
