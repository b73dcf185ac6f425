//! Chains age updates on a person, once cleanly and once through a failing lookup.
//!
//! Run with: `cargo run --example person`

use outcome_rail::prelude::*;

#[derive(Debug, Clone, Default)]
struct Person {
    name: String,
    age: u32,
}

fn increment_age(mut person: Person) -> Person {
    person.age += 1;
    person
}

fn returns_error(_person: &Person) -> Result<Person, BoxError> {
    Err(msg("registry unavailable"))
}

fn can_return_error(person: Person) -> Outcome<Person> {
    attempt(returns_error(&person)).map_failure(|err| wrap("refreshing person", err))
}

fn main() {
    let john = Person { name: "John".to_string(), age: 30 };

    let older: Outcome<Person> = Outcome::success(john.clone())
        .then(increment_age)
        .then(increment_age);
    println!("{} is now {}", older.get_success().name, older.get_success().age);

    let potential_error = Outcome::success(john)
        .then_with(can_return_error)
        .then(increment_age);
    potential_error.match_with(
        |person| println!("unexpected success: {person:?}"),
        |err| println!("failed as expected: {err}"),
    );
}
