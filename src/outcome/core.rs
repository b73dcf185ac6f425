use crate::outcome::ops::{from_parts, transform, transform_with};
use crate::types::BoxError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either a success holding `S` or a failure holding `E`.
///
/// `Outcome` replaces hand-written `(value, error)` plumbing with a chain of
/// combinators. Once a chain reaches [`Failure`](Outcome::Failure) every
/// later step short-circuits: the supplied closure is never run and the
/// original error value is moved along untouched.
///
/// The error type defaults to [`BoxError`], so most signatures only name
/// the success type: `Outcome<User>`.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes as an externally tagged
/// enum (`{"Success": ..}` / `{"Failure": ..}`) when `S` and `E` do.
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `E` - The error type, [`BoxError`] by default
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Person {
///     age: u32,
/// }
///
/// fn increment_age(mut p: Person) -> Person {
///     p.age += 1;
///     p
/// }
///
/// let older: Outcome<Person> = Outcome::success(Person { age: 30 })
///     .then(increment_age)
///     .then(increment_age);
///
/// assert_eq!(older.get_success().age, 32);
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<S, E = BoxError> {
    Success(S),
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a copy of the success value, or `S::default()` on failure.
    ///
    /// This accessor never panics. Check [`is_success`](Self::is_success)
    /// first when the default value could be mistaken for a real one, or use
    /// [`success_ref`](Self::success_ref) to get an `Option`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).get_success(), 42);
    /// assert_eq!(Outcome::<i32, &str>::failure("boom").get_success(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_success(&self) -> S
    where
        S: Clone + Default,
    {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure(_) => S::default(),
        }
    }

    /// Returns the error, or `None` when the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("boom").get_failure(), Some(&"boom"));
    /// assert_eq!(Outcome::<i32, &str>::success(1).get_failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).get_success_or(7), 42);
    /// assert_eq!(Outcome::<i32, &str>::failure("boom").get_success_or(7), 7);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_success_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes a fallback from the error.
    ///
    /// This is the lazy form of [`get_success_or`](Self::get_success_or),
    /// named after `Result::unwrap_or_else`: it takes a closure instead of a
    /// ready-made default, and `f` only runs on failure. A closure that
    /// ignores the error, `|_| default`, gives the same result as
    /// `get_success_or(default)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::failure("boom").get_success_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_success_or_else<F>(self, f: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Converts `&Outcome<S, E>` into `Outcome<&S, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies an infallible step to the success value.
    ///
    /// On failure `f` is not called and the same error is returned.
    /// Use [`then_with`](Self::then_with) when the step can itself fail, or
    /// [`map`](Self::map) when it changes the success type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).then(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    ///
    /// let failed = Outcome::<i32, &str>::failure("boom").then(|x| x * 2);
    /// assert_eq!(failed, Outcome::Failure("boom"));
    /// ```
    #[inline]
    pub fn then<F>(self, f: F) -> Self
    where
        F: FnOnce(S) -> S,
    {
        transform(self, f)
    }

    /// Applies a fallible step to the success value, flattening the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).then_with(halve), Outcome::Success(4));
    /// assert_eq!(Outcome::success(7).then_with(halve), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn then_with<F>(self, f: F) -> Self
    where
        F: FnOnce(S) -> Self,
    {
        transform_with(self, f)
    }

    /// Continues a success with an already computed `(value, error)` pair.
    ///
    /// When `self` is a success this behaves like [`from_parts`]: `Some(err)`
    /// yields a failure, `None` yields `Success(value)`. When `self` is
    /// already a failure, the original error is kept and both arguments are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let next = Outcome::<i32, &str>::success(10).then_try(20, None);
    /// assert_eq!(next, Outcome::Success(20));
    ///
    /// let kept = Outcome::<i32, &str>::failure("first").then_try(30, Some("second"));
    /// assert_eq!(kept, Outcome::Failure("first"));
    /// ```
    #[inline]
    pub fn then_try(self, value: S, error: Option<E>) -> Self {
        match self {
            Self::Success(_) => from_parts(value, error),
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Maps the success value to a new type.
    ///
    /// Method form of [`transform`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::success(42).map(|x| format!("value: {x}"));
    /// assert_eq!(label.get_success(), "value: 42");
    /// ```
    #[inline]
    pub fn map<NS, F>(self, f: F) -> Outcome<NS, E>
    where
        F: FnOnce(S) -> NS,
    {
        transform(self, f)
    }

    /// Chains a fallible step that may change the success type.
    ///
    /// Method form of [`transform_with`].
    #[inline]
    pub fn flat_map<NS, F>(self, f: F) -> Outcome<NS, E>
    where
        F: FnOnce(S) -> Outcome<NS, E>,
    {
        transform_with(self, f)
    }

    /// Rewrites the error, leaving a success untouched.
    ///
    /// This is the one combinator that replaces a propagating error, and it
    /// does so only because the caller asks for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let coded = Outcome::<i32, u16>::failure(404).map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(coded, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, f: F) -> Outcome<S, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Calls `op` on failure, otherwise returns the success unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::failure("missing").or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Calls `f` with a reference to the success value and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error and returns `self`.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Runs exactly one of the callbacks, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// Outcome::<i32, &str>::success(5).match_with(|v| seen = Some(v), |_| unreachable!());
    /// assert_eq!(seen, Some(5));
    /// ```
    #[inline]
    pub fn match_with<FS, FF>(self, on_success: FS, on_failure: FF)
    where
        FS: FnOnce(S),
        FF: FnOnce(E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs exactly one of the callbacks with a borrowed payload.
    #[inline]
    pub fn match_ref<FS, FF>(&self, on_success: FS, on_failure: FF)
    where
        FS: FnOnce(&S),
        FF: FnOnce(&E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Collapses both branches into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let text = Outcome::<i32, &str>::failure("boom")
    ///     .fold(|v| v.to_string(), |e| format!("error: {e}"));
    /// assert_eq!(text, "error: boom");
    /// ```
    #[inline]
    pub fn fold<T, FS, FF>(self, on_success: FS, on_failure: FF) -> T
    where
        FS: FnOnce(S) -> T,
        FF: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<S: Default, E> Default for Outcome<S, E> {
    /// `Success(S::default())`.
    fn default() -> Self {
        Self::Success(S::default())
    }
}
