use core::iter::FusedIterator;

use crate::outcome::core::Outcome;

pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}
impl<S> FusedIterator for Iter<'_, S> {}

pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for IntoIter<S> {}
impl<S> FusedIterator for IntoIter<S> {}

impl<S, E> IntoIterator for Outcome<S, E> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, S, E> IntoIterator for &'a Outcome<S, E> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, E> Outcome<S, E> {
    /// Iterates over the success value: one item on success, none on failure.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter { inner: self.success_ref() }
    }
}

/// Collects outcomes until the first failure.
///
/// The first failure is returned and the remaining items are not pulled
/// from the iterator.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Outcome::Failure("a"));
/// ```
impl<S, E, C> FromIterator<Outcome<S, E>> for Outcome<C, E>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
