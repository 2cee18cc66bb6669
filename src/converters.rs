//! Curried helpers for combining outputs with [`apply`](crate::apply::apply)
//!
//! `token('a').map(tuple).apply(token('b'))` yields `('a', 'b')`, and
//! `p.map(extend).apply(zero_or_more(p))` collects a non-empty list.

/// Create a tuple of the arguments
pub fn tuple<A, B>(a: A) -> impl FnOnce(B) -> (A, B) {
    move |b| (a, b)
}

/// Return a collection containing `x` followed by all elements of `xs`
pub fn extend<A, C>(x: A) -> impl FnOnce(C) -> C
where
    C: Default + Extend<A> + IntoIterator<Item = A>,
{
    move |xs| {
        let mut result = C::default();
        result.extend(Some(x));
        result.extend(xs);
        result
    }
}

/// Join two collections together
pub fn join<A, C1, C2>(xs1: C1) -> impl FnOnce(C2) -> C1
where
    C1: Extend<A>,
    C2: IntoIterator<Item = A>,
{
    move |xs2| {
        let mut xs1 = xs1;
        xs1.extend(xs2);
        xs1
    }
}
