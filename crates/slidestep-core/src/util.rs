//! Small helpers shared by the engine and the hooks.

/// Sign of `value`, treating zero as positive.
pub fn sign(value: f64) -> i8 {
    if value < 0.0 {
        -1
    } else {
        1
    }
}

/// First element of a collection, if any.
pub fn first<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().next()
}

/// Invoke every callback with the same argument, in order.
pub fn call_all<'a, A, F, I>(callbacks: I, arg: &A)
where
    A: ?Sized,
    F: FnMut(&A) + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut F>,
{
    for callback in callbacks {
        callback(arg);
    }
}
