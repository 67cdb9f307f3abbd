//! Tracking whether a value was just inserted or was already present.
//!
//! [`Seen`] is returned by insert-if-missing style operations such as
//! [`Graph::ensure_vertex`](crate::graph::Graph::ensure_vertex), letting loaders count
//! what they actually added without a second lookup.

/// Outcome of an insert-if-missing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen<T> {
    /// The value was inserted by this call.
    New(T),
    /// The value was already present.
    Old(T),
}

impl<T> Seen<T> {
    /// Returns whether the value was inserted by this call.
    pub fn is_new(&self) -> bool {
        matches!(self, Seen::New(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Seen;

    #[test]
    fn new_and_old() {
        let fresh = Seen::New(3);
        let known = Seen::Old(4);

        assert!(fresh.is_new());
        assert!(!known.is_new());
    }
}
