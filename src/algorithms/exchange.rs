//! Exchange traces.
//!
//! Each pairwise exchange performed by the sorter is reported to an
//! [`ExchangeSink`]. One side of every exchange is the free slot.

use std::fmt;

/// A single pairwise exchange between the free slot and another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exchange {
    /// Position of the free element when the exchange happened.
    pub free: usize,
    /// Position the free element traded places with.
    pub other: usize,
}

impl Exchange {
    /// Replays the exchange on `arrangement`.
    ///
    /// Afterwards the free element sits at `self.other`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use swapsort::prelude::*;
    ///
    /// let mut arr = [1, 0, 2];
    /// Exchange { free: 1, other: 2 }.apply(&mut arr);
    ///
    /// assert_eq!(arr, [1, 2, 0]);
    /// ```
    #[inline]
    pub fn apply<T>(&self, arrangement: &mut [T]) {
        arrangement.swap(self.free, self.other);
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.free, self.other)
    }
}

/// Receives every exchange performed during a reorder, in order.
pub trait ExchangeSink {
    /// Called once per pairwise exchange, after it has been applied.
    fn record(&mut self, exchange: Exchange);
}

/// Discards the trace.
impl ExchangeSink for () {
    #[inline]
    fn record(&mut self, _exchange: Exchange) {}
}

/// Collects the full trace.
impl ExchangeSink for Vec<Exchange> {
    #[inline]
    fn record(&mut self, exchange: Exchange) {
        self.push(exchange);
    }
}

impl<S: ExchangeSink + ?Sized> ExchangeSink for &mut S {
    #[inline]
    fn record(&mut self, exchange: Exchange) {
        (**self).record(exchange);
    }
}

/// Counts exchanges without storing them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeCounter {
    /// Number of exchanges recorded so far.
    pub count: usize,
}

impl ExchangeSink for ExchangeCounter {
    #[inline]
    fn record(&mut self, _exchange: Exchange) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_trace_line() {
        let ex = Exchange { free: 4, other: 1 };
        assert_eq!(ex.to_string(), "4 1");
    }

    #[test]
    fn test_apply_moves_free_element() {
        let mut arr = ['a', 'b', '_', 'c'];
        Exchange { free: 2, other: 0 }.apply(&mut arr);
        assert_eq!(arr, ['_', 'b', 'a', 'c']);
    }

    #[test]
    fn test_sinks() {
        let ex = Exchange { free: 0, other: 1 };

        let mut trace: Vec<Exchange> = Vec::new();
        trace.record(ex);
        trace.record(ex);
        assert_eq!(trace, vec![ex, ex]);

        fn feed<S: ExchangeSink>(mut sink: S, ex: Exchange) {
            sink.record(ex);
        }

        let mut counter = ExchangeCounter::default();
        feed(&mut counter, ex);
        counter.record(ex);
        assert_eq!(counter.count, 2);

        ().record(ex);
    }
}
