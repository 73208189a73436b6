//! Request generations.
//!
//! Each async slot (part listing, part detail, upload) owns a
//! [`Generation`]. Issuing a new id makes every older id stale, so a late
//! response can be recognised and dropped instead of cancelled.

/// Tag carried by an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Monotonic counter for one request slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Generation {
    latest: u64,
}

impl Generation {
    pub(crate) fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub(crate) fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Makes every outstanding id stale without issuing a new one.
    pub(crate) fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_id_is_current() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        generation.invalidate();
        assert!(!generation.is_current(second));
    }
}
