//! Outcome of a read that may be answered from the fallback catalog.

/// Why a read was answered from the fallback catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The store answered but had no matching records.
    Empty,
    /// The store query failed.
    Unavailable,
}

/// Where the data of a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Store,
    Fallback,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Store => "store",
            DataSource::Fallback => "fallback",
        }
    }
}

/// Data served either from the store or from the fallback catalog.
///
/// Callers always get usable data; the variant tells them which path was taken.
#[derive(Debug, Clone, PartialEq)]
pub enum Served<T> {
    Store(T),
    Fallback { data: T, reason: FallbackReason },
}

impl<T> Served<T> {
    pub fn fallback(data: T, reason: FallbackReason) -> Self {
        Self::Fallback { data, reason }
    }

    pub fn source(&self) -> DataSource {
        match self {
            Served::Store(_) => DataSource::Store,
            Served::Fallback { .. } => DataSource::Fallback,
        }
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Served::Store(_) => None,
            Served::Fallback { reason, .. } => Some(*reason),
        }
    }

    pub fn data(&self) -> &T {
        match self {
            Served::Store(data) | Served::Fallback { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Served::Store(data) | Served::Fallback { data, .. } => data,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Served<U> {
        match self {
            Served::Store(data) => Served::Store(f(data)),
            Served::Fallback { data, reason } => Served::Fallback {
                data: f(data),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_variant() {
        let served = Served::Store(vec![1, 2]);
        assert_eq!(served.source(), DataSource::Store);
        assert_eq!(served.fallback_reason(), None);
        assert_eq!(served.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_fallback_variant_keeps_reason_through_map() {
        let served = Served::fallback(vec![1, 2, 3], FallbackReason::Unavailable).map(|v| v.len());
        assert_eq!(served.source().as_str(), "fallback");
        assert_eq!(served.fallback_reason(), Some(FallbackReason::Unavailable));
        assert_eq!(*served.data(), 3);
    }
}
