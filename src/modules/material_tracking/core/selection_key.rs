use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed selection key: {0:?}")]
pub struct MalformedSelectionKey(pub String);

/// Addresses one material as `orderId-index`.
///
/// Order ids may themselves contain `-`, so parsing splits on the last one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey {
    pub order_id: String,
    pub index: usize,
}

impl SelectionKey {
    pub fn new(order_id: impl Into<String>, index: usize) -> Self {
        Self {
            order_id: order_id.into(),
            index,
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.order_id, self.index)
    }
}

impl FromStr for SelectionKey {
    type Err = MalformedSelectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedSelectionKey(s.to_string());
        let (order_id, index) = s.rsplit_once('-').ok_or_else(malformed)?;
        if order_id.is_empty() {
            return Err(malformed());
        }
        let index = index.parse::<usize>().map_err(|_| malformed())?;
        Ok(Self::new(order_id, index))
    }
}
