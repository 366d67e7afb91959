//! Per-bar trading signal.

use std::fmt;

/// One discrete trading decision attached to a bar. Derived from an
/// indicator series, never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Sell.to_string(), "SELL");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
    }

    #[test]
    fn default_is_hold() {
        assert_eq!(Signal::default(), Signal::Hold);
    }
}
