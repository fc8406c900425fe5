use crate::Dollars;
use crate::PRICE_SCALE;
use crate::Prediction;

/// A predicted house value in dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(pub Dollars);

impl Price {
    pub fn dollars(&self) -> Dollars {
        self.0
    }
}

/// Model output is in units of $100,000.
impl From<Prediction> for Price {
    fn from(prediction: Prediction) -> Self {
        Self(prediction * PRICE_SCALE)
    }
}

/// `$1,234,567.89`, negatives as `-$1,234.00`, non-finite as `unavailable`.
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "unavailable");
        }
        let cents = (self.0.abs() * 100.).round();
        let sign = if self.0 < 0. && cents > 0. { "-" } else { "" };
        let whole = format!("{:.0}", (cents / 100.).trunc());
        let grouped = whole
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect::<Vec<&str>>()
            .join(",");
        write!(f, "{}${}.{:02}", sign, grouped, (cents % 100.) as u8)
    }
}
