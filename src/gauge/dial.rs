use super::Price;
use crate::Dollars;
use crate::GAUGE_MAX;

const CX: f64 = 100.;
const CY: f64 = 100.;
const RADIUS: f64 = 80.;

/// Semicircular dial from `$0` on the left to `GAUGE_MAX` on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    price: Price,
    max: Dollars,
}

impl From<Price> for Gauge {
    fn from(price: Price) -> Self {
        Self {
            price,
            max: GAUGE_MAX,
        }
    }
}

impl Gauge {
    /// Needle position in [0, 1]. Prices off the scale pin to an end.
    pub fn fraction(&self) -> f64 {
        match self.price.dollars() / self.max {
            f if f.is_nan() => 0.,
            f => f.clamp(0., 1.),
        }
    }
    /// Point on the arc at the needle position.
    pub fn tip(&self) -> (f64, f64) {
        let theta = std::f64::consts::PI * (1. - self.fraction());
        (CX + RADIUS * theta.cos(), CY - RADIUS * theta.sin())
    }
    /// Inline SVG: grey track, filled arc up to the needle, the needle,
    /// scale labels and the formatted price underneath.
    pub fn svg(&self) -> String {
        let (x, y) = self.tip();
        let (x0, x1) = (CX - RADIUS, CX + RADIUS);
        let band = match self.fraction() {
            f if f < 1. / 3. => "#4caf50",
            f if f < 2. / 3. => "#ffb300",
            _ => "#e53935",
        };
        format!(
            r##"<svg class="gauge" viewBox="0 0 200 130" width="320" role="img" aria-label="{price}">
  <path d="M {x0} {CY} A {RADIUS} {RADIUS} 0 0 1 {x1} {CY}" fill="none" stroke="#e0e0e0" stroke-width="16"/>
  <path d="M {x0} {CY} A {RADIUS} {RADIUS} 0 0 1 {x:.2} {y:.2}" fill="none" stroke="{band}" stroke-width="16"/>
  <line x1="{CX}" y1="{CY}" x2="{x:.2}" y2="{y:.2}" stroke="#212121" stroke-width="3"/>
  <circle cx="{CX}" cy="{CY}" r="5" fill="#212121"/>
  <text x="{x0}" y="{lo_y}" text-anchor="middle" font-size="8">{lo}</text>
  <text x="{x1}" y="{lo_y}" text-anchor="middle" font-size="8">{hi}</text>
  <text x="{CX}" y="{price_y}" text-anchor="middle" font-size="14" font-weight="bold">{price}</text>
</svg>"##,
            lo_y = CY + 12.,
            price_y = CY + 28.,
            lo = Price::from(0.),
            hi = Price(self.max),
            price = self.price,
        )
    }
}
