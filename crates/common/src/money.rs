use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point drift.
///
/// JSON bodies carry decimal dollars; the conversion happens at the DTO
/// boundary via [`Money::as_dollars`] / [`Money::from_dollars_f64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a Money amount from a decimal dollar value, rounding to
    /// the nearest cent.
    pub fn from_dollars_f64(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).round() as i64,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the amount as decimal dollars for JSON projection.
    pub fn as_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiplies the amount by a line quantity.
    pub fn times(&self, quantity: i32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_dollars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_multiplies_by_quantity() {
        let price = Money::from_cents(1000);
        assert_eq!(price.times(2).cents(), 2000);
    }

    #[test]
    fn sum_accumulates_line_subtotals() {
        let total: Money = [Money::from_cents(1000), Money::from_cents(550)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 1550);
    }

    #[test]
    fn dollars_round_trip_exactly_at_cent_precision() {
        let m = Money::from_dollars_f64(1299.99);
        assert_eq!(m.cents(), 129_999);
        assert_eq!(m.as_dollars(), 1299.99);
    }

    #[test]
    fn display_renders_two_decimals() {
        assert_eq!(Money::from_cents(2000).to_string(), "20.00");
    }
}
