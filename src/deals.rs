//! Deals

use jiff::Timestamp;

use crate::{
    clock::{ServerClock, TimeSource},
    countdown::Countdown,
    products::{DealId, Product},
};

/// A time-limited sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Deal identifier
    pub id: DealId,

    /// Deal headline
    pub title: String,

    /// When the deal stops
    pub end_time: Timestamp,

    /// Whether the deal has been switched on
    pub is_active: bool,
}

impl Deal {
    /// Whether the deal is switched on and has not yet ended at `now`.
    #[must_use]
    pub fn is_running(&self, now: Timestamp) -> bool {
        self.is_active && now < self.end_time
    }

    /// Time left on the deal at `now`.
    #[must_use]
    pub fn countdown(&self, now: Timestamp) -> Countdown {
        Countdown::until(self.end_time, now)
    }

    /// Time left on the deal according to the server clock.
    #[must_use]
    pub fn countdown_on<S: TimeSource>(&self, clock: &ServerClock<S>) -> Countdown {
        self.countdown(clock.now())
    }
}

/// The currently featured deal and its products.
#[derive(Debug, Clone)]
pub struct ActiveDeal {
    /// The deal itself
    pub deal: Deal,

    /// Products featured in the deal
    pub products: Vec<Product>,
}

impl ActiveDeal {
    /// Featured products that actually carry a discount.
    pub fn products_on_sale(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|product| product.discount_price().is_some())
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use rusty_money::{Money, iso::NGN};
    use testresult::TestResult;

    use crate::{clock::FixedTimeSource, products::ProductId};

    use super::*;

    fn deal(end_time: Timestamp, is_active: bool) -> Deal {
        Deal {
            id: DealId::random(),
            title: "Flash Sale".to_string(),
            end_time,
            is_active,
        }
    }

    #[test]
    fn running_only_while_active_and_before_end() -> TestResult {
        let now: Timestamp = "2026-10-15T12:00:00Z".parse()?;
        let later: Timestamp = "2026-10-15T14:00:00Z".parse()?;

        assert!(deal(later, true).is_running(now));
        assert!(!deal(later, false).is_running(now));
        assert!(!deal(now, true).is_running(now));

        Ok(())
    }

    #[test]
    fn countdown_uses_server_time() -> TestResult {
        let local: Timestamp = "2026-10-15T12:00:00Z".parse()?;
        let end: Timestamp = "2026-10-15T13:00:00Z".parse()?;
        let mut clock = ServerClock::new(FixedTimeSource(local));

        clock.sync(local + SignedDuration::from_mins(15));

        let countdown = deal(end, true).countdown_on(&clock);

        assert_eq!(countdown.to_string(), "00:45:00");

        Ok(())
    }

    #[test]
    fn products_on_sale_skips_full_price() -> TestResult {
        let on_sale = Product::new(ProductId::random(), "Fan", Money::from_minor(500_00, NGN))?
            .with_discount_price(Money::from_minor(400_00, NGN))?;
        let full_price = Product::new(ProductId::random(), "Iron", Money::from_minor(300_00, NGN))?;

        let active = ActiveDeal {
            deal: deal("2026-10-15T13:00:00Z".parse()?, true),
            products: vec![on_sale.clone(), full_price],
        };

        let ids: Vec<ProductId> = active.products_on_sale().map(Product::id).collect();

        assert_eq!(ids, vec![on_sale.id()]);

        Ok(())
    }
}
