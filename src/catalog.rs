//! Service catalog and running total.
//!
//! Each service card on the booking page carries a price and a checked
//! flag. The total shown under the cards is the sum of the checked
//! prices, recomputed from the whole selection on every change.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AgendaError, Result};

/// An exact amount of money in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse decimal text such as `"35"`, `"35.5"` or `"35.50"`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || AgendaError::InvalidPrice(text.to_string());
        let trimmed = text.trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if trimmed.ends_with('.') {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl TryFrom<String> for Price {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self> {
        Price::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> String {
        price.to_string()
    }
}

/// A bookable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: Price,
}

impl Service {
    pub fn new(id: &str, name: &str, price: Price) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// One card on the page: a service and whether its checkbox is ticked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub service: Service,
    pub checked: bool,
}

/// The cards in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    cards: Vec<ServiceCard>,
}

impl Selection {
    pub fn new(services: impl IntoIterator<Item = Service>) -> Self {
        Self {
            cards: services
                .into_iter()
                .map(|service| ServiceCard {
                    service,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn cards(&self) -> &[ServiceCard] {
        &self.cards
    }

    /// Set the checked flag of one card.
    pub fn toggle(&mut self, id: &str, checked: bool) -> Result<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.service.id == id)
            .ok_or_else(|| AgendaError::UnknownService(id.to_string()))?;
        card.checked = checked;
        debug!(service = id, checked, total = %self.total(), "service toggled");
        Ok(())
    }

    pub fn checked(&self) -> impl Iterator<Item = &Service> {
        self.cards.iter().filter(|c| c.checked).map(|c| &c.service)
    }

    /// Sum of the checked prices.
    pub fn total(&self) -> Price {
        self.checked().map(|s| s.price).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.cards.iter().any(|c| c.checked)
    }
}
