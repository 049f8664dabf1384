//! Booking form: the client-side check before native submission.

use tracing::{debug, warn};

use crate::catalog::{Price, Selection};
use crate::error::{AgendaError, Result};

/// The values the booking form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// Ids of the checked services.
    pub services: Vec<String>,
    /// Date input value (`YYYY-MM-DD`), empty when unset.
    pub date: String,
    /// Hidden `horario` field, empty until a slot is chosen.
    pub slot: String,
    pub total: Price,
    pub phone: String,
}

impl BookingForm {
    /// Snapshot the page state into form values.
    pub fn from_page(selection: &Selection, date: &str, slot: Option<&str>, phone: &str) -> Self {
        Self {
            services: selection.checked().map(|s| s.id.clone()).collect(),
            date: date.to_string(),
            slot: slot.unwrap_or_default().to_string(),
            total: selection.total(),
            phone: phone.to_string(),
        }
    }

    /// Names of the required fields that are still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.services.is_empty() {
            missing.push("servicos");
        }
        if self.date.trim().is_empty() {
            missing.push("data");
        }
        if self.slot.trim().is_empty() {
            missing.push("horario");
        }
        if self.total.is_zero() {
            missing.push("total");
        }
        missing
    }

    /// Block submission unless services, date, slot and a non-zero total are set.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            debug!(date = %self.date, slot = %self.slot, total = %self.total, "booking form ready");
            Ok(())
        } else {
            warn!(?missing, "booking form incomplete");
            Err(AgendaError::IncompleteForm { missing })
        }
    }

    /// Name/value pairs posted by the form, `servicos` repeated per service.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = self
            .services
            .iter()
            .map(|s| ("servicos", s.clone()))
            .collect();
        fields.push(("data", self.date.clone()));
        fields.push(("horario", self.slot.clone()));
        fields.push(("total", self.total.to_string()));
        fields.push(("telefone", self.phone.clone()));
        fields
    }
}
