//! Page configuration loaded from TOML.
//!
//! Every field has a default, so an empty document describes the stock
//! salon page:
//!
//! ```toml
//! api_base = ""
//! slots = ["07:10", "14:50"]
//! open_days = ["Tue", "Wed", "Thu", "Fri", "Sat"]
//!
//! [[services]]
//! id = "corte"
//! name = "Corte"
//! price = "35.00"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::WorkWeek;
use crate::catalog::{Price, Selection, Service};
use crate::error::{AgendaError, Result};
use crate::slots::DEFAULT_SLOTS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    /// Prefix for the slots endpoint; empty means same origin.
    pub api_base: String,
    pub slots: Vec<String>,
    pub open_days: WorkWeek,
    pub services: Vec<Service>,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            open_days: WorkWeek::default(),
            services: default_services(),
        }
    }
}

fn default_services() -> Vec<Service> {
    [
        ("corte", "Corte", 3500),
        ("barba", "Barba", 2500),
        ("sobrancelha", "Sobrancelha", 1500),
        ("pigmentacao", "Pigmentação", 4000),
        ("hidratacao", "Hidratação", 3000),
    ]
    .into_iter()
    .map(|(id, name, cents)| Service::new(id, name, Price::from_cents(cents)))
    .collect()
}

impl AgendaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AgendaConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| AgendaError::Config(format!("reading {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            services = config.services.len(),
            slots = config.slots.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots.is_empty() {
            return Err(AgendaError::Config("slot list is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !is_hhmm(slot) {
                return Err(AgendaError::Config(format!("slot '{slot}' is not HH:MM")));
            }
            if !seen.insert(slot.as_str()) {
                return Err(AgendaError::Config(format!("slot '{slot}' listed twice")));
            }
        }
        if self.open_days.open_days().is_empty() {
            return Err(AgendaError::Config("no open weekday".to_string()));
        }
        let mut ids = HashSet::new();
        for service in &self.services {
            if !ids.insert(service.id.as_str()) {
                return Err(AgendaError::Config(format!(
                    "service id '{}' listed twice",
                    service.id
                )));
            }
        }
        Ok(())
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.services.iter().cloned())
    }
}

fn is_hhmm(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && b[..2].iter().chain(&b[3..]).all(u8::is_ascii_digit)
        && &s[..2] < "24"
        && &s[3..] < "60"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_default() {
        let config = AgendaConfig::from_toml_str("").unwrap();
        assert_eq!(config, AgendaConfig::default());
        assert_eq!(config.slots.len(), 14);
        assert!(config.open_days.is_open_on(Weekday::Sat));
        assert!(!config.open_days.is_open_on(Weekday::Mon));
    }

    #[test]
    fn test_custom_document() {
        let config = AgendaConfig::from_toml_str(
            r#"
            api_base = "http://localhost:5000"
            slots = ["08:00", "09:00"]
            open_days = ["Mon", "Friday"]

            [[services]]
            id = "corte"
            name = "Corte"
            price = "40.5"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.slots, vec!["08:00", "09:00"]);
        assert!(config.open_days.is_open_on(Weekday::Fri));
        assert_eq!(config.services[0].price.cents(), 4050);
        assert_eq!(config.selection().cards().len(), 1);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AgendaConfig::from_toml_str("slots = []").is_err());
        assert!(AgendaConfig::from_toml_str(r#"slots = ["7:10"]"#).is_err());
        assert!(AgendaConfig::from_toml_str(r#"slots = ["25:00"]"#).is_err());
        assert!(AgendaConfig::from_toml_str(r#"slots = ["08:00", "08:00"]"#).is_err());
        assert!(AgendaConfig::from_toml_str("open_days = []").is_err());
        assert!(matches!(
            AgendaConfig::from_toml_str(
                "[[services]]\nid = \"a\"\nname = \"A\"\nprice = \"abc\""
            ),
            Err(AgendaError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "slots = [\"10:00\"]").unwrap();
        let config = AgendaConfig::load(file.path()).unwrap();
        assert_eq!(config.slots, vec!["10:00"]);

        assert!(AgendaConfig::load("/nonexistent/agenda.toml").is_err());
    }
}
