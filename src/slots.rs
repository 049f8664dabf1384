//! Fixed time slots and their reconciliation against occupied times.
//!
//! The page offers the same 14 times every open day. The server reports
//! the times already booked for a date as timestamps (`"14:50:00"`); a
//! slot is occupied when its `HH:MM` text equals the first five
//! characters of any reported entry. Occupied slots are rendered but
//! cannot be chosen.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::parse_date;
use crate::error::{AgendaError, Result};

/// The bookable times, in display order.
pub const DEFAULT_SLOTS: [&str; 14] = [
    "07:10", "14:50", "08:10", "15:40", "09:00", "16:30", "09:50", "17:20", "10:40", "18:10",
    "11:30", "19:00", "14:00", "19:50",
];

/// Comparison key of a server timestamp: its first five characters.
pub fn slot_key(raw: &str) -> &str {
    match raw.char_indices().nth(5) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Free,
    Occupied,
}

/// One rendered slot button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub time: String,
    pub state: SlotState,
    pub active: bool,
}

impl Slot {
    pub fn is_selectable(&self) -> bool {
        self.state == SlotState::Free
    }

    /// CSS classes of the slot button.
    pub fn css_class(&self) -> &'static str {
        match (self.state, self.active) {
            (SlotState::Occupied, _) => "horario-btn ocupado",
            (SlotState::Free, true) => "horario-btn active",
            (SlotState::Free, false) => "horario-btn",
        }
    }
}

/// The slots for one date after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotBoard {
    slots: Vec<Slot>,
}

/// Mark each fixed slot free or occupied.
pub fn reconcile<S: AsRef<str>, O: AsRef<str>>(slots: &[S], occupied: &[O]) -> SlotBoard {
    let board = SlotBoard {
        slots: slots
            .iter()
            .map(|time| {
                let time = time.as_ref();
                let taken = occupied.iter().any(|o| slot_key(o.as_ref()) == time);
                Slot {
                    time: time.to_string(),
                    state: if taken {
                        SlotState::Occupied
                    } else {
                        SlotState::Free
                    },
                    active: false,
                }
            })
            .collect(),
    };
    debug!(
        slots = board.slots.len(),
        reported = occupied.len(),
        free = board.free_count(),
        "slots reconciled"
    );
    board
}

impl SlotBoard {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_selectable()).count()
    }

    /// Choose a free slot, clearing any previous choice.
    pub fn select(&mut self, time: &str) -> Result<()> {
        let slot = self
            .slots
            .iter()
            .find(|s| s.time == time)
            .ok_or_else(|| AgendaError::UnknownSlot(time.to_string()))?;
        if !slot.is_selectable() {
            return Err(AgendaError::SlotOccupied(time.to_string()));
        }
        for slot in &mut self.slots {
            slot.active = slot.time == time;
        }
        Ok(())
    }

    /// Value of the hidden `horario` field.
    pub fn selected(&self) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.active)
            .map(|s| s.time.as_str())
    }
}

/// Booked times grouped by date, as `date -> [HH:MM]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one booked `(date, time)` row; the time is cut to `HH:MM`.
    pub fn insert(&mut self, date: NaiveDate, time: &str) {
        let key = slot_key(time).to_string();
        let times = self.by_date.entry(date).or_default();
        if !times.contains(&key) {
            times.push(key);
        }
    }

    /// Build from a JSON list of `[date, time]` rows, e.g.
    /// `[["2026-10-20", "07:10:00"]]`.
    pub fn from_rows_json(body: &str) -> Result<Self> {
        let rows: Vec<(String, String)> = serde_json::from_str(body)?;
        let mut index = OccupancyIndex::new();
        for (date, time) in &rows {
            index.insert(parse_date(date)?, time);
        }
        debug!(rows = rows.len(), dates = index.by_date.len(), "bookings indexed");
        Ok(index)
    }

    pub fn occupied_on(&self, date: NaiveDate) -> &[String] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.by_date.keys()
    }
}

impl<'a> FromIterator<(NaiveDate, &'a str)> for OccupancyIndex {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, &'a str)>>(iter: I) -> Self {
        let mut index = OccupancyIndex::new();
        for (date, time) in iter {
            index.insert(date, time);
        }
        index
    }
}
