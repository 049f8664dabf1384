//! # agenda-rs
//!
//! Booking rules for a salon appointment page.
//!
//! The page lets a customer tick services, pick a date and one of a fixed
//! set of time slots, and type a phone number before submitting the form.
//! This crate holds the rules behind those widgets so the Web UI and the
//! command-line checker share them:
//!
//! - **Totals**: the price total is the sum of the ticked services
//! - **Working days**: closed days show a message and no slots
//! - **Slots**: 14 fixed times, reconciled against the booked ones
//! - **Input masks**: phone formatting and password feedback
//! - **Form check**: what must be filled before the form is sent
//!
//! ## Example
//!
//! ```
//! use agenda_rs::{DEFAULT_SLOTS, SlotState, reconcile};
//!
//! // The server reports booked times with seconds.
//! let board = reconcile(&DEFAULT_SLOTS, &["14:50:00", "09:00:00"]);
//!
//! assert_eq!(board.free_count(), 12);
//! assert_eq!(board.slots()[1].state, SlotState::Occupied);
//! ```

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod password;
pub mod phone;
pub mod slots;

pub use availability::{
    DateOutcome, FETCH_FAILED_MESSAGE, RequestGeneration, SlotUpdate, apply_response,
    date_outcome, parse_occupied, slots_path,
};
pub use booking::BookingForm;
pub use calendar::{CLOSED_DAY_MESSAGE, DayStatus, WorkWeek, parse_date};
pub use catalog::{Price, Selection, Service, ServiceCard};
pub use config::AgendaConfig;
pub use error::{AgendaError, Result};
pub use menu::MenuState;
pub use password::{
    PasswordFeedback, PasswordField, Visibility, confirmation_error, is_strong, is_valid_email,
    password_feedback,
};
pub use phone::mask_phone;
pub use slots::{DEFAULT_SLOTS, OccupancyIndex, Slot, SlotBoard, SlotState, reconcile, slot_key};
