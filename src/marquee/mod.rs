// SPDX-License-Identifier: MPL-2.0
//! Marquee core: per-row scroll state machines and their track model.
//!
//! Each showcase row owns one [`RowController`] which reconciles three
//! independent input sources (arrow clicks, arrow press-and-hold, pointer
//! hover) into a single scroll offset and pause/resume state. The
//! [`Track`] is the controller's render surface: it holds the offset the
//! UI actually draws and the auto-scroll play state, so the widgets never
//! compute motion themselves.
//!
//! Rows are fully independent. The controllers are UI-free and take the
//! current `Instant` explicitly, so tests drive time without sleeping.

mod row;
mod track;

pub use row::{Direction, HoldSession, Mode, RowController, Tuning};
pub use track::Track;
