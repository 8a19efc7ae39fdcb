// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are short, transient messages layered over the showcase.
//! The [`Manager`] owns their lifecycle (capped visible set, overflow
//! queue, auto-dismiss timing); [`toast`] renders them.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
