// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The frame tick drives everything time-based: auto-scroll, hold steps,
//! resume deadlines, toast auto-dismiss, and the celebration overlay. It
//! only runs while something on screen actually moves.

use super::Message;
use crate::config;
use iced::keyboard;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the periodic frame tick subscription.
///
/// Active whenever at least one marquee row is installed, a toast is
/// showing, or a celebration is playing; otherwise the app is fully
/// idle and subscribes to nothing.
pub fn create_tick_subscription(
    has_rows: bool,
    has_notifications: bool,
    celebrating: bool,
) -> Subscription<Message> {
    if has_rows || has_notifications || celebrating {
        time::every(Duration::from_millis(config::FRAME_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription feeding the easter-egg detector.
///
/// Only key presses no widget claimed are forwarded.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}
