// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::showcase;
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic frame tick driving scroll, timers, and overlays.
    Tick(Instant),
    /// A key press routed from the window, for the easter egg.
    KeyPressed(keyboard::Key),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional showcase catalog TOML path, overriding the config file
    /// and the embedded default.
    pub catalog: Option<PathBuf>,
    /// Optional config file override (for settings.toml).
    pub config: Option<PathBuf>,
}
