// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the showcase, notifications, theming, and the
//! easter egg together and translates top-level messages into component
//! updates. Policy decisions (startup fallbacks, window sizing, what the
//! frame tick drives) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::easter_egg;
use crate::marquee::Tuning;
use crate::ui::effects::Celebration;
use crate::ui::notifications::{self, Notification};
use crate::ui::showcase;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    /// The marquee rows and their controllers.
    showcase: showcase::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Theme selection resolved against the system preference.
    theme_mode: ThemeMode,
    /// Key-sequence detector for the easter egg.
    easter_egg: easter_egg::Detector,
    /// Star burst overlay while one is playing.
    celebration: Option<Celebration>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from flags and the config file.
    ///
    /// Startup never fails: a broken config falls back to defaults, a
    /// broken catalog falls back to the embedded one, and each problem
    /// surfaces as a warning toast instead of an error.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        let config = match Self::load_config(&flags) {
            Ok(config) => config,
            Err(err) => {
                app.notifications.push(Notification::warning(format!(
                    "Settings could not be read, using defaults ({err})"
                )));
                Config::default()
            }
        };
        app.theme_mode = config.theme_mode;

        let catalog = app.load_catalog(&flags, &config);
        let default_speed = config::clamp_scroll_speed(
            config.scroll_speed.unwrap_or(config::DEFAULT_SPEED_PX_PER_SEC),
        );
        let tuning = Tuning {
            resume_delay: Duration::from_millis(
                config.resume_delay_ms.unwrap_or(config::RESUME_DELAY_MS),
            ),
            ..Tuning::default()
        };
        app.showcase = showcase::State::from_catalog(&catalog, default_speed, tuning);

        (app, Task::none())
    }

    fn load_config(flags: &Flags) -> crate::error::Result<Config> {
        match &flags.config {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
    }

    /// Resolves the showcase catalog: flag, then config file, then the
    /// embedded default. File problems degrade to the embedded catalog
    /// with a warning toast.
    fn load_catalog(&mut self, flags: &Flags, config: &Config) -> Catalog {
        let custom_path = flags.catalog.as_ref().or(config.catalog.as_ref());

        if let Some(path) = custom_path {
            match Catalog::load(path) {
                Ok(catalog) => return catalog,
                Err(err) => {
                    self.notifications.push(Notification::warning(format!(
                        "Catalog {} could not be loaded ({err})",
                        path.display()
                    )));
                }
            }
        }

        match Catalog::embedded() {
            Ok(catalog) => catalog,
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("Built-in catalog broken: {err}")));
                Catalog::default()
            }
        }
    }

    fn title(&self) -> String {
        String::from("Iced Marquee")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            !self.showcase.is_empty(),
            self.notifications.has_notifications(),
            self.celebration.is_some(),
        );
        let keyboard_sub = subscription::create_keyboard_subscription();

        Subscription::batch([tick_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(msg) => {
                self.showcase.update(msg);
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
            }
            Message::Tick(now) => {
                self.showcase.update(showcase::Message::Tick(now));
                self.notifications.tick();
                if self
                    .celebration
                    .is_some_and(|celebration| celebration.is_finished(now))
                {
                    self.celebration = None;
                }
            }
            Message::KeyPressed(key) => {
                if self.easter_egg.observe(&key) {
                    self.celebration = Some(Celebration::new(Instant::now()));
                    self.notifications
                        .push(Notification::success("Super star mode activated!"));
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::{Direction, Mode};
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    fn konami_keys() -> Vec<Key> {
        vec![
            Key::Named(Named::ArrowUp),
            Key::Named(Named::ArrowUp),
            Key::Named(Named::ArrowDown),
            Key::Named(Named::ArrowDown),
            Key::Named(Named::ArrowLeft),
            Key::Named(Named::ArrowRight),
            Key::Named(Named::ArrowLeft),
            Key::Named(Named::ArrowRight),
            Key::Character("b".into()),
            Key::Character("a".into()),
        ]
    }

    #[test]
    fn new_app_installs_embedded_rows_without_toasts() {
        let (app, _task) = App::new(Flags::default());
        assert!(!app.showcase.is_empty());
        assert!(!app.notifications.has_notifications());
        assert!(app.celebration.is_none());
    }

    #[test]
    fn missing_custom_catalog_falls_back_with_warning() {
        let flags = Flags {
            catalog: Some(std::path::PathBuf::from("/definitely/not/here.toml")),
            config: None,
        };
        let (app, _task) = App::new(flags);

        // Fallback to the embedded catalog, plus one warning toast.
        assert!(!app.showcase.is_empty());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn full_key_sequence_starts_celebration_and_toast() {
        let (mut app, _task) = App::new(Flags::default());

        for key in konami_keys() {
            let _ = app.update(Message::KeyPressed(key));
        }

        assert!(app.celebration.is_some());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn tick_clears_finished_celebration() {
        let (mut app, _task) = App::new(Flags::default());
        let t0 = Instant::now();
        app.celebration = Some(Celebration::new(t0));

        let _ = app.update(Message::Tick(t0 + Duration::from_millis(100)));
        assert!(app.celebration.is_some());

        let _ = app.update(Message::Tick(t0 + Celebration::total_duration()));
        assert!(app.celebration.is_none());
    }

    #[test]
    fn showcase_messages_reach_the_rows() {
        let (mut app, _task) = App::new(Flags::default());

        let _ = app.update(Message::Showcase(showcase::Message::Arrow {
            row: 0,
            event: crate::ui::showcase::arrows::Event::Released(Direction::Left),
        }));

        assert_eq!(
            app.showcase.rows()[0].controller().mode(),
            Mode::ManualPause
        );
    }

    #[test]
    fn title_is_stable() {
        let app = App::default();
        assert_eq!(app.title(), "Iced Marquee");
    }
}
