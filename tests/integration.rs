// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the marquee controllers over simulated
//! time, plus config and catalog round-trips through real files.

use approx::assert_abs_diff_eq;
use iced_marquee::catalog::{Catalog, Heading};
use iced_marquee::config::{self, Config};
use iced_marquee::marquee::{Direction, Mode, RowController, Track, Tuning};
use iced_marquee::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn row() -> (RowController, Instant) {
    let t0 = Instant::now();
    let mut controller = RowController::new(Track::new(10_000.0, -40.0), Tuning::default());
    controller.tick(t0);
    (controller, t0)
}

/// Drives the controller in 16 ms frame ticks up to `until`.
fn run_frames(controller: &mut RowController, from: Instant, until: Instant) {
    let frame = Duration::from_millis(16);
    let mut now = from;
    while now < until {
        now += frame;
        controller.tick(now.min(until));
    }
}

#[test]
fn click_pause_and_automatic_resume_end_to_end() {
    let (mut controller, t0) = row();

    // Click LEFT: offset 0 → -150, manual pause, arrow marked active.
    controller.arrow_clicked(Direction::Left, t0);
    assert_abs_diff_eq!(controller.offset_px(), -150.0);
    assert_eq!(controller.mode(), Mode::ManualPause);
    assert_eq!(controller.active_arrow(), Some(Direction::Left));

    // Just before the deadline nothing changes.
    run_frames(&mut controller, t0, t0 + Duration::from_millis(2990));
    assert_eq!(controller.mode(), Mode::ManualPause);

    // After 3000 ms: auto resumes, offset cleared, arrow inactive.
    run_frames(
        &mut controller,
        t0 + Duration::from_millis(2990),
        t0 + Duration::from_millis(3100),
    );
    assert_eq!(controller.mode(), Mode::Auto);
    assert!(controller.active_arrow().is_none());
    assert!(controller.track().is_at_baseline());
}

#[test]
fn hold_during_manual_pause_composes_with_click_steps() {
    let (mut controller, t0) = row();

    controller.arrow_clicked(Direction::Right, t0);
    controller.hold_started(Direction::Right, t0);
    run_frames(&mut controller, t0, t0 + Duration::from_millis(500));
    controller.hold_released();

    // One click step plus ten hold steps.
    assert_abs_diff_eq!(controller.offset_px(), 150.0 + 500.0);

    // The click's resume window still ends the pause on schedule.
    run_frames(
        &mut controller,
        t0 + Duration::from_millis(500),
        t0 + Duration::from_millis(3100),
    );
    assert_eq!(controller.mode(), Mode::Auto);
    assert!(controller.track().is_at_baseline());
}

#[test]
fn hover_never_disturbs_a_manual_pause() {
    let (mut controller, t0) = row();

    controller.arrow_clicked(Direction::Left, t0);
    let offset = controller.offset_px();
    let deadline = controller.resume_at();

    controller.hover_entered();
    controller.hover_exited();

    assert_eq!(controller.mode(), Mode::ManualPause);
    assert_abs_diff_eq!(controller.offset_px(), offset);
    assert_eq!(controller.resume_at(), deadline);
}

#[test]
fn auto_scroll_moves_between_interactions() {
    let (mut controller, t0) = row();

    run_frames(&mut controller, t0, t0 + Duration::from_secs(1));
    let drifted = controller.offset_px();
    assert!(drifted != 0.0);

    // Hover freezes the drift; leaving resumes it.
    controller.hover_entered();
    run_frames(
        &mut controller,
        t0 + Duration::from_secs(1),
        t0 + Duration::from_secs(2),
    );
    assert_abs_diff_eq!(controller.offset_px(), drifted);
    controller.hover_exited();
}

#[test]
fn config_round_trip_through_disk() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme_mode: ThemeMode::Light,
        scroll_speed: Some(55.0),
        resume_delay_ms: Some(4000),
        catalog: None,
    };
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.scroll_speed, Some(55.0));
    assert_eq!(loaded.resume_delay_ms, Some(4000));
}

#[test]
fn catalog_loads_from_disk_and_skips_empty_rows() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
        [[rows]]
        title = "Empty"
        entries = []

        [[rows]]
        title = "Tools"
        entries = ["Git", "Docker"]
        heading = "rightward"
        "#,
    )
    .expect("failed to write catalog");

    let catalog = Catalog::load(&path).expect("failed to load catalog");
    assert_eq!(catalog.rows.len(), 2);

    let installable: Vec<_> = catalog.installable_rows().collect();
    assert_eq!(installable.len(), 1);
    assert_eq!(installable[0].title.as_deref(), Some("Tools"));
    assert_eq!(installable[0].heading, Heading::Rightward);
}

#[test]
fn custom_resume_delay_is_honored() {
    let t0 = Instant::now();
    let tuning = Tuning {
        resume_delay: Duration::from_millis(1000),
        ..Tuning::default()
    };
    let mut controller = RowController::new(Track::new(10_000.0, -40.0), tuning);
    controller.tick(t0);

    controller.arrow_clicked(Direction::Left, t0);
    controller.tick(t0 + Duration::from_millis(999));
    assert_eq!(controller.mode(), Mode::ManualPause);

    controller.tick(t0 + Duration::from_millis(1000));
    assert_eq!(controller.mode(), Mode::Auto);
}
