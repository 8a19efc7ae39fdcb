// SPDX-License-Identifier: MPL-2.0
//! `iced_marquee` is an auto-scrolling showcase marquee built with the
//! Iced GUI framework.
//!
//! Each showcase row scrolls continuously on its own and can be driven
//! manually: arrow clicks step the row and pause it, press-and-hold
//! scrolls continuously, and hovering pauses the motion. The scroll
//! state machines live in [`marquee`], free of any UI types, with the
//! Iced layer on top.

#![doc(html_root_url = "https://docs.rs/iced_marquee/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod easter_egg;
pub mod error;
pub mod marquee;
pub mod ui;

#[cfg(test)]
mod test_utils;
