// SPDX-License-Identifier: MPL-2.0
use iced_marquee::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        catalog: args.opt_value_from_str("--catalog").unwrap_or(None),
        config: args.opt_value_from_str("--config").unwrap_or(None),
    };

    app::run(flags)
}
