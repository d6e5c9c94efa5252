// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        anchor: args.opt_value_from_str("--anchor").unwrap(),
        max_visible: args.opt_value_from_str("--max-visible").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
