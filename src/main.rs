// SPDX-License-Identifier: MPL-2.0
use iced_prefs::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --data-dir: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        }),
    };

    for unused in args.finish() {
        log::warn!("Ignoring unexpected argument {unused:?}");
    }

    app::run(flags)
}
