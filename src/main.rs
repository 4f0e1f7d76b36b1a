// SPDX-License-Identifier: MPL-2.0
use picsure::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let args = pico_args::Arguments::from_env();

    let flags = Flags {
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
