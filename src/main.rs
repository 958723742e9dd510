// SPDX-License-Identifier: MPL-2.0
use iced_photoview::app;
use iced_photoview::cli::{self, Command};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli::parse(pico_args::Arguments::from_env()) {
        Ok(Command::Run(flags)) => app::run(flags),
        Ok(Command::Help | Command::Usage) => {
            print!("{}", cli::USAGE);
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}\n");
            eprint!("{}", cli::USAGE);
            std::process::exit(2);
        }
    }
}
