//! Subcommands of the `magic-count` binary.
mod inspect;
mod play;

pub use inspect::{Coords, Ledger, Menu};
pub use play::{Cast, LevelUp, Recover, Script};

use anyhow::Result;
use magic_client::{ClientConfig, Report, Session};
use magic_content::ContentFactory;

fn load_session(config: &ClientConfig) -> Result<Session> {
    Session::load(&ContentFactory::new(&config.content_dir))
}

fn print(config: &ClientConfig, report: &Report) {
    println!("{}", report.render(config.format));
}
