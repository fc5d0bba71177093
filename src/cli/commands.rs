use clap::Parser;

use crate::tui::render::help_view::keyboard_help_text;

#[derive(Parser, Debug)]
#[command(
    name = "donut",
    about = concat!("donut v", env!("CARGO_PKG_VERSION"), " - simple todo lists in plain markdown"),
    version,
    after_help = keyboard_help_text()
)]
pub struct Cli {}
