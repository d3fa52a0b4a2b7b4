mod cli;
mod command;
mod config;
mod engine;
mod error;
mod logging;
mod media;
mod metadata;
mod picker;
mod player;
mod present;
mod runtime;
mod ui;

#[cfg(test)]
mod test_support;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
