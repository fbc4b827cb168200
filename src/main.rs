use clap::Parser;
use env_logger::Env;
use gatesim::cmd::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    cli.command.run()
}
