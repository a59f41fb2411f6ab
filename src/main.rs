use anyhow::Result;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse_or_exit();
    cli::utils::init_logging(cli.verbose);
    cli::run(cli)
}
