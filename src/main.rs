mod commands;
mod completion;
mod parser;
mod repl;
mod util;

use recent_files::config::Config;
use recent_files::logging;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.log_level);
    let code = repl::start_repl(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
