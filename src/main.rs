use clap::Parser;

use browser_desk::config::Cli;
use browser_desk::desktop::Desktop;
use browser_desk::drivers::{ConsoleDriver, TerminalSession};
use browser_desk::error::Result;
use browser_desk::runner::run_desktop;
use browser_desk::tracing_sub::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let target = match &cli.log_file {
        Some(path) => LogTarget::open(path)?,
        None => LogTarget::Discard,
    };
    tracing_sub::init(target, cli.log_level);

    let mut desktop = Desktop::new(cli.store_policy(), cli.view_config());
    let mut session = TerminalSession::new()?;
    session.enter()?;

    let result = run_desktop(
        session.terminal_mut(),
        ConsoleDriver::new(),
        &mut desktop,
        cli.poll_interval(),
    );

    session.exit()?;
    result?;
    Ok(())
}
