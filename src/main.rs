//! Terminal snake runner (default binary).
//!
//! Parses the configuration, hands the terminal to a [`TerminalDriver`] for
//! the length of one session and prints the final score once the terminal
//! has been restored.

use anyhow::Result;
use env_logger::Env;

use tui_snake::{parse_args, run_session, SessionEnd, TerminalDriver};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{}", tui_snake::config::USAGE);
        return Ok(());
    };

    let mut game = config.build_game()?;
    log::info!("starting session seed={} config={:?}", game.seed(), config);

    let mut driver = TerminalDriver::enter(config.tick_duration())?;
    let result = run_session(&mut game, &mut driver);

    // Always try to restore terminal state.
    let _ = driver.exit();
    let report = result?;

    if let SessionEnd::Over(reason) = report.end {
        if reason.is_win() {
            println!("Board cleared!");
        }
    }
    println!("Final Score: {}", report.score);
    Ok(())
}
