//! A terminal client for Domino Bash.
//!
//! The client authenticates against an RGS wallet API, resumes any round
//! left unfinished, and then plays rounds from commands typed at the prompt.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use db_client::{
    commands::{COMMANDS, ClientCommand, parse_command},
    terminal::{TerminalPresenter, fall_duration, print_events},
};
use domino_bash::{
    ClientConfig, ConfigOverrides, HttpWalletClient,
    round::{BetDirection, PlayFlags, PlayStart, RoundActor, RoundHandle, RoundMachine, RoundState},
};
use log::info;
use pico_args::Arguments;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Play Domino Bash against an RGS wallet

USAGE:
  db_client [OPTIONS]

OPTIONS:
  --rgs-url    URL         RGS base url        [default: env RGS_URL or https://api.example.com]
  --session    ID          Session identifier  [default: env SESSION_ID or dev-session]
  --language   CODE        Language            [default: env LANGUAGE or en]
  --currency   CODE        Currency            [default: env CURRENCY or USD]
  --mode       MODE        Game mode           [default: env GAME_MODE or BASE]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  BET_LEVELS               Fallback bet ladder in minor units (e.g., 1000000,2000000)
  DEFAULT_BET_INDEX        Initial index into the fallback ladder
  RUST_LOG                 Log filter (e.g., debug)
  (A .env file in the working directory is loaded if present)
";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        rgs_url: pargs.opt_value_from_str("--rgs-url")?,
        session_id: pargs.opt_value_from_str("--session")?,
        language: pargs.opt_value_from_str("--language")?,
        currency: pargs.opt_value_from_str("--currency")?,
        mode: pargs.opt_value_from_str("--mode")?,
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    run(overrides).await
}

async fn run(overrides: ConfigOverrides) -> Result<()> {
    let config = ClientConfig::from_env(overrides).context("Failed to load configuration")?;
    info!(
        "Session {} against {}",
        config.session.session_id, config.session.rgs_base_url
    );

    let wallet = HttpWalletClient::new(config.session.rgs_base_url.clone());
    let machine =
        RoundMachine::from_config(wallet, &config).context("Invalid fallback bet ladder")?;
    let presenter = Arc::new(TerminalPresenter::default());
    let handle = RoundActor::spawn(machine, presenter.clone());

    let subscription = handle.subscribe().await?;
    let printer = tokio::spawn(print_events(subscription));

    println!("Connecting to server...");
    let state = match handle.authenticate().await {
        Ok(state) => state,
        Err(e) => {
            println!("Error: Could not connect.");
            return Err(e).context("Failed to authenticate");
        }
    };

    if state == RoundState::ResolvingRound {
        handle.resolve_active_round().await?;
    }
    handle.enter_idle().await?;

    println!("\n{COMMANDS}");
    play_loop(&handle, &presenter).await?;

    handle.shutdown().await?;
    let _ = printer.await;
    println!("Goodbye!");
    Ok(())
}

async fn play_loop(handle: &RoundHandle, presenter: &TerminalPresenter) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            ClientCommand::IncreaseBet => {
                handle.adjust_bet(BetDirection::Increase).await?;
            }
            ClientCommand::DecreaseBet => {
                handle.adjust_bet(BetDirection::Decrease).await?;
            }
            ClientCommand::Play(flags) => play_round(handle, presenter, flags).await?,
            ClientCommand::Balance => {
                let snapshot = handle.snapshot().await?;
                println!("BALANCE: ${}  BET: ${}", snapshot.balance, snapshot.bet);
            }
            ClientCommand::Help => println!("{COMMANDS}"),
            ClientCommand::Quit => break,
        }
    }

    Ok(())
}

async fn play_round(
    handle: &RoundHandle,
    presenter: &TerminalPresenter,
    flags: PlayFlags,
) -> Result<()> {
    presenter.set_turbo(flags.turbo);

    match handle.start_play(flags).await? {
        PlayStart::Placed(_) => {
            println!("Dominoes falling...");
            tokio::time::sleep(fall_duration(flags)).await;
            handle.presentation_complete().await?;
        }
        PlayStart::InsufficientFunds { balance, bet } => {
            println!("Insufficient balance: ${balance} available, ${bet} required");
        }
        PlayStart::Failed(message) => println!("Bet failed, stake returned: {message}"),
        PlayStart::Ignored => println!("Not ready for a new round"),
    }

    Ok(())
}
