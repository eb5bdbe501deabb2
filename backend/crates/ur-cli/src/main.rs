//! ur - user registry CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a user
//! ur submit --name Ada --email ada@example.com
//!
//! # List users
//! ur list --pretty
//!
//! # Interactive form
//! ur form --server http://127.0.0.1:8000
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use ur_cli::{Client, FormView};

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

const SERVER_URL_ENV: &str = "UR_SERVER_URL";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    // Server URL: explicit flag > env var > config
    let server_url = match cli.server {
        Some(url) => url,
        None => match discover_server_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let client = Client::new(&server_url);

    let result = match cli.command {
        Commands::Submit { name, email } => client
            .submit_user(&name, &email)
            .await
            .map(|user| to_json(&user, cli.pretty)),
        Commands::List => client
            .list_users()
            .await
            .map(|users| to_json(&users, cli.pretty)),
        Commands::Form => return run_form(&client).await,
    };

    match result {
        Ok(Ok(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Warnings and errors go to stderr so stdout stays pure JSON.
fn init_logging() {
    let result = fern::Dispatch::new()
        .level(LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn discover_server_url() -> Result<String, ur_config::ConfigError> {
    if let Some(url) = std::env::var(SERVER_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
    {
        return Ok(url);
    }

    let config = ur_config::Config::load()?;
    Ok(config.server_url())
}

async fn run_form(client: &Client) -> ExitCode {
    let mut view = FormView::new();
    view.mount(client).await;
    println!("{}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(name) = prompt(&mut lines, "Name: ").await else {
            break;
        };
        let Some(email) = prompt(&mut lines, "Email: ").await else {
            break;
        };

        view.name = name;
        view.email = email;
        view.submit(client).await;
        println!("{}", view.render());
    }

    ExitCode::SUCCESS
}

/// Read one line after printing `label`. None on EOF or read error.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Option<String> {
    let mut stdout = tokio::io::stdout();
    let _ = stdout.write_all(label.as_bytes()).await;
    let _ = stdout.flush().await;

    match lines.next_line().await {
        Ok(line) => line,
        Err(e) => {
            log::error!("Failed to read input: {}", e);
            None
        }
    }
}
