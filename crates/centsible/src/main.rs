mod config;
mod convert;
mod demo;
mod error;
mod output;

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use engine::{Allocation, ResultEngine, SplitOptions, compute_splits_with};
use serde::de::DeserializeOwned;

use crate::{
    config::{AppConfig, Command},
    error::{AppError, Result},
};

fn main() -> ExitCode {
    let (settings, command) = match config::load() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "centsible={level},engine={level}",
            level = settings.level
        ))
        .with_writer(io::stderr)
        .init();

    match run(&settings, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                // Already rendered on stdout.
                AppError::Split(split_err) => {
                    tracing::debug!(kind = split_err.kind(), "split rejected");
                }
                other => {
                    tracing::error!("{other}");
                    eprintln!("{other}");
                }
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(settings: &AppConfig, command: Command) -> Result<()> {
    let options = settings.split_options();

    match command {
        Command::Split(args) => {
            let request = read_request(args.input.as_deref())?;
            let outcome = convert::split_input(&request)
                .and_then(|(total, members)| split(total, &members, options));
            emit(settings, outcome)
        }
        Command::Shares(args) => {
            let request = read_request(args.input.as_deref())?;
            let outcome = convert::shares_input(&request)
                .and_then(|(total, members)| split(total, &members, options));
            emit(settings, outcome)
        }
        Command::Demo => {
            tracing::info!("running reference cases");
            for case in demo::cases()? {
                println!("{}", demo::render(&case, options));
            }
            Ok(())
        }
    }
}

fn split(
    total_cents: i64,
    members: &[engine::MemberSpec],
    options: SplitOptions,
) -> ResultEngine<(i64, Vec<Allocation>)> {
    tracing::info!(total_cents, members = members.len(), "splitting expense");
    compute_splits_with(total_cents, members, options).map(|allocations| (total_cents, allocations))
}

fn emit(settings: &AppConfig, outcome: ResultEngine<(i64, Vec<Allocation>)>) -> Result<()> {
    match outcome {
        Ok((total_cents, allocations)) => {
            println!(
                "{}",
                output::allocations(settings.output, total_cents, &allocations)?.trim_end()
            );
            Ok(())
        }
        Err(err) => {
            println!("{}", output::rejection(settings.output, &err)?.trim_end());
            Err(err.into())
        }
    }
}

fn read_request<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}
