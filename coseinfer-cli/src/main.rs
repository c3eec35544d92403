// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! `cose_verify_sign1`: verify a signed inference attestation from the command line.
//!
//! Exit codes: 0 on success, 2 for an unsupported action or bad usage, 3 when
//! the signature does not verify, 1 for any other failure.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e.downcast_ref::<coseinfer::Error>().map_or(1, coseinfer::Error::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
