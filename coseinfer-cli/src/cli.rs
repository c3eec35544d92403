// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use coseinfer::{SAMPLE_COSE_SIGN1, SAMPLE_PUBLIC_KEY};
use log::debug;

/**
    Verify a COSE_Sign1 signed inference value and print it.
*/
#[derive(Parser, Debug)]
#[command(name = "cose_verify_sign1", version)]
pub struct Cli {
    /// Action to run: COSE_SIGN1_VERIFY or COSE_DECRYPT_VERIFY.
    #[arg(short, long)]
    action: String,

    /// COSE encoded and signed payload as a comma-separated hex list.
    #[arg(short, long, default_value = SAMPLE_COSE_SIGN1, hide_default_value = true)]
    payload: String,

    /// Public key (0x04 || X || Y) that verifies the payload, as a hex list.
    #[arg(short = 'k', long, default_value = SAMPLE_PUBLIC_KEY, hide_default_value = true)]
    publickey: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(self) -> Result<()> {
        debug!("action={}, payload={} chars, publickey={} chars", self.action, self.payload.len(), self.publickey.len());
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        coseinfer::run_action(&self.action, &self.payload, &self.publickey, &mut out)?;
        out.flush().context("failed to flush stdout")?;
        Ok(())
    }
}
