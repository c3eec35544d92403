// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::verify::verify_inference;

/// Action names accepted on the command line.
pub const SUPPORTED_ACTIONS: [&str; 2] = ["COSE_SIGN1_VERIFY", "COSE_DECRYPT_VERIFY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Sign1Verify,
    /// COSE_Encrypt is not implemented; the action only reports that.
    DecryptVerify,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sign1Verify => SUPPORTED_ACTIONS[0],
            Self::DecryptVerify => SUPPORTED_ACTIONS[1],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COSE_SIGN1_VERIFY" => Ok(Self::Sign1Verify),
            "COSE_DECRYPT_VERIFY" => Ok(Self::DecryptVerify),
            other => Err(Error::UnsupportedAction(other.to_string())),
        }
    }
}

/// Run `action` and write the human-readable report to `out`.
///
/// An unknown action prints the supported set and fails with
/// `Error::UnsupportedAction` without touching the payload or key.
pub fn run_action(action: &str, payload_hex: &str, public_key_hex: &str, out: &mut dyn Write) -> Result<(), Error> {
    let action = match action.parse::<Action>() {
        Ok(a) => a,
        Err(e) => {
            writeln!(out, "{action} is not supported")?;
            writeln!(out, "Supported action type : {SUPPORTED_ACTIONS:?}")?;
            return Err(e);
        }
    };
    debug!("running {action}");

    match action {
        Action::Sign1Verify => {
            let report = verify_inference(payload_hex, public_key_hex)?;
            writeln!(out, "Successfully verified the signature")?;
            writeln!(out, "Payload:: {}", report.payload_hex())?;
            writeln!(out, "Inference value from the payload:: {}", report.inference_value)?;
        }
        Action::DecryptVerify => writeln!(out, "Decrypt is not supported")?,
    }
    Ok(())
}
