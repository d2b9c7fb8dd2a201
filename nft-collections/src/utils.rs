// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::primitives::{utils::parse_units, U256};
use anstyle::{AnsiColor, Effects, Style};
use eyre::{bail, eyre, WrapErr};

const BOLD: Style = Style::new().effects(Effects::BOLD);
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

/// Parses a decimal gwei amount, e.g. `1.5`, into wei.
pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let fee = fee_str.trim();
    if fee.starts_with('-') {
        bail!("max fee per gas must be non-negative");
    }
    let wei: U256 = parse_units(fee, "gwei")
        .wrap_err_with(|| format!("invalid max fee per gas value: {fee}"))?
        .into();
    u128::try_from(wei).map_err(|_| eyre!("max fee per gas of {fee} gwei is out of range"))
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}
