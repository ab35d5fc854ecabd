//! Position-percent command.

use anyhow::Result;
use sizing_core::PositionPercentInput;
use sizing_report::{Session, Trigger};
use tracing::info;

use super::print_submission;
use crate::cli::PositionPercentArgs;

pub fn run(args: PositionPercentArgs, session: &mut Session) -> Result<()> {
    let mut input =
        PositionPercentInput::new(args.account_value, args.percent, args.entry, args.stop);
    if let Some(ticker) = args.ticker {
        input = input.with_ticker(ticker);
    }

    info!(ticker = ?input.ticker, "Running position-percent calculation");
    print_submission(session.submit(input.into(), Trigger::Manual), args.output)
}
