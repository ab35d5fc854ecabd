//! Total-risk command.

use anyhow::Result;
use sizing_core::TotalRiskInput;
use sizing_report::{Session, Trigger};
use tracing::info;

use super::print_submission;
use crate::cli::TotalRiskArgs;

pub fn run(args: TotalRiskArgs, session: &mut Session) -> Result<()> {
    let mut input = TotalRiskInput::new(args.account_value, args.risk, args.entry, args.stop);
    input.max_positions = args.max_positions;
    if let Some(ticker) = args.ticker {
        input = input.with_ticker(ticker);
    }

    info!(ticker = ?input.ticker, "Running total-risk calculation");
    print_submission(session.submit(input.into(), Trigger::Manual), args.output)
}
