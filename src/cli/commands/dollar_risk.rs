//! Dollar-risk command.

use anyhow::Result;
use sizing_core::DollarRiskInput;
use sizing_report::{Session, Trigger};
use tracing::info;

use super::print_submission;
use crate::cli::DollarRiskArgs;

pub fn run(args: DollarRiskArgs, session: &mut Session) -> Result<()> {
    let mut input = DollarRiskInput::new(args.dollar_risk, args.entry, args.stop);
    input.account_size = args.account_size;
    if let Some(ticker) = args.ticker {
        input = input.with_ticker(ticker);
    }

    info!(ticker = ?input.ticker, "Running dollar-risk calculation");
    print_submission(session.submit(input.into(), Trigger::Manual), args.output)
}
