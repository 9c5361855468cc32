mod bootstrap;

use bootstrap::{AppConfig, init_logging};
use std::{borrow::Cow, fs, process};
use tripsplit_application::{LedgerParser, SummaryProcessor, TripSummary};
use tripsplit_domain::{Trip, TripId};
use tripsplit_infrastructure::{InMemoryLedger, LedgerWriteError, TripLedgerParser};
use tripsplit_presentation::{
    PaymentListPresenter, SummaryPresenter, format_ledger_error, format_parse_error,
    format_summary_error,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        tracing::error!("tripsplit aborted: {err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env()?;
    let path = config.ledger_path.display();

    let source = fs::read_to_string(&config.ledger_path)
        .map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let ledger = TripLedgerParser
        .parse(&source)
        .map_err(|err| format_parse_error(&err))?;
    let store = InMemoryLedger::from_ledger(ledger).map_err(|err| match err {
        LedgerWriteError::Ledger(err) => format_ledger_error(&err),
        other => other.to_string(),
    })?;
    let processor = SummaryProcessor::new(&store);

    let current = processor.current_trip(config.today).map(|trip| trip.id());

    match config.trip {
        Some(trip_id) => {
            let summary = processor
                .summarize(trip_id)
                .map_err(|err| format_summary_error(&err))?;
            print_summary(&processor, &summary, current)
        }
        None => {
            let summaries = processor
                .summarize_all()
                .map_err(|err| format_summary_error(&err))?;
            if summaries.is_empty() {
                return Err(format!("'{path}' declares no trips").into());
            }
            for (index, summary) in summaries.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print_summary(&processor, summary, current)?;
            }
            Ok(())
        }
    }
}

fn print_summary(
    processor: &SummaryProcessor<'_>,
    summary: &TripSummary,
    current: Option<TripId>,
) -> CliResult<()> {
    let trip_id = summary.trip.id();
    let payments = processor
        .payments(trip_id)
        .map_err(|err| format_summary_error(&err))?;

    if current == Some(trip_id) {
        println!("* {}", trip_marker(&summary.trip));
    }
    print!("{}", SummaryPresenter::render(summary));
    println!();
    print!("{}", PaymentListPresenter::render(&summary.trip, &payments));
    Ok(())
}

fn trip_marker(trip: &Trip) -> String {
    format!("#{} {}", trip.id(), trip.title())
}
