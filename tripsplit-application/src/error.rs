use tripsplit_domain::{LedgerError, TripId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    UnknownTrip(TripId),
    Ledger(LedgerError),
}

impl From<LedgerError> for SummaryError {
    fn from(err: LedgerError) -> Self {
        SummaryError::Ledger(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerParseError {
    SyntaxError { line: usize, detail: String },
    EntryOutsideTrip { line: usize },
    DuplicateTrip { id: TripId, line: usize },
    UnknownTraveler { name: String, line: usize },
    InvalidDate { value: String, line: usize },
    UnknownCurrency { code: String, line: usize },
    Ledger { error: LedgerError, line: usize },
}

impl LedgerParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::SyntaxError { line, .. }
            | Self::EntryOutsideTrip { line }
            | Self::DuplicateTrip { line, .. }
            | Self::UnknownTraveler { line, .. }
            | Self::InvalidDate { line, .. }
            | Self::UnknownCurrency { line, .. }
            | Self::Ledger { line, .. } => *line,
        }
    }
}
