use tripsplit_application::{LedgerParseError, SummaryError};
use tripsplit_domain::{AmountDefect, IntegrityViolation, LedgerError};
use tripsplit_i18n as i18n;

pub fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::DataIntegrity(violation) => {
            i18n::data_integrity(format_integrity_violation(violation))
        }
        LedgerError::InvalidAmount { amount, reason } => {
            i18n::invalid_amount(amount, amount_defect_text(*reason))
        }
        LedgerError::InvalidTrip { title, .. } => i18n::invalid_trip(title),
    }
}

fn format_integrity_violation(violation: &IntegrityViolation) -> String {
    match violation {
        IntegrityViolation::DuplicatePair { debitor, payer } => {
            i18n::duplicate_pair(debitor, payer)
        }
        IntegrityViolation::SelfPair { person } => i18n::self_pair(person),
    }
}

fn amount_defect_text(reason: AmountDefect) -> &'static str {
    match reason {
        AmountDefect::NotPositive => i18n::AMOUNT_NOT_POSITIVE,
        AmountDefect::BelowMinimum => i18n::AMOUNT_BELOW_MINIMUM,
        AmountDefect::ExcessPrecision => i18n::AMOUNT_EXCESS_PRECISION,
        AmountDefect::TooLarge => i18n::AMOUNT_TOO_LARGE,
    }
}

pub fn format_summary_error(error: &SummaryError) -> String {
    match error {
        SummaryError::UnknownTrip(id) => i18n::unknown_trip(id),
        SummaryError::Ledger(err) => format_ledger_error(err),
    }
}

pub fn format_parse_error(error: &LedgerParseError) -> String {
    match error {
        LedgerParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
        LedgerParseError::EntryOutsideTrip { line } => i18n::entry_outside_trip(*line),
        LedgerParseError::DuplicateTrip { id, line } => i18n::duplicate_trip(id, *line),
        LedgerParseError::UnknownTraveler { name, line } => i18n::unknown_traveler(name, *line),
        LedgerParseError::InvalidDate { value, line } => i18n::invalid_date(value, *line),
        LedgerParseError::UnknownCurrency { code, line } => i18n::unknown_currency(code, *line),
        LedgerParseError::Ledger { error, line } => {
            i18n::at_line(*line, format_ledger_error(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tripsplit_domain::{Money, TripId};

    #[rstest]
    #[case::syntax(LedgerParseError::SyntaxError { line: 4, detail: "unexpected".to_string() })]
    #[case::outside_trip(LedgerParseError::EntryOutsideTrip { line: 1 })]
    #[case::duplicate_trip(LedgerParseError::DuplicateTrip { id: TripId(3), line: 9 })]
    #[case::unknown_traveler(LedgerParseError::UnknownTraveler { name: "Oleg".to_string(), line: 12 })]
    #[case::invalid_date(LedgerParseError::InvalidDate { value: "2024-13-01".to_string(), line: 2 })]
    #[case::unknown_currency(LedgerParseError::UnknownCurrency { code: "JPY".to_string(), line: 5 })]
    #[case::ledger(LedgerParseError::Ledger {
        error: LedgerError::InvalidAmount {
            amount: Money::ZERO,
            reason: AmountDefect::BelowMinimum,
        },
        line: 7,
    })]
    fn format_parse_error_mentions_line(#[case] error: LedgerParseError) {
        let message = format_parse_error(&error);
        assert!(message.contains(&error.line().to_string()));
    }

    #[test]
    fn format_summary_error_describes_integrity_violation() {
        let error = SummaryError::Ledger(LedgerError::DataIntegrity(
            IntegrityViolation::SelfPair {
                person: "vova".into(),
            },
        ));

        let message = format_summary_error(&error);

        assert_eq!(message, i18n::data_integrity(i18n::self_pair("vova")));
    }

    #[rstest]
    #[case::not_positive(AmountDefect::NotPositive, i18n::AMOUNT_NOT_POSITIVE)]
    #[case::below_minimum(AmountDefect::BelowMinimum, i18n::AMOUNT_BELOW_MINIMUM)]
    #[case::excess_precision(AmountDefect::ExcessPrecision, i18n::AMOUNT_EXCESS_PRECISION)]
    #[case::too_large(AmountDefect::TooLarge, i18n::AMOUNT_TOO_LARGE)]
    fn format_ledger_error_uses_localized_reason(
        #[case] reason: AmountDefect,
        #[case] expected: &str,
    ) {
        let amount = Money::from_minor_units(-100);
        let message = format_ledger_error(&LedgerError::InvalidAmount { amount, reason });

        assert_eq!(message, i18n::invalid_amount(amount, expected));
    }

    #[test]
    fn format_ledger_error_localizes_duplicate_pair() {
        let message = format_ledger_error(&LedgerError::DataIntegrity(
            IntegrityViolation::DuplicatePair {
                debitor: "anna".into(),
                payer: "vova".into(),
            },
        ));

        assert_eq!(
            message,
            i18n::data_integrity(i18n::duplicate_pair("anna", "vova"))
        );
    }

    #[test]
    fn format_summary_error_names_unknown_trip() {
        let message = format_summary_error(&SummaryError::UnknownTrip(TripId(42)));

        assert!(message.contains("42"));
    }
}
