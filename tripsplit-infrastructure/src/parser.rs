use chrono::NaiveDate;
use std::str::FromStr;
use tripsplit_application::{LedgerParseError, LedgerParser, TripLedger, TripRecord};
use tripsplit_domain::{Currency, Money, Payment, PersonId, Trip, TripId};
use tripsplit_parser::{
    Date, ParseError, Payment as ParsedPayment, Statement, StatementWithLine, TripHeader,
    parse_ledger,
};

#[derive(Default)]
pub struct TripLedgerParser;

impl LedgerParser for TripLedgerParser {
    fn parse(&self, content: &str) -> Result<TripLedger, LedgerParseError> {
        let ledger = parse_ledger(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                LedgerParseError::SyntaxError { line, detail }
            }
        })?;

        let mut builder = LedgerBuilder::default();
        for StatementWithLine { line, statement } in ledger.statements {
            match statement {
                Statement::Trip(header) => builder.open_trip(header, line)?,
                Statement::Travelers(names) => builder.add_travelers(names, line)?,
                Statement::Payment(payment) => builder.add_payment(payment, line)?,
            }
        }
        builder.finish()
    }
}

struct OpenTrip {
    line: usize,
    id: TripId,
    title: String,
    start: NaiveDate,
    end: NaiveDate,
    currency: Currency,
    travelers: Vec<PersonId>,
    payments: Vec<Payment>,
}

impl OpenTrip {
    fn close(self) -> Result<TripRecord, LedgerParseError> {
        let trip = Trip::try_new(
            self.id,
            self.title,
            self.start,
            self.end,
            self.travelers,
            self.currency,
        )
        .map_err(|error| LedgerParseError::Ledger {
            error,
            line: self.line,
        })?;
        Ok(TripRecord {
            trip,
            payments: self.payments,
        })
    }

    fn require_traveler(&self, name: &str, line: usize) -> Result<PersonId, LedgerParseError> {
        let person = PersonId::from(name);
        if self.travelers.contains(&person) {
            Ok(person)
        } else {
            Err(LedgerParseError::UnknownTraveler {
                name: name.to_string(),
                line,
            })
        }
    }
}

#[derive(Default)]
struct LedgerBuilder {
    closed: Vec<TripRecord>,
    current: Option<OpenTrip>,
}

impl LedgerBuilder {
    fn open_trip(&mut self, header: TripHeader<'_>, line: usize) -> Result<(), LedgerParseError> {
        let id = TripId(header.id);
        let duplicate = self.closed.iter().any(|record| record.trip.id() == id)
            || self.current.as_ref().is_some_and(|open| open.id == id);
        if duplicate {
            return Err(LedgerParseError::DuplicateTrip { id, line });
        }

        let currency = match header.currency {
            Some(code) => {
                Currency::from_code(code).ok_or_else(|| LedgerParseError::UnknownCurrency {
                    code: code.to_string(),
                    line,
                })?
            }
            None => Currency::default(),
        };

        if let Some(open) = self.current.take() {
            self.closed.push(open.close()?);
        }

        self.current = Some(OpenTrip {
            line,
            id,
            title: header.title.to_string(),
            start: to_date(header.start, line)?,
            end: to_date(header.end, line)?,
            currency,
            travelers: Vec::new(),
            payments: Vec::new(),
        });
        Ok(())
    }

    fn add_travelers(&mut self, names: Vec<&str>, line: usize) -> Result<(), LedgerParseError> {
        let open = self
            .current
            .as_mut()
            .ok_or(LedgerParseError::EntryOutsideTrip { line })?;
        for name in names {
            let person = PersonId::from(name);
            if !open.travelers.contains(&person) {
                open.travelers.push(person);
            }
        }
        Ok(())
    }

    fn add_payment(
        &mut self,
        parsed: ParsedPayment<'_>,
        line: usize,
    ) -> Result<(), LedgerParseError> {
        let open = self
            .current
            .as_mut()
            .ok_or(LedgerParseError::EntryOutsideTrip { line })?;

        let value = Money::from_str(parsed.amount).map_err(|err| {
            LedgerParseError::SyntaxError {
                line,
                detail: format!("{}: {err}", parsed.amount),
            }
        })?;
        let payer = open.require_traveler(parsed.payer, line)?;
        let debitors = parsed
            .debitors
            .into_iter()
            .map(|name| open.require_traveler(name, line))
            .collect::<Result<Vec<_>, _>>()?;

        let payment = Payment {
            title: parsed.title.unwrap_or_default().to_string(),
            value,
            payer,
            debitors,
        };
        payment
            .validate()
            .map_err(|error| LedgerParseError::Ledger { error, line })?;

        open.payments.push(payment);
        Ok(())
    }

    fn finish(mut self) -> Result<TripLedger, LedgerParseError> {
        if let Some(open) = self.current.take() {
            self.closed.push(open.close()?);
        }
        Ok(TripLedger {
            trips: self.closed,
        })
    }
}

fn to_date(date: Date, line: usize) -> Result<NaiveDate, LedgerParseError> {
    NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or_else(|| {
        LedgerParseError::InvalidDate {
            value: format!("{:04}-{:02}-{:02}", date.year, date.month, date.day),
            line,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tripsplit_domain::{AmountDefect, LedgerError};

    const SAMPLE: &str = "\
trip 1 \"Baikal\" 2024-07-01..2024-07-14 EUR
travelers: Ksenia, Vova, Me
Me paid 90 for \"Dinner\" to Ksenia, Vova
Ksenia paid 12.50 to Me

trip 2 \"Sochi\" 2024-08-01..2024-08-03
travelers: Me
travelers: Anna
";

    #[test]
    fn parses_trips_with_payments() {
        let ledger = TripLedgerParser.parse(SAMPLE).expect("ledger");

        assert_eq!(ledger.trips.len(), 2);

        let baikal = &ledger.trips[0];
        assert_eq!(baikal.trip.id(), TripId(1));
        assert_eq!(baikal.trip.currency(), Currency::Eur);
        assert_eq!(baikal.trip.travelers().len(), 3);
        assert_eq!(baikal.payments.len(), 2);
        assert_eq!(baikal.payments[0].title, "Dinner");
        assert_eq!(baikal.payments[1].title, "");
        assert_eq!(baikal.payments[1].value, Money::from_minor_units(1250));

        let sochi = &ledger.trips[1];
        assert_eq!(sochi.trip.currency(), Currency::Rub);
        assert_eq!(sochi.trip.travelers().len(), 2);
        assert!(sochi.payments.is_empty());
    }

    #[rstest]
    #[case::payment_before_trip(
        "Me paid 10 to Anna",
        LedgerParseError::EntryOutsideTrip { line: 1 }
    )]
    #[case::unknown_debitor(
        "trip 1 \"A\" 2024-01-01..2024-01-02\ntravelers: Me\nMe paid 10 to Anna",
        LedgerParseError::UnknownTraveler { name: "Anna".to_string(), line: 3 }
    )]
    #[case::duplicate_trip(
        "trip 1 \"A\" 2024-01-01..2024-01-02\ntrip 1 \"B\" 2024-01-01..2024-01-02",
        LedgerParseError::DuplicateTrip { id: TripId(1), line: 2 }
    )]
    #[case::invalid_date(
        "trip 1 \"A\" 2024-02-30..2024-03-02",
        LedgerParseError::InvalidDate { value: "2024-02-30".to_string(), line: 1 }
    )]
    #[case::unknown_currency(
        "trip 1 \"A\" 2024-01-01..2024-01-02 JPY",
        LedgerParseError::UnknownCurrency { code: "JPY".to_string(), line: 1 }
    )]
    #[case::sub_cent_payment(
        "trip 1 \"A\" 2024-01-01..2024-01-02\ntravelers: Me, Anna\nMe paid 1.005 to Anna",
        LedgerParseError::Ledger {
            error: LedgerError::InvalidAmount {
                amount: Money::from_str("1.005").expect("decimal"),
                reason: AmountDefect::ExcessPrecision,
            },
            line: 3,
        }
    )]
    #[case::oversized_payment(
        "trip 1 \"A\" 2024-01-01..2024-01-02\ntravelers: Me, Anna\nMe paid 100000000000000000.00 to Anna",
        LedgerParseError::Ledger {
            error: LedgerError::InvalidAmount {
                amount: Money::from_str("100000000000000000.00").expect("decimal"),
                reason: AmountDefect::TooLarge,
            },
            line: 3,
        }
    )]
    #[case::syntax(
        "trip one",
        LedgerParseError::SyntaxError { line: 1, detail: String::new() }
    )]
    fn rejects_invalid_ledgers(#[case] input: &str, #[case] expected: LedgerParseError) {
        let err = TripLedgerParser.parse(input).expect_err("invalid ledger");

        match (&err, &expected) {
            (
                LedgerParseError::SyntaxError { line, .. },
                LedgerParseError::SyntaxError { line: expected_line, .. },
            ) => assert_eq!(line, expected_line),
            _ => assert_eq!(err, expected),
        }
    }

    #[test]
    fn inverted_trip_dates_point_at_header_line() {
        let input = "\n\ntrip 4 \"Back to the future\" 2024-05-10..2024-05-01\ntravelers: Marty";

        let err = TripLedgerParser.parse(input).expect_err("inverted dates");

        assert!(matches!(
            err,
            LedgerParseError::Ledger {
                error: LedgerError::InvalidTrip { .. },
                line: 3,
            }
        ));
    }
}
