use std::{borrow::Cow, fmt::Write};
use tripsplit_application::{PersonDirectory, TripSummary};
use tripsplit_domain::{Currency, Money, NetSettlement, PersonId};
use tripsplit_i18n as i18n;

/// Renders a trip summary as plain text, one "X owes Y: amount" line per settlement.
pub struct SummaryPresenter;

impl SummaryPresenter {
    pub fn render(summary: &TripSummary) -> String {
        Self::render_with_people(summary, &IdentityDirectory)
    }

    pub fn render_with_people(summary: &TripSummary, directory: &dyn PersonDirectory) -> String {
        let currency = summary.trip.currency();
        let mut out = String::new();

        let _ = writeln!(out, "{}", summary.trip);
        if summary.is_settled() {
            let _ = writeln!(out, "{}", i18n::ALL_SETTLED);
        } else {
            for settlement in &summary.settlements {
                let _ = writeln!(
                    out,
                    "{}",
                    Self::settlement_line(settlement, currency, directory)
                );
            }
        }

        if !summary.balances.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", i18n::BALANCES);
            for (person, position) in summary.balances.iter() {
                let _ = writeln!(
                    out,
                    "{}: {}",
                    person_label(person, directory),
                    signed_amount(position, currency)
                );
            }
        }

        out
    }

    pub fn settlement_line(
        settlement: &NetSettlement,
        currency: Currency,
        directory: &dyn PersonDirectory,
    ) -> String {
        format!(
            "{} {} {}: {} {currency}",
            person_label(&settlement.debitor, directory),
            i18n::OWES,
            person_label(&settlement.payer, directory),
            settlement.amount,
        )
    }
}

pub(crate) struct IdentityDirectory;

impl PersonDirectory for IdentityDirectory {
    fn display_name(&self, _person: &PersonId) -> Option<&str> {
        None
    }
}

pub(crate) fn person_label<'a>(
    person: &'a PersonId,
    directory: &'a dyn PersonDirectory,
) -> Cow<'a, str> {
    match directory.display_name(person) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(person.as_str()),
    }
}

fn signed_amount(amount: Money, currency: Currency) -> String {
    let sign = if amount.signum() >= 0 { "+" } else { "" };
    format!("{sign}{amount} {currency}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use tripsplit_domain::{BalanceSheet, Trip, TripId};

    fn trip() -> Trip {
        Trip::try_new(
            TripId(1),
            "Baikal",
            NaiveDate::from_ymd_opt(2024, 7, 1).expect("date"),
            NaiveDate::from_ymd_opt(2024, 7, 14).expect("date"),
            vec!["ksenia".into(), "vova".into(), "me".into()],
            Currency::Rub,
        )
        .expect("trip")
    }

    fn summary(settlements: Vec<NetSettlement>) -> TripSummary {
        let trip = trip();
        let mut balances = BalanceSheet::with_people(trip.travelers());
        balances.apply_settlements(&settlements);
        TripSummary {
            trip,
            settlements,
            balances,
        }
    }

    #[test]
    fn render_lists_each_settlement_and_balance() {
        let view = SummaryPresenter::render(&summary(vec![NetSettlement {
            debitor: "ksenia".into(),
            payer: "me".into(),
            amount: Money::from_minor_units(2050),
        }]));

        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "Baikal (2024-07-01 - 2024-07-14)");
        assert_eq!(lines[1], format!("ksenia {} me: 20.50 RUB", i18n::OWES));
        assert!(lines.contains(&"ksenia: -20.50 RUB"));
        assert!(lines.contains(&"vova: +0.00 RUB"));
        assert!(lines.contains(&"me: +20.50 RUB"));
    }

    #[test]
    fn render_reports_settled_trip() {
        let view = SummaryPresenter::render(&summary(Vec::new()));

        assert!(view.contains(i18n::ALL_SETTLED));
        assert!(!view.contains(i18n::OWES));
    }

    #[test]
    fn render_prefers_display_names() {
        let mut directory = HashMap::new();
        directory.insert(PersonId::from("ksenia"), "Ksenia P.".to_string());

        let view = SummaryPresenter::render_with_people(
            &summary(vec![NetSettlement {
                debitor: "ksenia".into(),
                payer: "vova".into(),
                amount: Money::from_minor_units(100),
            }]),
            &directory,
        );

        assert!(view.contains(&format!("Ksenia P. {} vova: 1.00 RUB", i18n::OWES)));
    }
}
