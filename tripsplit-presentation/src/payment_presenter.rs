use crate::summary_presenter::{IdentityDirectory, person_label};
use std::fmt::Write;
use tripsplit_application::PersonDirectory;
use tripsplit_domain::{Payment, Trip};
use tripsplit_i18n as i18n;

/// Lists a trip's payments with their payer and the people sharing them.
pub struct PaymentListPresenter;

impl PaymentListPresenter {
    pub fn render(trip: &Trip, payments: &[Payment]) -> String {
        Self::render_with_people(trip, payments, &IdentityDirectory)
    }

    pub fn render_with_people(
        trip: &Trip,
        payments: &[Payment],
        directory: &dyn PersonDirectory,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", i18n::PAYMENTS);

        if payments.is_empty() {
            let _ = writeln!(out, "{}", i18n::NO_PAYMENTS);
            return out;
        }

        for payment in payments {
            let title = if payment.title.is_empty() {
                i18n::UNTITLED
            } else {
                payment.title.as_str()
            };
            let debitors: Vec<_> = payment
                .debitors
                .iter()
                .filter(|debitor| **debitor != payment.payer)
                .map(|debitor| person_label(debitor, directory))
                .collect();
            let debitors = if debitors.is_empty() {
                i18n::NOBODY.to_string()
            } else {
                debitors.join(", ")
            };

            let _ = writeln!(
                out,
                "{title}: {} {}, {} {}, {} {debitors}",
                payment.value,
                trip.currency(),
                i18n::PAID_BY,
                person_label(&payment.payer, directory),
                i18n::SPLIT_WITH,
            );
        }

        out
    }
}
