use arcstr::ArcStr;
use chrono::NaiveDate;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::error::{AmountDefect, LedgerError};

/// Number of fractional digits carried by every currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Identity of a traveler. Equality and ordering follow the identifier only.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(ArcStr);

impl PersonId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(pub u64);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-point currency amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Builds an amount from minor currency units (cents).
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::new(units, CURRENCY_SCALE))
    }

    /// Returns the amount in cents, or `None` when it carries sub-cent digits
    /// or does not fit in an `i64`.
    pub fn to_minor_units(self) -> Option<i64> {
        if !self.has_currency_precision() {
            return None;
        }
        let units = self.0.checked_mul(Decimal::ONE_HUNDRED)?;
        units.trunc().to_i64()
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.signum() > 0
    }

    pub fn signum(self) -> i64 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn has_currency_precision(self) -> bool {
        self.0.normalize().scale() <= CURRENCY_SCALE
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s.trim()).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    Eur,
    Usd,
    #[default]
    Rub,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Rub => "RUB",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EUR" => Some(Self::Eur),
            "USD" => Some(Self::Usd),
            // Older ledgers used the pre-ISO ruble code.
            "RUB" | "RUR" => Some(Self::Rub),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A travel event; the scoping unit for every debt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    id: TripId,
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    travelers: Vec<PersonId>,
    currency: Currency,
}

impl Trip {
    pub fn try_new(
        id: TripId,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        travelers: Vec<PersonId>,
        currency: Currency,
    ) -> Result<Self, LedgerError> {
        let title = title.into();
        if start_date > end_date {
            return Err(LedgerError::InvalidTrip {
                title,
                start: start_date,
                end: end_date,
            });
        }

        let unique: IndexSet<PersonId, FxBuildHasher> = travelers.into_iter().collect();

        Ok(Self {
            id,
            title,
            start_date,
            end_date,
            travelers: unique.into_iter().collect(),
            currency,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn travelers(&self) -> &[PersonId] {
        &self.travelers
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn has_traveler(&self, person: &PersonId) -> bool {
        self.travelers.contains(person)
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.title, self.start_date, self.end_date)
    }
}

/// A single expense paid by one person, split among `debitors`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    pub title: String,
    pub value: Money,
    pub payer: PersonId,
    pub debitors: Vec<PersonId>,
}

/// Smallest payment value accepted for splitting.
pub const MIN_PAYMENT: Money = Money(Decimal::from_parts(1, 0, 0, false, CURRENCY_SCALE));

/// Largest payment value accepted: nine significant digits, two of them cents.
pub const MAX_PAYMENT: Money = Money(Decimal::from_parts(
    999_999_999,
    0,
    0,
    false,
    CURRENCY_SCALE,
));

impl Payment {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.value.has_currency_precision() {
            return Err(LedgerError::InvalidAmount {
                amount: self.value,
                reason: AmountDefect::ExcessPrecision,
            });
        }
        if self.value < MIN_PAYMENT {
            return Err(LedgerError::InvalidAmount {
                amount: self.value,
                reason: AmountDefect::BelowMinimum,
            });
        }
        if self.value > MAX_PAYMENT {
            return Err(LedgerError::InvalidAmount {
                amount: self.value,
                reason: AmountDefect::TooLarge,
            });
        }
        Ok(())
    }
}

/// Signed ledger row produced by splitting a payment.
///
/// The payer's own row is negative; every debitor row is positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    pub payer: PersonId,
    pub debitor: PersonId,
    pub value: Money,
}

impl LedgerEntry {
    pub fn is_self_entry(&self) -> bool {
        self.debitor == self.payer
    }

    pub fn into_raw_debt(self) -> Option<RawDebtEntry> {
        if self.is_self_entry() {
            return None;
        }
        Some(RawDebtEntry {
            debitor: self.debitor,
            payer: self.payer,
            amount: self.value,
        })
    }
}

/// `debitor` owes `payer` `amount` for one payment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDebtEntry {
    pub debitor: PersonId,
    pub payer: PersonId,
    pub amount: Money,
}

/// Sum of all raw debts for one ordered (debitor, payer) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedPair {
    pub debitor: PersonId,
    pub payer: PersonId,
    pub total: Money,
}

/// Net one-directional obligation between two people after consolidation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetSettlement {
    pub debitor: PersonId,
    pub payer: PersonId,
    pub amount: Money,
}

/// Order-independent identity of two people.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey {
    lesser: PersonId,
    greater: PersonId,
}

impl PairKey {
    pub fn new(a: &PersonId, b: &PersonId) -> Self {
        let (lesser, greater) = if a <= b { (a, b) } else { (b, a) };
        Self {
            lesser: lesser.clone(),
            greater: greater.clone(),
        }
    }

    pub fn lesser(&self) -> &PersonId {
        &self.lesser
    }

    pub fn into_parts(self) -> (PersonId, PersonId) {
        (self.lesser, self.greater)
    }
}
