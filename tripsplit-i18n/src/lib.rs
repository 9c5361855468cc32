#[cfg(all(feature = "ru", feature = "en"))]
compile_error!("Cannot enable both 'ru' and 'en' features at the same time");

#[cfg(feature = "ru")]
pub mod strings {
    pub const OWES: &str = "должен";
    pub const ALL_SETTLED: &str = "Все в расчёте";
    pub const BALANCES: &str = "Баланс";
    pub const PAYMENTS: &str = "Платежи";
    pub const NO_PAYMENTS: &str = "Платежей пока нет";
    pub const UNTITLED: &str = "(без названия)";
    pub const PAID_BY: &str = "оплатил";
    pub const SPLIT_WITH: &str = "делится с";
    pub const NOBODY: &str = "никем";
    pub const AMOUNT_NOT_POSITIVE: &str = "сумма должна быть больше нуля";
    pub const AMOUNT_BELOW_MINIMUM: &str = "сумма должна быть не меньше 0.01";
    pub const AMOUNT_EXCESS_PRECISION: &str = "у суммы больше двух знаков после запятой";
    pub const AMOUNT_TOO_LARGE: &str = "сумма не может превышать 9999999.99";
}

#[cfg(not(feature = "ru"))]
pub mod strings {
    pub const OWES: &str = "owes";
    pub const ALL_SETTLED: &str = "Everyone is settled up";
    pub const BALANCES: &str = "Balances";
    pub const PAYMENTS: &str = "Payments";
    pub const NO_PAYMENTS: &str = "No payments yet";
    pub const UNTITLED: &str = "(untitled)";
    pub const PAID_BY: &str = "paid by";
    pub const SPLIT_WITH: &str = "split with";
    pub const NOBODY: &str = "nobody";
    pub const AMOUNT_NOT_POSITIVE: &str = "amount must be greater than zero";
    pub const AMOUNT_BELOW_MINIMUM: &str = "amount must be at least 0.01";
    pub const AMOUNT_EXCESS_PRECISION: &str = "amount has more than two decimal places";
    pub const AMOUNT_TOO_LARGE: &str = "amount must not exceed 9999999.99";
}

pub use strings::*;

use std::fmt::Display;

#[cfg(feature = "ru")]
pub fn unknown_trip(id: impl Display) -> String {
    format!("Поездка {id} не найдена")
}

#[cfg(feature = "ru")]
pub fn data_integrity(detail: impl Display) -> String {
    format!("Данные о долгах повреждены, итог не посчитан: {detail}")
}

#[cfg(feature = "ru")]
pub fn invalid_amount(amount: impl Display, reason: impl Display) -> String {
    format!("Недопустимая сумма {amount}: {reason}")
}

#[cfg(feature = "ru")]
pub fn invalid_trip(title: impl Display) -> String {
    format!("Поездка '{title}' заканчивается раньше, чем начинается")
}

#[cfg(feature = "ru")]
pub fn duplicate_pair(debitor: impl Display, payer: impl Display) -> String {
    format!("долг {debitor} -> {payer} встречается дважды")
}

#[cfg(feature = "ru")]
pub fn self_pair(person: impl Display) -> String {
    format!("{person} записан должником самому себе")
}

#[cfg(feature = "ru")]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("Строка {line}: синтаксическая ошибка - {detail}")
}

#[cfg(feature = "ru")]
pub fn entry_outside_trip(line: usize) -> String {
    format!("Строка {line}: запись вне поездки (нужна строка `trip ...` выше)")
}

#[cfg(feature = "ru")]
pub fn duplicate_trip(id: impl Display, line: usize) -> String {
    format!("Строка {line}: поездка {id} уже объявлена")
}

#[cfg(feature = "ru")]
pub fn unknown_traveler(name: impl Display, line: usize) -> String {
    format!("Строка {line}: '{name}' не участвует в поездке")
}

#[cfg(feature = "ru")]
pub fn invalid_date(value: impl Display, line: usize) -> String {
    format!("Строка {line}: некорректная дата {value}")
}

#[cfg(feature = "ru")]
pub fn unknown_currency(code: impl Display, line: usize) -> String {
    format!("Строка {line}: неизвестная валюта {code}")
}

#[cfg(not(feature = "ru"))]
pub fn unknown_trip(id: impl Display) -> String {
    format!("Trip {id} was not found")
}

#[cfg(not(feature = "ru"))]
pub fn data_integrity(detail: impl Display) -> String {
    format!("Debt records are inconsistent, no summary was produced: {detail}")
}

#[cfg(not(feature = "ru"))]
pub fn invalid_amount(amount: impl Display, reason: impl Display) -> String {
    format!("Invalid amount {amount}: {reason}")
}

#[cfg(not(feature = "ru"))]
pub fn invalid_trip(title: impl Display) -> String {
    format!("Trip '{title}' ends before it starts")
}

#[cfg(not(feature = "ru"))]
pub fn duplicate_pair(debitor: impl Display, payer: impl Display) -> String {
    format!("duplicate total for {debitor} -> {payer}")
}

#[cfg(not(feature = "ru"))]
pub fn self_pair(person: impl Display) -> String {
    format!("{person} is recorded as owing themself")
}

#[cfg(not(feature = "ru"))]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("Line {line}: Syntax error - {detail}")
}

#[cfg(not(feature = "ru"))]
pub fn entry_outside_trip(line: usize) -> String {
    format!("Line {line}: entry outside of a trip (add a `trip ...` line above it)")
}

#[cfg(not(feature = "ru"))]
pub fn duplicate_trip(id: impl Display, line: usize) -> String {
    format!("Line {line}: trip {id} is declared twice")
}

#[cfg(not(feature = "ru"))]
pub fn unknown_traveler(name: impl Display, line: usize) -> String {
    format!("Line {line}: '{name}' is not a traveler of this trip")
}

#[cfg(not(feature = "ru"))]
pub fn invalid_date(value: impl Display, line: usize) -> String {
    format!("Line {line}: invalid date {value}")
}

#[cfg(not(feature = "ru"))]
pub fn unknown_currency(code: impl Display, line: usize) -> String {
    format!("Line {line}: unknown currency {code}")
}

#[cfg(feature = "ru")]
pub fn at_line(line: usize, message: impl Display) -> String {
    format!("Строка {line}: {message}")
}

#[cfg(not(feature = "ru"))]
pub fn at_line(line: usize, message: impl Display) -> String {
    format!("Line {line}: {message}")
}
