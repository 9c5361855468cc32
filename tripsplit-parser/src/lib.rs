#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while1},
    character::complete::{alpha1, char, digit1, i32, multispace1, u32, u64},
    combinator::{opt, recognize},
    multi::{many0, separated_list1},
    sequence::delimited,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripHeader<'a> {
    pub id: u64,
    pub title: &'a str,
    pub start: Date,
    pub end: Date,
    pub currency: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment<'a> {
    pub payer: &'a str,
    /// Decimal literal as written, e.g. `90` or `12.50`.
    pub amount: &'a str,
    pub title: Option<&'a str>,
    pub debitors: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Trip(TripHeader<'a>),
    Travelers(Vec<&'a str>),
    Payment(Payment<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, comment, line_comment)))).parse(input)
}

// At least one whitespace character, then anything `sp` accepts.
fn sp1(input: &str) -> IResult<&str, &str> {
    recognize((multispace1, sp)).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn date(input: &str) -> IResult<&str, Date> {
    (i32, char('-'), u32, char('-'), u32)
        .map(|(year, _, month, _, day)| Date { year, month, day })
        .parse(input)
}

fn date_range(input: &str) -> IResult<&str, (Date, Date)> {
    (date, sp, tag(".."), sp, date)
        .map(|(start, _, _, _, end)| (start, end))
        .parse(input)
}

fn amount(input: &str) -> IResult<&str, &str> {
    recognize((digit1, opt((char('.'), digit1)))).parse(input)
}

fn name_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1((sp, char(','), sp), identifier).parse(input)
}

fn paid(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("paid"), tag("заплатила"), tag("заплатил"))).parse(input)
}

fn for_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("for"), tag("за"))).parse(input)
}

fn to_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("to"), tag("для"))).parse(input)
}

// trip 7 "Baikal" 2024-07-01..2024-07-14 RUB
fn trip_header(input: &str) -> IResult<&str, TripHeader<'_>> {
    (
        alt((tag_no_case("trip"), tag("поездка"))),
        sp1,
        u64,
        sp1,
        quoted,
        sp,
        date_range,
        opt((sp1, alpha1).map(|(_, code)| code)),
    )
        .map(|(_, _, id, _, title, _, (start, end), currency)| TripHeader {
            id,
            title,
            start,
            end,
            currency,
        })
        .parse(input)
}

// travelers: Anna, Boris, Ksenia
fn travelers(input: &str) -> IResult<&str, Vec<&str>> {
    (
        alt((tag_no_case("travelers"), tag("участники"))),
        sp,
        char(':'),
        sp,
        name_list,
    )
        .map(|(_, _, _, _, names)| names)
        .parse(input)
}

// {payer} paid {amount} [for "{title}"] to {debitor}, {debitor}
fn payment(input: &str) -> IResult<&str, Payment<'_>> {
    (
        identifier, // payer
        sp1,
        paid,
        sp1,
        amount,
        opt((sp1, for_keyword, sp1, quoted).map(|(_, _, _, title)| title)),
        sp1,
        to_keyword,
        sp1,
        name_list, // debitors
    )
        .map(
            |(payer, _, _, _, amount, title, _, _, _, debitors)| Payment {
                payer,
                amount,
                title,
                debitors,
            },
        )
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        trip_header.map(Statement::Trip),
        travelers.map(Statement::Travelers),
        payment.map(Statement::Payment),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Parses a trip ledger line by line. Blank and comment-only lines are skipped.
pub fn parse_ledger(input: &str) -> Result<Ledger<'_>, ParseError> {
    let mut statements = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: idx + 1,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }
        match statement_with_sp(rest) {
            Ok((rest, stmt)) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                statements.push(StatementWithLine {
                    line: idx + 1,
                    statement: stmt,
                });
            }
            Err(e) => {
                return Err(ParseError::SyntaxError {
                    line: idx + 1,
                    detail: i18n::syntax_error_detail(e),
                });
            }
        }
    }

    Ok(Ledger { statements })
}
