#[cfg(all(feature = "ru", feature = "en"))]
compile_error!("Cannot enable both 'ru' and 'en' features at the same time");

type NomError<'a> = nom::Err<nom::error::Error<&'a str>>;

fn unexpected_input(error: &NomError<'_>) -> String {
    match error {
        nom::Err::Incomplete(_) => String::new(),
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input.trim().to_string(),
    }
}

#[cfg(feature = "ru")]
pub fn syntax_error_detail(error: NomError<'_>) -> String {
    let near = unexpected_input(&error);
    if near.is_empty() {
        "неожиданный конец строки".to_string()
    } else {
        format!("не удалось разобрать: {near}")
    }
}

#[cfg(feature = "ru")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("лишний текст в конце строки: {input}")
}

#[cfg(not(feature = "ru"))]
pub fn syntax_error_detail(error: NomError<'_>) -> String {
    let near = unexpected_input(&error);
    if near.is_empty() {
        "unexpected end of line".to_string()
    } else {
        format!("could not parse near: {near}")
    }
}

#[cfg(not(feature = "ru"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("unparsed input: {input}")
}
