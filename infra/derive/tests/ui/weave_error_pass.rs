use std::borrow::Cow;
use weave_derive::weave_error;

#[weave_error]
pub enum LoadError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing feature{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, LoadError> {
    let value = raw.parse::<u32>().context("Parsing serial number")?;
    if value == 0 {
        return Err("serial number must be positive".into());
    }
    Ok(value)
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().contains("Parsing serial number"));

    let err = parse("0").context("Reading descriptor").unwrap_err();
    assert!(matches!(err, LoadError::Internal { context: Some(_), .. }));

    let missing: Result<(), LoadError> =
        Err(LoadError::Missing { message: "A".into(), context: None });
    let err = missing.context("Expanding features").unwrap_err();
    assert_eq!(err.to_string(), "Missing feature (Expanding features): A");
}
