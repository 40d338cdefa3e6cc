use std::borrow::Cow;

/// Failures raised by the composition collaborators.
///
/// Every variant is fatal for the tenant activation that triggered it; the classification
/// step itself never fails.
#[weave_derive::weave_error]
pub enum CompositionError {
    #[error("Unknown feature{}: {message}", format_context(.context))]
    UnknownFeature { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Feature dependency cycle{}: {message}", format_context(.context))]
    DependencyCycle { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown type{}: {message}", format_context(.context))]
    UnknownType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate feature{}: {message}", format_context(.context))]
    DuplicateFeature { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Library load failed{}: {message}", format_context(.context))]
    LibraryLoad { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Host manifest error{}: {source}", format_context(.context))]
    Manifest { source: weave_kernel::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Internal composition error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
