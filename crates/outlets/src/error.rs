use std::borrow::Cow;

/// Errors raised by the outlet registrar.
#[wirehub_derive::wirehub_error]
pub enum OutletError {
    /// A declared property name does not carry the expected outlet suffix.
    /// Registration is rejected before the registry is touched.
    #[error("\"{property}\" must end with \"{suffix}\"{}", format_context(.context))]
    NamingConvention {
        property: String,
        suffix: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}
