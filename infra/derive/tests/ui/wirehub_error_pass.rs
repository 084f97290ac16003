use std::borrow::Cow;
use wirehub_derive::wirehub_error;

#[wirehub_error]
pub enum WiringError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: WiringError = "wiring fault".into();
    assert_eq!(err.to_string(), "Internal error: wiring fault");

    let io: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    let wrapped = io.context("loading manifest").unwrap_err();
    assert_eq!(wrapped.to_string(), "IO error (loading manifest): gone");
}
