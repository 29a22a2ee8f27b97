use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Reverse for {0:?} not found, it is not a registered route name")]
    NoReverseMatch(String),
    #[error("Reverse for {name:?} expects {expected} argument(s) but {given} were given")]
    ArgumentMismatch {
        name: &'static str,
        expected: usize,
        given: usize,
    },
}
