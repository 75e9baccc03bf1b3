use schemelet::error::{Error, ErrorCategory};


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn results<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    setup();
    inputs
        .iter()
        .map(|input| schemelet::run(input).unwrap())
        .collect::<Vec<_>>()
}

pub fn error<S: AsRef<str>>(input: S) -> Error {
    setup();
    match schemelet::run(input.as_ref()) {
        Ok(val) => panic!("{:?} evaluated to {}", input.as_ref(), val),
        Err(err) => err,
    }
}

#[allow(dead_code)]
pub fn category<S: AsRef<str>>(input: S) -> ErrorCategory {
    error(input).category()
}
