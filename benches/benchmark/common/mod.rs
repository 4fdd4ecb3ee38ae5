use coded_error::{CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND, CODE_UNKNOWN};
use criterion::Criterion;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Plain wrapper standing in for context-style wrapping done by other crates.
#[derive(Debug)]
pub struct Layer {
    pub name: String,
    pub inner: Box<dyn Error + Send + Sync>,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.inner)
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner as &(dyn Error + 'static))
    }
}

/// Builds a chain `depth` layers deep with a single coded error at the bottom.
pub fn deep_chain(depth: usize) -> Box<dyn Error + Send + Sync> {
    let mut err: Box<dyn Error + Send + Sync> =
        Box::new(CodedError::wrap(CODE_NOT_FOUND, std::io::Error::other("row missing")));
    for i in 0..depth {
        err = Box::new(Layer { name: format!("layer_{i}"), inner: err });
    }
    err
}

/// Service-shaped chain: repository -> service -> handler re-wraps.
pub fn layered_error() -> CodedError {
    let repo = CodedError::wrap(CODE_NOT_FOUND, std::io::Error::other("no rows"));
    let service = CodedError::wrap(CODE_BAD_REQUEST, repo);
    CodedError::wrap(CODE_UNKNOWN, service)
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
