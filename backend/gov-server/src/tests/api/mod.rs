mod error;
mod extractors;
mod validation;
