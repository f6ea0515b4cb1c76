pub mod number_formatter;

pub use number_formatter::*;
