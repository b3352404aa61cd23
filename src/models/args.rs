//! Positional argument checks shared by the record inputs.

use crate::error::ArgumentError;

pub(crate) fn expect_arity(args: &[String], expected: usize) -> Result<(), ArgumentError> {
    if args.len() != expected {
        return Err(ArgumentError::Count {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn required(
    args: &[String],
    index: usize,
    field: &'static str,
) -> Result<String, ArgumentError> {
    match args.get(index) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ArgumentError::Empty {
            position: index + 1,
            field,
        }),
    }
}
