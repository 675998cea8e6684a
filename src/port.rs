//! Port validation.

use crate::constants::MIN_PORT;
use crate::error::ParseError;
use crate::grammar;

/// Validates an optional port candidate.
///
/// An absent candidate is not an error; the port is optional.
///
/// # Errors
///
/// Returns `ParseError` with `InvalidPort` if the candidate is present but is
/// not made only of decimal digits, or its value is not between 1 and 65535.
///
/// # Examples
///
/// ```
/// use ln_connection_string::parse_port;
///
/// assert_eq!(parse_port(Some("9735")).unwrap(), Some(9735));
/// assert_eq!(parse_port(None).unwrap(), None);
/// assert!(parse_port(Some("0")).is_err());
/// ```
pub fn parse_port(port: Option<&str>) -> Result<Option<u16>, ParseError> {
    port.map(parse_port_value).transpose()
}

fn parse_port_value(input: &str) -> Result<u16, ParseError> {
    if !grammar::is_port_digits(input) {
        return Err(ParseError::port(input, "port must be a decimal number"));
    }

    match input.parse::<u16>() {
        Ok(port) if port >= MIN_PORT => Ok(port),
        _ => Err(ParseError::port(input, "port must be between 1 and 65535")),
    }
}
