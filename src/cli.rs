//! Command line surface.

use std::convert::Infallible;

use clap::Parser;

use crate::config::Config;

/// Print every Shift-JIS byte sequence as a `"\uXXXX": [bytes],` JSON fragment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of spaces written before every line.
    #[arg(
        value_name = "INDENT",
        default_value = "0",
        allow_negative_numbers = true,
        value_parser = parse_indent
    )]
    pub indent: usize,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config::with_indent(self.indent)
    }
}

/// Lenient width parsing in the manner of C `atoi`.
///
/// Leading whitespace and one sign are accepted, then as many digits as
/// follow. Anything else gives 0. A negative width keeps its magnitude.
/// Widths beyond `i32::MAX` are out of range and also give 0.
pub fn parse_indent(arg: &str) -> Result<usize, Infallible> {
    let s = arg.trim_start();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        if !arg.is_empty() {
            log::warn!("indent '{}' is not a number, using 0", arg);
        }
        return Ok(0);
    }
    match digits[..end].parse::<i32>() {
        Ok(width) => Ok(width as usize),
        Err(_) => {
            log::warn!("indent '{}' is out of range, using 0", arg);
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> usize {
        parse_indent(s).unwrap()
    }

    #[test]
    fn test_parse_indent() {
        assert_eq!(parse("4"), 4);
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("  8"), 8);
        assert_eq!(parse("+2"), 2);
        assert_eq!(parse("-3"), 3);
        assert_eq!(parse("12abc"), 12);
        assert_eq!(parse("abc"), 0);
        assert_eq!(parse(""), 0);
    }

    #[test]
    fn test_parse_indent_range() {
        assert_eq!(parse("2147483647"), i32::MAX as usize);
        assert_eq!(parse("2147483648"), 0);
        assert_eq!(parse("-2147483648"), 0);
        assert_eq!(parse("99999999999"), 0);
        assert_eq!(parse("18446744073709551615"), 0);
    }

    #[test]
    fn test_cli_oversized_indent() {
        let cli = Cli::try_parse_from(["sjis-table-gen", "18446744073709551615"]).unwrap();
        assert_eq!(cli.indent, 0);
        assert_eq!(cli.to_config(), Config::default());
    }

    #[test]
    fn test_cli_default() {
        let cli = Cli::try_parse_from(["sjis-table-gen"]).unwrap();
        assert_eq!(cli.indent, 0);
        assert_eq!(cli.to_config(), Config::default());
    }

    #[test]
    fn test_cli_indent() {
        let cli = Cli::try_parse_from(["sjis-table-gen", "4"]).unwrap();
        assert_eq!(cli.to_config().indent, 4);
    }

    #[test]
    fn test_cli_negative_indent() {
        let cli = Cli::try_parse_from(["sjis-table-gen", "-2"]).unwrap();
        assert_eq!(cli.indent, 2);
    }

    #[test]
    fn test_cli_rejects_extra_args() {
        assert!(Cli::try_parse_from(["sjis-table-gen", "4", "5"]).is_err());
    }
}
