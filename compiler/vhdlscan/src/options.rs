//! Command-line options.

use std::path::PathBuf;

use vhdl_scanner::ValidSymbols;

/// Parsed `vhdlscan` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub path: PathBuf,
    /// Whether the emulated grammar declares `invalid_bit_string_literal`.
    pub accept_invalid: bool,
    /// Exit with failure when any malformed literal is found.
    pub strict: bool,
}

impl ScanOptions {
    /// Token kinds the emulated host accepts at every position.
    pub fn valid_symbols(&self) -> ValidSymbols {
        ValidSymbols::from_host(&[true, self.accept_invalid])
    }
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Scan(ScanOptions),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}', only one file can be scanned")]
    ExtraArgument(String),
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut path = None;
    let mut accept_invalid = true;
    let mut strict = false;

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--invalid" => accept_invalid = true,
            "--no-invalid" => accept_invalid = false,
            "--strict" => strict = true,
            _ if arg.starts_with('-') => return Err(UsageError::UnknownOption(arg.to_owned())),
            _ if path.is_some() => return Err(UsageError::ExtraArgument(arg.to_owned())),
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let path = path.ok_or(UsageError::MissingPath)?;
    Ok(Command::Scan(ScanOptions {
        path,
        accept_invalid,
        strict,
    }))
}
