//! `vhdlscan`: list the bit-string literals of a VHDL file.
//!
//! Drives the external scanner over the file the way a host tokenizer
//! would and prints every literal it claims.

mod options;

use std::process::ExitCode;

use options::{parse_args, Command, ScanOptions};
use vhdl_scanner::{SourceBuffer, TokenKind};

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Scan(opts) => scan_file(&opts),
    }
}

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=vhdl_scanner=trace`.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init();
    }
}

fn print_usage() {
    println!("Usage: vhdlscan <file.vhd> [options]");
    println!();
    println!("Options:");
    println!("  --invalid      Report malformed literals (default)");
    println!("  --no-invalid   Grammar without invalid_bit_string_literal");
    println!("  --strict       Exit with failure if any literal is malformed");
    println!("  -h, --help     Show this message");
}

fn scan_file(opts: &ScanOptions) -> ExitCode {
    let path = opts.path.display();
    let content = match std::fs::read_to_string(&opts.path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let buf = SourceBuffer::new(&content);
    let literals: Vec<_> = buf.literals(opts.valid_symbols()).collect();
    let malformed = literals
        .iter()
        .filter(|tok| tok.kind == TokenKind::InvalidBitStringLiteral)
        .count();
    tracing::debug!(
        literals = literals.len(),
        malformed,
        "scan complete"
    );

    println!(
        "Bit-string literals in '{path}' ({} found, {malformed} malformed):",
        literals.len()
    );
    for tok in &literals {
        println!("  {} @ {}  {}", tok.kind, tok.span, buf.slice(tok.span));
    }

    if opts.strict && malformed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
