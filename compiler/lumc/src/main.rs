//! Lumen CLI
//!
//! Checks and runs a program given as a JSON-serialized tree.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use lum_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lum_diagnostic::ErrorCode;
use lumc::{init_tracing, load_program, Session, SessionOptions};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: lumen explain <code>");
                return ExitCode::FAILURE;
            };
            explain(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => match parse_run_args(&args[1..]) {
            Ok(cli) => run(&cli),
            Err(msg) => {
                eprintln!("error: {msg}");
                print_usage();
                ExitCode::FAILURE
            }
        },
    }
}

struct CliArgs {
    path: PathBuf,
    options: SessionOptions,
    color: ColorMode,
    print_tree: bool,
}

fn parse_run_args(args: &[String]) -> Result<CliArgs, String> {
    let mut path = None;
    let mut options = SessionOptions::default();
    let mut color = ColorMode::Auto;
    let mut print_tree = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(mode) = arg.strip_prefix("--color=") {
            color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                other => return Err(format!("unknown color mode '{other}'")),
            };
            i += 1;
            continue;
        }
        match arg {
            "--dump-scopes" => {
                let Some(out) = args.get(i + 1) else {
                    return Err("--dump-scopes needs a path".to_owned());
                };
                options.dump_scopes = Some(PathBuf::from(out));
                i += 1;
            }
            "--run-anyway" => options.run_despite_errors = true,
            "--print-tree" => print_tree = true,
            _ if arg.starts_with('-') => return Err(format!("unknown option '{arg}'")),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
        i += 1;
    }

    let path = path.ok_or_else(|| "missing program path".to_owned())?;
    Ok(CliArgs {
        path,
        options,
        color,
        print_tree,
    })
}

fn run(cli: &CliArgs) -> ExitCode {
    let program = match load_program(&cli.path) {
        Ok(program) => program,
        Err(err) => {
            report_error(&err);
            return ExitCode::FAILURE;
        }
    };

    if cli.print_tree {
        program.print(0);
    }

    let session = Session::new(cli.options.clone());
    let check = match session.check(&program) {
        Ok(check) => check,
        Err(err) => {
            report_error(&err);
            return ExitCode::FAILURE;
        }
    };

    // Compile-time diagnostics come before any program output.
    let diagnostics = &check.diagnostics;
    let mut emitter = TerminalEmitter::stderr(cli.color, std::io::stderr().is_terminal());
    emitter.emit_all(diagnostics.diagnostics());
    emitter.emit_summary(diagnostics.error_count(), diagnostics.warning_count());
    emitter.flush();

    let outcome = session.execute(&program, check);
    if outcome.check.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn explain(code: &str) -> ExitCode {
    match code.parse::<ErrorCode>() {
        Ok(code) => {
            println!("{code}: {}", code.description());
            ExitCode::SUCCESS
        }
        Err(()) => {
            eprintln!("error: unknown error code '{code}'");
            ExitCode::FAILURE
        }
    }
}

/// Print an error with its chain of causes.
fn report_error(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn print_usage() {
    eprintln!("Usage: lumen <program.json> [options]");
    eprintln!("       lumen explain <code>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dump-scopes <path>          Write every analyzed scope to <path>");
    eprintln!("  --run-anyway                  Evaluate even after semantic errors");
    eprintln!("  --print-tree                  Print the program tree before checking");
    eprintln!("  --color=<auto|always|never>   Diagnostic coloring");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG          Enable tracing (e.g. RUST_LOG=lum_types=debug)");
    eprintln!("  LUMEN_LOG_TREE    Show tracing output as indented span trees");
}
