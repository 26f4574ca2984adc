use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use toy_lexer::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    tokenize_spanned, tokenize_strict, Position, Spanned,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "toy-lexer")]
#[command(about = "Print the token stream of a Monkey source file, or of stdin")]
#[command(version)]
struct Args {
    #[arg(help = "Source file to lex", conflicts_with = "eval")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Lex inline text instead of a file")]
    eval: Option<String>,

    #[arg(short, long, help = "Fail on the first unrecognised character")]
    strict: bool,

    #[arg(long, help = "Print byte spans next to each token")]
    spans: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (source, file_name) = match read_input(&args, io::stdin()) {
        Ok(input) => input,
        Err(error) => {
            display_error(&error, "");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match lex(&args, &source, file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    // A closed pipe (e.g. `| head`) ends the listing quietly.
    let _ = write_tokens(&mut io::stdout().lock(), &tokens, args.spans);

    ExitCode::SUCCESS
}

fn lex(args: &Args, source: &str, file_name: String) -> Result<Vec<Spanned>, Error> {
    if args.strict {
        tokenize_strict(source, Some(file_name))
    } else {
        Ok(tokenize_spanned(source, Some(file_name)))
    }
}

fn write_tokens(out: &mut impl Write, tokens: &[Spanned], spans: bool) -> io::Result<()> {
    for spanned in tokens {
        if spans {
            writeln!(out, "{}", spanned)?;
        } else {
            writeln!(out, "{}", spanned.token.debug())?;
        }
    }

    Ok(())
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, defaulting
/// to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Returns the source text and the name it is reported under. `stdin` is
/// read only when neither a file nor `--eval` text was given.
fn read_input(args: &Args, mut stdin: impl Read) -> Result<(String, String), Error> {
    if let Some(text) = &args.eval {
        return Ok((text.clone(), String::from("eval")));
    }

    match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|err| read_error(&path.to_string_lossy(), err))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());

            Ok((source, file_name))
        }
        None => {
            let mut source = String::new();
            stdin
                .read_to_string(&mut source)
                .map_err(|err| read_error("<stdin>", err))?;

            Ok((source, String::from("stdin")))
        }
    }
}

fn read_error(path: &str, err: io::Error) -> Error {
    Error::new(
        ErrorImpl::FileRead {
            path: path.to_string(),
            reason: err.to_string(),
        },
        Position(0, Rc::new(path.to_string())),
    )
}
