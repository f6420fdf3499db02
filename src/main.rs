use std::{fs::read_to_string, io, path::PathBuf, process, time::Instant};

use clap::{Parser as ClapParser, ValueEnum};
use monkey::{format_error, lexer::lexer::tokenize, parser::parser::parse, repl};

#[derive(ClapParser, Debug)]
#[command(name = "monkey", about = "Tokenizer and parser for the Monkey language")]
struct Cli {
    /// Source file to parse. Starts the read loop when omitted.
    file: Option<PathBuf>,

    /// What to print for each line (read loop) or for the file
    #[arg(long, value_enum, default_value_t = CliMode::Tokens)]
    mode: CliMode,

    /// Print how long each phase took
    #[arg(long)]
    timings: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliMode {
    Tokens,
    Ast,
}

impl From<CliMode> for repl::Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Tokens => repl::Mode::Tokens,
            CliMode::Ast => repl::Mode::Ast,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let Some(file_path) = cli.file else {
        println!("Hello! This is the Monkey programming language!");
        println!("Feel free to type in commands");

        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), io::stdout(), cli.mode.into()) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    };

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read file '{}': {}", file_path.display(), e);
            process::exit(1);
        }
    };

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

    let start = Instant::now();

    if let CliMode::Tokens = cli.mode {
        for token in tokenize(source, Some(file_name)) {
            println!("{}", token.describe());
        }

        if cli.timings {
            println!("Tokenized in {:?}", start.elapsed());
        }
        return;
    }

    let (parser, program) = parse(source.clone(), Some(file_name));

    if cli.timings {
        println!("Parsed in {:?}", start.elapsed());
    }

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprint!("{}", format_error(error, &source));
        }
        process::exit(1);
    }

    println!("{}", program);
}
