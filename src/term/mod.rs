/*!
## Rust Terminal Module

The command line. Takes exactly one `.fishy` file, writes `out.c`.

*/

extern crate ansi_term;
use crate::emit::{Emitter, OUTPUT_FILE};
use crate::{error, lang, lang::Error};
use ansi_term::Style;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

mod logger;

/// Required suffix of the source file name.
pub const SOURCE_EXTENSION: &str = ".fishy";

pub fn main() {
    logger::init(LevelFilter::Info);
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = main_args(&args) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn main_args(args: &[String]) -> Result<(), Error> {
    let filename = source_path(args)?;
    info!("Fishy Compiler");
    compile_file(Path::new(filename), Path::new(OUTPUT_FILE))?;
    info!("Compiling completed.");
    Ok(())
}

/// Validates the argument list and returns the one source path in it.
pub fn source_path(args: &[String]) -> Result<&str, Error> {
    match args {
        [filename] if filename.ends_with(SOURCE_EXTENSION) => Ok(filename.as_str()),
        [filename] => Err(error!(UsageError;
            "{} does not end in {}", filename, SOURCE_EXTENSION)),
        _ => Err(error!(UsageError;
            "the compiler needs exactly one source file argument")),
    }
}

/// Reads `input`, translates it and writes `output`. The output file is
/// only created when translation succeeds.
pub fn compile_file(input: &Path, output: &Path) -> Result<(), Error> {
    let source = load(input)?;
    let mut emitter = Emitter::new(output);
    lang::parse(&source, &mut emitter)?;
    emitter.write_file()
}

fn load(filename: &Path) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => {
                return Err(error!(FileNotFound; "{}", filename.display()));
            }
            _ => return Err(error!(DiskIoError; "{}: {}", filename.display(), error)),
        },
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(DiskIoError; "{}: {}", filename.display(), error));
    }
    Ok(source)
}
