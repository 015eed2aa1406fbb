use color_print::{ceprintln, cprintln};
use std::io::Write;

use ucasm::error::Error;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

/// Exit status for a malformed command line.
const EXIT_USAGE: i32 = -1;
/// Exit status when a file cannot be read or written.
const EXIT_IO: i32 = 2;

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file
    source: String,

    /// Listing file, rewritten on every run
    listing: String,

    /// Hex image file, only written when there are no syntax errors
    hex: String,

    /// Print the listing after assembly
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::{error::ErrorKind, Parser};

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", err.render());
                std::process::exit(EXIT_USAGE);
            }
        },
    };

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            ceprintln!("<red,bold>error</>: {}", err);
            if let Some(source) = std::error::Error::source(&err) {
                ceprintln!("       <blue>caused by</>: {}", source);
            }
            std::process::exit(EXIT_IO);
        }
    }
}

fn run(args: &Args) -> Result<i32, Error> {
    println!("uCPU Assembler");

    println!("1. Read Source");
    println!("  < {}", args.source);
    let lines = ucasm::source::read(&args.source)?;

    println!("2. Assemble");
    let asm = ucasm::assemble(&args.source, &lines);
    println!("  - {} pass, found #{} labels", asm.pass, asm.labels);
    println!("  > {}", args.listing);
    write_file(&args.listing, &asm.listing)?;

    if let Some(image) = &asm.image {
        println!("3. Write Image");
        println!("  > {}", args.hex);
        write_file(&args.hex, &image.render())?;
    }

    if args.dump {
        dump(&asm.listing);
    }

    asm.diag.report();
    Ok(asm.diag.exit_code())
}

fn write_file(path: &str, text: &str) -> Result<(), Error> {
    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn dump(listing: &str) {
    println!("----------------------------------------------------");
    for line in listing.lines() {
        if line.starts_with("Syntax error") || line.starts_with("Error") {
            cprintln!("<red>{}</>", line);
        } else if line.starts_with("Warning") {
            cprintln!("<yellow>{}</>", line);
        } else {
            println!("{}", line);
        }
    }
    println!("----------------------------------------------------");
}
