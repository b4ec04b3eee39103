//! Counts matching lines across files.
//!
//! A small end-to-end exercise for `flat_config`: flags, a defaulted
//! integer option, a path option, interleaved operands and the rendered
//! help table.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use flat_config::{Config, OptionDef};

fn options() -> Config {
    Config::new([
        OptionDef::flag("help,h", "show this help and exit"),
        OptionDef::flag("verbose,v", "report each file as it is read"),
        OptionDef::flag("count,c", "print the grand total only"),
        OptionDef::text("pattern,p", "count only lines containing this text"),
        OptionDef::with_default(
            "max,m",
            0,
            "stop after this many matches per file (0 means no limit)",
        ),
        OptionDef::path("output,o", "write the report here instead of standard output"),
        OptionDef::flag("bare", "omit file names from the report").hidden(),
    ])
}

fn main() -> ExitCode {
    let mut config = options();
    if let Err(error) = config.parse(std::env::args(), false) {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "linecount: {error}").ok();
        return ExitCode::FAILURE;
    }
    if config.count("help") > 0 {
        let mut stdout = io::stdout().lock();
        write!(stdout, "usage: linecount [options] [file ...]\n\n{config}").ok();
        return ExitCode::SUCCESS;
    }
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "linecount: {error}").ok();
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> io::Result<()> {
    let pattern: Option<String> = config.get("pattern").ok();
    let limit = config.get::<i64>("max").unwrap_or(0);
    let bare = config.count("bare") > 0;
    let verbose = config.count("verbose") > 0;
    let totals_only = config.count("count") > 0;

    let mut sink: Box<dyn Write> = match config.get::<Utf8PathBuf>("output") {
        Ok(path) => Box::new(fs::File::create(path)?),
        Err(_) => Box::new(io::stdout().lock()),
    };

    let mut total: i64 = 0;
    for operand in config.operands() {
        if verbose {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "reading {operand}").ok();
        }
        let contents = fs::read_to_string(operand)?;
        let mut matched: i64 = 0;
        for line in contents.lines() {
            if pattern
                .as_deref()
                .is_none_or(|needle| line.contains(needle))
            {
                matched += 1;
                if limit > 0 && matched >= limit {
                    break;
                }
            }
        }
        total += matched;
        if !totals_only {
            if bare {
                writeln!(sink, "{matched}")?;
            } else {
                writeln!(sink, "{operand}: {matched}")?;
            }
        }
    }
    if totals_only || config.operands().len() > 1 {
        if bare {
            writeln!(sink, "{total}")?;
        } else {
            writeln!(sink, "total: {total}")?;
        }
    }
    Ok(())
}
