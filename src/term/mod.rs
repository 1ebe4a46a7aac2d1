extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{Config, Event, Program, Runner};
use ansi_term::Style;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Assemble and run a Run assembly program.
#[derive(Parser, Debug)]
#[command(name = "runvm", version)]
struct Args {
    /// Run assembly source file
    file: PathBuf,
    /// Main entry point for program
    #[arg(long, default_value_t = 0)]
    main: usize,
    /// Fixed size of execution stack
    #[arg(long = "stacksize", default_value_t = 1024)]
    stack_size: usize,
    /// Trace the program execution
    #[arg(long)]
    trace: bool,
    /// Print the assembled program before running it
    #[arg(long)]
    listing: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            stack_size: self.stack_size,
            main: self.main,
            trace: self.trace,
        }
    }
}

pub fn main() {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(&args, interrupted) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            report(&error.to_string());
            std::process::exit(1);
        }
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let source = match std::fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            report(&format!(
                "FileError: couldn't open file {}; {}",
                args.file.display(),
                error
            ));
            return Ok(1);
        }
    };
    let program = match Program::assemble(&source) {
        Ok(program) => program,
        Err(error) => {
            report(&error.to_string());
            return Ok(1);
        }
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.listing {
        write!(out, "{}", program)?;
    }
    let mut runner = Runner::new(program, &args.config());
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runner.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runner.execute(5000) {
            Event::Print(s) | Event::Trace(s) => {
                out.write_all(s.as_bytes())?;
            }
            Event::Running => {}
            Event::Break(addr) => {
                out.flush()?;
                report(&format!("BREAK AT {:04}", addr));
                return Ok(130);
            }
            Event::Errors(error) => {
                out.flush()?;
                report(&error.to_string());
                return Ok(1);
            }
            Event::Stopped => break,
        }
    }
    out.flush()?;
    Ok(0)
}

fn report(s: &str) {
    eprintln!("{}", Style::new().bold().paint(s));
}
