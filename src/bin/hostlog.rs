#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::{self, Write};
use std::{env, process::ExitCode};

use is_terminal::IsTerminal;

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    if let Err(error) = logging::init_tracing_from_env() {
        let _ = writeln!(stderr, "{}: {error}", cli::PROGRAM_NAME);
    }

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let status = cli::run(env::args_os(), stdout.lock(), is_terminal, &mut stderr);
    cli::exit_code_from(status)
}
