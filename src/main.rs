use clap::Parser;
use std::process::ExitCode;
use weekday_demo::DemoError;
use weekday_demo::cli::{Cli, execute};
use weekday_demo::logging;
use weekday_demo::output::{LineSink, WriterSink};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut sink = WriterSink::stdout();
    let result = execute(cli.command.as_ref(), &mut sink)
        .and_then(|()| sink.flush().map_err(DemoError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
