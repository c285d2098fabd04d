use std::process::ExitCode;

use anyhow::Context as _;

fn init_tracing() -> anyhow::Result<()> {
    let Some(level) = sampleimage::config::log_level_from_env() else {
        return Ok(());
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("install tracing subscriber")
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("warning: {e:#}");
    }

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let code = sampleimage::cli::run(std::env::args_os(), &mut stdout, &mut stderr);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
