use std::process::ExitCode;

use clap::Parser;
use tflink_lib::{app, bootstrap, cli::Args};

fn main() -> ExitCode {
    let args = Args::parse();
    let paths = bootstrap::resolve_app_paths();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(
        args.verbose,
        paths.as_ref().map(|paths| paths.logs_dir.as_path()),
    ) {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(app::run(args, paths))
}
