use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use lending_library::{Args, NoticeBoard, Shell};
use log::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_filter()),
    )
    .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let notices = NoticeBoard::default();
    let library = args.build_library(&notices);
    info!("starting console with {:?}", library.config());

    let stdin = io::stdin();
    let mut shell =
        Shell::new(library, stdin.lock(), BufWriter::new(io::stdout())).with_notices(notices);
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("console I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
