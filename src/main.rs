use std::io;

use anyhow::Result;
use log::{debug, LevelFilter};

use mimetypes::cli;
use mimetypes::config::*;
use mimetypes::{COMMIT_ID, PKG_NAME, PKG_VERSION};

pub fn main() -> Result<()> {
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if CONFIG.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    debug!("{PKG_NAME} {PKG_VERSION} ({COMMIT_ID})");
    if CONFIG.verbose {
        debug!("{:?}", &*CONFIG);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&CONFIG, stdin.lock(), &mut stdout.lock())
}
