//! # Server configuration
//!
//! Every option can be given on the command line or through an environment
//! variable:
//!
//! ```bash
//! PLANTILLA_PORT=8002 PLANTILLA_DB=./plantilla.sqlite ./backend --base /plantilla
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "backend")]
#[command(about = "Microservicio MS Plantilla: API JSON de personas y cliente web")]
pub struct Config {
    /// Host/IP to listen on
    #[arg(long, default_value = "127.0.0.1", env = "PLANTILLA_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8002", env = "PLANTILLA_PORT")]
    pub port: u16,

    /// SQLite file holding the person collection
    #[arg(long, default_value = "plantilla.sqlite", env = "PLANTILLA_DB")]
    pub db: PathBuf,

    /// Path prefix of every API route
    #[arg(long, default_value = "/plantilla", env = "PLANTILLA_BASE")]
    pub base: String,

    /// Do not load the sample collection into an empty database
    #[arg(long, env = "PLANTILLA_NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    /// Route prefix without a trailing slash (`""` for the root).
    pub fn base_path(&self) -> &str {
        self.base.trim_end_matches('/')
    }
}
