use clap::Parser;

#[derive(Parser)]
#[command(name = "eventcat")]
pub(crate) struct Cli {
    /// Database DSN; when empty the flat-file store is used instead.
    #[arg(long, default_value = "")]
    pub(crate) dsn: String,
    #[arg(long, default_value = "")]
    pub(crate) data_dir: String,
    #[arg(long, default_value = "127.0.0.1")]
    pub(crate) host: String,
    #[arg(long, default_value_t = 8080)]
    pub(crate) port: u16,
}
