use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::report::{ClientOrder, ReportOptions};

/// Settings for the upload service, passed explicitly into the router.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Directory where uploads and generated reports are stored
    #[arg(long, short = 'u', env = "SALES_REPORT_UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Address to listen on
    #[arg(long, short = 'b', env = "SALES_REPORT_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Largest accepted upload, in MiB
    #[arg(long, default_value = "16")]
    pub max_upload_mb: usize,

    /// Order of clients inside each region sheet
    #[arg(long, value_enum, default_value_t = ClientOrder::Sorted)]
    pub client_order: ClientOrder,
}

impl ServerConfig {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_upload_mb: 16,
            client_order: ClientOrder::default(),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            client_order: self.client_order,
        }
    }
}
