mod app;
mod controller;
mod shapes;

use croquis_engine::device::GpuInit;
use croquis_engine::logging::init_logging;
use croquis_engine::window::{Runtime, RuntimeConfig};

use crate::app::PaintApp;

fn main() {
    init_logging(None);

    let config = RuntimeConfig {
        title: "Croquis".to_string(),
        initial_size: (800.0, 600.0),
    };

    if let Err(err) = Runtime::run(config, GpuInit::default(), PaintApp::new()) {
        log::error!("failed to start: {err:#}");
        std::process::exit(1);
    }
}
