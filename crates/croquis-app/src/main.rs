use anyhow::Result;
use winit::dpi::LogicalSize;

use croquis_engine::device::GpuInit;
use croquis_engine::logging::{init_logging, LoggingConfig};
use croquis_engine::window::{Runtime, RuntimeConfig};

mod app;
mod canvas;
mod toolbar;
mod viewer;

use app::SketchApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Croquis".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
    };

    Runtime::run(config, GpuInit::default(), SketchApp::new())
}
