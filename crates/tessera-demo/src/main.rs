use anyhow::{Context, Result};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::math::Color;
use tessera_engine::mesh::FrameSetup;

/// Translucent white drawn over the triangle by renderers that support it.
const OVERLAY_PERCENT: [f64; 4] = [100.0, 100.0, 100.0, 25.0];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let setup = FrameSetup::default();
    log::info!(
        "view {}x{}, clear 0x{:08X} ({})",
        setup.width,
        setup.height,
        setup.clear_rgba,
        Color::GRAY_80
    );
    for (i, v) in setup.vertices.iter().enumerate() {
        log::info!("vertex {i}: pos {:?} abgr 0x{:08X}", v.position, v.abgr);
    }
    log::debug!(
        "upload sizes: {} vertex bytes, {} index bytes",
        setup.vertex_bytes().len(),
        setup.index_bytes().len()
    );

    let [r, g, b, a] = OVERLAY_PERCENT;
    let overlay = Color::rgba_percent(r, g, b, a).context("invalid overlay color")?;
    log::info!("overlay {overlay} rgba 0x{:08X}", overlay.to_rgba8888());

    Ok(())
}
