//! Desktop application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use eframe::egui;

use stockdesk_catalog::Catalog;
use stockdesk_desktop::StockdeskApp;

fn main() -> anyhow::Result<()> {
    stockdesk_observability::init();

    let catalog = if seed_demo_enabled() {
        Catalog::seeded().context("failed to seed the demo catalog")?
    } else {
        Catalog::new()
    };
    tracing::info!(products = catalog.len(), "starting stockdesk");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stockdesk Inventory Management System",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(StockdeskApp::new(catalog))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the desktop shell: {err}"))
}

/// Set `STOCKDESK_SEED_DEMO=0` (or `false`) to start with an empty catalog.
fn seed_demo_enabled() -> bool {
    match std::env::var("STOCKDESK_SEED_DEMO") {
        Ok(value) => !matches!(value.trim(), "0" | "false" | "no"),
        Err(_) => true,
    }
}
