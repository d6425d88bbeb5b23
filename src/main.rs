#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based agreemap viewer.

use agreemap::config;
use agreemap::egui_app::{MIN_VIEWPORT_SIZE, ViewerApp, style};
use agreemap::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err}");
            config::AppConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1240.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Agreemap",
        native_options,
        Box::new(move |cc| {
            let mut visuals = egui::Visuals::dark();
            style::apply_visuals(&mut visuals);
            cc.egui_ctx.set_visuals(visuals);
            match ViewerApp::from_config(config) {
                Ok(app) => Ok(Box::new(app)),
                Err(err) => Ok(Box::new(LaunchError { message: err })),
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start viewer");
                ui.label(&self.message);
            });
        });
    }
}
