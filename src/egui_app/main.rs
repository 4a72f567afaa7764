//! Native desktop entry point.

use chrono::Utc;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use xfrooms::egui_app::theme::styles;
use xfrooms::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("[APP] Starting XFRooms");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "XFRooms",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(RoomsApp::new()))
        }),
    )
}

struct RoomsApp {
    state: AppState,
}

impl RoomsApp {
    fn new() -> Self {
        let mut state = AppState::new();
        // A previous server session may still be live
        state.fetch_identity();
        Self { state }
    }
}

impl eframe::App for RoomsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_background();
        if let Some(room) = self.state.room.as_mut() {
            room.update(Utc::now());
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // The countdown and channel polls need frames without input
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
