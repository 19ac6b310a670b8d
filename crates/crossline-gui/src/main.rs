mod canvas;

use canvas::{Canvas, CanvasConfig};
use crossline_core::controller::Phase;
use crossline_core::geom::Point;
use crossline_core::input::InputEvent;
use crossline_core::report::Session;
use eframe::egui;
use tracing::info;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "crossline",
        native_options,
        Box::new(|cc| Ok(Box::new(CrosslineApp::new(cc)))),
    )
}

struct CrosslineApp {
    session: Session,
    canvas: Canvas,
    config: CanvasConfig,
    status: String,
}

impl CrosslineApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("crossline started");
        Self {
            session: Session::new(),
            canvas: Canvas::default(),
            config: CanvasConfig::default(),
            status: "Click twice to draw a segment. Right-click cancels.".to_string(),
        }
    }

    fn apply(&mut self, event: InputEvent) {
        self.session.apply(event, &mut self.canvas);
        let state = self.session.controller().state();
        self.status = match (event, state.phase()) {
            (InputEvent::Reset, _) => "Cleared.".to_string(),
            (_, Phase::Pending) => "Click again to finish the segment.".to_string(),
            (_, Phase::Idle) => format!(
                "{} segments, {} intersections",
                state.segments().len(),
                state.intersections().len()
            ),
        };
    }
}

impl eframe::App for CrosslineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    self.apply(InputEvent::Reset);
                }
                ui.separator();
                ui.checkbox(&mut self.config.show_preview, "Preview");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.separator();
                let stats = self.session.stats();
                ui.label(format!(
                    "total: {} segments, {} crossings, {} parallel pairs",
                    stats.segments_completed, stats.intersections_found, stats.parallel_pairs
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_surface(ui, self);
        });
    }
}

fn draw_surface(ui: &mut egui::Ui, app: &mut CrosslineApp) {
    let (rect, response) = ui.allocate_exact_size(app.config.size, egui::Sense::click());
    let painter = ui.painter_at(rect);
    let to_local = |pos: egui::Pos2| {
        let local = pos - rect.min;
        Point::new(local.x as f64, local.y as f64)
    };

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.apply(InputEvent::primary(to_local(pos)));
        }
    } else if response.secondary_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.apply(InputEvent::secondary(to_local(pos)));
        }
    }

    painter.rect_filled(rect, egui::CornerRadius::same(0), app.config.background);
    app.canvas.paint(&painter, rect.min, &app.config);

    if app.config.show_preview {
        if let (Some(start), Some(hover)) = (
            app.session.controller().state().pending_start(),
            response.hover_pos(),
        ) {
            let from = rect.min + egui::vec2(start.x as f32, start.y as f32);
            painter.line_segment([from, hover], app.config.preview_stroke);
        }
    }

    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(0),
        app.config.border,
        egui::StrokeKind::Outside,
    );
}
