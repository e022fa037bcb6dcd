//! Chart adapters: turn a [`DisplayFrame`] into something on screen.
//!
//! The pipeline output is renderer-agnostic. `PlotChart` draws it with
//! egui_plot; `RasterChart` rasterizes it with plotters and shows the bitmap
//! as a texture.
pub mod error;
pub mod plot;
pub mod raster;
use eframe::egui;
use egui::{Align2, Color32, FontId, Rounding, Sense, Vec2};
use crate::config::RendererKind;
use crate::pitch::DisplayFrame;
use crate::types::CardId;
pub use error::ChartError;
pub use plot::PlotChart;
pub use raster::{render_rgb, RasterChart, RasterLabels, RasterStyle};
pub const LINE_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
pub const TICK_COLOR: Color32 = Color32::from_gray(90);
pub const TICK_TEXT_COLOR: Color32 = Color32::from_gray(200);
/// Everything an adapter needs to draw one card.
pub struct ChartInput<'a> {
    pub card: CardId,
    /// Bumped whenever anything feeding the frame changes.
    pub revision: u64,
    pub frame: &'a DisplayFrame,
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub height: f32,
}
pub trait ChartAdapter {
    fn name(&self) -> &'static str;
    /// Draws a frame that has at least one point.
    fn render(&mut self, ui: &mut egui::Ui, input: &ChartInput<'_>);
    /// Drops anything cached for a removed card.
    fn forget(&mut self, _card: CardId) {}
}
pub fn adapter_for(kind: RendererKind) -> Box<dyn ChartAdapter> {
    match kind {
        RendererKind::Plot => Box::new(PlotChart),
        RendererKind::Raster => Box::new(RasterChart::default()),
    }
}
/// Shows the status hint, then the chart or an empty placeholder.
pub fn show(adapter: &mut dyn ChartAdapter, ui: &mut egui::Ui, input: &ChartInput<'_>) {
    let hint = input.frame.status.hint();
    if input.frame.is_empty() {
        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, input.height), Sense::hover());
        painter.rect_filled(response.rect, Rounding::same(4.0), Color32::from_gray(20));
        painter.text(
            response.rect.center(),
            Align2::CENTER_CENTER,
            hint.unwrap_or_default(),
            FontId::proportional(14.0),
            Color32::GRAY,
        );
        return;
    }
    if let Some(hint) = hint {
        ui.label(egui::RichText::new(hint).color(Color32::YELLOW).small());
    }
    adapter.render(ui, input);
}
