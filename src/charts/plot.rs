use eframe::egui;
use egui::Align2;
use egui_plot::{HLine, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use super::{ChartAdapter, ChartInput, LINE_COLOR, TICK_COLOR, TICK_TEXT_COLOR};
/// Interactive chart drawn directly by egui_plot.
///
/// Value ticks come from the frame, so the built-in y axis is hidden and
/// each tick is drawn as a horizontal rule with its label at the left edge.
pub struct PlotChart;
impl ChartAdapter for PlotChart {
    fn name(&self) -> &'static str {
        "plot"
    }
    fn render(&mut self, ui: &mut egui::Ui, input: &ChartInput<'_>) {
        let frame = input.frame;
        let (t0, t1) = frame.time_range();
        let mut plot = Plot::new(("pitch_plot", input.card.0))
            .height(input.height)
            .x_axis_label(input.x_label)
            .show_axes([true, false])
            .allow_scroll(false)
            .include_x(t0)
            .include_x(t1);
        if let Some(range) = frame.value_range {
            plot = plot.include_y(range.min).include_y(range.max);
        }
        ui.label(egui::RichText::new(format!("{} ({})", input.title, input.y_label)).strong());
        plot.show(ui, |plot_ui| {
            for tick in &frame.ticks {
                plot_ui.hline(HLine::new(tick.position).color(TICK_COLOR).width(0.5));
                plot_ui.text(
                    Text::new(PlotPoint::new(t0, tick.position), tick.label.clone())
                        .anchor(Align2::LEFT_BOTTOM)
                        .color(TICK_TEXT_COLOR),
                );
            }
            let points: Vec<[f64; 2]> = frame.points.iter().map(|p| [p.time, p.value]).collect();
            if points.len() == 1 {
                plot_ui.points(Points::new(PlotPoints::new(points)).radius(3.0).color(LINE_COLOR));
            } else {
                plot_ui.line(
                    Line::new(PlotPoints::new(points))
                        .name(input.title)
                        .color(LINE_COLOR),
                );
            }
        });
    }
}
