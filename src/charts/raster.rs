use std::collections::HashMap;
use eframe::egui;
use image::RgbImage;
use plotters::prelude::*;
use crate::pitch::DisplayFrame;
use crate::types::CardId;
use super::{ChartAdapter, ChartError, ChartInput};
#[derive(Clone, Debug)]
pub struct RasterStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
    pub grid: RGBColor,
    pub text: RGBColor,
    /// Caption, axis descriptions and tick text. Needs a system font.
    pub draw_labels: bool,
}
impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 260,
            background: RGBColor(10, 10, 10),
            line: CYAN,
            grid: RGBColor(90, 90, 90),
            text: WHITE,
            draw_labels: true,
        }
    }
}
pub struct RasterLabels<'a> {
    pub title: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}
/// Rasterizes a frame into an RGB bitmap.
pub fn render_rgb(
    frame: &DisplayFrame,
    labels: &RasterLabels<'_>,
    style: &RasterStyle,
) -> Result<RgbImage, ChartError> {
    let Some(range) = frame.value_range.filter(|_| !frame.is_empty()) else {
        return Err(ChartError::EmptyFrame(
            frame.status.hint().unwrap_or("frame has no points"),
        ));
    };
    let (width, height) = (style.width, style.height);
    if width == 0 || height == 0 {
        return Err(ChartError::InvalidSize { width, height });
    }
    let (t0, t1) = frame.time_range();
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if style.draw_labels {
            builder
                .caption(labels.title, ("sans-serif", 18).into_font().color(&style.text))
                .set_label_area_size(LabelAreaPosition::Left, 20)
                .set_label_area_size(LabelAreaPosition::Bottom, 35);
        }
        let mut chart = builder.build_cartesian_2d(t0..t1, range.min..range.max)?;
        if style.draw_labels {
            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(0)
                .x_desc(labels.x)
                .y_desc(labels.y)
                .axis_desc_style(("sans-serif", 14).into_font().color(&style.text))
                .label_style(("sans-serif", 12).into_font().color(&style.text))
                .light_line_style(&style.grid.mix(0.2))
                .draw()?;
        }
        for tick in &frame.ticks {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(t0, tick.position), (t1, tick.position)],
                &style.grid,
            )))?;
            if style.draw_labels {
                chart.draw_series(std::iter::once(Text::new(
                    tick.label.clone(),
                    (t0, tick.position),
                    ("sans-serif", 12).into_font().color(&style.text),
                )))?;
            }
        }
        if frame.points.len() == 1 {
            chart.draw_series(
                frame
                    .points
                    .iter()
                    .map(|p| Circle::new(p.as_pair(), 3, style.line.filled())),
            )?;
        } else {
            chart.draw_series(LineSeries::new(
                frame.points.iter().map(|p| p.as_pair()),
                &style.line,
            ))?;
        }
        root.present()?;
    }
    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChartError::Draw("failed to allocate image buffer".into()))
}
struct CachedTexture {
    revision: u64,
    size: [u32; 2],
    texture: Result<egui::TextureHandle, String>,
}
/// Shows plotters bitmaps as egui textures, re-rendering a card only when
/// its revision or the available size changes.
#[derive(Default)]
pub struct RasterChart {
    style: RasterStyle,
    cache: HashMap<CardId, CachedTexture>,
}
impl RasterChart {
    fn texture(
        &mut self,
        ctx: &egui::Context,
        input: &ChartInput<'_>,
        size: [u32; 2],
    ) -> Result<egui::TextureHandle, String> {
        if let Some(cached) = self.cache.get(&input.card) {
            if cached.revision == input.revision && cached.size == size {
                return cached.texture.clone();
            }
        }
        let style = RasterStyle {
            width: size[0],
            height: size[1],
            ..self.style.clone()
        };
        let labels = RasterLabels {
            title: input.title,
            x: input.x_label,
            y: input.y_label,
        };
        let texture = render_rgb(input.frame, &labels, &style)
            .map(|image| {
                let pixels = egui::ColorImage::from_rgb(
                    [image.width() as usize, image.height() as usize],
                    image.as_raw(),
                );
                ctx.load_texture(
                    format!("pitch-raster-{}", input.card),
                    pixels,
                    egui::TextureOptions::LINEAR,
                )
            })
            .map_err(|err| {
                log::warn!("{}: {err}", input.card);
                err.to_string()
            });
        log::debug!(
            "rendered {} at revision {} ({}x{})",
            input.card,
            input.revision,
            size[0],
            size[1]
        );
        self.cache.insert(
            input.card,
            CachedTexture {
                revision: input.revision,
                size,
                texture: texture.clone(),
            },
        );
        texture
    }
}
impl ChartAdapter for RasterChart {
    fn name(&self) -> &'static str {
        "raster"
    }
    fn render(&mut self, ui: &mut egui::Ui, input: &ChartInput<'_>) {
        let size = [
            ui.available_width().max(120.0) as u32,
            input.height.max(80.0) as u32,
        ];
        match self.texture(ui.ctx(), input, size) {
            Ok(texture) => {
                ui.image((texture.id(), texture.size_vec2()));
            }
            Err(message) => {
                ui.colored_label(egui::Color32::RED, message);
            }
        }
    }
    fn forget(&mut self, card: CardId) {
        self.cache.remove(&card);
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{parse, AxisMode, DisplayRequest, PitchPipeline, TimeWindow};
    fn plain_style() -> RasterStyle {
        RasterStyle {
            width: 200,
            height: 100,
            draw_labels: false,
            ..RasterStyle::default()
        }
    }
    fn labels() -> RasterLabels<'static> {
        RasterLabels {
            title: "take",
            x: "Time (s)",
            y: "Hz",
        }
    }
    fn frame(text: &str, axis: AxisMode) -> DisplayFrame {
        PitchPipeline::new(parse(text)).derive(&DisplayRequest {
            window: TimeWindow::new(0.0, 1.0),
            tonic: Some(220.0),
            axis,
            ..DisplayRequest::default()
        })
    }
    #[test]
    fn renders_line_over_background() {
        let style = plain_style();
        let frame = frame("0 220\n0.5 330\n1 440", AxisMode::Swara);
        let image = render_rgb(&frame, &labels(), &style).unwrap();
        assert_eq!(image.dimensions(), (200, 100));
        assert_eq!(image.get_pixel(0, 0).0, [10, 10, 10]);
        let cyan = image
            .pixels()
            .filter(|p| p.0[0] < 60 && p.0[1] > 150 && p.0[2] > 150)
            .count();
        assert!(cyan > 0);
    }
    #[test]
    fn single_point_still_draws() {
        let frame = frame("0.5 300", AxisMode::Hertz);
        let image = render_rgb(&frame, &labels(), &plain_style()).unwrap();
        assert!(image.pixels().any(|p| p.0 != [10, 10, 10]));
    }
    #[test]
    fn neutral_frames_and_zero_size_are_errors() {
        let empty = PitchPipeline::default().derive(&DisplayRequest::default());
        assert!(matches!(
            render_rgb(&empty, &labels(), &plain_style()),
            Err(ChartError::EmptyFrame(_))
        ));
        let style = RasterStyle {
            width: 0,
            ..plain_style()
        };
        let frame = frame("0 100\n1 200", AxisMode::Hertz);
        assert!(matches!(
            render_rgb(&frame, &labels(), &style),
            Err(ChartError::InvalidSize { .. })
        ));
    }
    #[test]
    fn textures_are_reused_until_the_revision_changes() {
        let ctx = egui::Context::default();
        let mut chart = RasterChart {
            style: plain_style(),
            cache: HashMap::new(),
        };
        let frame = frame("0 100\n1 200", AxisMode::Hertz);
        let input = |revision| ChartInput {
            card: CardId(1),
            revision,
            frame: &frame,
            title: "take",
            x_label: "Time (s)",
            y_label: "Hz",
            height: 100.0,
        };
        let first = chart.texture(&ctx, &input(0), [200, 100]).unwrap();
        let again = chart.texture(&ctx, &input(0), [200, 100]).unwrap();
        assert_eq!(first.id(), again.id());
        let bumped = chart.texture(&ctx, &input(1), [200, 100]).unwrap();
        assert_ne!(first.id(), bumped.id());
        chart.forget(CardId(1));
        assert!(chart.cache.is_empty());
    }
}
