// src/gui.rs
use eframe::egui;
use egui::Color32;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use crate::cards::Deck;
use crate::charts::{self, ChartAdapter, ChartInput};
use crate::config::ViewerConfig;
use crate::loader::display_name;
use crate::pitch::{AxisMode, DisplayFrame};
use crate::types::*;
use crate::upload::UploadState;

pub struct PitchScopeApp {
    deck: Deck,
    adapter: Box<dyn ChartAdapter>,
    // Last derived frame per card, keyed by the revision it was derived at
    frames: HashMap<CardId, (u64, DisplayFrame)>,
    path_inputs: HashMap<SlotTarget, String>,
    log_messages: Vec<String>,

    // loader thread
    rx: Receiver<LoaderMessage>,
    tx_cmd: Sender<LoaderCommand>,
}

impl PitchScopeApp {
    pub fn new(config: ViewerConfig, tx_cmd: Sender<LoaderCommand>, rx: Receiver<LoaderMessage>) -> Self {
        let adapter = charts::adapter_for(config.renderer);
        let ready = format!("PitchScope ready ({} charts).", adapter.name());
        Self {
            deck: Deck::new(config),
            adapter,
            frames: HashMap::new(),
            path_inputs: HashMap::new(),
            log_messages: vec![ready],
            rx,
            tx_cmd,
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 { self.log_messages.remove(0); }
    }

    fn request_upload(&mut self, target: SlotTarget, path: PathBuf) {
        let name = display_name(&path);
        match self.deck.request_upload(target, path) {
            Some(cmd) => {
                if self.tx_cmd.send(cmd).is_err() {
                    log::error!("loader thread is gone; dropping upload of {name}");
                    self.log("Loader stopped; restart the viewer.");
                } else {
                    self.log(&format!("Loading {name}..."));
                }
            }
            None => {
                let reason = match self.deck.slot(target) {
                    Some(UploadState::Rejected { reason, .. }) => reason.to_string(),
                    _ => format!("cannot load {name}"),
                };
                self.log(&reason);
            }
        }
    }

    fn drain_loader(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            let LoaderMessage::Loaded { outcome, .. } = &msg;
            let note = match outcome {
                Ok(file) => format!("Loaded {} ({} samples)", file.name, file.series.len()),
                Err(err) => err.to_string(),
            };
            if self.deck.apply(msg) { self.log(&note); }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if paths.is_empty() { return; }
        let dropped = paths.len();
        let routed = route_dropped(self.deck.shared_mode(), &self.deck.ids(), paths);
        if routed.len() < dropped {
            self.log(&format!("Ignored {} extra dropped file(s)", dropped - routed.len()));
        }
        for (target, path) in routed {
            self.path_inputs.insert(target, path.display().to_string());
            self.request_upload(target, path);
        }
    }

    fn frame_for(&mut self, id: CardId, revision: u64) -> Option<DisplayFrame> {
        if let Some((rev, frame)) = self.frames.get(&id) {
            if *rev == revision { return Some(frame.clone()); }
        }
        let frame = self.deck.frame(id)?;
        self.frames.insert(id, (revision, frame.clone()));
        Some(frame)
    }

    fn upload_row(&mut self, ui: &mut egui::Ui, target: SlotTarget) {
        let mut clicked = false;
        let path = self.path_inputs.entry(target).or_default();
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(path).hint_text("pitch.txt / pitch.csv").desired_width(220.0));
            clicked = ui.button("Load").clicked();
        });
        let text = path.trim().to_owned();
        if clicked {
            if text.is_empty() { self.log("Enter a file path or drop a file."); }
            else { self.request_upload(target, PathBuf::from(text)); }
        }
        if let Some(state) = self.deck.slot(target) {
            let (status, color) = upload_status(state);
            ui.label(egui::RichText::new(status).color(color).small());
        }
    }

    fn card_ui(&mut self, ui: &mut egui::Ui, id: CardId) {
        let Some(card) = self.deck.card(id).cloned() else { return; };
        let mut settings = card.settings.clone();
        let mut remove = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&card.title);
                if self.deck.len() > 1 && ui.small_button("✖").on_hover_text("Remove card").clicked() {
                    remove = true;
                }
            });
            if !self.deck.shared_mode() { self.upload_row(ui, SlotTarget::Card(id)); }

            ui.horizontal(|ui| {
                ui.label("Start (s)");
                ui.add(egui::TextEdit::singleline(&mut settings.start).desired_width(60.0));
                ui.label("End (s)");
                ui.add(egui::TextEdit::singleline(&mut settings.end).desired_width(60.0));
                ui.label("Tonic (Hz)");
                ui.add(egui::TextEdit::singleline(&mut settings.tonic).desired_width(70.0));
                egui::ComboBox::from_id_source(("axis", id.0))
                    .selected_text(settings.axis.label())
                    .show_ui(ui, |ui| {
                        for mode in AxisMode::ALL {
                            ui.selectable_value(&mut settings.axis, mode, mode.label());
                        }
                    });
            });
            self.deck.update_settings(id, settings.clone());

            let revision = self.deck.card(id).map(|c| c.revision).unwrap_or(card.revision);
            if let Some(frame) = self.frame_for(id, revision) {
                let input = ChartInput {
                    card: id,
                    revision,
                    frame: &frame,
                    title: &card.title,
                    x_label: "Time (s)",
                    y_label: axis_title(settings.axis),
                    height: self.deck.config().plot_height_px as f32,
                };
                charts::show(self.adapter.as_mut(), ui, &input);
            }
        });
        if remove && self.deck.remove_card(id) {
            self.adapter.forget(id);
            self.frames.remove(&id);
            self.path_inputs.remove(&SlotTarget::Card(id));
            self.log(&format!("Removed {}", card.title));
        }
    }
}

impl eframe::App for PitchScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. loader results and dropped files
        self.drain_loader();
        self.handle_dropped_files(ctx);

        // 2. UI
        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(10, 10, 15);
        ctx.set_visuals(visuals);

        egui::SidePanel::left("L").min_width(300.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("PitchScope");
            ui.label("Pitch contour viewer");
            ui.separator();

            let mut shared = self.deck.shared_mode();
            if ui.checkbox(&mut shared, "One file for all cards").changed() {
                self.deck.set_shared_mode(shared);
                self.log(if shared { "Shared file mode on" } else { "Shared file mode off" });
            }
            if shared { self.upload_row(ui, SlotTarget::Shared); }

            ui.add_space(10.0);
            if ui.button("➕ ADD CARD").clicked() {
                let id = self.deck.add_card();
                self.log(&format!("Added {id}"));
            }
            ui.label(egui::RichText::new("Drop .txt / .csv files onto the window to load them.").small());

            ui.add_space(10.0);
            ui.separator();
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                for m in &self.log_messages { ui.monospace(m); }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for id in self.deck.ids() {
                    self.card_ui(ui, id);
                    ui.add_space(8.0);
                }
            });
        });
    }
}

impl Drop for PitchScopeApp {
    fn drop(&mut self) {
        self.tx_cmd.send(LoaderCommand::Shutdown).ok();
    }
}

fn axis_title(axis: AxisMode) -> &'static str {
    match axis {
        AxisMode::Hertz => "Pitch (Hz)",
        AxisMode::Cents => "Cents above tonic",
        AxisMode::Swara => "Swara",
    }
}

fn upload_status(state: &UploadState) -> (String, Color32) {
    match state {
        UploadState::Idle => ("No file loaded".to_owned(), Color32::GRAY),
        UploadState::Reading { path, .. } => (format!("Reading {}...", display_name(path)), Color32::YELLOW),
        UploadState::Ready(file) => (
            format!("{}: {} samples, {} rows skipped", file.name, file.stats.accepted, file.stats.dropped),
            Color32::LIGHT_GREEN,
        ),
        UploadState::Rejected { reason, previous } => {
            let text = match previous {
                Some(file) => format!("{reason} (still showing {})", file.name),
                None => reason.to_string(),
            };
            (text, Color32::RED)
        }
    }
}

/// Sends dropped files to upload slots: the first file to the shared slot
/// in shared mode, otherwise file `i` to card `i`. Extra files are dropped.
fn route_dropped(shared: bool, ids: &[CardId], paths: Vec<PathBuf>) -> Vec<(SlotTarget, PathBuf)> {
    if shared {
        return paths.into_iter().take(1).map(|p| (SlotTarget::Shared, p)).collect();
    }
    ids.iter().map(|id| SlotTarget::Card(*id)).zip(paths).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{parse, ParseStats};
    use crate::upload::{LoadedFile, UploadError};

    #[test]
    fn dropped_files_fill_cards_in_order() {
        let ids = [CardId(1), CardId(4)];
        let paths: Vec<PathBuf> = ["a.txt", "b.csv", "c.txt"].iter().map(PathBuf::from).collect();
        let routed = route_dropped(false, &ids, paths.clone());
        assert_eq!(
            routed,
            vec![
                (SlotTarget::Card(CardId(1)), PathBuf::from("a.txt")),
                (SlotTarget::Card(CardId(4)), PathBuf::from("b.csv")),
            ]
        );
        let routed = route_dropped(true, &ids, paths);
        assert_eq!(routed, vec![(SlotTarget::Shared, PathBuf::from("a.txt"))]);
    }

    #[test]
    fn rejected_status_mentions_the_kept_file() {
        let kept = LoadedFile {
            name: "take1.txt".to_owned(),
            path: PathBuf::from("take1.txt"),
            series: parse("0 100\n1 200"),
            stats: ParseStats::default(),
        };
        let state = UploadState::Ready(kept).reject(UploadError::UnsupportedExtension { file: "x.wav".into() });
        let (text, color) = upload_status(&state);
        assert!(text.contains("x.wav"));
        assert!(text.contains("still showing take1.txt"));
        assert_eq!(color, Color32::RED);

        let state = UploadState::Idle.reject(UploadError::NoValidRows { file: "empty.txt".into() });
        let (text, _) = upload_status(&state);
        assert!(text.contains("empty.txt"));
        assert!(!text.contains("still showing"));
    }
}
