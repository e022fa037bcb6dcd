//! Chart cards and the deck that owns them.
//!
//! Each card is a value object keyed by a stable [`CardId`]. Edits never
//! mutate a card in place: the deck swaps in a whole new value and bumps the
//! card's revision, which renderers use to invalidate cached output.
use std::collections::BTreeMap;
use std::path::PathBuf;
use crate::config::ViewerConfig;
use crate::loader::check_extension;
use crate::pitch::{parse_field, AxisMode, DisplayFrame, DisplayRequest, PitchPipeline, TimeWindow};
use crate::types::{CardId, LoaderCommand, LoaderMessage, RequestId, SlotTarget};
use crate::upload::{LoadedFile, UploadState};
/// Raw text of a card's inputs, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSettings {
    pub start: String,
    pub end: String,
    pub tonic: String,
    pub axis: AxisMode,
}
impl CardSettings {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            start: config.default_window.start.to_string(),
            end: config.default_window.end.to_string(),
            tonic: config.default_tonic.map(|t| t.to_string()).unwrap_or_default(),
            axis: config.default_axis,
        }
    }
    /// Turns the text fields into a pipeline request.
    ///
    /// Unparseable bounds become NaN so the pipeline reports an invalid range.
    pub fn request(&self, config: &ViewerConfig) -> DisplayRequest {
        let start = parse_field(&self.start).unwrap_or(f64::NAN);
        let end = parse_field(&self.end).unwrap_or(f64::NAN);
        DisplayRequest {
            window: TimeWindow::new(start, end),
            tonic: parse_field(&self.tonic),
            axis: self.axis,
            tick_count: config.tick_count,
            min_label_spacing_px: config.min_label_spacing_px,
            plot_height_px: config.plot_height_px,
        }
    }
}
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub settings: CardSettings,
    /// Own upload slot, ignored while the deck is in shared-file mode.
    pub upload: UploadState,
    pub revision: u64,
}
impl Card {
    fn revised(self) -> Self {
        Self {
            revision: self.revision + 1,
            ..self
        }
    }
}
pub struct Deck {
    config: ViewerConfig,
    cards: BTreeMap<CardId, Card>,
    shared: UploadState,
    shared_mode: bool,
    next_card: u64,
    next_request: u64,
}
impl Deck {
    pub fn new(config: ViewerConfig) -> Self {
        let mut deck = Self {
            shared_mode: config.shared_file,
            config,
            cards: BTreeMap::new(),
            shared: UploadState::Idle,
            next_card: 1,
            next_request: 1,
        };
        for _ in 0..deck.config.cards {
            deck.add_card();
        }
        deck
    }
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
    pub fn add_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        let card = Card {
            id,
            title: format!("Card {}", id.0),
            settings: CardSettings::from_config(&self.config),
            upload: UploadState::Idle,
            revision: 0,
        };
        self.cards.insert(id, card);
        id
    }
    /// Removes a card; the last remaining card cannot be removed.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        if self.cards.len() <= 1 {
            return false;
        }
        self.cards.remove(&id).is_some()
    }
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.keys().copied().collect()
    }
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn shared_mode(&self) -> bool {
        self.shared_mode
    }
    pub fn shared_upload(&self) -> &UploadState {
        &self.shared
    }
    pub fn set_shared_mode(&mut self, shared: bool) {
        if self.shared_mode == shared {
            return;
        }
        self.shared_mode = shared;
        self.revise_all();
    }
    /// Replaces a card's settings. Returns false for unknown ids or no change.
    pub fn update_settings(&mut self, id: CardId, settings: CardSettings) -> bool {
        let Some(card) = self.cards.get(&id) else {
            return false;
        };
        if card.settings == settings {
            return false;
        }
        let next = Card {
            settings,
            ..card.clone()
        }
        .revised();
        self.cards.insert(id, next);
        true
    }
    pub fn slot(&self, target: SlotTarget) -> Option<&UploadState> {
        match target {
            SlotTarget::Shared => Some(&self.shared),
            SlotTarget::Card(id) => self.cards.get(&id).map(|card| &card.upload),
        }
    }
    /// Upload state that feeds `id`, honouring shared-file mode.
    pub fn upload_for(&self, id: CardId) -> Option<&UploadState> {
        if self.shared_mode {
            return Some(&self.shared);
        }
        self.cards.get(&id).map(|card| &card.upload)
    }
    pub fn file_for(&self, id: CardId) -> Option<&LoadedFile> {
        self.upload_for(id).and_then(UploadState::current)
    }
    /// Starts an upload into `target`.
    ///
    /// Unsupported extensions are rejected on the spot and yield no command;
    /// otherwise the slot moves to `Reading` and the returned command should
    /// be sent to the loader thread.
    pub fn request_upload(&mut self, target: SlotTarget, path: PathBuf) -> Option<LoaderCommand> {
        let state = self.take_slot(target)?;
        if let Err(reason) = check_extension(&path) {
            log::warn!("upload rejected: {reason}");
            self.put_slot(target, state.reject(reason));
            return None;
        }
        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.put_slot(target, state.begin(request, path.clone()));
        Some(LoaderCommand::Read {
            target,
            request,
            path,
        })
    }
    /// Applies a loader message; stale or orphaned completions are dropped.
    pub fn apply(&mut self, message: LoaderMessage) -> bool {
        let LoaderMessage::Loaded {
            target,
            request,
            outcome,
        } = message;
        let Some(state) = self.take_slot(target) else {
            log::debug!("dropping completion for removed {target:?}");
            return false;
        };
        let (next, applied) = state.complete(request, outcome);
        if !applied {
            log::debug!("discarding stale completion {request:?} for {target:?}");
        }
        self.put_slot(target, next);
        applied
    }
    /// Derives the display frame for one card.
    pub fn frame(&self, id: CardId) -> Option<DisplayFrame> {
        let card = self.cards.get(&id)?;
        let series = self
            .file_for(id)
            .map(|file| file.series.clone())
            .unwrap_or_default();
        let request = card.settings.request(&self.config);
        Some(PitchPipeline::new(series).derive(&request))
    }
    fn take_slot(&mut self, target: SlotTarget) -> Option<UploadState> {
        match target {
            SlotTarget::Shared => Some(std::mem::take(&mut self.shared)),
            SlotTarget::Card(id) => self
                .cards
                .get_mut(&id)
                .map(|card| std::mem::take(&mut card.upload)),
        }
    }
    fn put_slot(&mut self, target: SlotTarget, state: UploadState) {
        match target {
            SlotTarget::Shared => {
                self.shared = state;
                if self.shared_mode {
                    self.revise_all();
                }
            }
            SlotTarget::Card(id) => {
                if let Some(card) = self.cards.remove(&id) {
                    let next = Card {
                        upload: state,
                        ..card
                    }
                    .revised();
                    self.cards.insert(id, next);
                }
            }
        }
    }
    fn revise_all(&mut self) {
        let cards = std::mem::take(&mut self.cards);
        self.cards = cards
            .into_iter()
            .map(|(id, card)| (id, card.revised()))
            .collect();
    }
}
