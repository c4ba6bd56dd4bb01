//! Page state machine.
//!
//! All mutable page state lives in one [`AtlasState`] value and changes only
//! through [`AtlasState::apply`]. Each render that starts receives a
//! [`RenderToken`]; a commit is accepted only while its token is still the
//! latest, so overlapping province switches always settle on the last one.

use crate::category::Category;
use crate::constants::DEFAULT_PROVINCE;
use crate::data::{Database, ProvinceRecord};
use crate::detail::{SpeciesDetail, resolve_detail};
use std::sync::Arc;

/// Generation stamp handed out when a render starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderToken(u64);

impl RenderToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Grid tile coordinates used to reopen a secondary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTarget {
    pub index: usize,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasAction {
    /// The province document finished loading.
    Loaded(Arc<Database>),
    /// The user picked a province in the selector.
    Select(String),
    /// The transition delay for a render elapsed.
    Commit(RenderToken),
    /// A grid tile was activated.
    OpenDetail(OverlayTarget),
    /// Close button, backdrop click or Escape.
    CloseDetail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasState {
    database: Arc<Database>,
    loaded: bool,
    selected: String,
    displayed: Option<String>,
    rendering: Option<String>,
    generation: u64,
    overlay: Option<SpeciesDetail>,
}

impl Default for AtlasState {
    fn default() -> Self {
        Self {
            database: Arc::new(Database::empty()),
            loaded: false,
            selected: DEFAULT_PROVINCE.to_string(),
            displayed: None,
            rendering: None,
            generation: 0,
            overlay: None,
        }
    }
}

impl AtlasState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition and return the next state.
    #[must_use]
    pub fn apply(mut self, action: AtlasAction) -> Self {
        match action {
            AtlasAction::Loaded(database) => {
                if !database.contains(&self.selected)
                    && let Some(first) = database.province_names().next()
                {
                    log::warn!(
                        "default province {} missing from data, falling back to {first}",
                        self.selected
                    );
                    self.selected = first.to_string();
                }
                self.database = database;
                self.loaded = true;
                self.begin_render();
            }
            AtlasAction::Select(province) => {
                self.selected = province;
                self.begin_render();
            }
            AtlasAction::Commit(token) => self.commit(token),
            AtlasAction::OpenDetail(target) => self.open_detail(target),
            AtlasAction::CloseDetail => self.overlay = None,
        }
        self
    }

    fn begin_render(&mut self) {
        if !self.database.contains(&self.selected) {
            log::warn!("no profile for province {}, render skipped", self.selected);
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        self.rendering = Some(self.selected.clone());
        log::debug!("render {} started for {}", self.generation, self.selected);
    }

    fn commit(&mut self, token: RenderToken) {
        if token.0 != self.generation {
            log::debug!(
                "stale render {} ignored, current is {}",
                token.0,
                self.generation
            );
            return;
        }
        if let Some(province) = self.rendering.take() {
            self.displayed = Some(province);
        }
    }

    fn open_detail(&mut self, target: OverlayTarget) {
        let Some((province, record)) = self.displayed_record() else {
            return;
        };
        let Some(entry) = record.other(target.category, target.index) else {
            log::warn!(
                "no {} entry at index {} for {province}",
                target.category,
                target.index
            );
            return;
        };
        self.overlay = Some(resolve_detail(entry, province, target.category));
    }

    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Province currently chosen in the selector.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Province whose content is on screen, with its record.
    #[must_use]
    pub fn displayed_record(&self) -> Option<(&str, &ProvinceRecord)> {
        let province = self.displayed.as_deref()?;
        self.database.get(province).map(|record| (province, record))
    }

    /// True while a render is waiting for its transition to finish.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.rendering.is_some()
    }

    /// Token of the in-flight render, if any.
    #[must_use]
    pub const fn pending_render(&self) -> Option<RenderToken> {
        if self.rendering.is_some() {
            Some(RenderToken(self.generation))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<&SpeciesDetail> {
        self.overlay.as_ref()
    }

    /// Background scrolling is suppressed while the overlay is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.overlay.is_some()
    }
}
