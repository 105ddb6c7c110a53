use crate::domain::model::{ParkRecord, StateCode, NO_SELECTION};
use crate::domain::ports::ParkSource;
use std::fmt;

pub const PARK_PLACEHOLDER: &str = "Select a park";
pub const NO_PARKS_ALERT: &str = "This state has no national parks!";
pub const EMPTY_SEARCH_ALERT: &str = "Nothing typed in to search.";

/// Where the user is in the browse/search flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Idle,
    StateSelected { state: StateCode },
    ParkChosen { state: StateCode, park: String },
    Search { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    StateChanged(String),
    ParkChanged(String),
    SearchTyped(String),
    SearchClicked,
    RefreshClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkOption {
    pub label: String,
    pub value: String,
}

impl ParkOption {
    fn placeholder() -> Self {
        Self {
            label: PARK_PLACEHOLDER.to_string(),
            value: NO_SELECTION.to_string(),
        }
    }

    fn park(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// The rendered park: preview image plus caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkPanel {
    pub image: String,
    pub alt: String,
    pub caption: String,
}

/// Everything a front end needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub state_selector_visible: bool,
    pub or_separator_visible: bool,
    pub entry_prompt_visible: bool,
    pub park_dropdown_visible: bool,
    pub refresh_visible: bool,
    pub state_value: String,
    pub park_value: String,
    pub park_options: Vec<ParkOption>,
    pub search_text: String,
    pub result: Option<ParkPanel>,
    /// Decorative page background; survives refresh.
    pub background: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            state_selector_visible: true,
            or_separator_visible: true,
            entry_prompt_visible: true,
            park_dropdown_visible: false,
            refresh_visible: false,
            state_value: NO_SELECTION.to_string(),
            park_value: NO_SELECTION.to_string(),
            park_options: Vec::new(),
            search_text: String::new(),
            result: None,
            background: None,
        }
    }
}

pub fn caption_for(record: &ParkRecord, state: Option<&StateCode>) -> String {
    match state {
        Some(state) => format!(
            "{} National Park of {} was established in {}.",
            record.name, state, record.year
        ),
        None => format!(
            "{} National Park was established in {}.",
            record.name, record.year
        ),
    }
}

/// UI controller: applies [`UiEvent`]s to an explicit [`Mode`] and [`Screen`],
/// fetching from a [`ParkSource`] as needed. Events are handled one at a time,
/// so the latest event always owns the screen.
pub struct ParkBrowser<P: ParkSource> {
    source: P,
    mode: Mode,
    screen: Screen,
    alerts: Vec<String>,
}

impl<P: ParkSource> ParkBrowser<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            mode: Mode::Idle,
            screen: Screen::default(),
            alerts: Vec::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Blocking alerts raised since the last call, oldest first.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        tracing::debug!("UI event {:?} in mode {:?}", event, self.mode);
        match event {
            UiEvent::StateChanged(value) => self.on_state_change(&value).await,
            UiEvent::ParkChanged(value) => self.on_park_change(&value).await,
            UiEvent::SearchTyped(text) => self.screen.search_text = text,
            UiEvent::SearchClicked => self.on_search().await,
            UiEvent::RefreshClicked => self.on_refresh(),
        }
    }

    async fn on_state_change(&mut self, value: &str) {
        self.screen.search_text.clear();
        self.screen.state_value = value.to_string();
        self.screen.entry_prompt_visible = false;

        let Some(state) = StateCode::from_selection(value) else {
            self.screen.state_value = NO_SELECTION.to_string();
            self.screen.park_dropdown_visible = false;
            self.screen.entry_prompt_visible = true;
            self.screen.result = None;
            self.mode = Mode::Idle;
            return;
        };

        self.screen.park_dropdown_visible = true;
        self.screen.park_value = NO_SELECTION.to_string();
        self.mode = Mode::StateSelected {
            state: state.clone(),
        };

        match self.source.list_parks(&state).await {
            Ok(parks) => self.populate_parks(&parks),
            // list failures stay out of the user's way
            Err(e) => tracing::warn!("Failed to load parks for {}: {}", state, e),
        }
    }

    fn populate_parks(&mut self, parks: &[String]) {
        self.screen.result = None;
        self.screen.park_options = std::iter::once(ParkOption::placeholder())
            .chain(parks.iter().map(|p| ParkOption::park(p)))
            .collect();

        if parks.is_empty() {
            self.alert(NO_PARKS_ALERT);
        }
    }

    async fn on_park_change(&mut self, value: &str) {
        let state = match &self.mode {
            Mode::StateSelected { state } | Mode::ParkChosen { state, .. } => state.clone(),
            other => {
                tracing::debug!("Ignoring park selection outside state browsing ({:?})", other);
                return;
            }
        };

        if value.is_empty() || value == NO_SELECTION {
            self.screen.park_value = NO_SELECTION.to_string();
            self.screen.result = None;
            self.mode = Mode::StateSelected { state };
            return;
        }

        self.screen.park_value = value.to_string();
        self.mode = Mode::ParkChosen {
            state,
            park: value.to_string(),
        };
        self.show_park(value).await;
    }

    async fn on_search(&mut self) {
        self.screen.refresh_visible = true;
        self.screen.or_separator_visible = false;
        self.screen.state_selector_visible = false;
        self.screen.park_dropdown_visible = false;
        self.screen.park_value = NO_SELECTION.to_string();
        self.screen.state_value = NO_SELECTION.to_string();

        let query = self.screen.search_text.trim().to_string();
        self.mode = Mode::Search {
            query: query.clone(),
        };

        if query.is_empty() {
            self.alert(EMPTY_SEARCH_ALERT);
        } else {
            self.show_park(&query).await;
        }
    }

    fn on_refresh(&mut self) {
        self.screen.refresh_visible = false;
        self.screen.or_separator_visible = true;
        self.screen.state_selector_visible = true;
        self.screen.search_text.clear();
        self.screen.result = None;
        self.mode = Mode::Idle;
    }

    async fn show_park(&mut self, name: &str) {
        match self.source.park_info(name).await {
            Ok(record) => self.render_park(&record),
            Err(e) => {
                tracing::debug!("Park lookup for {:?} failed: {}", name, e);
                self.alert(e.to_string());
            }
        }
    }

    fn render_park(&mut self, record: &ParkRecord) {
        let state = match &self.mode {
            Mode::ParkChosen { state, .. } => Some(state),
            _ => None,
        };

        self.screen.background = Some(record.image.clone());
        self.screen.result = Some(ParkPanel {
            image: record.image.clone(),
            alt: record.alt_text(),
            caption: caption_for(record, state),
        });
    }

    fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("Alert: {}", message);
        self.alerts.push(message);
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(background) = &self.background {
            writeln!(f, "Background: {} (blurred)", background)?;
        }
        if self.state_selector_visible {
            writeln!(f, "State: {}", self.state_value)?;
        }
        if self.park_dropdown_visible {
            writeln!(f, "Parks:")?;
            for option in &self.park_options {
                let marker = if option.value == self.park_value { '>' } else { ' ' };
                writeln!(f, " {} {}", marker, option.label)?;
            }
        }
        if self.or_separator_visible && self.entry_prompt_visible {
            writeln!(f, "or search by name")?;
        }
        if !self.search_text.is_empty() || self.refresh_visible {
            writeln!(f, "Search: {}", self.search_text)?;
        }
        if let Some(panel) = &self.result {
            writeln!(f, "Image: {} [{}]", panel.image, panel.alt)?;
            writeln!(f, "{}", panel.caption)?;
        }
        if self.refresh_visible {
            writeln!(f, "[refresh]")?;
        }
        Ok(())
    }
}
