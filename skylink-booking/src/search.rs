use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use skylink_shared::Key;
use uuid::Uuid;

use crate::form::BookingForm;
use crate::models::{Category, Criteria, FieldUpdate, TravelOptions};
use crate::{BookingError, BookingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Idle,
    Searching,
}

/// Payload of a submitted search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub id: Uuid,
    pub criteria: Criteria,
    pub options: TravelOptions,
    pub submitted_at: DateTime<Utc>,
}

impl SearchRequest {
    pub fn category(&self) -> Category {
        self.criteria.category()
    }
}

/// Booking widget: the form, the search status machine and the
/// "more options" toggle.
///
/// Status runs `Idle → Searching → Idle`. The caller arms the search delay
/// when [`BookingPanel::submit`] succeeds and calls
/// [`BookingPanel::complete_search`] when it elapses.
#[derive(Debug, Clone)]
pub struct BookingPanel {
    form: BookingForm,
    status: SearchStatus,
    in_flight: Option<SearchRequest>,
    expanded: bool,
}

impl BookingPanel {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: BookingForm::new(today),
            status: SearchStatus::Idle,
            in_flight: None,
            expanded: false,
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn in_flight(&self) -> Option<&SearchRequest> {
        self.in_flight.as_ref()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn select_category(&mut self, category: Category) {
        self.form.select_category(category);
    }

    /// Arrow keys on the tab strip cycle through the tabs.
    pub fn on_tab_key(&mut self, key: Key) {
        let current = self.form.category();
        match key {
            Key::ArrowRight => self.form.select_category(current.next()),
            Key::ArrowLeft => self.form.select_category(current.previous()),
            _ => {}
        }
    }

    pub fn set_field(&mut self, update: FieldUpdate) -> BookingResult<()> {
        self.form.set_field(update)
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.form.is_submit_enabled()
    }

    /// Whether the search button accepts clicks right now
    pub fn can_submit(&self) -> bool {
        self.status == SearchStatus::Idle && self.is_submit_enabled()
    }

    pub fn toggle_options(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn submit(&mut self) -> BookingResult<SearchRequest> {
        if self.status == SearchStatus::Searching {
            return Err(BookingError::AlreadySearching);
        }
        if !self.form.is_submit_enabled() {
            return Err(BookingError::SubmitDisabled(self.form.category()));
        }

        let request = SearchRequest {
            id: Uuid::new_v4(),
            criteria: self.form.criteria(),
            options: self.form.options(),
            submitted_at: Utc::now(),
        };

        tracing::info!(search_id = %request.id, category = ?request.category(), "search started");
        self.status = SearchStatus::Searching;
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// The simulated search delay has elapsed.
    pub fn complete_search(&mut self) -> BookingResult<SearchRequest> {
        let request = self.in_flight.take().ok_or(BookingError::NotSearching)?;
        self.status = SearchStatus::Idle;

        match serde_json::to_string(&request) {
            Ok(payload) => tracing::info!(search_id = %request.id, %payload, "search finished"),
            Err(e) => tracing::warn!(
                search_id = %request.id,
                "search finished, payload not serializable: {}",
                e
            ),
        }
        Ok(request)
    }

    pub fn button_label(&self) -> String {
        match self.status {
            SearchStatus::Searching => "Searching...".to_string(),
            SearchStatus::Idle => format!("Search {}", self.form.category().label()),
        }
    }

    pub fn view(&self) -> BookingView {
        BookingView {
            tabs: Category::ALL
                .iter()
                .map(|c| TabView {
                    category: *c,
                    label: c.label(),
                    selected: *c == self.form.category(),
                })
                .collect(),
            criteria: self.form.criteria(),
            options: self.form.options(),
            min_return_date: self.form.min_return_date(),
            min_check_out: self.form.min_check_out(),
            min_dropoff_date: self.form.min_dropoff_date(),
            status: self.status,
            submit_enabled: self.can_submit(),
            button_label: self.button_label(),
            options_expanded: self.expanded,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub category: Category,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub tabs: Vec<TabView>,
    pub criteria: Criteria,
    pub options: TravelOptions,
    pub min_return_date: NaiveDate,
    pub min_check_out: NaiveDate,
    pub min_dropoff_date: NaiveDate,
    pub status: SearchStatus,
    pub submit_enabled: bool,
    pub button_label: String,
    pub options_expanded: bool,
}
