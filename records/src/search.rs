//! Multi-criteria search composition for events, projects and files.
//!
//! DESIGN
//! ======
//! The backend exposes one search route per criterion. A filter turns its
//! active criteria into endpoint descriptors; the caller runs them all, then
//! [`compose`] keeps the base-list items whose id is present in every result
//! set and applies the criteria no route covers (project free text, file
//! type) locally. Base-list order is preserved.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::HashSet;

use crate::endpoints::{self, Endpoint};
use crate::error::FieldError;
use crate::forms::to_backend_datetime;
use crate::model::{Event, FileDocument, Project, Record};

/// A listing filter whose criteria are split between search routes and
/// local predicates.
pub trait Filter {
    type Item: Record + Clone;

    /// Plural noun used in the empty-result message.
    const NOUN: &'static str;

    /// Search routes for the active server-side criteria.
    fn queries(&self) -> Vec<Endpoint>;

    /// Criteria without a search route.
    fn matches_local(&self, item: &Self::Item) -> bool;

    /// Whether any criterion, server-side or local, is set.
    fn is_active(&self) -> bool;
}

/// Visible list after a filter pass plus the message to show above it.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOutcome<T> {
    pub items: Vec<T>,
    pub message: Option<String>,
}

/// Keep the items of `base` whose id appears in every one of `result_sets`.
///
/// With no result sets the base list is returned unchanged. Items without an
/// id never match a result set.
pub fn intersect_by_id<T: Record + Clone>(base: &[T], result_sets: &[Vec<T>]) -> Vec<T> {
    if result_sets.is_empty() {
        return base.to_vec();
    }
    let id_sets: Vec<HashSet<&str>> = result_sets
        .iter()
        .map(|set| set.iter().filter_map(Record::record_id).collect())
        .collect();
    base.iter()
        .filter(|item| {
            item.record_id()
                .is_some_and(|id| id_sets.iter().all(|ids| ids.contains(id)))
        })
        .cloned()
        .collect()
}

/// Combine search results with local criteria into the visible list.
///
/// `result_sets` must hold one entry per endpoint returned by
/// [`Filter::queries`]. An inactive filter restores the full base list.
pub fn compose<F: Filter>(filter: &F, base: &[F::Item], result_sets: &[Vec<F::Item>]) -> FilterOutcome<F::Item> {
    if !filter.is_active() {
        return FilterOutcome { items: base.to_vec(), message: None };
    }
    let items: Vec<F::Item> = intersect_by_id(base, result_sets)
        .into_iter()
        .filter(|item| filter.matches_local(item))
        .collect();
    let message = items
        .is_empty()
        .then(|| format!("No {} found matching your criteria.", F::NOUN));
    FilterOutcome { items, message }
}

fn active(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse the two budget inputs of a filter form.
///
/// Both empty means no budget criterion. An empty minimum counts as zero; a
/// maximum is required once a minimum is given.
///
/// # Errors
///
/// Returns a [`FieldError`] for non-numeric or non-finite input, a missing
/// maximum, or a minimum above the maximum.
pub fn parse_budget_range(min: &str, max: &str) -> Result<Option<(f64, f64)>, FieldError> {
    let (min, max) = (min.trim(), max.trim());
    if min.is_empty() && max.is_empty() {
        return Ok(None);
    }
    let lo = if min.is_empty() {
        0.0
    } else {
        min.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FieldError::new("budgetMin", "Minimum budget must be a number"))?
    };
    if max.is_empty() {
        return Err(FieldError::new("budgetMax", "Enter a maximum budget"));
    }
    let hi = max
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::new("budgetMax", "Maximum budget must be a number"))?;
    if lo > hi {
        return Err(FieldError::new("budgetMin", "Minimum budget exceeds maximum"));
    }
    Ok(Some((lo, hi)))
}

fn date_queries(
    start_after: &str,
    end_before: &str,
    range: fn(&str, &str) -> Endpoint,
    after: fn(&str) -> Endpoint,
    before: fn(&str) -> Endpoint,
) -> Option<Endpoint> {
    match (active(start_after), active(end_before)) {
        (Some(start), Some(end)) => Some(range(&to_backend_datetime(start), &to_backend_datetime(end))),
        (Some(start), None) => Some(after(&to_backend_datetime(start))),
        (None, Some(end)) => Some(before(&to_backend_datetime(end))),
        (None, None) => None,
    }
}

/// Criteria of the events listing. Every criterion has a search route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilter {
    pub name: String,
    pub location: String,
    pub status: String,
    pub budget: Option<(f64, f64)>,
    /// `YYYY-MM-DD`.
    pub start_after: String,
    /// `YYYY-MM-DD`.
    pub end_before: String,
}

impl Filter for EventFilter {
    type Item = Event;
    const NOUN: &'static str = "events";

    fn queries(&self) -> Vec<Endpoint> {
        let mut out = Vec::new();
        if let Some(name) = active(&self.name) {
            out.push(endpoints::events::search_name(name));
        }
        if let Some(location) = active(&self.location) {
            out.push(endpoints::events::search_location(location));
        }
        if let Some(status) = active(&self.status) {
            out.push(endpoints::events::search_status(status));
        }
        if let Some((min, max)) = self.budget {
            out.push(endpoints::events::search_budget(min, max));
        }
        out.extend(date_queries(
            &self.start_after,
            &self.end_before,
            endpoints::events::search_date_range,
            endpoints::events::search_start_after,
            endpoints::events::search_end_before,
        ));
        out
    }

    fn matches_local(&self, _item: &Event) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        !self.queries().is_empty()
    }
}

/// Criteria of the projects listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFilter {
    /// Free text matched locally against name, description and status.
    pub text: String,
    pub status: String,
    pub budget: Option<(f64, f64)>,
    pub start_after: String,
    pub end_before: String,
}

impl Filter for ProjectFilter {
    type Item = Project;
    const NOUN: &'static str = "projects";

    fn queries(&self) -> Vec<Endpoint> {
        let mut out = Vec::new();
        if let Some(status) = active(&self.status) {
            out.push(endpoints::projects::search_status(status));
        }
        if let Some((min, max)) = self.budget {
            out.push(endpoints::projects::search_budget(min, max));
        }
        out.extend(date_queries(
            &self.start_after,
            &self.end_before,
            endpoints::projects::search_date_range,
            endpoints::projects::search_start_after,
            endpoints::projects::search_end_before,
        ));
        out
    }

    fn matches_local(&self, item: &Project) -> bool {
        let Some(text) = active(&self.text) else {
            return true;
        };
        contains_ci(&item.project_name, text) || contains_ci(&item.description, text) || contains_ci(&item.status, text)
    }

    fn is_active(&self) -> bool {
        active(&self.text).is_some() || !self.queries().is_empty()
    }
}

/// Criteria of the file library listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileFilter {
    pub title: String,
    pub keyword: String,
    pub author: String,
    /// Matched locally, case-insensitively, against `fileType`.
    pub file_type: String,
    /// Publication date lower bound, `YYYY-MM-DD`.
    pub date_after: String,
    /// Publication date upper bound, `YYYY-MM-DD`.
    pub date_before: String,
}

impl Filter for FileFilter {
    type Item = FileDocument;
    const NOUN: &'static str = "files";

    fn queries(&self) -> Vec<Endpoint> {
        let mut out = Vec::new();
        if let Some(title) = active(&self.title) {
            out.push(endpoints::files::search_title(title));
        }
        if let Some(keyword) = active(&self.keyword) {
            out.push(endpoints::files::search_keyword(keyword));
        }
        if let Some(author) = active(&self.author) {
            out.push(endpoints::files::search_author(author));
        }
        if let Some(date) = active(&self.date_after) {
            out.push(endpoints::files::search_date_after(date));
        }
        if let Some(date) = active(&self.date_before) {
            out.push(endpoints::files::search_date_before(date));
        }
        out
    }

    fn matches_local(&self, item: &FileDocument) -> bool {
        let Some(wanted) = active(&self.file_type) else {
            return true;
        };
        item.file_type
            .as_deref()
            .is_some_and(|actual| actual.eq_ignore_ascii_case(wanted))
    }

    fn is_active(&self) -> bool {
        active(&self.file_type).is_some() || !self.queries().is_empty()
    }
}
