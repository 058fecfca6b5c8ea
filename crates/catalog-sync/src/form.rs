//! Form Binding
//!
//! Binds either an empty draft or an existing record to a set of field
//! values, validates them locally and reconciles the server's answer.
//!
//! Local checks only mirror the server's; a submission that passes them can
//! still come back as a validation error, which leaves the values in place
//! for correction.

use std::fmt;

use log::debug;

use crate::client::{Mutation, ResourceClient};
use crate::error::ClientError;
use crate::list::ListController;
use crate::notify::NotificationSink;
use crate::record::{RecordId, Resource};
use crate::transport::Transport;

/// A single field that failed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field values of one resource's form.
pub trait FormModel: Default + Clone + PartialEq {
    type Record: Resource;

    fn from_record(record: &Self::Record) -> Self;

    /// Builds the request body or reports every failing field.
    fn validate(&self) -> Result<<Self::Record as Resource>::Draft, Vec<FieldError>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(RecordId),
}

/// A validated draft ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<D> {
    pub mode: FormMode,
    pub draft: D,
}

impl<D> Submission<D> {
    /// POSTs a create or PATCHes an edit.
    pub async fn send<R, T>(&self, client: &ResourceClient<R, T>) -> Result<Mutation<R>, ClientError>
    where
        R: Resource<Draft = D>,
        T: Transport,
    {
        match &self.mode {
            FormMode::Create => client.create(&self.draft).await,
            FormMode::Edit(id) => client.update(id, &self.draft).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(RecordId),
    /// Blocked locally or rejected by the server; values are kept.
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct FormBinding<M> {
    values: M,
    mode: FormMode,
    submitting: bool,
}

impl<M: FormModel> FormBinding<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut M {
        &mut self.values
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resets every field to its default (create mode). An in-flight
    /// submission stays locked until its answer is applied.
    pub fn bind_draft(&mut self) {
        self.values = M::default();
        self.mode = FormMode::Create;
    }

    /// Fills the fields from an existing record (edit mode).
    pub fn bind_record(&mut self, record: &M::Record) {
        self.values = M::from_record(record);
        self.mode = FormMode::Edit(record.id().clone());
    }

    /// Validates and locks the form. Returns `None` (after notifying) when
    /// a field fails, or silently when a submission is already in flight.
    pub fn prepare_submit(
        &mut self,
        sink: &mut impl NotificationSink,
    ) -> Option<Submission<<M::Record as Resource>::Draft>> {
        if self.submitting {
            debug!("{} form already submitting", <M::Record as Resource>::PATH);
            return None;
        }
        match self.values.validate() {
            Ok(draft) => {
                self.submitting = true;
                Some(Submission {
                    mode: self.mode.clone(),
                    draft,
                })
            }
            Err(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                sink.show_errors(&messages);
                None
            }
        }
    }

    /// Applies the server's answer to a prepared submission. `sent` is the
    /// mode the submission was prepared in; the form may have been rebound
    /// since, in which case its current values are left alone. A successful
    /// create clears the fields; an edit keeps them for the caller to close.
    pub fn finish_submit(
        &mut self,
        sent: &FormMode,
        result: Result<Mutation<M::Record>, ClientError>,
        list: &mut ListController<M::Record>,
        sink: &mut impl NotificationSink,
    ) -> SubmitOutcome {
        self.submitting = false;
        if !list.apply_mutation(result, sink) {
            return SubmitOutcome::Rejected;
        }
        match sent {
            FormMode::Create => {
                if self.mode == FormMode::Create {
                    self.bind_draft();
                }
                SubmitOutcome::Created
            }
            FormMode::Edit(id) => SubmitOutcome::Updated(id.clone()),
        }
    }
}

// ========================
// Field Validators
// ========================

/// Required text, trimmed, at most `max_len` characters.
pub(crate) fn required_text(
    field: &'static str,
    label: &str,
    value: &str,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    } else if trimmed.chars().count() > max_len {
        errors.push(FieldError::new(
            field,
            format!("{}: max length is {} characters", label, max_len),
        ));
    }
    trimmed.to_string()
}

/// Required number within `min..=max`.
pub(crate) fn required_number(
    field: &'static str,
    label: &str,
    value: &str,
    min: f64,
    max: Option<f64>,
    errors: &mut Vec<FieldError>,
) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
        return 0.0;
    }
    let number = match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => {
            errors.push(FieldError::new(field, format!("{} must be a number", label)));
            return 0.0;
        }
    };
    let in_range = number >= min && max.map_or(true, |max| number <= max);
    if !in_range {
        let message = match max {
            Some(max) => format!("{} must be between {} and {}", label, min, max),
            None => format!("{} must be {} or greater", label, min),
        };
        errors.push(FieldError::new(field, message));
    }
    number
}

/// Optional non-negative whole number.
pub(crate) fn optional_count(
    field: &'static str,
    label: &str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(count) if count >= 0 => Some(count),
        _ => {
            errors.push(FieldError::new(
                field,
                format!("{} must be a whole number of 0 or more", label),
            ));
            None
        }
    }
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Renders a stored number back into an input without a trailing `.0`.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_limits() {
        let mut errors = Vec::new();
        assert_eq!(required_text("name", "Name", "  Pen ", 50, &mut errors), "Pen");
        assert!(errors.is_empty());

        required_text("name", "Name", "   ", 50, &mut errors);
        required_text("name", "Name", &"x".repeat(51), 50, &mut errors);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].message, "Name: max length is 50 characters");
    }

    #[test]
    fn test_required_number_range() {
        let mut errors = Vec::new();
        for ok in ["0", "100", "42.5"] {
            required_number("discount", "Discount", ok, 0.0, Some(100.0), &mut errors);
        }
        assert!(errors.is_empty());

        for bad in ["-1", "101", "abc", "", "NaN"] {
            required_number("discount", "Discount", bad, 0.0, Some(100.0), &mut errors);
        }
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Discount must be between 0 and 100",
                "Discount must be between 0 and 100",
                "Discount must be a number",
                "Discount is required",
                "Discount must be a number",
            ]
        );
    }

    #[test]
    fn test_optional_count() {
        let mut errors = Vec::new();
        assert_eq!(optional_count("stock", "Stock", "", &mut errors), None);
        assert_eq!(optional_count("stock", "Stock", "12", &mut errors), Some(12));
        assert_eq!(optional_count("stock", "Stock", "-3", &mut errors), None);
        assert_eq!(optional_count("stock", "Stock", "2.5", &mut errors), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.0), "150");
        assert_eq!(format_amount(9.5), "9.5");
    }
}
