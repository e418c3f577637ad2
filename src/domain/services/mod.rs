//! Domain services module
//!
//! Pure derivations over the inquiry record: indicative cost estimation and
//! cross-field validation. Both are stateless; identical inputs always give
//! identical outputs.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::aggregates::{FieldId, InquiryRecord, ProjectType};
use crate::domain::value_objects::{Email, Money};

/// Minimum project-description length before an inquiry may be submitted
pub const MIN_MESSAGE_CHARS: usize = 20;

/// Mapping from field to human-readable problem; absence means valid
pub type ValidationErrors = BTreeMap<FieldId, String>;

// =============================================================================
// Cost estimation
// =============================================================================

/// Indicative price derived from the project attributes. Only the point
/// estimate is stored; the displayed upper bound is computed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EstimatedCost {
    point: Money,
}

impl EstimatedCost {
    pub fn new(point: Money) -> Self {
        Self { point }
    }

    pub fn point(&self) -> Money {
        self.point
    }

    /// Upper end of the displayed range: point estimate times 1.5
    pub fn high(&self) -> Money {
        self.point.multiply(Decimal::new(15, 1))
    }
}

impl fmt::Display for EstimatedCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.point, self.high())
    }
}

/// Cost estimation domain service
pub struct CostEstimator;

impl CostEstimator {
    /// Derive the indicative price range for the current record.
    ///
    /// Absent until a craft type is chosen and a quantity is typed.
    /// Unparseable quantity text never blocks estimation; it is quoted as a
    /// single unit.
    pub fn estimate(record: &InquiryRecord) -> Option<EstimatedCost> {
        let project = record.project_type()?;
        if record.quantity().is_blank() {
            return None;
        }

        let base = Decimal::from(Self::base_cost(project));
        let multiplier = Decimal::ONE + Decimal::new(2, 1) * Decimal::from(record.materials().len() as u64);
        let units = Decimal::from(record.quantity().units());

        let point = Money::new(base * multiplier * units).round_to_unit();
        Some(EstimatedCost::new(point))
    }

    /// Base cost per craft type; uncatalogued crafts quote at the standard
    /// base rather than erroring
    fn base_cost(project: ProjectType) -> u32 {
        match project {
            ProjectType::Pottery => 50,
            ProjectType::Jewelry => 100,
            ProjectType::Textile => 75,
            ProjectType::Woodwork => 150,
            ProjectType::Metalwork => 200,
            _ => 100,
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Cross-field validation domain service
pub struct InquiryValidator;

impl InquiryValidator {
    /// Validate the current record. Submission is permitted only when the
    /// returned map is empty.
    pub fn validate(record: &InquiryRecord) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if record.name().trim().is_empty() {
            errors.insert(FieldId::Name, "Name is required".to_string());
        }

        let email = record.email().trim();
        if email.is_empty() {
            errors.insert(FieldId::Email, "Email is required".to_string());
        } else if Email::new(email).is_err() {
            errors.insert(FieldId::Email, "Please enter a valid email".to_string());
        }

        if record.subject().trim().is_empty() {
            errors.insert(FieldId::Subject, "Subject is required".to_string());
        }

        // Empty and too-short are mutually exclusive: an untouched message
        // only reports the required error.
        if record.message().trim().is_empty() {
            errors.insert(FieldId::Message, "Message is required".to_string());
        } else if record.message().chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(
                FieldId::Message,
                "Please provide more details (at least 20 characters)".to_string(),
            );
        }

        errors
    }
}
