//! Inquiry Aggregate
//!
//! Single commission inquiry as the visitor builds it up: four sections of
//! field state behind a closed field-identifier enum with typed setters. The
//! serialized form of this aggregate is the contract any Transmitter
//! implementation accepts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::Quantity;

use super::options::{
    BudgetRange, InquiryType, Material, PackagingStyle, ProjectType, ShippingMethod, Timeline,
    Urgency,
};

/// Soft cap on the project description, for the presentation-layer counter
pub const MESSAGE_LIMIT: usize = 500;

/// Complete, mutable form state for one inquiry session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    // Personal information
    name: String,
    email: String,
    phone: String,
    company: String,
    website: String,

    // Inquiry details
    inquiry_type: Option<InquiryType>,
    subject: String,
    message: String,
    budget: Option<BudgetRange>,
    timeline: Option<Timeline>,
    urgency: Urgency,

    // Project specifications
    project_type: Option<ProjectType>,
    dimensions: String,
    materials: BTreeSet<Material>,
    colors: String,
    customization: String,
    quantity: Quantity,

    // Communication preferences
    newsletter: bool,
    updates: bool,
    consultation: bool,
    portfolio: bool,

    // Additional services
    shipping: Option<ShippingMethod>,
    packaging: Option<PackagingStyle>,
    warranty: bool,
    maintenance: bool,
}

impl Default for InquiryRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            website: String::new(),
            inquiry_type: None,
            subject: String::new(),
            message: String::new(),
            budget: None,
            timeline: None,
            urgency: Urgency::Normal,
            project_type: None,
            dimensions: String::new(),
            materials: BTreeSet::new(),
            colors: String::new(),
            customization: String::new(),
            quantity: Quantity::default(),
            newsletter: false,
            updates: true,
            consultation: false,
            portfolio: false,
            shipping: None,
            packaging: None,
            warranty: false,
            maintenance: false,
        }
    }
}

impl InquiryRecord {
    // =========================================================================
    // Getters (immutable access to internal state)
    // =========================================================================

    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
    pub fn phone(&self) -> &str { &self.phone }
    pub fn company(&self) -> &str { &self.company }
    pub fn website(&self) -> &str { &self.website }
    pub fn inquiry_type(&self) -> Option<InquiryType> { self.inquiry_type }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn message(&self) -> &str { &self.message }
    pub fn budget(&self) -> Option<BudgetRange> { self.budget }
    pub fn timeline(&self) -> Option<Timeline> { self.timeline }
    pub fn urgency(&self) -> Urgency { self.urgency }
    pub fn project_type(&self) -> Option<ProjectType> { self.project_type }
    pub fn dimensions(&self) -> &str { &self.dimensions }
    pub fn materials(&self) -> &BTreeSet<Material> { &self.materials }
    pub fn colors(&self) -> &str { &self.colors }
    pub fn customization(&self) -> &str { &self.customization }
    pub fn quantity(&self) -> &Quantity { &self.quantity }
    pub fn newsletter(&self) -> bool { self.newsletter }
    pub fn updates(&self) -> bool { self.updates }
    pub fn consultation(&self) -> bool { self.consultation }
    pub fn portfolio(&self) -> bool { self.portfolio }
    pub fn shipping(&self) -> Option<ShippingMethod> { self.shipping }
    pub fn packaging(&self) -> Option<PackagingStyle> { self.packaging }
    pub fn warranty(&self) -> bool { self.warranty }
    pub fn maintenance(&self) -> bool { self.maintenance }

    /// Characters left under the description soft cap
    pub fn message_remaining(&self) -> usize {
        MESSAGE_LIMIT.saturating_sub(self.message.chars().count())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Single entry point for field edits: dispatches to the typed setter
    /// for `field`, rejecting values of the wrong shape without touching
    /// anything.
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (FieldId::Name, FieldValue::Text(v)) => self.name = v,
            (FieldId::Email, FieldValue::Text(v)) => self.email = v,
            (FieldId::Phone, FieldValue::Text(v)) => self.phone = v,
            (FieldId::Company, FieldValue::Text(v)) => self.company = v,
            (FieldId::Website, FieldValue::Text(v)) => self.website = v,
            (FieldId::InquiryType, FieldValue::Inquiry(v)) => self.inquiry_type = Some(v),
            (FieldId::Subject, FieldValue::Text(v)) => self.subject = v,
            (FieldId::Message, FieldValue::Text(v)) => self.message = v,
            (FieldId::Budget, FieldValue::Budget(v)) => self.budget = Some(v),
            (FieldId::Timeline, FieldValue::Timeline(v)) => self.timeline = Some(v),
            (FieldId::Urgency, FieldValue::Urgency(v)) => self.urgency = v,
            (FieldId::ProjectType, FieldValue::Project(v)) => self.project_type = Some(v),
            (FieldId::Dimensions, FieldValue::Text(v)) => self.dimensions = v,
            (FieldId::Materials, FieldValue::Materials(v)) => self.materials = v,
            (FieldId::Colors, FieldValue::Text(v)) => self.colors = v,
            (FieldId::Customization, FieldValue::Text(v)) => self.customization = v,
            (FieldId::Quantity, FieldValue::Text(v)) => self.quantity = Quantity::new(v),
            (FieldId::Newsletter, FieldValue::Flag(v)) => self.newsletter = v,
            (FieldId::Updates, FieldValue::Flag(v)) => self.updates = v,
            (FieldId::Consultation, FieldValue::Flag(v)) => self.consultation = v,
            (FieldId::Portfolio, FieldValue::Flag(v)) => self.portfolio = v,
            (FieldId::Shipping, FieldValue::Shipping(v)) => self.shipping = Some(v),
            (FieldId::Packaging, FieldValue::Packaging(v)) => self.packaging = Some(v),
            (FieldId::Warranty, FieldValue::Flag(v)) => self.warranty = v,
            (FieldId::Maintenance, FieldValue::Flag(v)) => self.maintenance = v,
            (field, value) => {
                return Err(FieldError {
                    field,
                    kind: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Add the material if absent, remove it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle_material(&mut self, material: Material) -> bool {
        if self.materials.remove(&material) {
            false
        } else {
            self.materials.insert(material);
            true
        }
    }

    /// Revert every field to its documented default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Field identifiers
// =============================================================================

/// Closed set of editable fields; the wire name doubles as the error-map key
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Company,
    Website,
    InquiryType,
    Subject,
    Message,
    Budget,
    Timeline,
    Urgency,
    ProjectType,
    Dimensions,
    Materials,
    Colors,
    Customization,
    Quantity,
    Newsletter,
    Updates,
    Consultation,
    Portfolio,
    Shipping,
    Packaging,
    Warranty,
    Maintenance,
}

impl FieldId {
    pub const ALL: [Self; 25] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::Website,
        Self::InquiryType,
        Self::Subject,
        Self::Message,
        Self::Budget,
        Self::Timeline,
        Self::Urgency,
        Self::ProjectType,
        Self::Dimensions,
        Self::Materials,
        Self::Colors,
        Self::Customization,
        Self::Quantity,
        Self::Newsletter,
        Self::Updates,
        Self::Consultation,
        Self::Portfolio,
        Self::Shipping,
        Self::Packaging,
        Self::Warranty,
        Self::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Website => "website",
            Self::InquiryType => "inquiryType",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Urgency => "urgency",
            Self::ProjectType => "projectType",
            Self::Dimensions => "dimensions",
            Self::Materials => "materials",
            Self::Colors => "colors",
            Self::Customization => "customization",
            Self::Quantity => "quantity",
            Self::Newsletter => "newsletter",
            Self::Updates => "updates",
            Self::Consultation => "consultation",
            Self::Portfolio => "portfolio",
            Self::Shipping => "shipping",
            Self::Packaging => "packaging",
            Self::Warranty => "warranty",
            Self::Maintenance => "maintenance",
        }
    }

    /// An edit to this field retriggers the cost estimator
    pub fn affects_estimate(&self) -> bool {
        matches!(
            self,
            Self::ProjectType | Self::Quantity | Self::Materials | Self::Budget
        )
    }
}

/// Value carried by a field edit; its shape must match the target field
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Inquiry(InquiryType),
    Budget(BudgetRange),
    Timeline(Timeline),
    Urgency(Urgency),
    Project(ProjectType),
    Materials(BTreeSet<Material>),
    Shipping(ShippingMethod),
    Packaging(PackagingStyle),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Inquiry(_) => "inquiry type",
            Self::Budget(_) => "budget range",
            Self::Timeline(_) => "timeline",
            Self::Urgency(_) => "urgency",
            Self::Project(_) => "project type",
            Self::Materials(_) => "material set",
            Self::Shipping(_) => "shipping method",
            Self::Packaging(_) => "packaging style",
        }
    }
}

/// A value of the wrong shape was offered to a field
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("field {field:?} does not accept a {kind} value")]
pub struct FieldError {
    pub field: FieldId,
    pub kind: &'static str,
}
