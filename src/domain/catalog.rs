//! Presentation catalogs
//!
//! Static descriptions of the form's structure for a rendering layer: the
//! fixed material checklist, the four sections with their field groupings,
//! and the option lists behind every choice field. Choice-backed fields
//! carry an option collection; free-text and flag fields carry none, made
//! explicit by the `Option` rather than inferred from field shape.

use crate::domain::aggregates::{
    BudgetRange, FieldId, InquiryType, Material, PackagingStyle, ProjectType, ShippingMethod,
    Tab, Timeline, Urgency,
};

/// The studio's fixed material checklist, in display order
pub const MATERIAL_CATALOG: [Material; 12] = [
    Material::Clay,
    Material::Wood,
    Material::Metal,
    Material::Glass,
    Material::Fabric,
    Material::Leather,
    Material::Stone,
    Material::Ceramic,
    Material::Silver,
    Material::Gold,
    Material::Bronze,
    Material::Wool,
];

/// One selectable option of a choice field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A form section: one tab and the fields it presents
#[derive(Clone, Copy, Debug)]
pub struct SectionItem {
    pub tab: Tab,
    pub title: &'static str,
    pub fields: &'static [FieldId],
}

/// The four form sections, in tab order
pub const SECTIONS: [SectionItem; 4] = [
    SectionItem {
        tab: Tab::General,
        title: "General",
        fields: &[
            FieldId::Name,
            FieldId::Email,
            FieldId::Phone,
            FieldId::Company,
            FieldId::Website,
            FieldId::InquiryType,
            FieldId::Urgency,
            FieldId::Subject,
            FieldId::Message,
        ],
    },
    SectionItem {
        tab: Tab::Project,
        title: "Project",
        fields: &[
            FieldId::ProjectType,
            FieldId::Quantity,
            FieldId::Dimensions,
            FieldId::Materials,
            FieldId::Colors,
            FieldId::Budget,
            FieldId::Timeline,
            FieldId::Customization,
        ],
    },
    SectionItem {
        tab: Tab::Preferences,
        title: "Preferences",
        fields: &[
            FieldId::Updates,
            FieldId::Newsletter,
            FieldId::Consultation,
            FieldId::Portfolio,
        ],
    },
    SectionItem {
        tab: Tab::Services,
        title: "Services",
        fields: &[
            FieldId::Shipping,
            FieldId::Packaging,
            FieldId::Warranty,
            FieldId::Maintenance,
        ],
    },
];

/// Option list for a choice-backed field; `None` for free-text and flag
/// fields, which have no extra content to unfold
pub fn field_options(field: FieldId) -> Option<Vec<ChoiceOption>> {
    match field {
        FieldId::InquiryType => Some(
            InquiryType::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::Budget => Some(
            BudgetRange::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::Timeline => Some(
            Timeline::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::Urgency => Some(
            Urgency::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::ProjectType => Some(
            ProjectType::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::Materials => Some(
            MATERIAL_CATALOG
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.as_str() })
                .collect(),
        ),
        FieldId::Shipping => Some(
            ShippingMethod::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        FieldId::Packaging => Some(
            PackagingStyle::ALL
                .iter()
                .map(|v| ChoiceOption { value: v.as_str(), label: v.label() })
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_has_twelve_distinct_materials() {
        let distinct: BTreeSet<_> = MATERIAL_CATALOG.iter().collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn test_sections_cover_every_field_once() {
        let mut seen = BTreeSet::new();
        for section in &SECTIONS {
            for field in section.fields {
                assert!(seen.insert(*field), "{} listed twice", field.as_str());
            }
        }
        assert_eq!(seen.len(), FieldId::ALL.len());
    }

    #[test]
    fn test_choice_fields_have_options() {
        assert_eq!(field_options(FieldId::Urgency).unwrap().len(), 4);
        assert_eq!(field_options(FieldId::Materials).unwrap().len(), 12);
        assert!(field_options(FieldId::Name).is_none());
        assert!(field_options(FieldId::Warranty).is_none());
    }
}
