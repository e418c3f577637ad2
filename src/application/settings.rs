//! Intake settings
//!
//! Copy and contact details woven into submission feedback, so deployments
//! can rebrand without touching the store.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntakeSettings {
    /// Fallback contact address quoted when transmission fails
    pub contact_email: String,
    /// Response window promised in the success notification, in hours
    pub response_hours: u32,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            contact_email: "hello@artisancraft.com".to_string(),
            response_hours: 24,
        }
    }
}
