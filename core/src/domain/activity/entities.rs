use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// A physical activity and its metabolic equivalent (MET).
///
/// The name doubles as the identifier, so it must be unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Activity {
    pub name: &'static str,
    pub met: f64,
}

impl Activity {
    pub const fn new(name: &'static str, met: f64) -> Self {
        Self { name, met }
    }
}

const DEFAULT_ACTIVITIES: [Activity; 6] = [
    Activity::new("Walking (brisk)", 3.5),
    Activity::new("Running (8 km/h)", 8.0),
    Activity::new("Cycling (moderate)", 6.8),
    Activity::new("Swimming", 6.0),
    Activity::new("Jump rope", 12.3),
    Activity::new("Strength (moderate)", 5.0),
];

/// Ordered, read-only list of activities. Iteration order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Result<Self, CoreError> {
        if activities.is_empty() {
            return Err(CoreError::InvalidCatalog(
                "catalog must contain at least one activity".to_string(),
            ));
        }

        for (index, activity) in activities.iter().enumerate() {
            if !(activity.met.is_finite() && activity.met > 0.0) {
                return Err(CoreError::InvalidCatalog(format!(
                    "activity '{}' has a non-positive MET",
                    activity.name
                )));
            }

            if activities[..index].iter().any(|a| a.name == activity.name) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate activity '{}'",
                    activity.name
                )));
            }
        }

        Ok(Self { activities })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self {
            activities: DEFAULT_ACTIVITIES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = ActivityCatalog::default();
        let names: Vec<&str> = catalog.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "Walking (brisk)",
                "Running (8 km/h)",
                "Cycling (moderate)",
                "Swimming",
                "Jump rope",
                "Strength (moderate)",
            ]
        );
        assert!(catalog.iter().all(|a| a.met > 0.0));
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let validated = ActivityCatalog::new(DEFAULT_ACTIVITIES.to_vec()).unwrap();
        assert_eq!(validated, ActivityCatalog::default());
    }

    #[test]
    fn test_get_by_name() {
        let catalog = ActivityCatalog::default();
        assert_eq!(catalog.get("Jump rope").map(|a| a.met), Some(12.3));
        assert!(catalog.get("Rowing").is_none());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = ActivityCatalog::new(vec![
            Activity::new("Swimming", 6.0),
            Activity::new("Swimming", 7.0),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_non_positive_met() {
        for met in [0.0, -1.0, f64::NAN] {
            let result = ActivityCatalog::new(vec![Activity::new("Yoga", met)]);
            assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
        }
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(ActivityCatalog::new(Vec::new()).is_err());
    }
}
