use tracing::debug;

use crate::domain::{
    calorie::{
        entities::CalorieEntry,
        ports::{CalorieLookup, CalorieService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food_recognition::ports::{FoodRecognizer, ImageDecoder},
    session::ports::SessionRepository,
};

impl<SR, FR, ID, CL> CalorieService for Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    fn lookup_calories(&self, label: &str) -> Result<CalorieEntry, CoreError> {
        match self.calorie_lookup.lookup(label) {
            Some(calories) => Ok(CalorieEntry::new(label.trim().to_lowercase(), calories)),
            None => {
                debug!(label, "no calorie estimate for label");
                Err(CoreError::NotFound)
            }
        }
    }

    fn list_calories(&self) -> Vec<CalorieEntry> {
        self.calorie_lookup.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::create_service,
        domain::{activity::ports::ActivityService, common::Eat2BeatConfig},
    };

    #[test]
    fn test_lookup_calories_normalizes_label() {
        let service = create_service(Eat2BeatConfig::default());

        assert_eq!(
            service.lookup_calories("Pizza").unwrap(),
            CalorieEntry::new("pizza", 285)
        );
        assert_eq!(
            service.lookup_calories("unknown-food").unwrap_err(),
            CoreError::NotFound
        );
    }

    #[test]
    fn test_list_calories_and_activities() {
        let service = create_service(Eat2BeatConfig::default());

        assert_eq!(service.list_calories().len(), 7);
        assert_eq!(service.list_activities().len(), 6);
        assert_eq!(service.list_activities()[1].name, "Running (8 km/h)");
    }
}
