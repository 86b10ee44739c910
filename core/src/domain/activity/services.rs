use crate::domain::{
    activity::{entities::Activity, ports::ActivityService},
    calorie::ports::CalorieLookup,
    common::services::Service,
    food_recognition::ports::{FoodRecognizer, ImageDecoder},
    session::ports::SessionRepository,
};

impl<SR, FR, ID, CL> ActivityService for Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    fn list_activities(&self) -> Vec<Activity> {
        self.activity_catalog.as_slice().to_vec()
    }
}
