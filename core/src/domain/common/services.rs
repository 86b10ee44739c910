use std::sync::Arc;

use crate::domain::{
    activity::entities::ActivityCatalog, calorie::ports::CalorieLookup,
    common::Eat2BeatConfig, food_recognition::ports::{FoodRecognizer, ImageDecoder},
    session::ports::SessionRepository,
};

/// Use-case entry point shared by every domain. Each domain implements its
/// service trait for this struct in its own `services` module.
pub struct Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    pub(crate) session_repository: Arc<SR>,
    pub(crate) food_recognizer: Arc<FR>,
    pub(crate) image_decoder: Arc<ID>,
    pub(crate) calorie_lookup: Arc<CL>,
    pub(crate) activity_catalog: Arc<ActivityCatalog>,
    pub(crate) config: Eat2BeatConfig,
}

impl<SR, FR, ID, CL> Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    pub fn new(
        session_repository: SR,
        food_recognizer: FR,
        image_decoder: ID,
        calorie_lookup: CL,
        activity_catalog: ActivityCatalog,
        config: Eat2BeatConfig,
    ) -> Self {
        Self {
            session_repository: Arc::new(session_repository),
            food_recognizer: Arc::new(food_recognizer),
            image_decoder: Arc::new(image_decoder),
            calorie_lookup: Arc::new(calorie_lookup),
            activity_catalog: Arc::new(activity_catalog),
            config,
        }
    }
}

impl<SR, FR, ID, CL> Clone for Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    fn clone(&self) -> Self {
        Self {
            session_repository: Arc::clone(&self.session_repository),
            food_recognizer: Arc::clone(&self.food_recognizer),
            image_decoder: Arc::clone(&self.image_decoder),
            calorie_lookup: Arc::clone(&self.calorie_lookup),
            activity_catalog: Arc::clone(&self.activity_catalog),
            config: self.config.clone(),
        }
    }
}
