use tracing::info;

use crate::{
    domain::{
        activity::entities::ActivityCatalog,
        common::{Eat2BeatConfig, services::Service},
    },
    infrastructure::{
        calorie::StaticCalorieTable, decoding::RasterImageDecoder,
        recognition::StubFoodRecognizer, session::InMemorySessionRepository,
    },
};

pub type Eat2BeatService = Service<
    InMemorySessionRepository,
    StubFoodRecognizer,
    RasterImageDecoder,
    StaticCalorieTable,
>;

/// Wires the default adapters into a ready-to-use service.
pub fn create_service(config: Eat2BeatConfig) -> Eat2BeatService {
    let catalog = ActivityCatalog::default();

    info!(
        activities = catalog.len(),
        default_weight_kg = config.session.default_weight_kg,
        "creating eat2beat service"
    );

    Service::new(
        InMemorySessionRepository::new(),
        StubFoodRecognizer::new(),
        RasterImageDecoder::new(),
        StaticCalorieTable::new(),
        catalog,
        config,
    )
}
