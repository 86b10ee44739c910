use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_recognition::{
        entities::{DecodedImage, FoodGuess},
        ports::FoodRecognizer,
    },
};

/// Stand-in recognizer. Ignores the pixels and always answers with the same
/// three guesses.
#[derive(Debug, Clone, Default)]
pub struct StubFoodRecognizer;

impl StubFoodRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl FoodRecognizer for StubFoodRecognizer {
    async fn detect(&self, image: DecodedImage) -> Result<Vec<FoodGuess>, CoreError> {
        debug!(
            width = image.width,
            height = image.height,
            "stub recognizer returning fixed guesses"
        );

        Ok(vec![
            FoodGuess::new("pizza", 0.78),
            FoodGuess::new("burger", 0.14),
            FoodGuess::new("pasta", 0.08),
        ])
    }
}
