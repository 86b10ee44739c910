use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_recognition::entities::{DecodedImage, FoodGuess},
};

/// Turns raw image bytes into a bitmap.
#[cfg_attr(test, mockall::automock)]
pub trait ImageDecoder: Send + Sync {
    fn decode(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<DecodedImage, CoreError>> + Send;
}

/// Recognition boundary. Guesses come back ordered by descending confidence
/// and need not sum to one.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRecognizer: Send + Sync {
    fn detect(
        &self,
        image: DecodedImage,
    ) -> impl Future<Output = Result<Vec<FoodGuess>, CoreError>> + Send;
}
