use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ranked answer from a recognizer. Not guaranteed to be accurate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodGuess {
    pub label: String,
    /// Within `0.0..=1.0` when built through [`FoodGuess::new`] or ranked by
    /// [`rank_guesses`].
    pub confidence: f64,
}

impl FoodGuess {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };

        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Stable sort by descending confidence; ties keep recognizer order.
///
/// Confidences are clamped again first, since adapters may build guesses
/// directly. NaN counts as zero.
pub fn rank_guesses(guesses: Vec<FoodGuess>) -> Vec<FoodGuess> {
    let mut guesses: Vec<FoodGuess> = guesses
        .into_iter()
        .map(|guess| FoodGuess::new(guess.label, guess.confidence))
        .collect();

    guesses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    guesses
}

/// Decoded bitmap, 8-bit RGB, row-major.
#[derive(Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb8: Arc<[u8]>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, rgb8: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgb8: rgb8.into(),
        }
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgb8.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(FoodGuess::new("pizza", 1.7).confidence, 1.0);
        assert_eq!(FoodGuess::new("pizza", -0.2).confidence, 0.0);
        assert_eq!(FoodGuess::new("pizza", f64::NAN).confidence, 0.0);
        assert_eq!(FoodGuess::new("pizza", 0.78).confidence, 0.78);
    }

    #[test]
    fn test_rank_guesses_descending_and_stable() {
        let ranked = rank_guesses(vec![
            FoodGuess::new("pasta", 0.08),
            FoodGuess::new("pizza", 0.78),
            FoodGuess::new("salad", 0.14),
            FoodGuess::new("burger", 0.14),
        ]);
        let labels: Vec<&str> = ranked.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["pizza", "salad", "burger", "pasta"]);
    }

    #[test]
    fn test_rank_guesses_sanitizes_unclamped_confidence() {
        let ranked = rank_guesses(vec![
            FoodGuess::new("burger", 0.9),
            FoodGuess {
                label: "pizza".to_string(),
                confidence: f64::NAN,
            },
            FoodGuess {
                label: "donut".to_string(),
                confidence: 3.5,
            },
        ]);

        let labels: Vec<&str> = ranked.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["donut", "burger", "pizza"]);
        assert_eq!(ranked[0].confidence, 1.0);
        assert_eq!(ranked[2].confidence, 0.0);
    }
}
