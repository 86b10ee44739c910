use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    activity::entities::{Activity, ActivityCatalog},
    burn::{display_minutes, minutes_to_burn},
    calorie::ports::CalorieLookup,
    common::{entities::app_errors::CoreError, generate_timestamp},
    food_recognition::entities::{DecodedImage, FoodGuess, rank_guesses},
};

/// Minutes of one catalog activity needed to burn the current calorie figure.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WorkoutEstimate {
    pub activity: Activity,
    /// Never below one.
    pub minutes: u32,
}

impl WorkoutEstimate {
    /// One estimate per catalog activity, in catalog order.
    pub fn for_catalog(calories: f64, weight_kg: f64, catalog: &ActivityCatalog) -> Vec<Self> {
        catalog
            .iter()
            .map(|activity| WorkoutEstimate {
                activity: *activity,
                minutes: display_minutes(minutes_to_burn(calories, weight_kg, activity.met)),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Detecting,
    Ready,
}

/// What happened to one image submitted to a session.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetectionOutcome {
    Recognized {
        top_guess: Option<FoodGuess>,
        calories: Option<u32>,
    },
    DecodeFailed {
        reason: String,
    },
    RecognitionFailed {
        reason: String,
    },
}

/// Parses free-text calorie input. Only positive, finite numbers count.
pub fn parse_calories(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|calories| calories.is_finite() && *calories > 0.0)
}

/// Inputs and derived estimates of one user session.
///
/// `estimates` is either empty or holds exactly one entry per catalog activity
/// in catalog order. It is only ever replaced as a whole by [`Session::recalc`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: Uuid,
    weight_kg: f64,
    calorie_input: String,
    image: Option<DecodedImage>,
    detected: Vec<FoodGuess>,
    estimates: Vec<WorkoutEstimate>,
    is_detecting: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(weight_kg: f64) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            weight_kg,
            calorie_input: String::new(),
            image: None,
            detected: Vec::new(),
            estimates: Vec::new(),
            is_detecting: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn calorie_input(&self) -> &str {
        &self.calorie_input
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    pub fn detected(&self) -> &[FoodGuess] {
        &self.detected
    }

    pub fn estimates(&self) -> &[WorkoutEstimate] {
        &self.estimates
    }

    pub fn is_detecting(&self) -> bool {
        self.is_detecting
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_detecting {
            SessionPhase::Detecting
        } else if !self.detected.is_empty() || !self.estimates.is_empty() {
            SessionPhase::Ready
        } else {
            SessionPhase::Idle
        }
    }

    /// Stores the weight as given. Range checks belong to the caller.
    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
        self.touch();
    }

    /// Stores raw calorie text without recomputing.
    pub fn set_calorie_input(&mut self, input: impl Into<String>) {
        self.calorie_input = input.into();
        self.touch();
    }

    /// Rebuilds the estimates from the current calorie text and weight.
    ///
    /// Text that is not a positive number clears the estimates. Returns whether
    /// estimates were produced.
    pub fn recalc(&mut self, catalog: &ActivityCatalog) -> bool {
        self.estimates = match parse_calories(&self.calorie_input) {
            Some(calories) => WorkoutEstimate::for_catalog(calories, self.weight_kg, catalog),
            None => Vec::new(),
        };
        self.touch();

        !self.estimates.is_empty()
    }

    /// Drops every input except the weight and returns to idle.
    pub fn reset(&mut self) {
        self.image = None;
        self.detected.clear();
        self.calorie_input.clear();
        self.estimates.clear();
        self.is_detecting = false;
        self.touch();
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.touch();
    }

    /// Holds the decoded image and flags recognition as in flight.
    pub fn begin_detection(&mut self, image: DecodedImage) {
        self.image = Some(image);
        self.is_detecting = true;
        self.touch();
    }

    /// Stores the guesses. If the top guess has a known calorie count, the
    /// calorie input is filled with it and the estimates are rebuilt.
    pub fn apply_recognition<L>(
        &mut self,
        guesses: Vec<FoodGuess>,
        catalog: &ActivityCatalog,
        lookup: &L,
    ) -> DetectionOutcome
    where
        L: CalorieLookup + ?Sized,
    {
        self.detected = rank_guesses(guesses);
        self.touch();

        let top_guess = self.detected.first().cloned();
        let calories = top_guess
            .as_ref()
            .and_then(|guess| lookup.lookup(&guess.label));

        if let Some(kcal) = calories {
            self.calorie_input = kcal.to_string();
            self.recalc(catalog);
        }

        DetectionOutcome::Recognized {
            top_guess,
            calories,
        }
    }

    /// Ends an in-flight detection. The detecting flag is cleared whatever the
    /// recognizer returned. A failure keeps the image and the previous guesses.
    pub fn complete_detection<L>(
        &mut self,
        recognition: Result<Vec<FoodGuess>, CoreError>,
        catalog: &ActivityCatalog,
        lookup: &L,
    ) -> DetectionOutcome
    where
        L: CalorieLookup + ?Sized,
    {
        self.is_detecting = false;

        match recognition {
            Ok(guesses) => self.apply_recognition(guesses, catalog, lookup),
            Err(e) => {
                self.touch();
                DetectionOutcome::RecognitionFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
