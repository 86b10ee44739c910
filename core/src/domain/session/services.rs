use chrono::{TimeDelta, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    calorie::ports::CalorieLookup,
    common::{entities::app_errors::CoreError, services::Service},
    food_recognition::ports::{FoodRecognizer, ImageDecoder},
    session::{
        entities::{DetectionOutcome, Session},
        ports::{SessionRepository, SessionService},
        value_objects::{
            CreateSessionInput, SelectImageInput, SelectImageResult, SetCalorieInput,
            SetWeightInput,
        },
    },
};

impl<SR, FR, ID, CL> Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    async fn load_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<SR, FR, ID, CL> SessionService for Service<SR, FR, ID, CL>
where
    SR: SessionRepository,
    FR: FoodRecognizer,
    ID: ImageDecoder,
    CL: CalorieLookup,
{
    async fn create_session(&self, input: CreateSessionInput) -> Result<Session, CoreError> {
        let weight_kg = input
            .weight_kg
            .unwrap_or(self.config.session.default_weight_kg);

        let session = self
            .session_repository
            .create(Session::new(weight_kg))
            .await?;

        info!(session_id = %session.id(), weight_kg, "session created");

        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.load_session(session_id).await
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.session_repository.delete(session_id).await?;

        info!(session_id = %session_id, "session deleted");

        Ok(())
    }

    async fn set_weight(&self, input: SetWeightInput) -> Result<Session, CoreError> {
        let mut session = self.load_session(input.session_id).await?;
        session.set_weight(input.weight_kg);

        self.session_repository.update(session).await
    }

    async fn set_calorie_input(&self, input: SetCalorieInput) -> Result<Session, CoreError> {
        let mut session = self.load_session(input.session_id).await?;
        session.set_calorie_input(input.calorie_input);

        self.session_repository.update(session).await
    }

    async fn recalc(&self, session_id: Uuid) -> Result<Session, CoreError> {
        let mut session = self.load_session(session_id).await?;

        if !session.recalc(&self.activity_catalog) {
            info!(
                session_id = %session_id,
                calorie_input = session.calorie_input(),
                "calorie input is not a positive number, estimates cleared"
            );
        }

        self.session_repository.update(session).await
    }

    async fn select_image(&self, input: SelectImageInput) -> Result<SelectImageResult, CoreError> {
        let session_id = input.session_id;
        let decoded = self.image_decoder.decode(input.image_data).await;

        let mut session = self.load_session(session_id).await?;

        let image = match decoded {
            Ok(image) => image,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "image could not be decoded");

                session.clear_image();
                let session = self.session_repository.update(session).await?;

                return Ok(SelectImageResult {
                    session,
                    outcome: DetectionOutcome::DecodeFailed {
                        reason: e.to_string(),
                    },
                });
            }
        };

        session.begin_detection(image.clone());
        self.session_repository.update(session).await?;

        // Captured as a value so the detecting flag is released on every path.
        let recognition = self.food_recognizer.detect(image).await;

        // Inputs may have changed while recognition was in flight.
        let mut session = self.load_session(session_id).await?;
        let outcome = session.complete_detection(
            recognition,
            &self.activity_catalog,
            self.calorie_lookup.as_ref(),
        );

        match &outcome {
            DetectionOutcome::Recognized {
                top_guess,
                calories,
            } => info!(
                session_id = %session_id,
                label = top_guess.as_ref().map(|g| g.label.as_str()),
                calories = *calories,
                "food recognized"
            ),
            DetectionOutcome::RecognitionFailed { reason } => {
                warn!(session_id = %session_id, reason = %reason, "food recognition failed")
            }
            DetectionOutcome::DecodeFailed { .. } => {}
        }

        let session = self.session_repository.update(session).await?;

        Ok(SelectImageResult { session, outcome })
    }

    async fn reset(&self, session_id: Uuid) -> Result<Session, CoreError> {
        let mut session = self.load_session(session_id).await?;
        session.reset();

        info!(session_id = %session_id, "session reset");

        self.session_repository.update(session).await
    }

    async fn evict_idle_sessions(&self) -> Result<usize, CoreError> {
        let Ok(ttl) = TimeDelta::from_std(self.config.session.idle_ttl) else {
            return Ok(0);
        };
        let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
            return Ok(0);
        };

        let evicted = self.session_repository.delete_idle(cutoff).await?;
        if evicted > 0 {
            info!(evicted, cutoff = %cutoff, "idle sessions evicted");
        }

        Ok(evicted)
    }
}
