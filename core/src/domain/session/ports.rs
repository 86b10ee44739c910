use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::Session,
        value_objects::{
            CreateSessionInput, SelectImageInput, SelectImageResult, SetCalorieInput,
            SetWeightInput,
        },
    },
};

/// Storage for live sessions
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    /// Replaces a stored session. Fails with `NotFound` if it no longer exists.
    fn update(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Drops every session last updated at or before `cutoff` and returns how
    /// many were removed.
    fn delete_idle(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

/// Session use cases. Each call loads the session, applies one transition and
/// stores the result.
#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    fn create_session(
        &self,
        input: CreateSessionInput,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_weight(
        &self,
        input: SetWeightInput,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn set_calorie_input(
        &self,
        input: SetCalorieInput,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn recalc(&self, session_id: Uuid) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Decodes the image and runs recognition on it. Decode and recognition
    /// failures are reported in the outcome, not as errors.
    fn select_image(
        &self,
        input: SelectImageInput,
    ) -> impl Future<Output = Result<SelectImageResult, CoreError>> + Send;

    fn reset(&self, session_id: Uuid) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Evicts sessions idle for longer than the configured TTL.
    fn evict_idle_sessions(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
