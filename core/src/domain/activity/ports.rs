use crate::domain::activity::entities::Activity;

pub trait ActivityService: Send + Sync {
    /// Catalog activities in display order.
    fn list_activities(&self) -> Vec<Activity>;
}
