pub mod dispatcher;
pub mod notifications_model;
pub mod notifications_service;
pub mod notifications_traits;
pub mod push;

pub use dispatcher::NotificationDispatcher;
pub use notifications_model::{NewNotification, Notification};
pub use notifications_service::NotificationService;
pub use notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
pub use push::{MockRealtimePush, PushRecord, RealtimePush};
