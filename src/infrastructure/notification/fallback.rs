//! Notifier that tries a second adapter when the first fails

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Sends through `primary`, retrying once through `fallback` on error
pub struct FallbackNotifier<P, F>
where
    P: Notifier,
    F: Notifier,
{
    primary: P,
    fallback: F,
}

impl<P, F> FallbackNotifier<P, F>
where
    P: Notifier,
    F: Notifier,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> Notifier for FallbackNotifier<P, F>
where
    P: Notifier,
    F: Notifier,
{
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        match self.primary.notify(title, message, icon).await {
            Ok(()) => Ok(()),
            Err(_) => self.fallback.notify(title, message, icon).await,
        }
    }
}
