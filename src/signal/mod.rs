//! Synchronous broadcast channels used by stores to announce property changes

use super::*;

#[allow(clippy::module_inception)]
mod signal;
mod subscriber;
mod subscription;

pub use signal::Signal;
pub use subscriber::PropertySubscriber;
pub use subscription::Subscription;

use signal::SignalInner;

new_key_type! {
    pub struct SubscriberKey;
}
