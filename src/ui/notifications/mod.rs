// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for picker and share outcomes.
//!
//! Success and info toasts fade after a few seconds, warnings a little later,
//! errors stay until dismissed. At most three are shown; the rest wait in a
//! queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-share-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
