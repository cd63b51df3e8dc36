// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for ambient feedback.
//!
//! Used for events that are not part of a screen's own state: a saved or
//! failed mask download, a configuration file that could not be read, a
//! language switch.
//!
//! - [`notification`]: `Notification` with severity and i18n key
//! - [`manager`]: `Manager` queuing at most three visible toasts
//! - [`toast`]: rendering in the bottom-right corner
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-download-success").with_arg("path", path));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
