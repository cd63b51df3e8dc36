// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts depend on the screen: arrows and Enter drive the
//! carousel in the gallery, Escape goes back from the detail view.

use super::{Message, Screen};
use crate::ui::{carousel, segmentation};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the tick driving the spinner and toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    let keys = match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    gallery_key(&key).map(Message::Carousel)
                }
                _ => None,
            }
        }),
        Screen::Detail => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::Segmentation(segmentation::Message::Back)),
                _ => None,
            }
        }),
    };

    let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size.height));

    Subscription::batch([keys, resize])
}

fn gallery_key(key: &Key) -> Option<carousel::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(carousel::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(carousel::Message::Next),
        Key::Named(Named::Enter) => Some(carousel::Message::Confirm),
        _ => None,
    }
}

/// Ticks only while something animates or expires.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_enter_drive_the_carousel() {
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowLeft)),
            Some(carousel::Message::Previous)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowRight)),
            Some(carousel::Message::Next)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::Enter)),
            Some(carousel::Message::Confirm)
        );
        assert_eq!(gallery_key(&Key::Named(Named::Escape)), None);
    }
}
