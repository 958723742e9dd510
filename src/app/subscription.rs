// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to messages: keyboard shortcuts become actions, a
//! dropped file is opened, and close requests go through the quit action so
//! unsaved changes can be confirmed.

use super::action;
use super::Message;
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match &event {
        Event::Window(window::Event::CloseRequested) => Some(Message::WindowCloseRequested),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path.clone())),
        // Keys typed into a dialog input stay there.
        Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => {
                action::from_keyboard_event(keyboard_event).map(Message::Action)
            }
            event::Status::Captured => None,
        },
        _ => None,
    }
}
