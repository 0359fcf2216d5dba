//! Key event handlers

use catworld_core::PageVariant;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::page::Section;
use crate::state::{AppState, Focus};

/// Map a key to a message for the mounted variant and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys first
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => return Some(Message::RequestQuit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::Char(c @ '1'..='4') => {
            return PageVariant::from_digit(c).map(Message::SwitchVariant);
        }
        _ => {}
    }

    if state.focus == Focus::Accordion {
        match key {
            InputKey::Up | InputKey::Char('k') => return Some(Message::AccordionUp),
            InputKey::Down | InputKey::Char('j') => return Some(Message::AccordionDown),
            InputKey::Enter | InputKey::Char(' ') => return Some(Message::AccordionToggle),
            _ => {}
        }
    }

    let has_breed_cycling = state.variant.has_carousel() || state.variant.has_breed_selector();

    match key {
        // Scroll
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // Nav anchors
        InputKey::Char(c) if nav_section(c).is_some() => nav_section(c).map(Message::JumpTo),

        // Carousel / selector
        InputKey::Right | InputKey::Char('l') if has_breed_cycling => Some(Message::CarouselNext),
        InputKey::Left | InputKey::Char('h') if has_breed_cycling => {
            Some(Message::CarouselPrevious)
        }

        // Facts
        InputKey::Char('f') if state.fact_batch_size().is_some() => Some(Message::RefreshFacts),

        // Likes
        InputKey::Char(' ') | InputKey::Char('L') | InputKey::Enter => Some(Message::Like),

        _ => None,
    }
}

fn nav_section(c: char) -> Option<Section> {
    Section::NAV
        .iter()
        .copied()
        .find(|s| s.nav_key() == Some(c))
}
