//! Main render/view function (View in TEA pattern)
//!
//! The page is taller than the terminal. Every section is rendered into an
//! off-screen buffer at its page row, then the rows under the scroll offset
//! are copied into the viewport.


use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use catworld_app::page::{self, Placement, Section};
use catworld_app::{AppState, Focus};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only mutates the scroll bookkeeping: the viewport size and page height
/// are recorded so scroll messages clamp against what is actually on screen.
/// The width is recorded first since wrapped facts set the page height.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    state.scroll.viewport_width = areas.page.width;
    let placements = state.placements();

    state.scroll.viewport_height = areas.page.height;
    state.scroll.page_height = page::page_height(&placements);
    state.scroll.clamp();

    let offset = state.scroll.offset;
    let active = page::active_section(&placements, offset);
    frame.render_widget(widgets::NavBar::new(state.variant, active), areas.nav);

    let page_buf = render_page(state, &placements, areas.page.width);
    blit(&page_buf, offset, areas.page, frame.buffer_mut());

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

/// Render every section of the mounted variant into one tall buffer
fn render_page(state: &AppState, placements: &[Placement], width: u16) -> Buffer {
    let height = page::page_height(placements);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));

    for placement in placements {
        let area = Rect::new(0, placement.top, width, placement.height);
        render_section(state, placement.section, area, &mut buf);
    }

    buf
}

fn render_section(state: &AppState, section: Section, area: Rect, buf: &mut Buffer) {
    let variant = state.variant;
    match section {
        Section::Home => widgets::Hero::new(state.scroll.offset).render(area, buf),
        Section::Characteristics => widgets::Characteristics.render(area, buf),
        Section::Breeds => {
            if variant.has_carousel() {
                widgets::BreedCarousel::new(&state.carousel, state.carousel_animation_ticks())
                    .render(area, buf)
            } else if variant.has_breed_selector() {
                widgets::BreedSelector::new(&state.carousel).render(area, buf)
            } else {
                widgets::BreedList.render(area, buf)
            }
        }
        Section::Facts => {
            if state.fact_batch_size().is_some() {
                widgets::RemoteFacts::new(&state.facts).render(area, buf)
            } else {
                widgets::FactAccordion::new(&state.accordion, state.focus == Focus::Accordion)
                    .render(area, buf)
            }
        }
        Section::CatOfTheDay => widgets::CatOfTheDay::new(state.cat_of_the_day()).render(area, buf),
        Section::Likes => {
            if variant.has_like_meter() {
                widgets::LikeMeter::new(&state.likes).render(area, buf)
            } else {
                widgets::LikeButton::new(&state.likes).render(area, buf)
            }
        }
        Section::Footer => widgets::Footer.render(area, buf),
    }
}

/// Copy the page rows starting at `offset` into `viewport`
fn blit(page: &Buffer, offset: u16, viewport: Rect, out: &mut Buffer) {
    let width = viewport.width.min(page.area.width);
    for row in 0..viewport.height {
        let src_y = offset.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..width {
            if let Some(cell) = out.cell_mut((viewport.x + col, viewport.y + row)) {
                *cell = page[(col, src_y)].clone();
            }
        }
    }
}
