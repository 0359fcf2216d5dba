//! Breed section widgets: plain list, selector, and carousel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use catworld_app::carousel::{CarouselState, SlideDirection};
use catworld_core::{BreedRecord, BREEDS};

use crate::theme::styles;

use super::truncate;

/// Columns the incoming slide starts away from its resting position
const SLIDE_COLUMNS: f64 = 8.0;

/// Every breed on one line each
pub struct BreedList;

impl Widget for BreedList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Popular Breeds", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = BREEDS
            .iter()
            .map(|record| {
                let name_width = record.name.chars().count() + 4;
                let rest = (inner.width as usize).saturating_sub(name_width);
                Line::from(vec![
                    Span::styled(" • ", styles::accent()),
                    Span::styled(record.name, styles::text_bright()),
                    Span::raw(" "),
                    Span::styled(truncate(record.description, rest), styles::text_secondary()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Name tabs for every breed with the selected record shown in full
pub struct BreedSelector<'a> {
    carousel: &'a CarouselState,
}

impl<'a> BreedSelector<'a> {
    pub fn new(carousel: &'a CarouselState) -> Self {
        Self { carousel }
    }
}

impl Widget for BreedSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Choose a Breed", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut tabs = vec![Span::raw(" ")];
        for (i, record) in BREEDS.iter().enumerate() {
            let style = if i == self.carousel.current_index() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            tabs.push(Span::styled(format!(" {} ", record.name), style));
            tabs.push(Span::raw(" "));
        }

        let mut lines = vec![Line::from(tabs), Line::raw("")];
        lines.extend(record_lines(self.carousel.current(), inner.width, 0));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// One breed at a time with a slide-in on every transition
pub struct BreedCarousel<'a> {
    carousel: &'a CarouselState,
    slide_ticks: u16,
}

impl<'a> BreedCarousel<'a> {
    /// `slide_ticks` is the configured length of the slide animation
    pub fn new(carousel: &'a CarouselState, slide_ticks: u16) -> Self {
        Self {
            carousel,
            slide_ticks,
        }
    }

    fn slide_indent(&self) -> u16 {
        let remaining = 1.0 - self.carousel.slide.progress(self.slide_ticks);
        (remaining * SLIDE_COLUMNS).round() as u16
    }
}

impl Widget for BreedCarousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Breed Carousel", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let index = self.carousel.current_index();
        let arrow = match (self.carousel.slide.is_playing(), self.carousel.direction) {
            (true, Some(SlideDirection::Forward)) => "»",
            (true, Some(SlideDirection::Backward)) => "«",
            _ => " ",
        };

        let mut header = vec![Span::styled(" ‹ ", styles::keybinding())];
        for i in 0..self.carousel.len() {
            let (dot, style) = if i == index {
                ("●", styles::accent())
            } else {
                ("○", styles::text_muted())
            };
            header.push(Span::styled(dot, style));
            header.push(Span::raw(" "));
        }
        header.push(Span::styled("› ", styles::keybinding()));
        header.push(Span::styled(
            format!("{}/{} {}", index + 1, self.carousel.len(), arrow),
            styles::text_muted(),
        ));

        let mut lines = vec![Line::from(header), Line::raw("")];
        lines.extend(record_lines(
            self.carousel.current(),
            inner.width,
            self.slide_indent(),
        ));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Name, description and image link of one breed, shifted right by `indent`
fn record_lines(record: &BreedRecord, width: u16, indent: u16) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent as usize + 1);
    let link_width = (width as usize).saturating_sub(pad.len() + 8);
    vec![
        Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(record.name, styles::text_bright()),
        ]),
        Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(record.description, styles::text_secondary()),
        ]),
        Line::from(vec![
            Span::raw(pad),
            Span::styled("Photo: ", styles::text_muted()),
            Span::styled(truncate(record.image_url, link_width), styles::link()),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_list_shows_every_breed() {
        let mut term = TestTerminal::with_size(100, 9);
        term.render_widget(BreedList, term.area());

        for record in BREEDS.iter() {
            assert!(term.buffer_contains(record.name), "missing {}", record.name);
        }
    }

    #[test]
    fn test_selector_shows_selected_record() {
        let mut carousel = CarouselState::default();
        carousel.next(1);
        carousel.next(1);

        let mut term = TestTerminal::with_size(100, 9);
        term.render_widget(BreedSelector::new(&carousel), term.area());

        assert!(term.buffer_contains(BREEDS[2].description));
        assert!(!term.buffer_contains(BREEDS[0].description));
    }

    #[test]
    fn test_carousel_shows_position_and_record() {
        let mut carousel = CarouselState::default();
        carousel.previous(1);
        carousel.slide.finish();

        let mut term = TestTerminal::with_size(100, 9);
        term.render_widget(BreedCarousel::new(&carousel, 4), term.area());

        let last = &BREEDS[BREEDS.len() - 1];
        assert!(term.buffer_contains(last.name));
        assert!(term.buffer_contains("5/5"));
    }

    #[test]
    fn test_carousel_slide_indents_incoming_record() {
        let mut carousel = CarouselState::default();
        carousel.next(4);

        let mut term = TestTerminal::with_size(100, 9);
        term.render_widget(BreedCarousel::new(&carousel, 4), term.area());
        let y = term.find_line(BREEDS[1].name).unwrap();
        let sliding_x = (0..100)
            .find(|x| term.buffer()[(*x, y)].symbol() == "P")
            .unwrap();

        carousel.slide.finish();
        let mut term = TestTerminal::with_size(100, 9);
        term.render_widget(BreedCarousel::new(&carousel, 4), term.area());
        let y = term.find_line(BREEDS[1].name).unwrap();
        let rest_x = (0..100)
            .find(|x| term.buffer()[(*x, y)].symbol() == "P")
            .unwrap();

        assert_eq!(sliding_x, rest_x + SLIDE_COLUMNS as u16);
        assert!(term.buffer_contains("2/5"));
    }
}
