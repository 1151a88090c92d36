pub mod about;
pub mod contact;
pub mod hobbies;
pub mod home;
pub mod portfolio;

use ratatui::{Frame, layout::Rect};

use crate::{
    app::state::{AppState, Page},
    ui::{theme::Theme, widgets::Glyphs},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    match state.page {
        Page::Home => home::render(frame, area, state, theme, glyphs),
        Page::About => about::render(frame, area, state, theme, glyphs),
        Page::Portfolio => portfolio::render(frame, area, state, theme, glyphs),
        Page::Hobbies => hobbies::render(frame, area, state, theme, glyphs),
        Page::Contact => contact::render(frame, area, state, theme, glyphs),
    }
}
