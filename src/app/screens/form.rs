//! Form screen composition
//!
//! One row per field (label + control) bound to the screen's form state,
//! followed by the submit button and the footer link. Rows hold no values
//! of their own: every draw reads the form, every edit writes to it.

use crate::{
    app::state::NavigationAction,
    form::{Edit, FieldKind, FieldValue, FormSnapshot, FormState, Intents, Screen},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Static text of a screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenCopy<Field: 'static> {
    pub title: &'static str,
    pub label: fn(Field) -> &'static str,
    pub submit: &'static str,
    pub link: &'static str,
    /// Screen the footer link asks to navigate to
    pub link_target: Screen,
    pub shows_logo: bool,
}

/// A focusable row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<Field> {
    Field(Field),
    Submit,
    Link,
}

/// Something drawn in the scrolling body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Logo,
    Title,
    /// Index into the screen's rows
    Row(usize),
}

/// First item to draw so that `focused` fits in `available` lines.
/// Keeps `top` when the focused item is already fully visible.
fn scroll_to_fit(top: usize, heights: &[u16], focused: usize, available: u16) -> usize {
    if focused < top {
        return focused;
    }
    let mut top = top;
    while top < focused && heights[top..=focused].iter().sum::<u16>() > available {
        top += 1;
    }
    top
}

/// A screen built from a form state container
pub struct FormScreen<F: FormState> {
    form: F,
    intents: Intents,
    copy: ScreenCopy<F::Field>,
    rows: Vec<Row<F::Field>>,
    focused: usize,
    /// First body item drawn; moves so the focused row stays visible
    scroll: usize,
    mask_char: char,
    logo: Option<PathBuf>,
}

impl<F: FormState> FormScreen<F> {
    /// Mount a screen with fresh form state
    pub fn new(copy: ScreenCopy<F::Field>, intents: Intents) -> Self {
        let rows = F::fields()
            .iter()
            .map(|&field| Row::Field(field))
            .chain([Row::Submit, Row::Link])
            .collect();

        Self {
            form: F::default(),
            intents,
            copy,
            rows,
            focused: 0,
            scroll: 0,
            mask_char: '•',
            logo: None,
        }
    }

    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Logo asset reference, shown only on screens with a logo slot
    pub fn with_logo(mut self, logo: Option<PathBuf>) -> Self {
        self.logo = logo;
        self
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Current values of every field
    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    pub fn rows(&self) -> &[Row<F::Field>] {
        &self.rows
    }

    pub fn focused_row(&self) -> Row<F::Field> {
        self.rows[self.focused]
    }

    /// Move focus to `row`; returns false if the screen has no such row
    pub fn focus(&mut self, row: Row<F::Field>) -> bool {
        match self.rows.iter().position(|r| *r == row) {
            Some(index) => {
                self.focused = index;
                true
            }
            None => false,
        }
    }

    /// Move focus down, wrapping to the first row
    pub fn focus_next(&mut self) {
        if self.focused < self.rows.len() - 1 {
            self.focused += 1;
        } else {
            self.focused = 0;
        }
    }

    /// Move focus up, wrapping to the last row
    pub fn focus_previous(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        } else {
            self.focused = self.rows.len() - 1;
        }
    }

    /// Route one input action to the focused row
    pub fn handle_action(&mut self, action: NavigationAction) {
        let row = self.focused_row();
        let text_field = match row {
            Row::Field(field) if !F::kind(field).is_checkbox() => Some(field),
            _ => None,
        };

        match action {
            NavigationAction::Next => self.focus_next(),
            NavigationAction::Previous => self.focus_previous(),
            NavigationAction::Activate if text_field.is_some() => self.focus_next(),
            NavigationAction::Activate | NavigationAction::Input(' ') if text_field.is_none() => {
                self.press()
            }
            NavigationAction::Input(c) => {
                if let Some(field) = text_field {
                    self.edit_text(field, |text| {
                        let mut edited = text.to_string();
                        edited.push(c);
                        Some(edited)
                    });
                }
            }
            NavigationAction::Erase => {
                if let Some(field) = text_field {
                    self.edit_text(field, |text| {
                        let mut edited = text.to_string();
                        edited.pop().map(|_| edited)
                    });
                }
            }
            NavigationAction::Clear => {
                if let Some(field) = text_field {
                    self.edit_text(field, |_| Some(String::new()));
                }
            }
            _ => {}
        }
    }

    /// Press the focused checkbox, button or link
    pub fn press(&mut self) {
        match self.focused_row() {
            Row::Field(field) => {
                if F::kind(field).is_checkbox() {
                    debug!(field = F::name(field), "checkbox toggled");
                    self.form.apply(field, Edit::Toggle);
                }
            }
            Row::Submit => {
                let snapshot = self.form.snapshot();
                self.intents.submit(&snapshot);
            }
            Row::Link => self.intents.navigate(self.copy.link_target),
        }
    }

    fn edit_text(&mut self, field: F::Field, edit: impl FnOnce(&str) -> Option<String>) {
        let FieldValue::Text(current) = self.form.value(field) else {
            return;
        };
        if let Some(edited) = edit(&current) {
            debug!(field = F::name(field), "field edited");
            self.form.apply(field, Edit::Replace(edited));
        }
    }

    /// Text shown in a text control: the stored value, or one mask
    /// character per stored character
    pub fn display_text(&self, field: F::Field) -> String {
        let value = self.form.value(field);
        let text = value.as_text().unwrap_or_default();
        match F::kind(field) {
            FieldKind::Text { masked: true, .. } => {
                std::iter::repeat(self.mask_char).take(text.chars().count()).collect()
            }
            _ => text.to_string(),
        }
    }

    /// Render the screen
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.size();
        trace!(width = area.width, height = area.height, "render");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(0),    // Scrolling body
                Constraint::Length(3), // Help text
            ])
            .split(area);

        self.render_body(f, chunks[0]);
        self.render_help(f, chunks[1]);
    }

    /// Logo, title and rows, scrolled so the focused row is fully visible
    fn render_body(&mut self, f: &mut Frame, area: Rect) {
        let mut items = Vec::new();
        if self.copy.shows_logo {
            items.push(Item::Logo);
        }
        items.push(Item::Title);
        let first_row = items.len();
        items.extend((0..self.rows.len()).map(Item::Row));

        let heights: Vec<u16> = items.iter().map(|item| self.item_height(*item)).collect();
        self.scroll = scroll_to_fit(self.scroll, &heights, first_row + self.focused, area.height);
        // The header comes back into view together with the first row
        if self.focused == 0 && heights[..=first_row].iter().sum::<u16>() <= area.height {
            self.scroll = 0;
        }

        let mut y = area.y;
        for (item, height) in items.iter().zip(&heights).skip(self.scroll) {
            if y + height > area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, *height);
            y += height;
            match *item {
                Item::Logo => self.render_logo(f, rect),
                Item::Title => self.render_title(f, rect),
                Item::Row(index) => {
                    let focused = index == self.focused;
                    match self.rows[index] {
                        Row::Field(field) => self.render_field(f, rect, field, focused),
                        Row::Submit => self.render_submit(f, rect, focused),
                        Row::Link => self.render_link(f, rect, focused),
                    }
                }
            }
        }
    }

    fn item_height(&self, item: Item) -> u16 {
        match item {
            Item::Logo => 5,
            Item::Title => 3,
            Item::Row(index) => match self.rows[index] {
                Row::Field(field) if F::kind(field).is_checkbox() => 1,
                // label line above the input box
                Row::Field(_) => 4,
                Row::Submit => 3,
                Row::Link => 2,
            },
        }
    }

    fn focus_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_logo(&self, f: &mut Frame, area: Rect) {
        let text = match &self.logo {
            Some(path) => format!("[ {} ]", path.display()),
            None => "[ logo ]".to_string(),
        };
        let logo = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(logo, area);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(self.copy.title)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, area);
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: F::Field, focused: bool) {
        let label = (self.copy.label)(field);
        match F::kind(field) {
            FieldKind::Checkbox => {
                let checked = self.form.value(field).as_flag().unwrap_or(false);
                let mark = if checked { "[x]" } else { "[ ]" };
                let line = Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Blue)),
                    Span::raw(" "),
                    Span::raw(label),
                ]);
                let checkbox = Paragraph::new(line)
                    .style(Self::focus_style(focused))
                    .alignment(Alignment::Right);
                f.render_widget(checkbox, area);
            }
            FieldKind::Text { .. } => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Length(3)])
                    .split(area);

                let label = Paragraph::new(label)
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Right);
                f.render_widget(label, chunks[0]);

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Self::focus_style(focused));
                let input = Paragraph::new(self.display_text(field))
                    .alignment(Alignment::Right)
                    .block(block);
                f.render_widget(input, chunks[1]);
            }
        }
    }

    fn render_submit(&self, f: &mut Frame, area: Rect, focused: bool) {
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        let button = Paragraph::new(self.copy.submit)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(button, area);
    }

    fn render_link(&self, f: &mut Frame, area: Rect, focused: bool) {
        let mut style = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let link = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(self.copy.link, style)),
        ])
        .alignment(Alignment::Center);
        f.render_widget(link, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = Line::from(vec![
            Span::styled("Tab/↑↓", key),
            Span::raw(" Move  "),
            Span::styled("Enter/Space", key),
            Span::raw(" Press  "),
            Span::styled("Backspace", key),
            Span::raw(" Erase  "),
            Span::styled("Ctrl+U", key),
            Span::raw(" Clear  "),
            Span::styled("Esc", key),
            Span::raw(" Quit"),
        ]);

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}
