use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table},
};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::App;
use super::highlight::highlight_cell;
use crate::matching;

const MARKER_WIDTH: u16 = 2;
const COLUMN_SPACING: u16 = 1;

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        self.render_input(frame, layout[0]);
        let results_area = layout[1];
        self.render_results(frame, results_area);

        if self.filtered_len() == 0 {
            let mut message_area = results_area;
            const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
            if message_area.height > HEADER_AND_DIVIDER_HEIGHT {
                message_area.y += HEADER_AND_DIVIDER_HEIGHT;
                message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

                let text = if self.is_loading() {
                    "Loading catalog…"
                } else {
                    "No matches"
                };
                let empty = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(self.theme.empty_style());
                frame.render_widget(Clear, message_area);
                frame.render_widget(empty, message_area);
            }
        }
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let status = format!("{} selected", self.selected.len());
        let status_width = status.width() as u16 + 1;
        let throbber_width = if self.is_loading() { 2 } else { 0 };
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(status_width),
                Constraint::Length(throbber_width),
            ])
            .split(area);

        let title = self.input_title.as_deref().unwrap_or("Select");
        let prompt = format!("{title} > ");
        let query = self.search_input.text();
        let line = if query.is_empty() {
            Line::from(vec![
                Span::styled(prompt.clone(), self.theme.prompt_style()),
                Span::styled(self.placeholder.clone(), self.theme.empty_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(prompt.clone(), self.theme.prompt_style()),
                Span::raw(query.to_string()),
            ])
        };
        frame.render_widget(Paragraph::new(line), layout[0]);

        let cursor_offset: usize = query
            .chars()
            .take(self.search_input.cursor())
            .map(|ch| ch.to_string().width())
            .sum();
        let cursor_x = layout[0]
            .x
            .saturating_add(prompt.width() as u16)
            .saturating_add(cursor_offset as u16)
            .min(layout[0].right().saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, layout[0].y));

        frame.render_widget(
            Paragraph::new(status)
                .alignment(Alignment::Right)
                .style(self.theme.prompt_style()),
            layout[1],
        );
        if self.is_loading() {
            let throbber = Throbber::default()
                .style(self.theme.prompt_style())
                .throbber_style(self.theme.prompt_style());
            frame.render_stateful_widget(throbber, layout[2], &mut self.throbber_state);
        }
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let query = self.search_input.text();
        let image_width = area.width / 3;
        let label_width = area
            .width
            .saturating_sub(MARKER_WIDTH + 2 * COLUMN_SPACING + image_width);

        let rows: Vec<Row> = self
            .filtered
            .iter()
            .map(|&index| {
                let choice = &self.choices[index];
                let marker = if self.is_selected(choice) {
                    Cell::from("●").style(self.theme.marker_style())
                } else {
                    Cell::from(" ")
                };
                let spans = matching::match_spans(&choice.label, query);
                let indices = (!spans.is_empty()).then(|| matching::span_indices(&spans));
                let label = highlight_cell(&choice.label, indices, Some(label_width), &self.theme);
                let image = highlight_cell(&choice.image, None, Some(image_width), &self.theme);
                Row::new([marker, label, image])
            })
            .collect();

        let widths = [
            Constraint::Length(MARKER_WIDTH),
            Constraint::Length(label_width),
            Constraint::Length(image_width),
        ];
        let table = Table::new(rows, widths)
            .column_spacing(COLUMN_SPACING)
            .header(
                Row::new(["", "Name", "Image"])
                    .style(self.theme.header_style())
                    .bottom_margin(1),
            )
            .row_highlight_style(self.theme.row_highlight_style());
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}
