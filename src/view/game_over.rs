use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::ui_util::center_area;
use crate::view::framehandler::{FrameData, FrameHandler};

const RESULT_WIDTH : u16 = 44;
const RESULT_HEIGHT : u16 = 7;
pub const CLOSE_HINT : &str = "[ Close ] any key";

/*
    The battle result, drawn as a modal over whatever is already on screen
 */
pub struct ResultFrameHandler {}

impl ResultFrameHandler {
    pub fn new() -> ResultFrameHandler {
        ResultFrameHandler {}
    }

    pub fn result_area(frame_size: Rect) -> Rect {
        center_area(RESULT_WIDTH, RESULT_HEIGHT, frame_size)
    }
}

impl FrameHandler<String> for ResultFrameHandler {
    fn handle_frame(&mut self, frame: &mut Frame, data: FrameData<String>) {
        let area = ResultFrameHandler::result_area(data.frame_size);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title("Battle Result")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White).bg(Color::Black));

        let text = Text::from(vec![
            Line::raw(""),
            Line::styled(data.data, Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled(CLOSE_HINT, Style::default().add_modifier(Modifier::REVERSED))
        ]);
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
