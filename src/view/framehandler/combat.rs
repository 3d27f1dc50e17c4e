use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::ui_util::{build_paragraph_multi, center_area, check_display_size};
use crate::view::combat::{BattleDisplay, CombatantDisplay};
use crate::view::framehandler::{FrameData, FrameHandler};
use crate::widget::health_bar::{HealthBarWidget, BOSS_BAR_COLOUR, PARTY_BAR_COLOUR};
use crate::widget::sprite::{SpriteWidget, BOSS_SPRITE_SIZE, PARTY_SPRITE_SIZE};

const BOSS_PANEL_WIDTH : u16 = BOSS_SPRITE_SIZE.0 + 4;
const BOSS_PANEL_HEIGHT : u16 = BOSS_SPRITE_SIZE.1 + 3;
const PARTY_PANEL_HEIGHT : u16 = PARTY_SPRITE_SIZE.1 + 3;

/*
    Draws the boss at the top, the party underneath and the battle log at the bottom
 */
pub struct CombatFrameHandler {
    boss_sprite: SpriteWidget,
    party_sprites: Vec<SpriteWidget>
}

impl CombatFrameHandler {
    pub fn new(boss_sprite: SpriteWidget, party_sprites: Vec<SpriteWidget>) -> CombatFrameHandler {
        CombatFrameHandler { boss_sprite, party_sprites }
    }

    fn title_style(combatant: &CombatantDisplay) -> Style {
        let style = Style::default().add_modifier(Modifier::UNDERLINED);
        if combatant.current == 0 {
            style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            style
        }
    }

    fn draw_boss(&self, frame: &mut Frame, boss: &CombatantDisplay, area: Rect) {
        let panel = center_area(BOSS_PANEL_WIDTH, BOSS_PANEL_HEIGHT, area);
        let block = Block::default()
            .title(Span::styled(boss.name.clone(), CombatFrameHandler::title_style(boss)))
            .borders(Borders::ALL);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let sprite_height = BOSS_SPRITE_SIZE.1.min(inner.height.saturating_sub(1));
        let sprite_area = Rect::new(inner.x, inner.y, inner.width, sprite_height);
        frame.render_widget(self.boss_sprite.clone(), sprite_area);

        let bar_width = BOSS_SPRITE_SIZE.0.min(inner.width);
        let bar_area = Rect::new(inner.x + (inner.width - bar_width) / 2, inner.y + sprite_height, bar_width, 1);
        frame.render_widget(HealthBarWidget::new(boss.current, boss.max, BOSS_BAR_COLOUR), bar_area);
    }

    fn draw_party(&self, frame: &mut Frame, party: &[CombatantDisplay], area: Rect) {
        if party.is_empty() {
            return;
        }
        let constraints : Vec<Constraint> = party.iter().map(|_| Constraint::Ratio(1, party.len() as u32)).collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, (member, column)) in party.iter().zip(columns.iter()).enumerate() {
            let block = Block::default()
                .title(Span::styled(member.name.clone(), CombatFrameHandler::title_style(member)))
                .borders(Borders::ALL);
            let inner = block.inner(*column);
            frame.render_widget(block, *column);
            if inner.height == 0 {
                continue;
            }

            let sprite_height = PARTY_SPRITE_SIZE.1.min(inner.height.saturating_sub(1));
            if let Some(sprite) = self.party_sprites.get(i) {
                frame.render_widget(sprite.clone(), Rect::new(inner.x, inner.y, inner.width, sprite_height));
            }
            let bar_area = Rect::new(inner.x, inner.y + sprite_height, inner.width, 1);
            frame.render_widget(HealthBarWidget::new(member.current, member.max, PARTY_BAR_COLOUR), bar_area);
        }
    }

    fn draw_log(&self, frame: &mut Frame, log: &[String], area: Rect) {
        let block = Block::default()
            .title("Battle log")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = inner.height as usize;
        let start = log.len().saturating_sub(visible);
        frame.render_widget(build_paragraph_multi(log[start..].to_vec()), inner);
    }
}

impl FrameHandler<BattleDisplay> for CombatFrameHandler {
    fn handle_frame(&mut self, frame: &mut Frame, data: FrameData<BattleDisplay>) {
        let display = data.data;

        if let Err(e) = check_display_size(data.frame_size) {
            log::error!("{}", e);
            let paragraph = Paragraph::new(e.to_string()).wrap(Wrap { trim: true });
            frame.render_widget(paragraph, data.frame_size);
            return;
        }

        let title = format!(" Boss Battle - Round {} ", display.round);
        let main_block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));
        let main_area = main_block.inner(data.frame_size);
        frame.render_widget(main_block, data.frame_size);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BOSS_PANEL_HEIGHT),
                Constraint::Length(PARTY_PANEL_HEIGHT),
                Constraint::Min(3)
            ])
            .split(main_area);

        self.draw_boss(frame, &display.boss, rows[0]);
        self.draw_party(frame, &display.party, rows[1]);
        self.draw_log(frame, &display.log, rows[2]);
    }
}
