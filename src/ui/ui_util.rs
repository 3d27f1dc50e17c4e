use std::io::{Error, ErrorKind};

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ui::resolution::{Resolution, MIN_RESOLUTION};

pub fn build_paragraph_multi<'a>(messages: Vec<String>) -> Paragraph<'a> {
    let lines : Vec<Line> = messages.into_iter().map(Line::raw).collect();
    Paragraph::new(lines)
        .style(Style::default())
        .alignment(ratatui::layout::Alignment::Left)
}

/*
    Half of the spare space on each side, any odd remainder goes after the target (top / left align)
 */
fn center(target: u16, available: u16) -> u16 {
    available.saturating_sub(target) / 2
}

/*
    Centers an area of the given size within the frame, shrinking it to fit if the frame is too small
 */
pub fn center_area(width: u16, height: u16, frame_size: Rect) -> Rect {
    let width = width.min(frame_size.width);
    let height = height.min(frame_size.height);
    let x = frame_size.x + center(width, frame_size.width);
    let y = frame_size.y + center(height, frame_size.height);
    Rect::new(x, y, width, height)
}

pub fn check_display_size(frame_size: Rect) -> Result<(), Error> {
    check_display_size_for(frame_size, &MIN_RESOLUTION)
}

fn check_display_size_for(frame_size: Rect, minimum: &Resolution) -> Result<(), Error> {
    if !minimum.fits_within(frame_size) {
        return Err(Error::new(ErrorKind::Other, format!("Sorry, your terminal is below the minimum supported resolution of {}x{}.", minimum.width, minimum.height)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::ui::resolution::MIN_RESOLUTION;
    use crate::ui::ui_util::{center_area, check_display_size};

    #[test]
    fn test_center_area_even() {
        // GIVEN a 100x100 screen and a 40x10 target
        let available = Rect::new(0,0, 100, 100);

        // WHEN we call to center for the target
        let result = center_area(40, 10, available);

        // THEN we expect a perfectly centered result
        assert_eq!(Rect::new(30, 45, 40, 10), result);
    }

    #[test]
    fn test_center_area_1over_leftalign() {
        // GIVEN a screen area with 1 character extra space
        let available = Rect::new(0,0, 101, 101);

        // WHEN we call to center for the target
        let result = center_area(40, 10, available);

        // THEN we expect a left / top aligned result
        assert_eq!(Rect::new(30, 45, 40, 10), result);
    }

    #[test]
    fn test_center_area_offset_frame() {
        let available = Rect::new(5, 2, 20, 10);
        let result = center_area(10, 4, available);
        assert_eq!(Rect::new(10, 5, 10, 4), result);
    }

    #[test]
    fn test_center_area_too_large_shrinks() {
        let available = Rect::new(0, 0, 20, 5);
        let result = center_area(40, 10, available);
        assert_eq!(Rect::new(0, 0, 20, 5), result);
    }

    #[test]
    fn test_check_display_size() {
        assert!(check_display_size(Rect::new(0, 0, MIN_RESOLUTION.width, MIN_RESOLUTION.height)).is_ok());
        assert!(check_display_size(Rect::new(0, 0, 120, 40)).is_ok());
        assert!(check_display_size(Rect::new(0, 0, 79, 24)).is_err());
        assert!(check_display_size(Rect::new(0, 0, 80, 23)).is_err());
    }
}
