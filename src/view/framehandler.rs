use ratatui::layout::Rect;
use ratatui::Frame;

pub mod combat;

/*
    FrameHandlers are "dumb" views that simply draw their given input to a terminal frame (the screen)
 */
pub trait FrameHandler<T> {
    fn handle_frame(&mut self, frame: &mut Frame, data: FrameData<T>);
}

pub struct FrameData<T> {
    pub data : T,
    pub frame_size : Rect // This is for size reference or to restrict the rendering area available
}
