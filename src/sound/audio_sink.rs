use std::sync::{Arc, RwLock};
use rodio::{OutputStream, Sink};

/*
    Keeps the output stream alive alongside the sink that plays into it
 */
pub struct AudioSink {
    os : Option<OutputStream>,
    sink: Option<Arc<RwLock<Sink>>>
}

pub fn volume_to_float(volume: u32) -> f32 {
    volume.min(100) as f32 / 100.0
}

impl AudioSink {
    pub fn new() -> AudioSink {
        AudioSink { os:None, sink: None }
    }

    pub fn is_ready(&self) -> bool {
        self.os.is_some() && self.sink.is_some()
    }

    pub fn set_os(&mut self, os: Option<OutputStream>) {
        self.os = os;
    }

    pub fn set_sink(&mut self, sink: Option<Arc<RwLock<Sink>>>) {
        self.sink = sink;
    }

    fn with_sink<F: FnOnce(&Sink)>(&self, action: F) {
        if let Some(sink) = &self.sink {
            match sink.write() {
                Ok(w) => action(&w),
                Err(_) => log::error!("No write lock.")
            }
        } else {
            log::error!("No bg sink to manage.");
        }
    }

    pub fn play(&mut self) {
        self.with_sink(|s| s.play());
    }

    pub fn stop(&mut self) {
        self.with_sink(|s| s.stop());
    }

    pub fn configure(&mut self, volume: u32) {
        self.with_sink(|s| {
            log::info!("Setting background music volume to {}", volume);
            s.set_volume(volume_to_float(volume));
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::sound::audio_sink::{volume_to_float, AudioSink};

    #[test]
    fn test_volume_to_float() {
        assert_eq!(0.0, volume_to_float(0));
        assert_eq!(0.5, volume_to_float(50));
        assert_eq!(1.0, volume_to_float(100));
        assert_eq!(1.0, volume_to_float(400));
    }

    #[test]
    fn test_new_sink_is_not_ready() {
        let mut sink = AudioSink::new();
        assert!(!sink.is_ready());
        // Managing a sink that never started is a no-op
        sink.play();
        sink.stop();
    }
}
