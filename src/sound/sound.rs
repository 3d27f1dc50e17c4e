use std::fs::File;
use std::io::BufReader;
use std::sync::{Arc, RwLock};

use rodio::{Decoder, OutputStream, Sink};
use rodio::decoder::LoopedDecoder;

use crate::error::errors::GenericError;
use crate::sound::audio_sink::AudioSink;

pub const RESOURCE_MUSIC_BATTLE : &str = "resources/bgm/battle.mp3";

pub struct SoundSinks {
    bg_sink: AudioSink
}

pub fn build_sound_sinks() -> SoundSinks {
    SoundSinks { bg_sink: AudioSink::new() }
}

fn open_looped_track(path: &str) -> Result<LoopedDecoder<BufReader<File>>, GenericError> {
    let file = File::open(path)
        .map_err(|e| GenericError::wrap(&format!("Failed to open {}", path), e))?;
    Decoder::new_looped(BufReader::new(file))
        .map_err(|e| GenericError::wrap(&format!("Failed to decode {}", path), e))
}

impl SoundSinks {

    /*
        Starts the given track on repeat until the sink is stopped
     */
    pub fn play_looping_track(&mut self, path: &str, volume: u32) -> Result<(), GenericError> {
        log::info!("Starting background music from {}..", path);
        let track = open_looped_track(path)?;

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| GenericError::wrap("No audio output available", e))?;
        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| GenericError::wrap("Failed to create an audio sink", e))?;
        sink.append(track);

        self.bg_sink.set_os(Some(stream));
        self.bg_sink.set_sink(Some(Arc::new(RwLock::new(sink))));
        self.bg_sink.configure(volume);
        self.bg_sink.play();
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.bg_sink.is_ready()
    }

    pub fn stop(&mut self) {
        if self.is_playing() {
            log::info!("Stopping background music.");
            self.bg_sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sound::sound::build_sound_sinks;

    #[test]
    fn test_missing_track_is_an_error() {
        let mut sinks = build_sound_sinks();
        let result = sinks.play_looping_track("resources/bgm/does-not-exist.mp3", 100);

        let error = result.err().expect("Expected a missing track to fail");
        assert!(error.to_string().starts_with("Failed to open resources/bgm/does-not-exist.mp3"));
        assert!(!sinks.is_playing());
        sinks.stop();
    }
}
