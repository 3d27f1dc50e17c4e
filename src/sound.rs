pub mod audio_sink;
pub mod sound;
