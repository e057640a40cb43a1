mod audio_decoder;
mod recognizer_factory;
mod scoped_temp_file;
#[cfg(feature = "vosk")]
mod vosk_recognizer;
mod wav_io;
mod wav_pipeline_engine;

pub use audio_decoder::SymphoniaAudioDecoder;
pub use recognizer_factory::{RecognizerFactory, UnavailableRecognizer};
pub use scoped_temp_file::ScopedTempFile;
#[cfg(feature = "vosk")]
pub use vosk_recognizer::VoskSpeechRecognizer;
pub use wav_io::{Pcm16WavReader, write_pcm16_wav};
pub use wav_pipeline_engine::{RECOGNIZER_CHUNK_FRAMES, WavPipelineEngine};
