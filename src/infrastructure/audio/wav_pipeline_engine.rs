use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, SpeechRecognizer, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioInput, NormalizedAudio, TranscriptionResult};

use super::scoped_temp_file::ScopedTempFile;
use super::wav_io::{Pcm16WavReader, write_pcm16_wav};

/// Frames handed to the recognizer per call.
pub const RECOGNIZER_CHUNK_FRAMES: usize = 4000;

/// Upload → temp file → decode → mono 16-bit WAV → chunked recognition.
pub struct WavPipelineEngine {
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<dyn SpeechRecognizer>,
    temp_dir: PathBuf,
}

impl WavPipelineEngine {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        recognizer: Arc<dyn SpeechRecognizer>,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            decoder,
            recognizer,
            temp_dir,
        }
    }

    fn normalize(
        &self,
        source: &Path,
        input: &AudioInput,
        wav: &Path,
    ) -> Result<(), TranscriptionError> {
        let decoded = self.decoder.decode(source, input.extension())?;
        if decoded.channels > 1 {
            tracing::debug!(channels = decoded.channels, "Folding to mono");
        }

        let normalized = NormalizedAudio::from_decoded(&decoded);
        write_pcm16_wav(wav, &normalized)
    }

    fn recognize(&self, wav: &Path) -> Result<TranscriptionResult, TranscriptionError> {
        let mut reader = Pcm16WavReader::open(wav)?;
        let sample_rate = reader.sample_rate();

        tracing::info!(
            recognizer = self.recognizer.name(),
            sample_rate,
            frames = reader.frames(),
            "Starting speech recognition"
        );

        let mut session = self.recognizer.start_session(sample_rate as f32)?;
        let mut chunk = Vec::with_capacity(RECOGNIZER_CHUNK_FRAMES);
        let mut chunks = 0usize;

        loop {
            reader.read_chunk(&mut chunk, RECOGNIZER_CHUNK_FRAMES)?;
            if chunk.is_empty() {
                break;
            }
            session.accept_waveform(&chunk)?;
            chunks += 1;
        }

        let output = session.final_result()?;
        let result = TranscriptionResult::from_engine_output(output.text, output.words);

        tracing::info!(chunks, text = %result.text, "Recognition finished");
        for word in &result.words {
            tracing::debug!(
                word = %word.word,
                start = word.start,
                end = word.end,
                "Word timestamp"
            );
        }

        Ok(result)
    }
}

impl TranscriptionEngine for WavPipelineEngine {
    fn transcribe(&self, input: &AudioInput) -> Result<TranscriptionResult, TranscriptionError> {
        tracing::info!(
            bytes = input.data().len(),
            extension = input.extension().unwrap_or("none"),
            "Processing uploaded audio"
        );

        // Declared in this order so the WAV guard drops first, then the source.
        let source = ScopedTempFile::persist(&self.temp_dir, &input.file_suffix(), input.data())?;
        let wav = ScopedTempFile::reserve(&self.temp_dir, ".wav")?;

        self.normalize(source.path(), input, wav.path())?;
        self.recognize(wav.path())
    }
}
