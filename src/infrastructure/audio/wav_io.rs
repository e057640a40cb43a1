use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::application::ports::TranscriptionError;
use crate::domain::NormalizedAudio;

/// Writes mono 16-bit PCM as an uncompressed WAV file.
pub fn write_pcm16_wav(path: &Path, audio: &NormalizedAudio) -> Result<(), TranscriptionError> {
    let spec = WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: audio.sample_width_bytes() * 8,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(map_write_error)?;
    for &sample in audio.samples() {
        writer.write_sample(sample).map_err(map_write_error)?;
    }
    writer.finalize().map_err(map_write_error)?;

    tracing::debug!(
        path = %path.display(),
        frames = audio.samples().len(),
        sample_rate = audio.sample_rate(),
        "Normalized WAV written"
    );
    Ok(())
}

fn map_write_error(e: hound::Error) -> TranscriptionError {
    match e {
        hound::Error::IoError(io) => TranscriptionError::Io(io),
        other => TranscriptionError::DecodingFailed(format!("wav write: {}", other)),
    }
}

/// Sequential reader over a mono 16-bit WAV file.
pub struct Pcm16WavReader {
    reader: WavReader<BufReader<File>>,
}

impl Pcm16WavReader {
    pub fn open(path: &Path) -> Result<Self, TranscriptionError> {
        let reader = WavReader::open(path)
            .map_err(|e| TranscriptionError::DecodingFailed(format!("wav header: {}", e)))?;

        let spec = reader.spec();
        if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int
        {
            return Err(TranscriptionError::DecodingFailed(format!(
                "expected mono 16-bit PCM, found {} channel(s) at {} bits",
                spec.channels, spec.bits_per_sample
            )));
        }

        Ok(Self { reader })
    }

    pub fn sample_rate(&self) -> u32 {
        self.reader.spec().sample_rate
    }

    pub fn frames(&self) -> u32 {
        self.reader.duration()
    }

    /// Fills `buf` with up to `max_frames` frames; an empty buffer means end of stream.
    pub fn read_chunk(
        &mut self,
        buf: &mut Vec<i16>,
        max_frames: usize,
    ) -> Result<(), TranscriptionError> {
        buf.clear();
        for sample in self.reader.samples::<i16>().take(max_frames) {
            let sample = sample
                .map_err(|e| TranscriptionError::DecodingFailed(format!("wav frames: {}", e)))?;
            buf.push(sample);
        }
        Ok(())
    }
}
