use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, TranscriptionError};
use crate::domain::DecodedAudio;

/// Decodes any container/codec symphonia can probe, keeping the source
/// sample rate and channel layout.
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(
        &self,
        path: &Path,
        extension: Option<&str>,
    ) -> Result<DecodedAudio, TranscriptionError> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = extension {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| TranscriptionError::DecodingFailed(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| TranscriptionError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let mut sample_rate = codec_params.sample_rate;
        let mut channels = codec_params.channels.map(|c| c.count());

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| TranscriptionError::DecodingFailed(format!("codec: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => {
                    return Err(TranscriptionError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(TranscriptionError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            if decoded.frames() == 0 {
                continue;
            }

            // Some containers only report the layout once frames are decoded.
            if sample_rate.is_none() {
                sample_rate = Some(spec.rate);
            }
            if channels.is_none() {
                channels = Some(spec.channels.count());
            }

            let mut sample_buf = SampleBuffer::<f32>::new(decoded.frames() as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(sample_buf.samples());
        }

        let sample_rate = sample_rate
            .ok_or_else(|| TranscriptionError::DecodingFailed("unknown sample rate".to_string()))?;
        let channels = channels.unwrap_or(1).max(1);

        if samples.is_empty() {
            return Err(TranscriptionError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        tracing::info!(
            sample_rate,
            channels,
            frames = samples.len() / channels,
            "Source audio decoded"
        );

        Ok(DecodedAudio {
            samples,
            sample_rate,
            channels,
        })
    }
}
