/// Scale applied when quantizing normalized float samples to 16-bit PCM.
pub const PCM16_SCALE: f32 = 32767.0;

/// An uploaded audio payload and the format hint taken from its filename.
#[derive(Debug, Clone)]
pub struct AudioInput {
    data: Vec<u8>,
    extension: Option<String>,
}

impl AudioInput {
    pub fn new(data: Vec<u8>, filename: &str) -> Self {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_lowercase());

        Self { data, extension }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Suffix for a temporary file holding this payload, e.g. `.mp3`.
    pub fn file_suffix(&self) -> String {
        self.extension
            .as_ref()
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }
}

/// Decoder output: interleaved float samples in [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: usize,
}

impl DecodedAudio {
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len().div_ceil(self.channels)
    }
}

/// Mono 16-bit PCM at the source sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl NormalizedAudio {
    pub fn from_decoded(decoded: &DecodedAudio) -> Self {
        let mono = downmix_to_mono(&decoded.samples, decoded.channels);
        Self {
            samples: mono.into_iter().map(quantize_sample).collect(),
            sample_rate: decoded.sample_rate,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        1
    }

    pub fn sample_width_bytes(&self) -> u16 {
        2
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Averages each interleaved frame across its channels.
///
/// A trailing partial frame is averaged over the samples it has, so the
/// output always holds exactly one sample per input frame.
pub fn downmix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Lossy conversion to 16-bit: multiply by 32767 and truncate toward zero.
///
/// No dithering is applied. Values outside [-1.0, 1.0] saturate at the
/// `i16` bounds and NaN becomes silence.
pub fn quantize_sample(sample: f32) -> i16 {
    (sample * PCM16_SCALE) as i16
}
