use std::sync::{Arc, Mutex};

use voxbridge::application::ports::{
    RecognitionSession, RecognizerOutput, SpeechRecognizer, TranscriptionEngine,
    TranscriptionError,
};
use voxbridge::domain::{AudioInput, WordTimestamp};
use voxbridge::infrastructure::audio::{
    RECOGNIZER_CHUNK_FRAMES, SymphoniaAudioDecoder, UnavailableRecognizer, WavPipelineEngine,
};

use crate::fixtures::{dir_is_empty, wav_bytes};

#[derive(Default)]
struct Recording {
    sample_rate: Option<f32>,
    chunk_sizes: Vec<usize>,
    frames: Vec<i16>,
}

struct RecordingRecognizer {
    recording: Arc<Mutex<Recording>>,
    fail_on_chunk: Option<usize>,
}

impl RecordingRecognizer {
    fn new() -> (Self, Arc<Mutex<Recording>>) {
        let recording = Arc::new(Mutex::new(Recording::default()));
        (
            Self {
                recording: Arc::clone(&recording),
                fail_on_chunk: None,
            },
            recording,
        )
    }
}

impl SpeechRecognizer for RecordingRecognizer {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn start_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognitionSession>, TranscriptionError> {
        self.recording.lock().unwrap().sample_rate = Some(sample_rate);
        Ok(Box::new(RecordingSession {
            recording: Arc::clone(&self.recording),
            fail_on_chunk: self.fail_on_chunk,
        }))
    }
}

struct RecordingSession {
    recording: Arc<Mutex<Recording>>,
    fail_on_chunk: Option<usize>,
}

impl RecognitionSession for RecordingSession {
    fn accept_waveform(&mut self, frames: &[i16]) -> Result<(), TranscriptionError> {
        let mut recording = self.recording.lock().unwrap();
        if self.fail_on_chunk == Some(recording.chunk_sizes.len()) {
            return Err(TranscriptionError::RecognitionFailed("boom".to_string()));
        }
        recording.chunk_sizes.push(frames.len());
        recording.frames.extend_from_slice(frames);
        Ok(())
    }

    fn final_result(&mut self) -> Result<RecognizerOutput, TranscriptionError> {
        Ok(RecognizerOutput {
            text: Some("hello world".to_string()),
            words: Some(vec![
                WordTimestamp::new("world", 0.5, 0.9),
                WordTimestamp::new("hello", 0.0, 0.4),
            ]),
        })
    }
}

fn engine(recognizer: Arc<dyn SpeechRecognizer>, dir: &std::path::Path) -> WavPipelineEngine {
    WavPipelineEngine::new(
        Arc::new(SymphoniaAudioDecoder),
        recognizer,
        dir.to_path_buf(),
    )
}

#[test]
fn given_stereo_upload_when_transcribing_then_recognizer_gets_averaged_mono_at_source_rate() {
    let dir = tempfile::tempdir().unwrap();
    let (recognizer, recording) = RecordingRecognizer::new();
    let interleaved: Vec<i16> = (0..10_000).flat_map(|_| [16384i16, 0]).collect();
    let input = AudioInput::new(wav_bytes(22_050, 2, &interleaved), "call.WAV");

    let result = engine(Arc::new(recognizer), dir.path())
        .transcribe(&input)
        .unwrap();

    let recording = recording.lock().unwrap();
    assert_eq!(recording.sample_rate, Some(22_050.0));
    assert_eq!(recording.frames.len(), 10_000);
    assert!(recording.frames.iter().all(|&s| s == 8191));
    assert_eq!(result.text, "hello world");
    assert_eq!(result.words[0].word, "hello");
}

#[test]
fn given_long_upload_when_transcribing_then_frames_are_streamed_in_4000_frame_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let (recognizer, recording) = RecordingRecognizer::new();
    let input = AudioInput::new(wav_bytes(16_000, 1, &vec![0i16; 10_500]), "clip.wav");

    engine(Arc::new(recognizer), dir.path())
        .transcribe(&input)
        .unwrap();

    let recording = recording.lock().unwrap();
    assert_eq!(RECOGNIZER_CHUNK_FRAMES, 4000);
    assert_eq!(recording.chunk_sizes, vec![4000, 4000, 2500]);
}

#[test]
fn given_successful_transcription_when_call_returns_then_no_temporary_files_remain() {
    let dir = tempfile::tempdir().unwrap();
    let (recognizer, _) = RecordingRecognizer::new();
    let input = AudioInput::new(wav_bytes(16_000, 1, &[0i16; 800]), "clip.wav");

    engine(Arc::new(recognizer), dir.path())
        .transcribe(&input)
        .unwrap();

    assert!(dir_is_empty(dir.path()));
}

#[test]
fn given_undecodable_upload_when_transcribing_then_fails_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let (recognizer, recording) = RecordingRecognizer::new();
    let input = AudioInput::new(b"definitely not audio".to_vec(), "notes.mp3");

    let result = engine(Arc::new(recognizer), dir.path()).transcribe(&input);

    assert!(matches!(result, Err(TranscriptionError::DecodingFailed(_))));
    assert!(recording.lock().unwrap().sample_rate.is_none());
    assert!(dir_is_empty(dir.path()));
}

#[test]
fn given_recognizer_failure_mid_stream_when_transcribing_then_fails_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let (mut recognizer, _) = RecordingRecognizer::new();
    recognizer.fail_on_chunk = Some(1);
    let input = AudioInput::new(wav_bytes(16_000, 1, &vec![0i16; 9_000]), "clip.wav");

    let result = engine(Arc::new(recognizer), dir.path()).transcribe(&input);

    assert!(matches!(result, Err(TranscriptionError::RecognitionFailed(_))));
    assert!(dir_is_empty(dir.path()));
}

#[test]
fn given_unavailable_recognizer_when_transcribing_then_returns_recognition_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = AudioInput::new(wav_bytes(16_000, 1, &[0i16; 800]), "clip.wav");

    let result = engine(Arc::new(UnavailableRecognizer), dir.path()).transcribe(&input);

    assert!(matches!(result, Err(TranscriptionError::RecognitionFailed(_))));
    assert!(dir_is_empty(dir.path()));
}
