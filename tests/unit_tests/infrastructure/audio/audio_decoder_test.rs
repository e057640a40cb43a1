use voxbridge::application::ports::{AudioDecoder, TranscriptionError};
use voxbridge::infrastructure::audio::SymphoniaAudioDecoder;

use crate::fixtures::wav_bytes;

#[test]
fn given_stereo_wav_when_decoding_then_keeps_rate_and_channel_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    let interleaved: Vec<i16> = (0..1000).flat_map(|_| [16384i16, 0]).collect();
    std::fs::write(&path, wav_bytes(22_050, 2, &interleaved)).unwrap();

    let decoded = SymphoniaAudioDecoder.decode(&path, Some("wav")).unwrap();

    assert_eq!(decoded.sample_rate, 22_050);
    assert_eq!(decoded.channels, 2);
    assert_eq!(decoded.frames(), 1000);
    assert!((decoded.samples[0] - 0.5).abs() < 1e-3);
    assert!(decoded.samples[1].abs() < 1e-3);
}

#[test]
fn given_wav_without_extension_hint_when_decoding_then_probe_still_detects_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload");
    std::fs::write(&path, wav_bytes(16_000, 1, &[100i16; 1600])).unwrap();

    let decoded = SymphoniaAudioDecoder.decode(&path, None).unwrap();

    assert_eq!(decoded.channels, 1);
    assert_eq!(decoded.samples.len(), 1600);
}

#[test]
fn given_corrupted_bytes_when_decoding_then_returns_decoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.wav");
    std::fs::write(&path, vec![0xFFu8; 128]).unwrap();

    let result = SymphoniaAudioDecoder.decode(&path, Some("wav"));

    assert!(matches!(result, Err(TranscriptionError::DecodingFailed(_))));
}

#[test]
fn given_missing_file_when_decoding_then_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = SymphoniaAudioDecoder.decode(&dir.path().join("absent.wav"), Some("wav"));

    assert!(matches!(result, Err(TranscriptionError::Io(_))));
}
