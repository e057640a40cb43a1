mod audio_decoder_test;
mod scoped_temp_file_test;
mod wav_pipeline_engine_test;
