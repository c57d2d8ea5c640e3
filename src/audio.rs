use std::io::Write;
use std::path::Path;

use hound::SampleFormat;
use tempfile::TempPath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode WAV: {0}")]
    Decode(String),
}

/// One request's uploaded audio, persisted to a uniquely named .wav file
/// under the cache directory. The file is removed when the value drops,
/// on success and failure alike; deletion is best-effort and never panics.
pub struct ScopedWavFile {
    path: TempPath,
}

impl ScopedWavFile {
    pub fn create(cache_dir: &Path, bytes: &[u8]) -> Result<Self, AudioError> {
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".wav")
            .tempfile_in(cache_dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Full contents of one WAV source, decoded into memory. Uploads are short
/// utterances, so there is no streaming or chunking.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn from_wav_file(path: &Path) -> Result<Self, AudioError> {
        let mut reader =
            hound::WavReader::open(path).map_err(|e| AudioError::Decode(e.to_string()))?;
        let spec = reader.spec();

        let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::Decode(e.to_string()))?,
            (SampleFormat::Float, 32) => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::Decode(e.to_string()))?,
            (format, bits) => {
                return Err(AudioError::Decode(format!(
                    "unsupported sample format: {:?} at {} bits",
                    format, bits
                )))
            }
        };

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}
