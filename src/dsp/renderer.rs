//! WAV renderer — serializes a synthesized buffer for playback or export.

/// Convert float samples to 16-bit PCM. Values outside [-1, 1] are clamped.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * 32767.0).round().clamp(-32768.0, 32767.0) as i16)
        .collect()
}

/// Render a mono buffer to a WAV file as bytes (16-bit mono PCM).
pub fn render_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    encode_wav(&to_pcm_i16(samples), sample_rate)
}

/// Size of the RIFF/fmt/data headers that precede the sample data.
pub const WAV_HEADER_LEN: usize = 44;

/// `fmt ` chunk contents for mono 16-bit PCM.
struct PcmFormat {
    sample_rate: u32,
}

impl PcmFormat {
    const CHANNELS: u16 = 1;
    const BYTES_PER_SAMPLE: u16 = 2;
    const PCM_TAG: u16 = 1;

    fn block_align(&self) -> u16 {
        Self::CHANNELS * Self::BYTES_PER_SAMPLE
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    fn write(&self, buf: &mut Vec<u8>) {
        write_chunk_header(buf, b"fmt ", 16);
        buf.extend_from_slice(&Self::PCM_TAG.to_le_bytes());
        buf.extend_from_slice(&Self::CHANNELS.to_le_bytes());
        buf.extend_from_slice(&self.sample_rate.to_le_bytes());
        buf.extend_from_slice(&self.byte_rate().to_le_bytes());
        buf.extend_from_slice(&self.block_align().to_le_bytes());
        buf.extend_from_slice(&(Self::BYTES_PER_SAMPLE * 8).to_le_bytes());
    }
}

fn write_chunk_header(buf: &mut Vec<u8>, id: &[u8; 4], size: u32) {
    buf.extend_from_slice(id);
    buf.extend_from_slice(&size.to_le_bytes());
}

/// Wrap mono 16-bit PCM in a WAV container.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = samples.len() * PcmFormat::BYTES_PER_SAMPLE as usize;
    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_len);

    // RIFF size counts everything after its own 8-byte header
    write_chunk_header(&mut buf, b"RIFF", (WAV_HEADER_LEN - 8 + data_len) as u32);
    buf.extend_from_slice(b"WAVE");
    PcmFormat { sample_rate }.write(&mut buf);
    write_chunk_header(&mut buf, b"data", data_len as u32);
    buf.extend(samples.iter().flat_map(|s| s.to_le_bytes()));

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_scaling_and_clamping() {
        let pcm = to_pcm_i16(&[0.0, 1.0, -1.0, 0.5, 1.2, -3.0]);
        assert_eq!(pcm, vec![0, 32767, -32767, 16384, 32767, -32768]);
    }

    #[test]
    fn wav_header_valid() {
        let wav = render_wav(&[0.0; 100], 44100);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        let sr = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(sr, 44100);

        let ch = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(ch, 1);

        let byte_rate = u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]);
        assert_eq!(byte_rate, 88200);
    }

    #[test]
    fn wav_size_correct() {
        let wav = render_wav(&vec![0.25; 88200], 44100);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 176400);
        assert_eq!(wav.len(), 44 + 176400);

        let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        assert_eq!(riff_size as usize, wav.len() - 8);
    }

    #[test]
    fn samples_written_little_endian() {
        let wav = encode_wav(&[1, -2], 8000);
        assert_eq!(wav.len(), WAV_HEADER_LEN + 4);
        assert_eq!(&wav[44..48], &[1, 0, 0xFE, 0xFF]);
        let block_align = u16::from_le_bytes([wav[32], wav[33]]);
        assert_eq!(block_align, 2);
        let bits = u16::from_le_bytes([wav[34], wav[35]]);
        assert_eq!(bits, 16);
    }
}
