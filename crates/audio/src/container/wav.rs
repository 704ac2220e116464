//! RIFF/WAVE PCM container

use a5cipher_api::error::{validate, Error, Result};
use a5cipher_api::FormatDescriptor;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const FMT: &[u8; 4] = b"fmt ";
const DATA: &[u8; 4] = b"data";

const FORMAT_PCM: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;
const HEADER_LEN: usize = 44;

/// Canonical uncompressed PCM WAV files (format tag 1).
///
/// Decoding walks the chunk list, skipping anything other than `fmt ` and
/// `data` and honoring the pad byte after odd-sized chunks. Encoding always
/// writes the 44-byte canonical header followed by the data chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavContainer;

struct Chunk<'a> {
    id: [u8; 4],
    body: &'a [u8],
}

fn chunks(mut rest: &[u8]) -> impl Iterator<Item = Result<Chunk<'_>>> {
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        if rest.len() < 8 {
            rest = &rest[..0];
            return Some(Err(Error::processing(
                "WAV chunk header",
                "truncated chunk header",
            )));
        }

        let mut id = [0u8; 4];
        id.copy_from_slice(&rest[..4]);
        let size = LittleEndian::read_u32(&rest[4..8]) as usize;
        let body_end = match 8usize.checked_add(size) {
            Some(end) if end <= rest.len() => end,
            _ => {
                rest = &rest[..0];
                return Some(Err(Error::processing(
                    "WAV chunk",
                    format!(
                        "chunk '{}' declares {} bytes but the file is truncated",
                        String::from_utf8_lossy(&id),
                        size
                    ),
                )));
            }
        };

        let body = &rest[8..body_end];
        let next = (body_end + (size & 1)).min(rest.len());
        rest = &rest[next..];
        Some(Ok(Chunk { id, body }))
    })
}

fn parse_fmt(mut body: &[u8]) -> Result<(u16, u32, u16, u16)> {
    if body.len() < FMT_CHUNK_LEN as usize {
        return Err(Error::processing(
            "WAV fmt chunk",
            format!("fmt chunk is {} bytes, expected at least 16", body.len()),
        ));
    }

    let format_tag = body.read_u16::<LittleEndian>()?;
    let channels = body.read_u16::<LittleEndian>()?;
    let frame_rate = body.read_u32::<LittleEndian>()?;
    let _byte_rate = body.read_u32::<LittleEndian>()?;
    let block_align = body.read_u16::<LittleEndian>()?;
    let bits_per_sample = body.read_u16::<LittleEndian>()?;

    if format_tag != FORMAT_PCM {
        return Err(Error::processing(
            "WAV fmt chunk",
            format!("unsupported format tag {} (only PCM is supported)", format_tag),
        ));
    }
    if channels == 0 || bits_per_sample == 0 {
        return Err(Error::processing(
            "WAV fmt chunk",
            "channel count and bits per sample must be non-zero",
        ));
    }

    Ok((channels, frame_rate, bits_per_sample, block_align))
}

impl super::AudioContainer for WavContainer {
    fn decode(&self, bytes: &[u8]) -> Result<(FormatDescriptor, Vec<u8>)> {
        if bytes.len() < 12 || &bytes[..4] != RIFF || &bytes[8..12] != WAVE {
            return Err(Error::processing("WAV header", "not a RIFF/WAVE file"));
        }

        let mut format = None;
        for chunk in chunks(&bytes[12..]) {
            let chunk = chunk?;
            match &chunk.id {
                FMT => {
                    let (channels, frame_rate, bits, declared_align) = parse_fmt(chunk.body)?;
                    let sample_width = bits / 8 + u16::from(bits % 8 != 0);
                    let descriptor = FormatDescriptor::new(channels, sample_width, frame_rate, 0);
                    if u32::from(declared_align) != descriptor.block_align() {
                        debug!(
                            "WAV block align {} disagrees with {} x {}; using computed value",
                            declared_align, channels, sample_width
                        );
                    }
                    format = Some(descriptor);
                }
                DATA => {
                    let mut format = format.ok_or_else(|| {
                        Error::processing("WAV data chunk", "data chunk precedes fmt chunk")
                    })?;
                    let block_align = format.block_align() as usize;
                    let frames = chunk.body.len() / block_align;
                    format.frame_count = u32::try_from(frames).map_err(|_| {
                        Error::processing("WAV data chunk", "frame count exceeds 32 bits")
                    })?;

                    debug!(
                        "decoded WAV: {} channel(s), {} byte(s)/sample, {} Hz, {} frame(s)",
                        format.channels, format.sample_width, format.frame_rate, frames
                    );
                    return Ok((format, chunk.body[..frames * block_align].to_vec()));
                }
                _ => debug!(
                    "skipping WAV chunk '{}' ({} bytes)",
                    String::from_utf8_lossy(&chunk.id),
                    chunk.body.len()
                ),
            }
        }

        Err(Error::processing("WAV data chunk", "no data chunk found"))
    }

    fn encode(&self, format: &FormatDescriptor, pcm: &[u8]) -> Result<Vec<u8>> {
        let block_align = format.block_align();
        if format.channels == 0 || format.sample_width == 0 {
            return Err(Error::processing(
                "WAV encode",
                "channel count and sample width must be non-zero",
            ));
        }
        validate::multiple_of("WAV data chunk", pcm.len(), block_align as usize)?;
        let frames = pcm.len() / block_align as usize;
        if frames != format.frame_count as usize {
            return Err(Error::processing(
                "WAV frame count",
                format!(
                    "descriptor declares {} frames but the data holds {}",
                    format.frame_count, frames
                ),
            ));
        }

        let data_len = u32::try_from(pcm.len())
            .ok()
            .filter(|len| len.checked_add(HEADER_LEN as u32 - 8).is_some())
            .ok_or_else(|| Error::processing("WAV encode", "PCM data too large for RIFF"))?;
        let bits_per_sample = format
            .sample_width
            .checked_mul(8)
            .ok_or_else(|| Error::processing("WAV encode", "sample width too large"))?;
        let block_align_u16 = u16::try_from(block_align)
            .map_err(|_| Error::processing("WAV encode", "block align exceeds 16 bits"))?;
        let byte_rate = format
            .frame_rate
            .checked_mul(block_align)
            .ok_or_else(|| Error::processing("WAV encode", "byte rate exceeds 32 bits"))?;

        let mut out = Vec::with_capacity(HEADER_LEN + pcm.len());
        out.extend_from_slice(RIFF);
        out.write_u32::<LittleEndian>(HEADER_LEN as u32 - 8 + data_len)?;
        out.extend_from_slice(WAVE);

        out.extend_from_slice(FMT);
        out.write_u32::<LittleEndian>(FMT_CHUNK_LEN)?;
        out.write_u16::<LittleEndian>(FORMAT_PCM)?;
        out.write_u16::<LittleEndian>(format.channels)?;
        out.write_u32::<LittleEndian>(format.frame_rate)?;
        out.write_u32::<LittleEndian>(byte_rate)?;
        out.write_u16::<LittleEndian>(block_align_u16)?;
        out.write_u16::<LittleEndian>(bits_per_sample)?;

        out.extend_from_slice(DATA);
        out.write_u32::<LittleEndian>(data_len)?;
        out.extend_from_slice(pcm);
        Ok(out)
    }
}
