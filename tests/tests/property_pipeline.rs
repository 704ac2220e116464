//! Property-based tests for the sample masking pipeline

use a5cipher_algorithms::{Key, A51};
use a5cipher_api::{FormatDescriptor, SampleWidth};
use a5cipher_audio::{
    mask_sample, process_audio_bytes, AudioContainer, PipelineConfig, SampleBuffer, SampleCipher,
    WavContainer,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mask_sample_is_an_involution_u8(sample in any::<u8>(), bit in 0u8..=1) {
        let once = mask_sample(i32::from(sample), bit, SampleWidth::U8);
        prop_assert!((0..=255).contains(&once));
        prop_assert_eq!(mask_sample(once, bit, SampleWidth::U8), i32::from(sample));
    }

    #[test]
    fn mask_sample_is_an_involution_i16(sample in any::<i16>(), bit in 0u8..=1) {
        let once = mask_sample(i32::from(sample), bit, SampleWidth::I16);
        prop_assert!((-32768..=32767).contains(&once));
        prop_assert_eq!(mask_sample(once, bit, SampleWidth::I16), i32::from(sample));
    }

    #[test]
    fn i16_round_trip(
        bytes in any::<[u8; 8]>(),
        samples in prop::collection::vec(any::<i16>(), 0..3_000),
    ) {
        let mut cipher = A51::new(Key::from_bytes(bytes));
        let masking = SampleCipher::default();
        let original = SampleBuffer::I16(samples);
        let masked = masking.apply(&original, &mut cipher);
        prop_assert_eq!(masked.len(), original.len());
        prop_assert_eq!(masking.apply(&masked, &mut cipher), original);
    }

    #[test]
    fn chunk_size_does_not_change_output(
        bytes in any::<[u8; 8]>(),
        samples in prop::collection::vec(any::<u8>(), 0..2_500),
        chunk_size in 1usize..3_000,
    ) {
        let mut cipher = A51::new(Key::from_bytes(bytes));
        let buffer = SampleBuffer::U8(samples);
        let reference = SampleCipher::default().apply(&buffer, &mut cipher);

        let config = PipelineConfig::with_chunk_size(chunk_size).unwrap();
        let chunked = SampleCipher::new(config).apply(&buffer, &mut cipher);
        prop_assert_eq!(chunked, reference);
    }

    #[test]
    fn wav_pipeline_round_trip(
        bytes in any::<[u8; 8]>(),
        channels in 1u16..=2,
        frames in prop::collection::vec(any::<i16>(), 0..1_000),
    ) {
        let frame_count = frames.len() / usize::from(channels);
        let pcm: Vec<u8> = frames[..frame_count * usize::from(channels)]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let format = FormatDescriptor::new(channels, 2, 16_000, frame_count as u32);
        let wav = WavContainer.encode(&format, &pcm).unwrap();

        let mut cipher = A51::new(Key::from_bytes(bytes));
        let masking = SampleCipher::default();
        let masked = process_audio_bytes(&WavContainer, &wav, &mut cipher, &masking).unwrap();
        let (masked_format, _) = WavContainer.decode(&masked).unwrap();
        prop_assert_eq!(masked_format, format);

        let restored = process_audio_bytes(&WavContainer, &masked, &mut cipher, &masking).unwrap();
        prop_assert_eq!(restored, wav);
    }
}
