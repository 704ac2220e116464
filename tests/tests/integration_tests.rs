//! Integration tests across the keystream, masking and container layers

use a5cipher::prelude::*;
use a5cipher_algorithms::FixedBitSource;
use a5cipher_tests::ramp_pcm16;
use a5cipher_tests::vectors::*;

#[test]
fn test_keystream_known_answers() {
    for vector in KEYSTREAM_VECTORS {
        let mut cipher = A51::from_hex(vector.key_hex).unwrap();
        let bits: Vec<u8> = cipher.generate(vector.bits.len()).collect();
        assert_eq!(bits, vector.bits, "key {}", vector.key_hex);
    }
}

#[test]
fn test_long_keystream_weight() {
    let mut cipher = A51::from_hex("ffffffffffffffff").unwrap();
    let weight = cipher.generate(25_000).filter(|&bit| bit == 1).count();
    assert_eq!(weight, ONES_KEY_25000_BIT_WEIGHT);
}

#[test]
fn test_masking_known_answers() {
    let mut cipher = A51::from_hex("ffffffffffffffff").unwrap();
    let masking = SampleCipher::default();

    let masked = masking.apply(&SampleBuffer::U8(ONES_KEY_U8_INPUT.to_vec()), &mut cipher);
    assert_eq!(masked, SampleBuffer::U8(ONES_KEY_U8_MASKED.to_vec()));

    let masked = masking.apply(&SampleBuffer::I16(ONES_KEY_I16_INPUT.to_vec()), &mut cipher);
    assert_eq!(masked, SampleBuffer::I16(ONES_KEY_I16_MASKED.to_vec()));
}

#[test]
fn test_u8_silence_round_trip() {
    let mut cipher = A51::from_hex("0123456789abcdef").unwrap();
    let masking = SampleCipher::default();
    let silence = SampleBuffer::U8(vec![128; 30_000]);

    let masked = masking.apply(&silence, &mut cipher);
    assert_ne!(masked, silence);
    if let SampleBuffer::U8(values) = &masked {
        assert!(values.iter().all(|&v| v == 128 || v == 127));
    }
    assert_eq!(masking.apply(&masked, &mut cipher), silence);
}

#[test]
fn test_i16_extremes_round_trip() {
    let mut cipher = A51::from_hex("deadbeefcafef00d").unwrap();
    let masking = SampleCipher::default();
    let extremes = SampleBuffer::I16(
        [-32768, -32767, -1, 0, 1, 32766, 32767]
            .iter()
            .copied()
            .cycle()
            .take(21_000)
            .collect(),
    );

    let masked = masking.apply(&extremes, &mut cipher);
    assert_eq!(masking.apply(&masked, &mut cipher), extremes);
}

#[test]
fn test_wav_bytes_round_trip() {
    let format = FormatDescriptor::new(2, 2, 44_100, 12_000);
    let wav = WavContainer.encode(&format, &ramp_pcm16(24_000)).unwrap();
    let mut cipher = A51::from_hex("0123456789abcdef").unwrap();
    let masking = SampleCipher::default();

    let masked = a5cipher::audio::process_audio_bytes(&WavContainer, &wav, &mut cipher, &masking)
        .unwrap();
    assert_eq!(masked.len(), wav.len());
    assert_eq!(&masked[..44], &wav[..44]);
    assert_ne!(masked, wav);

    let restored =
        a5cipher::audio::process_audio_bytes(&WavContainer, &masked, &mut cipher, &masking)
            .unwrap();
    assert_eq!(restored, wav);
}

#[test]
fn test_wrong_key_does_not_restore() {
    let format = FormatDescriptor::new(1, 2, 8_000, 4_000);
    let wav = WavContainer.encode(&format, &ramp_pcm16(4_000)).unwrap();
    let masking = SampleCipher::default();

    let mut right = A51::from_hex("0123456789abcdef").unwrap();
    let mut wrong = A51::from_hex("0123456789abcdee").unwrap();
    let masked =
        a5cipher::audio::process_audio_bytes(&WavContainer, &wav, &mut right, &masking).unwrap();
    let garbled =
        a5cipher::audio::process_audio_bytes(&WavContainer, &masked, &mut wrong, &masking).unwrap();
    assert_ne!(garbled, wav);
}

#[test]
fn test_random_key_round_trip() {
    let mut cipher = A51::with_random_key(&mut FixedBitSource::new(vec![1, 0, 1, 1, 0]));
    let hex = cipher.key_hex();
    assert_eq!(hex.len(), 16);

    let masking = SampleCipher::default();
    let samples = SampleBuffer::I16((-500..500).collect());
    let masked = masking.apply(&samples, &mut cipher);

    // a fresh generator built from the reported key undoes the masking
    let mut replay = A51::from_hex(&hex).unwrap();
    assert_eq!(masking.apply(&masked, &mut replay), samples);
}

#[test]
fn test_os_random_keys_differ() {
    let a = A51::random();
    let b = A51::random();
    // 2^-64 collision chance
    assert_ne!(a.key_hex(), b.key_hex());
}

#[test]
fn test_zeroize_clears_state() {
    let mut cipher = A51::from_hex("0123456789abcdef").unwrap();
    cipher.zeroize();
    assert_eq!(cipher.key_hex(), "0000000000000000");
    assert!(cipher.generate(64).all(|bit| bit == 0));
}
