//! Property-based tests for key handling and keystream generation

use a5cipher_algorithms::{clock_all, majority, Key, KeystreamGenerator, A51};
use a5cipher_tests::random_bank;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Split points covering `total` bits in arbitrary pieces
fn chunk_lengths(total: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=total, 0..8).prop_map(move |mut cuts| {
        cuts.push(0);
        cuts.push(total);
        cuts.sort_unstable();
        cuts.windows(2).map(|w| w[1] - w[0]).collect()
    })
}

proptest! {
    #[test]
    fn hex_key_round_trip(hex in "[0-9a-f]{16}") {
        let key = Key::from_hex(&hex).unwrap();
        prop_assert_eq!(key.to_hex(), hex);
    }

    #[test]
    fn uppercase_hex_is_normalized(hex in "[0-9A-F]{16}") {
        let key = Key::from_hex(&hex).unwrap();
        prop_assert_eq!(key.to_hex(), hex.to_ascii_lowercase());
    }

    #[test]
    fn wrong_length_hex_rejected(hex in "[0-9a-f]{0,15}|[0-9a-f]{17,24}") {
        prop_assert!(Key::from_hex(&hex).is_err());
    }

    #[test]
    fn bytes_unpack_msb_first(bytes in any::<[u8; 8]>()) {
        let key = Key::from_bytes(bytes);
        for (i, byte) in bytes.iter().enumerate() {
            for j in 0..8 {
                prop_assert_eq!(key.bit(i * 8 + j), (byte >> (7 - j)) & 1);
            }
        }
        prop_assert_eq!(&*key.to_bytes(), &bytes);
    }

    #[test]
    fn keystream_is_deterministic(bytes in any::<[u8; 8]>(), len in 0usize..2_000) {
        let mut a = A51::new(Key::from_bytes(bytes));
        let mut b = A51::new(Key::from_bytes(bytes));
        let xs: Vec<u8> = a.generate(len).collect();
        let ys: Vec<u8> = b.generate(len).collect();
        prop_assert!(xs.iter().all(|&bit| bit <= 1));
        prop_assert_eq!(xs, ys);
    }

    #[test]
    fn chunked_generation_is_invariant(
        bytes in any::<[u8; 8]>(),
        pieces in chunk_lengths(1_500),
    ) {
        let mut cipher = A51::new(Key::from_bytes(bytes));
        let whole: Vec<u8> = cipher.generate(1_500).collect();

        cipher.reset();
        let mut joined = Vec::with_capacity(1_500);
        for len in pieces {
            joined.extend(cipher.generate(len));
        }
        prop_assert_eq!(joined, whole);
    }

    #[test]
    fn majority_clocks_at_least_two(seed in any::<u64>(), steps in 1usize..64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut bank = random_bank(&mut rng);
        for _ in 0..steps {
            let maj = majority(&bank);
            let clock_bits = bank.clock_bits();
            let clocked = clock_all(&mut bank);
            prop_assert!(clocked.count() >= 2);
            prop_assert_eq!(clocked.r1, clock_bits[0] == maj);
            prop_assert_eq!(clocked.r2, clock_bits[1] == maj);
            prop_assert_eq!(clocked.r3, clock_bits[2] == maj);
        }
    }
}
