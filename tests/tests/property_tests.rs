// tests/property_tests.rs
use proptest::prelude::*;
use sskdf_algorithms::hash::HashAlgorithm;
use sskdf_algorithms::kdf::single_step;

fn any_hash() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_has_requested_length(
        hash in any_hash(),
        z in prop::collection::vec(any::<u8>(), 0..64),
        fixed_info in prop::collection::vec(any::<u8>(), 0..64),
        len in 1usize..300,
    ) {
        let okm = single_step::derive(hash, &z, len, &fixed_info).unwrap();
        prop_assert_eq!(okm.len(), len);
    }

    #[test]
    fn derivation_is_deterministic(
        hash in any_hash(),
        z in prop::collection::vec(any::<u8>(), 0..64),
        fixed_info in prop::collection::vec(any::<u8>(), 0..64),
        len in 1usize..300,
    ) {
        let a = single_step::derive(hash, &z, len, &fixed_info).unwrap();
        let b = single_step::derive(hash, &z, len, &fixed_info).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn shorter_output_is_a_prefix(
        hash in any_hash(),
        z in prop::collection::vec(any::<u8>(), 1..64),
        fixed_info in prop::collection::vec(any::<u8>(), 0..64),
        short in 1usize..150,
        extra in 0usize..150,
    ) {
        let long = single_step::derive(hash, &z, short + extra, &fixed_info).unwrap();
        let prefix = single_step::derive(hash, &z, short, &fixed_info).unwrap();
        prop_assert_eq!(&long[..short], prefix.as_slice());
    }

    #[test]
    fn first_block_is_counter_one_digest(
        hash in any_hash(),
        z in prop::collection::vec(any::<u8>(), 0..64),
        fixed_info in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let digest = hash
            .digest_chunks(&[[0u8, 0, 0, 1].as_slice(), &z, &fixed_info])
            .unwrap();
        let okm = single_step::derive(hash, &z, digest.len(), &fixed_info).unwrap();
        prop_assert_eq!(okm.as_slice(), digest.as_slice());
    }

    #[test]
    fn verify_accepts_own_output(
        hash in any_hash(),
        z in prop::collection::vec(any::<u8>(), 0..64),
        len in 1usize..100,
    ) {
        let okm = single_step::derive(hash, &z, len, b"").unwrap();
        prop_assert!(single_step::verify(hash, &z, b"", &okm).unwrap());
    }

    #[test]
    fn hex_round_trips_vectors(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = sskdf_utils::bytes_to_hex(&bytes);
        prop_assert_eq!(sskdf_utils::hex_to_bytes(&encoded).unwrap(), bytes);
    }
}
