use proptest::prelude::*;
use scytale::columns::sanitize;
use scytale::{Columnar, Key};

proptest! {
    // Decode must invert encode for any key, message, and pass count,
    // across square and non-square column layouts alike.
    #[test]
    fn round_trip(
        key in "[a-zA-Z]{1,8}",
        message in "[ -~]{0,60}",
        passes in 1usize..=4,
    ) {
        let mut engine = Columnar::new();
        engine.set_key(&key).unwrap();

        let encoded = engine.encode(&message, passes).unwrap();
        let decoded = engine.decode(&encoded.ciphertext, passes).unwrap();
        prop_assert_eq!(decoded, sanitize(&message));
    }

    #[test]
    fn sanitize_is_idempotent(input in "[ -~]{0,60}") {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    #[test]
    fn derived_orders_are_mutually_inverse(key in "[a-zA-Z]{1,16}") {
        let key = Key::derive(&key).unwrap();
        for i in 0..key.len() {
            prop_assert_eq!(key.decode_order()[key.encode_order()[i]], i);
        }
    }

    #[test]
    fn derivation_is_deterministic(key in "[a-zA-Z]{1,16}") {
        prop_assert_eq!(Key::derive(&key).unwrap(), Key::derive(&key).unwrap());
    }

    // A key synthesized from any decode order must survive re-derivation
    // from its own letters with both orders intact.
    #[test]
    fn synthesized_keys_rederive(
        order in (1..=7usize).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle()),
    ) {
        let key = Key::from_decode_order(order);
        let rederived = Key::derive(key.letters()).unwrap();
        prop_assert_eq!(rederived.encode_order(), key.encode_order());
        prop_assert_eq!(rederived.decode_order(), key.decode_order());
    }
}
