//! Property-based tests for `Port`, `PortRange` and allocation.

use std::collections::HashSet;

use super::{MockPortProbe, Port, PortAllocator, PortRange, SERVER_PORT_KEY};
use crate::store::Store;
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn port_accepts_every_non_zero_value(value in Port::MIN..=Port::MAX) {
        prop_assert_eq!(Port::try_from(value).unwrap().value(), value);
    }

    #[test]
    fn stored_port_text_round_trips(value in Port::MIN..=Port::MAX) {
        let port = Port::try_from(value).unwrap();
        prop_assert_eq!(Port::parse_stored(&port.to_string()), Some(port));
    }

    #[test]
    fn from_bounds_rounds_inward(
        min in 1.0f64..30000.0,
        width in 1.0f64..30000.0,
    ) {
        let max = min + width;
        let range = PortRange::from_bounds(min, max).unwrap();

        prop_assert_eq!(f64::from(range.min().value()), min.ceil());
        prop_assert_eq!(f64::from(range.max().value()), max.floor());
    }

    #[test]
    fn from_bounds_rejects_inverted(min in 2u16..=Port::MAX, gap in 1u16..=100) {
        let max = min.saturating_sub(gap).max(1);
        prop_assume!(max < min);
        prop_assert!(PortRange::from_bounds(f64::from(min), f64::from(max)).is_err());
    }

    #[test]
    fn range_len_counts_both_ends(min in Port::MIN..=60000, width in 0u16..=5000) {
        let range = PortRange::new(
            Port::try_from(min).unwrap(),
            Port::try_from(min + width).unwrap(),
        ).unwrap();
        prop_assert_eq!(range.len(), u32::from(width) + 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn allocation_stays_in_range_and_is_remembered(
        min in 1024u16..60000,
        width in 0u16..50,
        occupied_offsets in prop::collection::hash_set(0u16..50, 0..10),
    ) {
        let max = min + width;
        let occupied: HashSet<Port> = occupied_offsets
            .into_iter()
            .filter(|offset| *offset < width)
            .map(|offset| Port::try_from(min + offset).unwrap())
            .collect();
        let range = PortRange::new(Port::try_from(min).unwrap(), Port::try_from(max).unwrap()).unwrap();

        let temp = tempfile::TempDir::new().unwrap();
        let (allocated, stored) = runtime().block_on(async {
            let store = Store::open(temp.path()).await.unwrap();
            let allocator = PortAllocator::with_probe(MockPortProbe::new(occupied.clone()));
            let allocated = allocator.allocate(&store, range).await.unwrap();
            let stored = store.get(SERVER_PORT_KEY).await.unwrap();
            (allocated, stored)
        });

        prop_assert!(range.contains(allocated));
        prop_assert!(!occupied.contains(&allocated));
        prop_assert_eq!(stored, Some(allocated.to_string()));
    }
}
