//! Gallery Scenario Tests
//!
//! End-to-end walks through the controller, ledger and source together.

#[cfg(test)]
mod tests {
    use crate::{
        parse_payload, parse_query, resolve, synthesize_fallback, DeepLinkTarget, GalleryConfig,
        GalleryController, ItemOrigin, KeyValueStore, MemoryStore, PagingPolicy, ReactionKind,
        ReactionLedger,
    };

    fn setup(len: u32, page_size: usize, policy: PagingPolicy) -> GalleryController {
        let config = GalleryConfig { page_size, policy, ..Default::default() };
        let mut controller = GalleryController::new(&config).expect("valid config");
        controller.install_items(synthesize_fallback(len));
        controller
    }

    #[test]
    fn test_clamped_walk_to_last_window() {
        let mut c = setup(51, 5, PagingPolicy::Clamped);
        c.advance();
        assert_eq!(c.offset(), 5);
        for _ in 0..10 {
            c.advance();
        }
        assert_eq!(c.offset(), 50);
        assert!(c.advance().is_none());
        assert_eq!(c.offset(), 50);
        assert_eq!(c.visible_slice().len(), 1);
        assert!(!c.can_advance());
    }

    #[test]
    fn test_clamped_never_leaves_bounds() {
        for len in 1..=13u32 {
            for page_size in 1..=6usize {
                let mut c = setup(len, page_size, PagingPolicy::Clamped);
                for _ in 0..20 {
                    c.advance();
                    assert!(c.offset() < len as usize);
                    assert_eq!(
                        c.visible_slice().len(),
                        page_size.min(len as usize - c.offset())
                    );
                }
                for _ in 0..20 {
                    c.retreat();
                }
                assert_eq!(c.offset(), 0);
            }
        }
    }

    #[test]
    fn test_circular_wrap_example() {
        let mut c = setup(50, 6, PagingPolicy::Circular);
        c.retreat();
        assert_eq!(c.offset(), 44);
        c.jump_to(49);
        assert_eq!(c.offset(), 48);
        c.advance();
        assert_eq!(c.offset(), 4);
    }

    #[test]
    fn test_circular_advance_then_retreat_restores() {
        for len in 1..=11u32 {
            for page_size in 1..=14usize {
                let mut c = setup(len, page_size, PagingPolicy::Circular);
                c.jump_to_position(len);
                let start = c.offset();
                for _ in 0..7 {
                    c.advance();
                    assert!(c.offset() < len as usize);
                }
                for _ in 0..7 {
                    c.retreat();
                    assert!(c.offset() < len as usize);
                }
                assert_eq!(c.offset(), start);
            }
        }
    }

    #[test]
    fn test_deep_link_dense_list() {
        let mut c = setup(51, 5, PagingPolicy::Clamped);
        let id = parse_query("?fox=27", "fox").unwrap();
        c.apply_deep_link(id, DeepLinkTarget::ItemId);
        assert_eq!(c.offset(), 26);
        assert_eq!(c.visible_slice()[0].id, 27);
    }

    #[test]
    fn test_deep_link_absent_id() {
        let mut c = setup(51, 5, PagingPolicy::Clamped);
        assert!(c.apply_deep_link(999, DeepLinkTarget::ItemId).is_none());
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_deep_link_sparse_ids() {
        let mut c = GalleryController::new(&GalleryConfig::default()).unwrap();
        c.install_items(parse_payload(r#"[{"id": 10}, {"id": 20}, {"id": 30}]"#).unwrap());
        c.apply_deep_link(30, DeepLinkTarget::ItemId);
        assert_eq!(c.offset(), 2);
        // position mode range-checks against the list length
        c.apply_deep_link(1, DeepLinkTarget::Position);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_reactions_are_isolated() {
        let mut c = setup(10, 5, PagingPolicy::Clamped);
        for _ in 0..7 {
            c.react(4, ReactionKind::Like);
        }
        assert_eq!(c.ledger().likes(4), 7);
        assert_eq!(c.ledger().dislikes(4), 0);
        assert_eq!(c.ledger().likes(3), 0);
        assert_eq!(c.ledger().likes(5), 0);
    }

    #[test]
    fn test_react_unknown_id_starts_ledger_entry() {
        let mut c = setup(10, 5, PagingPolicy::Clamped);
        c.react(500, ReactionKind::Dislike);
        assert_eq!(c.ledger().dislikes(500), 1);
        assert!(c.items().iter().all(|item| item.dislike_count == 0));
    }

    #[test]
    fn test_failed_fetch_session() {
        let config = GalleryConfig::default();
        let store = MemoryStore::new();
        store.set("fox-gallery.likes", "garbage").unwrap();
        let keys = config.ledger_keys();

        let ledger = ReactionLedger::load(&store, &keys);
        let mut c = GalleryController::new(&config).unwrap().with_ledger(ledger);
        let loaded = resolve(parse_payload(r#"{"error": "nope"}"#), config.fallback_count);
        assert_eq!(loaded.origin, ItemOrigin::Fallback);
        c.install_items(loaded.ids);
        assert_eq!(c.len(), 51);

        c.ensure_revealed();
        c.react(1, ReactionKind::Like);
        c.ledger().persist(&store, &keys).unwrap();

        let reloaded = ReactionLedger::load(&store, &keys);
        assert_eq!(reloaded.likes(1), 1);
    }
}
