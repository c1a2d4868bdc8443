// src/services/diagram_service_tests.rs
//
// DiagramService behaviour over an in-memory catalog
//
// INVARIANTS TESTED:
// - likes == liked_by_user_ids.len() after any like/unlike sequence
// - repeated like and stray unlike are no-ops
// - public reads never return unapproved diagrams
// - every committed change reaches storage before the call returns

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::config::LatencyProfile;
    use crate::domain::diagram::entity::test_support::payload;
    use crate::domain::{validate_diagram, CitationFormat, Diagram, DiagramCategory};
    use crate::events::EventBus;
    use crate::infrastructure::{LoadOutcome, PersistenceBridge};
    use crate::repositories::{DiagramStore, InMemoryKeyValueStore, KeyValueStore};
    use crate::services::DiagramService;

    const KEY: &str = "bacteria-diagrams-data";

    struct Harness {
        service: DiagramService,
        bridge: Arc<PersistenceBridge>,
        bus: Arc<EventBus>,
    }

    fn fixture(id: &str, title: &str, subject: &str, approved: bool) -> Diagram {
        let mut diagram = Diagram::new(payload(title));
        diagram.id = id.to_string();
        diagram.subject = subject.to_string();
        diagram.approved = approved;
        diagram
    }

    fn catalog() -> Vec<Diagram> {
        let coli = fixture("diagram-1", "Escherichia coli Cell Envelope", "Escherichia coli", true);

        let mut biofilm = fixture("diagram-2", "Biofilm Stages", "Pseudomonas aeruginosa", true);
        biofilm.category = DiagramCategory::BacterialEcology;

        let mut quorum = fixture("diagram-3", "Quorum Sensing", "Vibrio fischeri", true);
        quorum.category = DiagramCategory::BacterialEcology;
        quorum.tags = vec!["E-COLI comparison".to_string()];

        let hidden = fixture("diagram-4", "Escherichia coli Plasmid", "Escherichia coli", false);

        vec![coli, biofilm, quorum, hidden]
    }

    fn harness() -> Harness {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let bridge = Arc::new(PersistenceBridge::new(kv, KEY));
        let store = Arc::new(DiagramStore::new(catalog(), bridge.clone()));
        let bus = Arc::new(EventBus::new());
        let service = DiagramService::new(store, bus.clone(), LatencyProfile::none());
        Harness { service, bridge, bus }
    }

    fn persisted(bridge: &PersistenceBridge) -> Vec<Diagram> {
        match bridge.load() {
            LoadOutcome::Loaded(diagrams) => diagrams,
            other => panic!("expected persisted catalog, got {:?}", other),
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    #[tokio::test]
    async fn test_get_all_hides_unapproved() {
        let h = harness();
        let ids: Vec<String> = h.service.get_all().await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["diagram-1", "diagram-2", "diagram-3"]);
    }

    #[tokio::test]
    async fn test_get_by_id_sees_unapproved() {
        let h = harness();
        let hidden = h.service.get_by_id("diagram-4").await.unwrap();
        assert!(hidden.is_some_and(|d| !d.approved));
        assert!(h.service.get_by_id("diagram-404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_category_match_ignores_case() {
        let h = harness();
        let ecology = h.service.get_by_category("bacterial ECOLOGY").await.unwrap();
        assert_eq!(ecology.len(), 2);

        let cellular = h.service.get_by_category("Cellular Structure").await.unwrap();
        assert_eq!(cellular.len(), 1, "unapproved diagram-4 must be excluded");
    }

    #[tokio::test]
    async fn test_search_coli_returns_only_approved_matches() {
        let h = harness();
        let ids: Vec<String> = h
            .service
            .search("coli")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();

        // diagram-1 by title/subject, diagram-3 by tag, diagram-4 is unapproved
        assert_eq!(ids, vec!["diagram-1", "diagram-3"]);
    }

    #[tokio::test]
    async fn test_search_matches_description() {
        let h = harness();
        let hits = h.service.search("A TEST DIAGRAM").await.unwrap();
        assert_eq!(hits.len(), 3);
    }

    // ========================================================================
    // LIKES
    // ========================================================================

    #[tokio::test]
    async fn test_double_like_counts_once() {
        let h = harness();

        let first = h.service.like("diagram-1", "u1").await.unwrap().unwrap();
        let second = h.service.like("diagram-1", "u1").await.unwrap().unwrap();

        assert_eq!(first.likes, 1);
        assert_eq!(second.likes, 1);
        assert_eq!(second.liked_by_user_ids, vec!["u1"]);
        assert_eq!(persisted(&h.bridge)[0].likes, 1);
    }

    #[tokio::test]
    async fn test_unlike_by_non_liker_is_noop() {
        let h = harness();

        let untouched = h.service.unlike("diagram-1", "u9").await.unwrap().unwrap();
        assert_eq!(untouched.likes, 0);
        assert!(matches!(h.bridge.load(), LoadOutcome::Missing), "no-op must not persist");
    }

    #[tokio::test]
    async fn test_like_counter_tracks_likers_through_sequence() {
        let h = harness();
        let steps = [
            ("u1", true),
            ("u2", true),
            ("u1", true),
            ("u3", false),
            ("u2", false),
            ("u2", false),
            ("u4", true),
        ];

        for (user, like) in steps {
            let diagram = if like {
                h.service.like("diagram-2", user).await
            } else {
                h.service.unlike("diagram-2", user).await
            }
            .unwrap()
            .unwrap();

            validate_diagram(&diagram).unwrap();
        }

        let diagram = h.service.get_by_id("diagram-2").await.unwrap().unwrap();
        assert_eq!(diagram.likes, 2);
        assert_eq!(diagram.liked_by_user_ids, vec!["u1", "u4"]);
    }

    #[tokio::test]
    async fn test_like_missing_diagram_is_none() {
        let h = harness();
        assert!(h.service.like("diagram-404", "u1").await.unwrap().is_none());
        assert!(h.service.unlike("diagram-404", "u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_likes_from_distinct_users() {
        let h = Arc::new(harness());

        let tasks: Vec<_> = (0..16)
            .map(|n| {
                let h = Arc::clone(&h);
                tokio::spawn(async move {
                    h.service.like("diagram-3", &format!("user-{}", n % 8)).await.unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let diagram = h.service.get_by_id("diagram-3").await.unwrap().unwrap();
        assert_eq!(diagram.likes, 8);
        validate_diagram(&diagram).unwrap();
        assert_eq!(persisted(&h.bridge)[2].likes, 8);
    }

    #[tokio::test]
    async fn test_only_effective_likes_emit_events() {
        let h = harness();
        h.service.like("diagram-1", "u1").await.unwrap();
        h.service.like("diagram-1", "u1").await.unwrap();
        h.service.unlike("diagram-1", "u1").await.unwrap();

        let log = h.bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert!(log.iter().all(|e| e.event_type == "DiagramLikeChanged"));
    }

    /// Service over a stored one-diagram catalog whose counter disagrees with its likers
    fn drifted_service(stored_likes: u32) -> DiagramService {
        let mut drifted = fixture("diagram-1", "Binary Fission", "Bacillus subtilis", true);
        drifted.likes = stored_likes;

        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(KEY, &serde_json::to_string(&[drifted]).unwrap()).unwrap();

        let bridge = Arc::new(PersistenceBridge::new(kv, KEY));
        let store = Arc::new(DiagramStore::open(bridge, &Vec::<Diagram>::new()));
        DiagramService::new(store, Arc::new(EventBus::new()), LatencyProfile::none())
    }

    proptest! {
        #[test]
        fn test_any_like_sequence_keeps_counter_equal_to_likers(
            stored_likes in 0u32..100,
            steps in prop::collection::vec((0u8..6, any::<bool>()), 1..64),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let service = drifted_service(stored_likes);
                let mut likers = BTreeSet::new();

                for (user, like) in steps {
                    let user_id = format!("u{}", user);
                    let diagram = if like {
                        likers.insert(user_id.clone());
                        service.like("diagram-1", &user_id).await
                    } else {
                        likers.remove(&user_id);
                        service.unlike("diagram-1", &user_id).await
                    }
                    .unwrap()
                    .unwrap();

                    validate_diagram(&diagram).unwrap();
                    assert_eq!(diagram.likes as usize, likers.len());
                }
            });
        }
    }

    // ========================================================================
    // UPLOAD & CITATION
    // ========================================================================

    #[tokio::test]
    async fn test_upload_goes_to_head_unapproved_and_persists() {
        let h = harness();

        let created = h.service.upload(payload("Test")).await.unwrap();

        assert!(!created.approved);
        assert_eq!(created.likes, 0);
        assert!(created.comments.is_empty());
        assert!(!h.service.get_all().await.unwrap().iter().any(|d| d.id == created.id));

        let stored = persisted(&h.bridge);
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0].id, created.id);
    }

    #[tokio::test]
    async fn test_upload_keeps_unknown_category() {
        let h = harness();
        let mut unusual = payload("Phage Tail");
        unusual.category = DiagramCategory::from("Viral Structure");

        let created = h.service.upload(unusual).await.unwrap();
        assert_eq!(created.category.as_str(), "Viral Structure");
        assert_eq!(persisted(&h.bridge)[0].category, created.category);
    }

    #[tokio::test]
    async fn test_citation_needs_no_store() {
        let h = harness();
        let mut diagram = Diagram::new(payload("Binary Fission"));
        diagram.author = Some("Dr. Q. Smith".into());
        diagram.year = Some(2022);

        assert_eq!(
            h.service.citation(&diagram, CitationFormat::Ieee),
            "[1] Dr. Q. Smith, \"Binary Fission,\" Diagram Encyclopedia, 2022."
        );
        assert_eq!(h.service.categories().len(), 6);
    }
}
