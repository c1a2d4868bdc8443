// src/services/comment_service_tests.rs
//
// CommentService behaviour over an in-memory catalog
//
// INVARIANTS TESTED:
// - threads are two levels deep and every reply names its parent
// - only the author of an entry can delete it
// - comments and likes do not touch updated_at

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::LatencyProfile;
    use crate::domain::diagram::entity::test_support::payload;
    use crate::domain::{validate_comment, Diagram};
    use crate::events::EventBus;
    use crate::infrastructure::{LoadOutcome, PersistenceBridge};
    use crate::repositories::{DiagramStore, InMemoryKeyValueStore};
    use crate::services::CommentService;

    const DIAGRAM_ID: &str = "diagram-1";

    struct Harness {
        service: CommentService,
        store: Arc<DiagramStore>,
        bridge: Arc<PersistenceBridge>,
        bus: Arc<EventBus>,
    }

    fn harness() -> Harness {
        let mut diagram = Diagram::new(payload("Cell Wall"));
        diagram.id = DIAGRAM_ID.to_string();
        diagram.approved = true;

        let kv = Arc::new(InMemoryKeyValueStore::new());
        let bridge = Arc::new(PersistenceBridge::new(kv, "bacteria-diagrams-data"));
        let store = Arc::new(DiagramStore::new(vec![diagram], bridge.clone()));
        let bus = Arc::new(EventBus::new());
        let service = CommentService::new(store.clone(), bus.clone(), LatencyProfile::none());

        Harness {
            service,
            store,
            bridge,
            bus,
        }
    }

    fn current(h: &Harness) -> Diagram {
        h.store
            .read(|diagrams| diagrams[0].clone())
            .unwrap()
    }

    #[tokio::test]
    async fn test_comment_then_reply_builds_thread() {
        let h = harness();
        let before = current(&h).updated_at;

        assert!(h.service.add_comment(DIAGRAM_ID, "u1", "Alice", "Nice!").await.unwrap());
        let comment_id = current(&h).comments[0].id.clone();

        assert!(h
            .service
            .add_reply(DIAGRAM_ID, &comment_id, "u2", "Bob", "Agreed")
            .await
            .unwrap());

        let diagram = current(&h);
        assert_eq!(diagram.comments.len(), 1);
        assert_eq!(diagram.comments[0].text, "Nice!");
        assert_eq!(diagram.comments[0].replies.len(), 1);
        assert_eq!(diagram.comments[0].replies[0].parent_id, comment_id);
        assert_eq!(diagram.comments[0].replies[0].user_name, "Bob");
        assert_eq!(diagram.updated_at, before);
        validate_comment(&diagram.comments[0]).unwrap();

        match h.bridge.load() {
            LoadOutcome::Loaded(saved) => assert_eq!(saved[0].discussion_size(), 2),
            other => panic!("expected saved thread, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_comment_on_missing_diagram_is_false() {
        let h = harness();
        assert!(!h.service.add_comment("diagram-404", "u1", "Alice", "Hi").await.unwrap());
        assert!(matches!(h.bridge.load(), LoadOutcome::Missing));
    }

    #[tokio::test]
    async fn test_reply_to_missing_comment_is_false() {
        let h = harness();
        assert!(!h
            .service
            .add_reply(DIAGRAM_ID, "comment-404", "u2", "Bob", "Hello?")
            .await
            .unwrap());
        assert_eq!(current(&h).discussion_size(), 0);
    }

    #[tokio::test]
    async fn test_delete_requires_author() {
        let h = harness();
        h.service.add_comment(DIAGRAM_ID, "u1", "Alice", "Mine").await.unwrap();
        let comment_id = current(&h).comments[0].id.clone();

        assert!(!h.service.delete_comment(DIAGRAM_ID, &comment_id, "u2").await.unwrap());
        assert_eq!(current(&h).comments.len(), 1);

        assert!(h.service.delete_comment(DIAGRAM_ID, &comment_id, "u1").await.unwrap());
        assert!(current(&h).comments.is_empty());
    }

    #[tokio::test]
    async fn test_delete_reply_leaves_parent() {
        let h = harness();
        h.service.add_comment(DIAGRAM_ID, "u1", "Alice", "Question").await.unwrap();
        let comment_id = current(&h).comments[0].id.clone();
        h.service
            .add_reply(DIAGRAM_ID, &comment_id, "u2", "Bob", "Answer")
            .await
            .unwrap();
        let reply_id = current(&h).comments[0].replies[0].id.clone();

        // The comment author cannot remove someone else's reply
        assert!(!h.service.delete_comment(DIAGRAM_ID, &reply_id, "u1").await.unwrap());
        assert!(h.service.delete_comment(DIAGRAM_ID, &reply_id, "u2").await.unwrap());

        let diagram = current(&h);
        assert_eq!(diagram.comments.len(), 1);
        assert!(diagram.comments[0].replies.is_empty());
    }

    #[tokio::test]
    async fn test_deleting_comment_drops_its_replies() {
        let h = harness();
        h.service.add_comment(DIAGRAM_ID, "u1", "Alice", "Thread").await.unwrap();
        let comment_id = current(&h).comments[0].id.clone();
        for n in 0..3 {
            h.service
                .add_reply(DIAGRAM_ID, &comment_id, &format!("u{}", n + 2), "Someone", "+1")
                .await
                .unwrap();
        }

        assert!(h.service.delete_comment(DIAGRAM_ID, &comment_id, "u1").await.unwrap());
        assert_eq!(current(&h).discussion_size(), 0);
    }

    #[tokio::test]
    async fn test_discussion_events_are_emitted() {
        let h = harness();
        h.service.add_comment(DIAGRAM_ID, "u1", "Alice", "Hi").await.unwrap();
        let comment_id = current(&h).comments[0].id.clone();
        h.service.delete_comment(DIAGRAM_ID, &comment_id, "u9").await.unwrap();
        h.service.delete_comment(DIAGRAM_ID, &comment_id, "u1").await.unwrap();

        let kinds: Vec<String> = h.bus.get_event_log().into_iter().map(|e| e.event_type).collect();
        assert_eq!(kinds, vec!["DiscussionEntryAdded", "DiscussionEntryDeleted"]);
    }
}
