//! Property-based tests for lesson serialization.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::metadata::{LessonDocument, LessonMetadata};
    use proptest::prelude::*;

    fn slug_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,24}"
    }

    fn title_strategy() -> impl Strategy<Value = String> {
        // Single-line printable text, trimmed and non-empty after trimming
        "[ -~]{1,40}".prop_map(|s| s.trim().to_string()).prop_filter(
            "title must be non-empty after trimming",
            |s| !s.is_empty(),
        )
    }

    fn body_strategy() -> impl Strategy<Value = String> {
        "([ -~]|\n){0,200}".prop_map(|s| s.trim().to_string())
    }

    proptest! {
        #[test]
        fn test_markdown_round_trip(
            slug in slug_strategy(),
            order in any::<i32>(),
            title in title_strategy(),
            body in body_strategy(),
        ) {
            let doc = LessonDocument {
                metadata: LessonMetadata {
                    slug,
                    order: i64::from(order),
                    title,
                },
                body,
            };

            let parsed = LessonDocument::parse(&doc.to_markdown()).unwrap();
            prop_assert_eq!(parsed, doc);
        }
    }
}
