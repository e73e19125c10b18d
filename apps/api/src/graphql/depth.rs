//! Query depth validation
//!
//! The schema is self-referential (user → subscribers → user → …), so a
//! client can write arbitrarily deep queries. Before execution, the parsed
//! document is walked and rejected if any path nests deeper than the
//! configured maximum; no resolver runs for a rejected query.
//!
//! The walk is over the query document, not the schema type graph, so it
//! always terminates: documents are finite and fragment-spread cycles are
//! cut with a visited stack.

use async_graphql::parser::types::{
    ExecutableDocument, Selection, SelectionSet,
};
use async_graphql::Name;

/// One over-nested path in a query document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthViolation {
    /// The first field past the limit on the offending path
    pub field: String,

    /// Nesting depth of that field, counting field selections from the root
    pub depth: usize,

    /// The limit that was exceeded
    pub max_depth: usize,
}

impl DepthViolation {
    /// Human-readable message, surfaced as a GraphQL error
    pub fn message(&self) -> String {
        format!(
            "'{}' exceeds maximum operation depth of {}",
            self.field, self.max_depth
        )
    }
}

/// Check every operation in `document` against `max_depth`.
///
/// A field's depth is the count of nested field selections from the
/// operation root (root fields are at depth 1); fragment spreads and inline
/// fragments do not add depth of their own. Returns one violation per field
/// that first crosses the limit; an empty result means the document may be
/// executed. A document nested exactly at `max_depth` passes.
pub fn check_depth(document: &ExecutableDocument, max_depth: usize) -> Vec<DepthViolation> {
    let mut violations = Vec::new();
    for (_, operation) in document.operations.iter() {
        let mut fragment_stack = Vec::new();
        walk_selection_set(
            &operation.node.selection_set.node,
            document,
            1,
            max_depth,
            &mut fragment_stack,
            &mut violations,
        );
    }
    violations
}

fn walk_selection_set(
    selection_set: &SelectionSet,
    document: &ExecutableDocument,
    depth: usize,
    max_depth: usize,
    fragment_stack: &mut Vec<Name>,
    violations: &mut Vec<DepthViolation>,
) {
    for item in &selection_set.items {
        match &item.node {
            Selection::Field(field) => {
                if depth > max_depth {
                    violations.push(DepthViolation {
                        field: field.node.name.node.to_string(),
                        depth,
                        max_depth,
                    });
                    // One violation per offending path; nothing below this
                    // field can be shallower, so stop here.
                    continue;
                }
                walk_selection_set(
                    &field.node.selection_set.node,
                    document,
                    depth + 1,
                    max_depth,
                    fragment_stack,
                    violations,
                );
            }
            Selection::FragmentSpread(spread) => {
                let name = &spread.node.fragment_name.node;
                if fragment_stack.contains(name) {
                    // Spread cycle; the document is invalid anyway, but the
                    // walk must not recurse forever
                    continue;
                }
                if let Some(fragment) = document.fragments.get(name) {
                    fragment_stack.push(name.clone());
                    walk_selection_set(
                        &fragment.node.selection_set.node,
                        document,
                        depth,
                        max_depth,
                        fragment_stack,
                        violations,
                    );
                    fragment_stack.pop();
                }
            }
            Selection::InlineFragment(inline) => {
                walk_selection_set(
                    &inline.node.selection_set.node,
                    document,
                    depth,
                    max_depth,
                    fragment_stack,
                    violations,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::parser::parse_query;
    use rstest::rstest;

    /// `query { users { subscribers { ... id } } }` with the leaf `id`
    /// at field depth `levels`
    fn nested_users_query(levels: usize) -> String {
        assert!(levels >= 2);
        let mut query = String::from("query { users {");
        for _ in 0..levels - 2 {
            query.push_str(" subscribers {");
        }
        query.push_str(" id ");
        for _ in 0..levels - 1 {
            query.push('}');
        }
        query.push('}');
        query
    }

    #[test]
    fn accepts_query_at_the_limit() {
        let doc = parse_query("query { users { profile { memberTier { id } } } }").unwrap();
        assert!(check_depth(&doc, 4).is_empty());
    }

    #[test]
    fn rejects_query_one_level_beyond_the_limit() {
        let doc = parse_query("query { users { profile { memberTier { id } } } }").unwrap();
        let violations = check_depth(&doc, 3);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "id");
        assert_eq!(violations[0].depth, 4);
        assert_eq!(
            violations[0].message(),
            "'id' exceeds maximum operation depth of 3"
        );
    }

    #[rstest]
    #[case(3, 5, true)]
    #[case(5, 5, true)]
    #[case(6, 5, false)]
    #[case(9, 5, false)]
    fn self_referential_nesting(
        #[case] levels: usize,
        #[case] max_depth: usize,
        #[case] ok: bool,
    ) {
        let doc = parse_query(nested_users_query(levels)).unwrap();
        assert_eq!(check_depth(&doc, max_depth).is_empty(), ok);
    }

    #[test]
    fn fragment_spreads_count_at_their_spread_depth() {
        let doc = parse_query(
            r#"
            query { users { ...UserBits } }
            fragment UserBits on User { profile { memberTier { id } } }
            "#,
        )
        .unwrap();
        // users=1, then the fragment inlines at depth 2:
        // profile=2, memberTier=3, id=4
        assert!(check_depth(&doc, 4).is_empty());
        assert_eq!(check_depth(&doc, 3).len(), 1);
    }

    #[test]
    fn inline_fragments_add_no_depth() {
        let doc = parse_query("query { users { ... on User { id } } }").unwrap();
        assert!(check_depth(&doc, 2).is_empty());
    }

    #[test]
    fn cyclic_fragments_terminate() {
        let doc = parse_query(
            r#"
            query { users { ...A } }
            fragment A on User { subscribers { ...B } }
            fragment B on User { subscribedTo { ...A } }
            "#,
        )
        .unwrap();
        // The cycle is cut after one round; the walk must finish and the
        // already-walked fields still count against the limit.
        assert!(!check_depth(&doc, 2).is_empty());
    }

    #[test]
    fn reports_one_violation_per_offending_path() {
        let doc = parse_query(
            "query { users { posts { id title } profile { yearOfBirth isMale } } }",
        )
        .unwrap();
        let violations = check_depth(&doc, 2);
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "title", "yearOfBirth", "isMale"]);
    }

    #[test]
    fn walks_every_operation_in_the_document() {
        let doc = parse_query(
            r#"
            query Shallow { users { id } }
            query Deep { users { posts { id } } }
            "#,
        )
        .unwrap();
        let violations = check_depth(&doc, 2);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "id");
    }
}
