//! Many-to-many relation materialization scenarios.

use stratum_tests::prelude::*;

mod synthesis {
    use super::*;

    #[test]
    fn test_many_to_many_yields_a_through_entity_with_two_foreign_keys() {
        // GIVEN/WHEN: entity A declares a many-to-many at entity B
        let registry = blog_registry();

        // THEN: the through-entity exists with one key per side
        let through = registry.get("article__tags").unwrap();
        assert!(through.synthetic);
        assert_eq!(
            through.field("from_article"),
            Some(&FieldKind::ForeignKey {
                target: "article".into()
            })
        );
        assert_eq!(
            through.field("to_tag"),
            Some(&FieldKind::ForeignKey {
                target: "tag".into()
            })
        );
    }

    #[test]
    fn test_back_reference_declares_its_own_through_without_collision() {
        // GIVEN: B also declares a many-to-many back at A
        let mut builder = RegistryBuilder::new();
        builder
            .entity("article")
            .many_to_many("tags", "tag")
            .done()
            .unwrap();
        builder
            .entity("tag")
            .many_to_many("articles", "article")
            .done()
            .unwrap();

        // WHEN
        let registry = builder.build().unwrap();

        // THEN: two distinct through-entities, no field collisions
        assert!(registry.contains("article__tags"));
        assert!(registry.contains("tag__articles"));
        let back = registry.get("tag__articles").unwrap();
        assert!(back.has_field("from_tag"));
        assert!(back.has_field("to_article"));
    }

    #[test]
    fn test_synthesis_is_idempotent_across_resolution_passes() {
        let first = blog_registry();
        let second = blog_registry();

        let mut first_names: Vec<&str> = first.entity_names().collect();
        let mut second_names: Vec<&str> = second.entity_names().collect();
        first_names.sort_unstable();
        second_names.sort_unstable();
        assert_eq!(first_names, second_names);

        for schema in first.schemas() {
            assert_eq!(Some(schema), second.get(&schema.name));
        }
    }

    #[test]
    fn test_self_referencing_relation_keeps_its_sides_distinct() {
        // GIVEN
        let mut builder = RegistryBuilder::new();
        builder
            .entity("person")
            .field("name")
            .many_to_many("friends", SELF_TARGET)
            .done()
            .unwrap();

        // WHEN
        let registry = builder.build().unwrap();

        // THEN: both keys target "person" under different names
        let through = registry.get("person__friends").unwrap();
        assert_eq!(
            through.field("from_person").and_then(FieldKind::target),
            Some("person")
        );
        assert_eq!(
            through.field("to_person").and_then(FieldKind::target),
            Some("person")
        );
    }
}

mod through_rows {
    use super::*;

    #[test]
    fn test_relation_rows_fold_like_any_other_entity() {
        // GIVEN: an article, two tags, and two through rows linking them
        let registry = blog_registry();
        let mut session = Session::open(&registry, HashMap::new());

        session
            .add_mutation(Mutation::create(
                "article",
                record! { "id" => 1i64, "title" => "t" },
            ))
            .unwrap();
        for (tag_id, label) in [(1i64, "rust"), (2i64, "db")] {
            session
                .add_mutation(Mutation::create(
                    "tag",
                    record! { "id" => tag_id, "label" => label },
                ))
                .unwrap();
            session
                .add_mutation(Mutation::create(
                    "article__tags",
                    record! {
                        "from_article" => RecordId::Int(1),
                        "to_tag" => RecordId::Int(tag_id),
                    },
                ))
                .unwrap();
        }

        // WHEN
        let links = session.next_state("article__tags").unwrap();

        // THEN: two link rows, each holding scalar refs for both sides
        assert_eq!(links.len(), 2);
        let targets: Vec<&RecordId> = links
            .iter()
            .filter_map(|r| r.get("to_tag").and_then(|v| v.as_ref_id()))
            .collect();
        assert_eq!(targets, vec![&RecordId::Int(1), &RecordId::Int(2)]);
    }

    #[test]
    fn test_unlinking_is_a_plain_delete_on_the_through_branch() {
        // GIVEN: one link row
        let registry = blog_registry();
        let mut session = Session::open(&registry, HashMap::new());
        session
            .add_mutation(Mutation::create(
                "article__tags",
                record! {
                    "id" => 1i64,
                    "from_article" => RecordId::Int(1),
                    "to_tag" => RecordId::Int(1),
                },
            ))
            .unwrap();
        let linked = session.next_state("article__tags").unwrap();
        assert_eq!(linked.len(), 1);

        // WHEN: the next cycle deletes it
        let root = [("article__tags".to_string(), linked)].into();
        let mut next_session = Session::open(&registry, root);
        next_session
            .add_mutation(Mutation::delete("article__tags", 1i64))
            .unwrap();

        // THEN
        assert!(next_session
            .next_state("article__tags")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_no_cross_entity_ordering_is_required() {
        // A through row may be created before either side exists; the
        // engine enforces no relational integrity across branches.
        let registry = blog_registry();
        let mut session = Session::open(&registry, HashMap::new());

        session
            .add_mutation(Mutation::create(
                "article__tags",
                record! {
                    "from_article" => RecordId::Int(9),
                    "to_tag" => RecordId::Int(9),
                },
            ))
            .unwrap();

        assert_eq!(session.next_state("article__tags").unwrap().len(), 1);
        assert!(session.next_state("article").unwrap().is_empty());
    }
}
