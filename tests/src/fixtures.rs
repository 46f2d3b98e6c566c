//! Registry and state fixtures shared across scenario tests.

use std::collections::HashMap;

use stratum_branch::Branch;
use stratum_core::record;
use stratum_registry::{Registry, RegistryBuilder};

/// A blog-shaped registry: articles with an author foreign key and a
/// many-to-many tags relation.
pub fn blog_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .entity("article")
        .field("title")
        .foreign_key("author", "author")
        .many_to_many("tags", "tag")
        .done()
        .unwrap();
    builder.entity("author").field("name").done().unwrap();
    builder.entity("tag").field("label").done().unwrap();
    builder.build().unwrap()
}

/// A single-entity registry for plain table scenarios.
pub fn item_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder.entity("item").field("name").done().unwrap();
    builder.build().unwrap()
}

/// A root state holding two items, ids 1 and 2.
pub fn two_item_root(registry: &Registry) -> HashMap<String, Branch> {
    let schema = registry.get("item").unwrap();
    let branch = Branch::new()
        .insert(schema, record! { "id" => 1i64, "name" => "a" })
        .unwrap()
        .insert(schema, record! { "id" => 2i64, "name" => "b" })
        .unwrap();

    [("item".to_string(), branch)].into()
}
