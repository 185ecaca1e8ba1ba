use varo_core::{build_groups, selected_node, CatalogStore, DisplayMode, Node};

fn grouped(id: &str, name: &str, group: &str, category: &str) -> Node {
    let mut node = Node::new(id, name);
    node.group_id = group.to_string();
    node.category = category.to_string();
    node
}

fn sample_catalog() -> Vec<Node> {
    let mut max_2024 = grouped("uuid-3dsmax-2024", "3ds Max 2024", "3dsmax", "3D");
    max_2024.default_for_group = true;
    max_2024.description = Some("Latest stable build with vray and tyflow".to_string());

    let mut max_2023 = grouped("uuid-3dsmax-2023", "3ds Max 2023", "3dsmax", "3D");
    max_2023.visible = false;

    let nuke = grouped("uuid-nuke-15", "Nuke 15", "nuke", "Compositing");

    let mut loose = Node::new("uuid-djv", "DJV Viewer");
    loose.category = "Utility".to_string();

    vec![max_2023, max_2024, nuke, loose]
}

#[test]
fn groups_never_empty_and_members_share_group_id() {
    let nodes = sample_catalog();
    let groups = build_groups(&nodes);

    assert!(!groups.is_empty());
    for group in &groups {
        assert!(!group.nodes.is_empty());
        for member_id in &group.nodes {
            let member = nodes.iter().find(|node| &node.id == member_id).unwrap();
            assert_eq!(member.group_key(), Some(group.id.as_str()));
        }
    }
}

#[test]
fn selected_node_is_always_a_member() {
    let nodes = sample_catalog();
    for group in build_groups(&nodes) {
        let selected = selected_node(&group, &nodes).expect("non-empty group has a selection");
        assert!(group.contains(&selected.id));
    }
}

#[test]
fn default_for_group_wins_selection() {
    let mut store = CatalogStore::new();
    store.set_nodes(vec![
        grouped("a", "Tool 1.0", "g1", "3D"),
        {
            let mut node = grouped("b", "Tool 2.0", "g1", "3D");
            node.default_for_group = true;
            node
        },
    ]);

    assert_eq!(store.groups().len(), 1);
    assert_eq!(store.groups()[0].nodes, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(store.selected_node("g1").map(|n| n.id.as_str()), Some("b"));
}

#[test]
fn explicit_selection_is_discarded_by_rebuild() {
    let nodes = vec![
        grouped("a", "Tool 1.0", "g1", "3D"),
        grouped("b", "Tool 2.0", "g1", "3D"),
    ];
    let mut store = CatalogStore::new();
    store.set_nodes(nodes.clone());

    store.select_group_variant("g1", "b").unwrap();
    assert_eq!(store.selected_node("g1").map(|n| n.id.as_str()), Some("b"));

    store.set_nodes(nodes);
    assert_eq!(store.selected_node("g1").map(|n| n.id.as_str()), Some("a"));
}

#[test]
fn filtered_nodes_composes_search_and_visibility() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());

    // Hidden node fails visibility despite its name matching.
    store.set_search_query("3ds max");
    let ids: Vec<&str> = store.filtered_nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["uuid-3dsmax-2024"]);

    store.toggle_hidden_node_visibility();
    let ids: Vec<&str> = store.filtered_nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["uuid-3dsmax-2023", "uuid-3dsmax-2024"]);

    // Description text participates in node search.
    store.show_hidden_nodes = false;
    store.set_search_query("tyflow");
    let ids: Vec<&str> = store.filtered_nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["uuid-3dsmax-2024"]);
}

#[test]
fn filtered_nodes_is_idempotent_without_mutation() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());
    store.set_search_query("nuke");

    let first: Vec<String> = store.filtered_nodes().iter().map(|n| n.id.clone()).collect();
    let second: Vec<String> = store.filtered_nodes().iter().map(|n| n.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn hidden_group_excludes_matching_members() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());

    store.toggle_group_visibility("nuke").unwrap();
    store.set_search_query("nuke");
    assert!(store.filtered_groups().is_empty());

    store.toggle_hidden_node_visibility();
    let ids: Vec<&str> = store.filtered_groups().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["nuke"]);
}

#[test]
fn visibility_toggle_propagates_without_rebuild() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());

    assert_eq!(store.filtered_nodes().len(), 3);
    store.toggle_node_visibility("uuid-nuke-15").unwrap();
    assert_eq!(store.filtered_nodes().len(), 2);

    store.unhide_all_nodes();
    assert_eq!(store.filtered_nodes().len(), 4);
    // Idempotent.
    store.unhide_all_nodes();
    assert_eq!(store.filtered_nodes().len(), 4);
}

#[test]
fn category_grouped_partition_covers_every_node_exactly_once() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());
    store.set_display_mode(DisplayMode::CategoryGrouped);
    store.show_hidden_nodes = true;

    let mut seen: Vec<String> = Vec::new();
    let group_members: Vec<(String, Vec<String>)> = store
        .groups()
        .iter()
        .map(|group| (group.id.clone(), group.nodes.clone()))
        .collect();

    for category in store.filtered_categories() {
        seen.extend(category.nodes.iter().cloned());
        for group_id in &category.groups {
            let (_, members) = group_members
                .iter()
                .find(|(id, _)| id == group_id)
                .expect("attached group exists");
            seen.extend(members.iter().cloned());
        }
    }

    let mut expected: Vec<String> = store.nodes().iter().map(|n| n.id.clone()).collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn category_mode_lists_every_filtered_node_loose() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());
    store.set_display_mode(DisplayMode::Category);
    store.show_hidden_nodes = true;

    let categories = store.filtered_categories();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["3D", "Compositing", "Utility"]);

    assert!(categories.iter().all(|category| category.groups.is_empty()));
    let loose_total: usize = categories.iter().map(|category| category.nodes.len()).sum();
    assert_eq!(loose_total, 4);
}

#[test]
fn category_grouped_mode_never_duplicates_grouped_nodes_loose() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());
    store.set_display_mode(DisplayMode::CategoryGrouped);

    let catalog = sample_catalog();
    for category in store.filtered_categories() {
        for node_id in &category.nodes {
            // Loose entries are strictly ungrouped nodes.
            let node = catalog
                .iter()
                .find(|node| &node.id == node_id)
                .expect("loose entry exists");
            assert_eq!(node.group_key(), None);
        }
    }
}

#[test]
fn filtered_categories_resets_between_calls() {
    let mut store = CatalogStore::new();
    store.set_nodes(sample_catalog());
    store.set_display_mode(DisplayMode::CategoryGrouped);

    store.set_search_query("nuke");
    let with_query: Vec<usize> = store
        .filtered_categories()
        .iter()
        .map(|category| category.nodes.len() + category.groups.len())
        .collect();

    store.set_search_query("");
    let without_query: Vec<usize> = store
        .filtered_categories()
        .iter()
        .map(|category| category.nodes.len() + category.groups.len())
        .collect();

    assert!(with_query.iter().sum::<usize>() < without_query.iter().sum::<usize>());

    store.set_search_query("nuke");
    let with_query_again: Vec<usize> = store
        .filtered_categories()
        .iter()
        .map(|category| category.nodes.len() + category.groups.len())
        .collect();
    assert_eq!(with_query, with_query_again);
}

#[test]
fn empty_catalog_yields_empty_views_without_panicking() {
    let mut store = CatalogStore::new();
    store.set_nodes(Vec::new());

    assert!(store.filtered_nodes().is_empty());
    assert!(store.filtered_groups().is_empty());
    assert!(store.filtered_categories().is_empty());
    assert_eq!(store.selected_node("anything"), None);
}
