use crate::net::{Category, InventorySnapshot, Registry};

#[test]
fn snapshot_lists_categories_connections_and_routes() {
    let mut reg = Registry::new();
    let sw = reg.add_device("switch", "s1", "10.0.0.1");
    let r = reg.add_device("router", "r1", "10.0.0.254");
    let pc = reg.add_device("laptop", "pc", "10.0.1.1");
    reg.connect(sw, pc).unwrap();
    reg.connect(sw, r).unwrap();
    reg.device_mut(r)
        .and_then(|d| d.as_router_mut())
        .unwrap()
        .add_route("10.0.", "gw1");

    let snap = reg.snapshot();
    assert_eq!(snap.device_count(), 3);
    let cats: Vec<Category> = snap.categories.iter().map(|c| c.category).collect();
    assert_eq!(cats, Category::ALL);

    let s1 = &snap.categories[0].devices[0];
    assert_eq!(s1.connections, ["10.0.1.1", "10.0.0.254"]);
    assert!(s1.routes.is_empty());
    let r1 = &snap.categories[1].devices[0];
    assert_eq!(r1.routes.len(), 1);
    assert_eq!(r1.routes[0].prefix, "10.0.");
    assert_eq!(r1.routes[0].next_hop, "gw1");
}

#[test]
fn snapshot_json_omits_empty_relationships() {
    let mut reg = Registry::new();
    reg.add_device("other", "pc", "10.0.1.1");

    let v = serde_json::to_value(reg.snapshot()).expect("serialize snapshot");
    let cats = v["categories"].as_array().expect("categories array");
    assert_eq!(cats.len(), 3);
    assert_eq!(cats[0]["category"], "Switch");
    assert!(cats[0]["devices"].as_array().unwrap().is_empty());

    let pc = &cats[2]["devices"][0];
    assert_eq!(pc["name"], "pc");
    assert_eq!(pc["status"], "active");
    assert!(pc.get("connections").is_none());
    assert!(pc.get("routes").is_none());

    let back: InventorySnapshot = serde_json::from_value(v).expect("parse snapshot");
    assert_eq!(back.device_count(), 1);
}
