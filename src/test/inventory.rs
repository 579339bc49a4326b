use std::fs;

use super::temp_store;
use crate::InventoryError;
use crate::inventory::{Inventory, Persist};
use crate::net::{Category, ConnectOutcome};

#[test]
fn add_device_persists_unless_suppressed() {
    let (dir, store) = temp_store("inv-persist");
    let mut inv = Inventory::new(store);
    inv.add_device("switch", "s1", "10.0.0.1", Persist::Yes).unwrap();
    inv.add_device("router", "r1", "10.0.0.254", Persist::No).unwrap();

    let raw = fs::read_to_string(inv.store().devices_path()).unwrap();
    assert_eq!(raw, "Switch,s1,10.0.0.1\n");
    assert_eq!(inv.registry().len(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn connect_by_address_validates_before_mutating() {
    let (dir, store) = temp_store("inv-connect");
    let mut inv = Inventory::new(store);
    inv.add_device("router", "r1", "10.0.0.254", Persist::No).unwrap();
    let sw = inv.add_device("switch", "s1", "10.0.0.1", Persist::No).unwrap();
    inv.add_device("other", "pc", "10.0.1.1", Persist::No).unwrap();

    assert!(matches!(
        inv.connect_by_address("10.0.0.254", "10.0.1.1"),
        Err(InventoryError::NotASwitch { .. })
    ));
    assert!(matches!(
        inv.connect_by_address("10.0.0.1", "10.9.9.9"),
        Err(InventoryError::DeviceNotFound { .. })
    ));
    assert!(matches!(
        inv.connect_by_address("10.9.9.9", "10.0.1.1"),
        Err(InventoryError::DeviceNotFound { .. })
    ));
    assert!(inv.registry().connections(sw).unwrap().is_empty());

    assert_eq!(
        inv.connect_by_address("10.0.0.1", "10.0.1.1").unwrap(),
        ConnectOutcome::Connected
    );
    assert_eq!(
        inv.connect_by_address("10.0.0.1", "10.0.1.1").unwrap(),
        ConnectOutcome::AlreadyConnected
    );
    assert_eq!(inv.registry().connections(sw).unwrap().len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_then_load_restores_devices_and_connections() {
    let (dir, store) = temp_store("inv-roundtrip");
    let mut inv = Inventory::new(store.clone());
    inv.add_device("switch", "s1", "10.0.0.1", Persist::Yes).unwrap();
    inv.add_device("other", "A", "10.0.1.1", Persist::Yes).unwrap();
    inv.add_device("other", "B", "10.0.1.2", Persist::Yes).unwrap();
    inv.connect_by_address("10.0.0.1", "10.0.1.1").unwrap();
    inv.connect_by_address("10.0.0.1", "10.0.1.2").unwrap();
    inv.save().unwrap();

    let mut fresh = Inventory::new(store);
    assert!(fresh.registry().is_empty());
    let summary = fresh.load().unwrap();
    assert_eq!(summary.devices.loaded, 3);
    assert_eq!(summary.connections.loaded, 2);
    assert_eq!(summary.connections.fabricated, 0);

    let reg = fresh.registry();
    let sw = reg.find_by_address("10.0.0.1").unwrap();
    let peers: Vec<&str> = reg.connections(sw).unwrap().iter().map(|d| d.name()).collect();
    assert_eq!(peers, ["A", "B"]);
    assert_eq!(reg.bucket(Category::Other).count(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn routes_resolve_router_by_address() {
    let (dir, store) = temp_store("inv-routes");
    let mut inv = Inventory::new(store);
    inv.add_device("router", "r1", "10.0.0.254", Persist::No).unwrap();
    inv.add_device("switch", "s1", "10.0.0.1", Persist::No).unwrap();

    inv.add_route("10.0.0.254", "10.0.", "gw1").unwrap();
    inv.add_route("10.0.0.254", "10.0.1.", "gw2").unwrap();
    assert_eq!(inv.forward("10.0.0.254", "10.0.1.5").unwrap(), "gw1");
    assert!(matches!(
        inv.forward("10.0.0.254", "192.168.0.1"),
        Err(InventoryError::NoRoute { .. })
    ));
    assert!(matches!(
        inv.add_route("10.0.0.1", "10.", "gw"),
        Err(InventoryError::NotARouter { .. })
    ));
    assert!(matches!(
        inv.forward("10.0.0.2", "10.0.0.9"),
        Err(InventoryError::DeviceNotFound { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}
