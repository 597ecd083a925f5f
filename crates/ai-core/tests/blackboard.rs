use ai_core::{BbKey, BbValue, Blackboard};

#[test]
fn registering_twice_returns_the_same_key() {
    let mut bb = Blackboard::new();
    let a = bb.register::<f32>("speed");
    let b = bb.register::<f32>("speed");
    assert_eq!(a, b);
    assert_eq!(bb.len::<f32>(), 1);
}

#[test]
fn indices_are_scoped_per_type() {
    let mut bb = Blackboard::new();
    let hp = bb.register::<f32>("hp");
    let danger = bb.register::<bool>("danger");
    let speed = bb.register::<f32>("speed");

    assert_eq!(hp.index(), 0);
    assert_eq!(danger.index(), 0);
    assert_eq!(speed.index(), 1);

    bb.set(hp, 42.0);
    assert!(!bb.is_initialized(danger));
    assert!(!bb.get(danger));
}

#[test]
fn same_name_different_types_are_independent_slots() {
    let mut bb = Blackboard::new();
    let as_int = bb.register::<i32>("target");
    let as_bool = bb.register::<bool>("target");

    bb.set(as_int, 7);
    assert_eq!(bb.get(as_int), 7);
    assert!(!bb.is_initialized(as_bool));
}

#[test]
fn unset_slot_reads_default_and_reports_uninitialized() {
    let mut bb = Blackboard::new();
    let key = bb.register::<i32>("count");

    assert_eq!(bb.get(key), 0);
    assert_eq!(
        bb.get_safe(key),
        BbValue {
            value: 0,
            is_initialized: false
        }
    );
}

#[test]
fn set_then_get_roundtrip_marks_initialized() {
    let mut bb = Blackboard::new();
    let key = bb.register::<i32>("count");

    // Explicitly writing the default value is distinguishable from never writing.
    bb.set(key, 0);
    assert_eq!(
        bb.get_safe(key),
        BbValue {
            value: 0,
            is_initialized: true
        }
    );

    bb.set(key, 5);
    assert_eq!(bb.get(key), 5);
    assert_eq!(*bb.get_ref(key), 5);
}

#[test]
fn key_lookup_does_not_register() {
    let mut bb = Blackboard::new();
    assert_eq!(bb.key::<u64>("enemy"), None);

    let enemy = bb.register::<u64>("enemy");
    assert_eq!(bb.key::<u64>("enemy"), Some(enemy));
    assert_eq!(bb.key::<f32>("enemy"), None);
}

#[test]
#[should_panic(expected = "never registered")]
fn reading_an_unregistered_key_panics() {
    let bb = Blackboard::new();
    let _ = bb.get(BbKey::<u32>::new(3));
}
