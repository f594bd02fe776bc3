extern crate rand;
extern crate splay_collections;

use rand::Rng;
use splay_collections::splay_tree::SplayMap;
use std::collections::BTreeMap;

#[test]
fn test_basic_insert_and_get() {
    let mut map = SplayMap::new();
    map.insert(String::from("keyOne"), String::from("valueOne"));
    map.insert(String::from("keyTwo"), String::from("valueTwo"));
    map.insert(String::from("keyThree"), String::from("valueThree"));

    assert_eq!(map.get("keyOne").map(String::as_str), Some("valueOne"));
    assert_eq!(map.get("keyTwo").map(String::as_str), Some("valueTwo"));
    assert_eq!(map.get("keyThree").map(String::as_str), Some("valueThree"));
    assert_eq!(map.get("keyDoesNotExist"), None);
    assert_eq!(map.get("anotherMissing"), None);
}

#[test]
fn test_update_overwrites_value() {
    let mut map = SplayMap::new();
    map.insert(String::from("user"), String::from("Brad"));
    assert_eq!(map.get("user").map(String::as_str), Some("Brad"));

    map.insert(String::from("user"), String::from("Bellinder"));
    assert_eq!(map.get("user").map(String::as_str), Some("Bellinder"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_delete_removes_key() {
    let mut map = SplayMap::new();
    map.insert(String::from("user"), String::from("Brad"));
    assert_eq!(map.get("user").map(String::as_str), Some("Brad"));

    map.remove("user");
    assert_eq!(map.get("user"), None);
    assert!(map.is_empty());
}

#[test]
fn test_delete_absent_key_leaves_others_intact() {
    let mut map = SplayMap::new();
    map.insert(String::from("user"), String::from("Brad"));

    assert_eq!(map.remove("doesNotExist"), None);
    assert_eq!(map.get("user").map(String::as_str), Some("Brad"));
}

#[test]
fn test_multiple_keys() {
    let mut map = SplayMap::new();
    map.insert(String::from("mango"), String::from("yellow"));
    map.insert(String::from("apple"), String::from("red"));
    map.insert(String::from("banana"), String::from("yellow"));
    map.insert(String::from("grape"), String::from("purple"));
    map.insert(String::from("cherry"), String::from("red"));

    assert_eq!(map.get("apple").map(String::as_str), Some("red"));
    assert_eq!(map.get("banana").map(String::as_str), Some("yellow"));
    assert_eq!(map.get("cherry").map(String::as_str), Some("red"));
    assert_eq!(map.get("grape").map(String::as_str), Some("purple"));
    assert_eq!(map.get("mango").map(String::as_str), Some("yellow"));

    map.remove("banana");
    map.remove("apple");

    assert_eq!(map.get("banana"), None);
    assert_eq!(map.get("apple"), None);
    assert_eq!(map.get("cherry").map(String::as_str), Some("red"));
    assert_eq!(map.get("grape").map(String::as_str), Some("purple"));
    assert_eq!(map.get("mango").map(String::as_str), Some("yellow"));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_randomized_operations_match_btreemap() {
    let mut rng = rand::thread_rng();
    let mut map = SplayMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..10_000 {
        let key = rng.gen_range(0, 1000u32);
        let value = rng.gen::<u32>();

        match rng.gen_range(0, 3) {
            0 => {
                assert_eq!(
                    map.insert(key, value).map(|pair| pair.1),
                    expected.insert(key, value),
                );
            }
            1 => {
                assert_eq!(map.remove(&key).map(|pair| pair.1), expected.remove(&key));
            }
            _ => {
                assert_eq!(map.get(&key), expected.get(&key));
            }
        }
    }

    assert_eq!(map.len(), expected.len());
    for (key, value) in &expected {
        assert_eq!(map.get(key), Some(value));
    }
}
