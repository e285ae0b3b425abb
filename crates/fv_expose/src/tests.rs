//! End-to-end checks through a small recursive encoder.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::any::TypeId;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;

use crate::case::Case;
use crate::derive::{Expose, Record};
use crate::registry::TypeRegistry;
use crate::select::SelectionPolicy;
use crate::{Exposed, Value};

// -----------------------------------------------------------------------------
// Encoder

/// Emits reduced records as maps keyed by display name and hands every
/// other value to its own `Serialize` implementation.
struct Encode<'a> {
    registry: &'a TypeRegistry,
    value: &'a dyn Value,
}

impl Serialize for Encode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.registry.expose(self.value) {
            Exposed::Reduced(reduced) => {
                let mut map = serializer.serialize_map(Some(reduced.fields().len()))?;
                for (name, value) in reduced.iter_renamed() {
                    let nested = Encode {
                        registry: self.registry,
                        value,
                    };
                    map.serialize_entry(name, &nested)?;
                }
                map.end()
            }
            Exposed::Passthrough(value) => {
                Serialize::serialize(value as &dyn erased_serde::Serialize, serializer)
            }
        }
    }
}

fn to_json(registry: &TypeRegistry, value: &dyn Value) -> serde_json::Value {
    serde_json::to_value(Encode { registry, value }).unwrap()
}

// -----------------------------------------------------------------------------
// Records

#[derive(serde::Serialize, Expose)]
struct Point {
    x: i32,
    y: i32,
    __tag__: (),
}

#[derive(serde::Serialize, Expose)]
#[expose(except(y))]
struct PointX {
    x: i32,
    y: i32,
}

#[derive(serde::Serialize, Expose)]
#[expose(rename_all = "camelCase")]
struct Cursor {
    pos_x: i32,
    pos_y: i32,
}

#[derive(serde::Serialize, Expose)]
#[expose(rename_all = "camelCase")]
struct Segment {
    start_point: Point,
    end_point: Point,
    labels: Vec<String>,
}

#[derive(serde::Serialize, Expose)]
#[expose(only(r#type, name), rename_all = "SCREAMING_SNAKE_CASE")]
struct Item {
    r#type: u8,
    name: &'static str,
    #[expose(tag)]
    kind: (),
    internal_id: u64,
}

#[derive(serde::Serialize, Expose)]
#[expose(rename_all = "kebab-case")]
struct Renamed {
    #[expose(rename = "ID")]
    user_id: u32,
    created_at: u64,
}

#[derive(serde::Serialize, Expose)]
struct Marker;

#[derive(serde::Serialize, Expose)]
struct Wrapper<T> {
    inner: T,
}

#[derive(serde::Serialize, Record)]
struct Plain {
    first_name: &'static str,
    last_name: &'static str,
    age: u8,
}

#[derive(serde::Serialize, Expose)]
#[expose(auto_register)]
struct AutoRegistered {
    id: u32,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::empty();
    registry.register::<Point>().unwrap();
    registry.register::<PointX>().unwrap();
    registry.register::<Cursor>().unwrap();
    registry.register::<Segment>().unwrap();
    registry.register::<Item>().unwrap();
    registry.register::<Renamed>().unwrap();
    registry.register::<Marker>().unwrap();
    registry.register::<Wrapper<u32>>().unwrap();
    registry
}

fn point(x: i32, y: i32) -> Point {
    Point { x, y, __tag__: () }
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn point_all_fields() {
    let registry = registry();
    assert_eq!(to_json(&registry, &point(1, 2)), json!({ "x": 1, "y": 2 }));
}

#[test]
fn point_except() {
    let registry = registry();
    assert_eq!(to_json(&registry, &PointX { x: 1, y: 2 }), json!({ "x": 1 }));
}

#[test]
fn camel_case_display_names() {
    let registry = registry();
    let cursor = Cursor { pos_x: 1, pos_y: 2 };
    assert_eq!(to_json(&registry, &cursor), json!({ "posX": 1, "posY": 2 }));
}

#[test]
fn nested_records_are_reduced_by_the_encoder() {
    let registry = registry();
    let segment = Segment {
        start_point: point(0, 0),
        end_point: point(3, 4),
        labels: vec!["a".into()],
    };

    assert_eq!(
        to_json(&registry, &segment),
        json!({
            "startPoint": { "x": 0, "y": 0 },
            "endPoint": { "x": 3, "y": 4 },
            "labels": ["a"],
        })
    );
}

#[test]
fn containers_pass_through() {
    let registry = registry();

    // The list itself has no exposure, so serde's own rules apply to it
    // and to its elements.
    let points = vec![PointX { x: 1, y: 2 }];
    assert_eq!(to_json(&registry, &points), json!([{ "x": 1, "y": 2 }]));
    assert_eq!(to_json(&registry, &Some(5_u8)), json!(5));
    assert_eq!(to_json(&registry, &"text"), json!("text"));
}

#[test]
fn raw_identifiers_and_tags() {
    let registry = registry();
    let item = Item {
        r#type: 7,
        name: "bolt",
        kind: (),
        internal_id: 99,
    };
    assert_eq!(to_json(&registry, &item), json!({ "TYPE": 7, "NAME": "bolt" }));

    let info = <Item as crate::info::Record>::record_info();
    assert_eq!(info.tag(), Some("kind"));
    assert_eq!(info.data_fields().collect::<Vec<_>>(), ["type", "name", "internal_id"]);
}

#[test]
fn field_rename_overrides_convention() {
    let registry = registry();
    let renamed = Renamed {
        user_id: 1,
        created_at: 2,
    };
    assert_eq!(to_json(&registry, &renamed), json!({ "ID": 1, "created-at": 2 }));
}

#[test]
fn unit_struct_exposes_nothing() {
    let registry = registry();
    let exposed = registry.expose(&Marker);
    assert!(exposed.as_reduced().unwrap().fields().is_empty());
    assert_eq!(to_json(&registry, &Marker), json!({}));
}

#[test]
fn generic_records() {
    let registry = registry();
    assert_eq!(to_json(&registry, &Wrapper { inner: 3_u32 }), json!({ "inner": 3 }));

    // Each instantiation is its own type.
    let other = Wrapper { inner: 3_i64 };
    assert!(registry.expose(&other).is_passthrough());
}

#[test]
fn registration_time_policy() {
    let mut registry = TypeRegistry::empty();
    let plain = Plain {
        first_name: "Ada",
        last_name: "Lovelace",
        age: 36,
    };

    assert_eq!(
        to_json(&registry, &plain),
        json!({ "first_name": "Ada", "last_name": "Lovelace", "age": 36 })
    );

    registry
        .register_with::<Plain>(&SelectionPolicy::except(["age"]), &Case::Pascal)
        .unwrap();
    assert_eq!(
        to_json(&registry, &plain),
        json!({ "FirstName": "Ada", "LastName": "Lovelace" })
    );
}

#[test]
fn format_independent() {
    let registry = registry();

    let reduced = ron::to_string(&Encode {
        registry: &registry,
        value: &PointX { x: 1, y: 2 },
    })
    .unwrap();
    assert_eq!(reduced, r#"{"x":1}"#);

    let passthrough = ron::to_string(&Encode {
        registry: &registry,
        value: &(1_u8, true),
    })
    .unwrap();
    assert_eq!(passthrough, "(1,true)");
}

#[test]
fn repeated_calls_share_the_table() {
    let registry = registry();
    let cursor = Cursor { pos_x: 5, pos_y: 6 };

    let tables: Vec<_> = (0..3)
        .map(|_| registry.expose(&cursor).as_reduced().unwrap().renames())
        .collect();
    assert!(tables.iter().all(|table| core::ptr::eq(*table, tables[0])));
    assert!(core::ptr::eq(tables[0], <Cursor as crate::Expose>::rename_table()));
}

#[test]
fn derived_tables_are_statics() {
    let table = <Item as crate::Expose>::rename_table();
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        [("type", "TYPE"), ("name", "NAME")]
    );
    assert!(core::ptr::eq(table, <Item as crate::Expose>::rename_table()));

    let table = <Renamed as crate::Expose>::rename_table();
    assert_eq!(table.display("user_id"), Some("ID"));
    assert_eq!(table.display("created_at"), Some("created-at"));
}

#[test]
fn auto_registration() {
    let mut registry = TypeRegistry::empty();
    if registry.auto_register() {
        assert!(registry.contains(TypeId::of::<AutoRegistered>()));
        assert!(!registry.contains(TypeId::of::<Point>()));
        // A second run finds everything in place.
        assert!(registry.auto_register());
    } else {
        assert!(registry.is_empty());
    }
}
