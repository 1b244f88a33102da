//! End-to-end tests for canonical text rendering.
//!
//! The exact text is what gateway clients parse, so these assert full
//! strings rather than fragments.

use std::collections::HashMap;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use nebula_wrapper::{
    Context, Date, DateTime, Duration, Edge, Error, Factory, Geography, NullType, Path, Step, Tag,
    Time, TimeWrapper, TimezoneInfo, Value, Vertex,
};

fn render(ctx: &Context, v: &Value) -> String {
    ctx.wrap(v).render().unwrap()
}

// ============================================================================
// 1. Scalars
// ============================================================================

#[test]
fn test_scalars() {
    let ctx = Context::default();
    assert_eq!(render(&ctx, &Value::Int(42)), "42");
    assert_eq!(render(&ctx, &Value::Int(i64::MIN)), "-9223372036854775808");
    assert_eq!(render(&ctx, &Value::Float(3.0)), "3.0");
    assert_eq!(render(&ctx, &Value::Float(3.14)), "3.14");
    assert_eq!(render(&ctx, &Value::Float(-0.001)), "-0.001");
    assert_eq!(render(&ctx, &Value::from("hi")), "\"hi\"");
    assert_eq!(render(&ctx, &Value::Bool(true)), "true");
    assert_eq!(render(&ctx, &Value::Null(NullType::Null)), "__NULL__");
    assert_eq!(render(&ctx, &Value::Null(NullType::UnknownProp)), "UNKNOWN_PROP");
}

// ============================================================================
// 2. Containers
// ============================================================================

#[test]
fn test_map_sorted_regardless_of_insertion() {
    let ctx = Context::default();
    let forward = Value::from(vec![("b", 1), ("a", 2)]);
    let backward = Value::from(vec![("a", 2), ("b", 1)]);
    assert_eq!(render(&ctx, &forward), "{a: 2, b: 1}");
    assert_eq!(render(&ctx, &backward), "{a: 2, b: 1}");
}

#[test]
fn test_list_and_set_keep_order() {
    let ctx = Context::default();
    assert_eq!(render(&ctx, &Value::from(vec![1, 2, 3])), "[1, 2, 3]");
    assert_eq!(render(&ctx, &Value::from(vec![3, 1, 2])), "[3, 1, 2]");
    let set = Value::Set(vec![Value::from("z"), Value::from("a"), Value::from("z")]);
    assert_eq!(render(&ctx, &set), r#"{"z", "a", "z"}"#);
    assert_eq!(render(&ctx, &Value::List(vec![])), "[]");
    assert_eq!(render(&ctx, &Value::Map(HashMap::new())), "{}");
}

#[test]
fn test_nested_composites() {
    let ctx = Context::default();
    let inner_map = Value::from(vec![
        ("z", Value::from(vec![Value::Int(1), Value::Float(2.0)])),
        ("m", Value::from(vec![("y", 1), ("x", 2)])),
    ]);
    let v = Value::List(vec![inner_map, Value::Set(vec![Value::from(vec![2, 1])])]);
    assert_eq!(render(&ctx, &v), "[{m: {x: 2, y: 1}, z: [1, 2.0]}, {[2, 1]}]");
}

#[test]
fn test_deep_nesting_renders() {
    let ctx = Context::default();
    let depth = 2_000;
    let mut v = Value::Int(0);
    for _ in 0..depth {
        v = Value::List(vec![v]);
    }
    let expected = format!("{}0{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(render(&ctx, &v), expected);
}

// ============================================================================
// 3. Temporal and duration
// ============================================================================

#[test]
fn test_temporal_localized() {
    let ctx = Context::with_timezone(TimezoneInfo::new(8 * 3600, "+08:00"));
    assert_eq!(render(&ctx, &Value::Date(Date::new(2021, 3, 4))), "2021-03-04");
    assert_eq!(render(&ctx, &Value::Time(Time::new(20, 5, 6, 7))), "04:05:06.000007");
    let dt = DateTime::new(Date::new(2021, 3, 4), Time::new(20, 5, 6, 123456));
    assert_eq!(render(&ctx, &Value::DateTime(dt)), "2021-03-05T04:05:06.123456");
}

#[test]
fn test_out_of_range_temporal_fields_render() {
    let ctx = Context::default();
    let v = Value::List(vec![
        Value::Date(Date::new(2021, 2, 30)),
        Value::Time(Time::new(23, 59, 60, 0)),
        Value::DateTime(DateTime::new(Date::new(2021, 13, 1), Time::new(0, 0, 0, 0))),
    ]);
    assert_eq!(
        render(&ctx, &v),
        "[2021-02-30, 00:00:00.000000, 2022-01-01T00:00:00.000000]"
    );
}

#[test]
fn test_datetime_year_not_padded() {
    let ctx = Context::default();
    assert_eq!(render(&ctx, &Value::Date(Date::new(999, 1, 2))), "0999-01-02");
    let dt = DateTime::new(Date::new(999, 1, 2), Time::new(1, 2, 3, 4));
    assert_eq!(render(&ctx, &Value::DateTime(dt)), "999-01-02T01:02:03.000004");
}

#[test]
fn test_duration_legacy_form() {
    let ctx = Context::default();
    let d = Value::from(Duration::new(14, 2 * 86_400 + 30, 0));
    assert_eq!(render(&ctx, &d), "P14M2DT172830S");
    assert_eq!(render(&ctx, &Value::from(Duration::default())), "P0M0DT0S");
}

// ============================================================================
// 4. Geography
// ============================================================================

#[test]
fn test_geography_wkt() {
    let ctx = Context::default();
    assert_eq!(render(&ctx, &Value::from(Geography::point(1.0, 2.0))), "POINT(1 2)");
    assert_eq!(
        render(&ctx, &Value::from(Geography::line_string([(0.0, 0.0), (1.0, 1.0)]))),
        "LINESTRING(0 0, 1 1)"
    );
    assert_eq!(
        render(&ctx, &Value::from(Geography::polygon([vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]]))),
        "POLYGON((0 0, 1 0, 1 1, 0 0))"
    );
    assert_eq!(render(&ctx, &Value::from(Geography::point(1.5, -2.25))), "POINT(1.5 -2.25)");
}

// ============================================================================
// 5. Graph elements
// ============================================================================

#[test]
fn test_vertex() {
    let ctx = Context::default();
    let v = Value::from(
        Vertex::new("Tim")
            .with_tag(Tag::new("player").with_property("name", "Tim").with_property("age", 42))
            .with_tag(Tag::new("coach").with_property("since", 2010)),
    );
    assert_eq!(
        render(&ctx, &v),
        r#"("Tim" :player{age: 42, name: "Tim"} :coach{since: 2010})"#
    );
}

#[test]
fn test_edge_direction() {
    let ctx = Context::default();
    let out = Value::from(Edge::new("a", "b", "like").with_ranking(1).with_property("w", 0.5));
    assert_eq!(render(&ctx, &out), r#"("a")-[:like]->("b")@1{w: 0.5}"#);
    let back = Value::from(Edge::new("a", "b", "like").with_type(-3).with_ranking(1));
    assert_eq!(render(&ctx, &back), r#"("a")<-[:like]-("b")@1{}"#);
}

#[test]
fn test_path() {
    let ctx = Context::default();
    let mut path = Path::single(Vertex::new(1));
    path.append(Step::new(Vertex::new(2), "follow", 1, 0));
    path.append(Step::new(Vertex::new(3), "follow", 1, 5));
    assert_eq!(render(&ctx, &Value::from(path)), "(1)-[:follow@0]->(2)-[:follow@5]->(3)");
}

#[test]
fn test_graph_element_with_temporal_property() {
    let ctx = Context::with_timezone(TimezoneInfo::new(3600, "+01:00"));
    let v = Value::from(Vertex::new("e").with_tag(Tag::new("event").with_property("at", Time::new(9, 0, 0, 0))));
    assert_eq!(render(&ctx, &v), r#"("e" :event{at: 10:00:00.000000})"#);
}

// ============================================================================
// 6. Purity
// ============================================================================

#[test]
fn test_render_idempotent_and_pure() {
    let ctx = Context::with_timezone(TimezoneInfo::new(-7200, "-02:00"));
    let v = Value::from(vec![
        ("t", Value::Time(Time::new(0, 30, 0, 0))),
        ("l", Value::from(vec![Value::Float(1e6), Value::Null(NullType::NaN)])),
        ("g", Value::from(Geography::point(0.1, 0.2))),
    ]);
    let before = v.clone();
    let w = ctx.wrap(&v);
    let first = w.render().unwrap();
    let second = w.render().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "{g: POINT(0.1 0.2), l: [1e+06.0, NaN], t: 22:30:00.000000}");
    assert_eq!(v, before);
}

// ============================================================================
// 7. Factory override reaches nested values
// ============================================================================

#[derive(Debug)]
struct FixedTimeFactory;

impl Factory for FixedTimeFactory {
    fn gen_time(&self, _raw: &Time, tz: &TimezoneInfo) -> nebula_wrapper::Result<TimeWrapper> {
        TimeWrapper::new(Time::new(12, 0, 0, 0), tz)
    }
}

#[test]
fn test_custom_factory_used_for_nested_values() {
    let ctx = Context::new(Arc::new(FixedTimeFactory), TimezoneInfo::utc());
    let v = Value::List(vec![Value::Time(Time::new(1, 1, 1, 1))]);
    assert_eq!(render(&ctx, &v), "[12:00:00.000000]");
}

#[test]
fn test_failure_inside_container_propagates() {
    let ctx = Context::with_timezone(TimezoneInfo::new(25 * 3600, "bogus"));
    let v = Value::from(vec![("at", Value::Time(Time::new(1, 0, 0, 0)))]);
    assert!(matches!(ctx.wrap(&v).render(), Err(Error::TemporalConstruction(_))));
}
