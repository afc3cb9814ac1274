//! End-to-end tag extraction over Go sources

use gotags::{extract_source, ExtractOptions, Tag, TagKind, TypeRegistry};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

fn extract(source: &str) -> Vec<Tag> {
    extract_source(
        source,
        Path::new("widget.go"),
        &mut TypeRegistry::new(),
        &ExtractOptions::default(),
    )
    .unwrap()
}

fn tag(
    name: &str,
    lines: (usize, usize),
    kind: TagKind,
    receiver_types: &[&str],
    receiver_names: &[&[&str]],
) -> Tag {
    Tag {
        name: name.to_string(),
        file: PathBuf::from("widget.go"),
        start_line: lines.0,
        end_line: lines.1,
        kind,
        receiver_types: receiver_types.iter().map(|s| s.to_string()).collect(),
        receiver_names: receiver_names
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn test_widget_file() {
    let source = indoc! {r#"
        package widget

        import "fmt"

        type Widget struct {
            name string
        }

        func NewWidget(name string) *Widget {
            return &Widget{name: name}
        }

        func (w *Widget) Name() string {
            return w.name
        }

        func (Widget) String() string { return fmt.Sprint("widget") }

        func main() {
            fmt.Println(NewWidget("a").Name())
        }
    "#};

    assert_eq!(
        extract(source),
        vec![
            tag("NewWidget", (9, 11), TagKind::Function, &["Widget"], &[]),
            tag("Name", (13, 15), TagKind::Method, &["*Widget"], &[&["w"]]),
            tag("String", (17, 17), TagKind::Method, &["Widget"], &[&[]]),
            tag("main", (19, 21), TagKind::Function, &[], &[]),
        ]
    );
}

#[test]
fn test_one_tag_per_declaration_in_order() {
    let source = indoc! {r#"
        package p

        func a() {}
        func b() {}
        var x = 1
        func c() {}
        const y = 2
        func d() {}
    "#};

    let names: Vec<String> = extract(source).into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_constructor_before_type_is_not_owned() {
    let source = indoc! {r#"
        package widget

        func NewWidget() *Widget {
            return &Widget{}
        }

        type Widget struct{}
    "#};

    let tags = extract(source);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, TagKind::Function);
    assert!(tags[0].receiver_types.is_empty());
}

#[test]
fn test_multi_named_result_never_infers_owner() {
    let source = indoc! {r#"
        package widget

        type Widget struct{}

        func Pair() (a, b Widget) {
            return
        }

        func Single() (w Widget) {
            return
        }
    "#};

    let tags = extract(source);
    assert!(tags[0].receiver_types.is_empty());
    assert_eq!(tags[1].receiver_types, vec!["Widget"]);
    assert!(tags[1].receiver_names.is_empty());
}

#[test]
fn test_qualified_and_composite_results_are_not_owned() {
    let source = indoc! {r#"
        package widget

        type Widget struct{}

        func List() []*Widget { return nil }
        func Lookup() map[string]Widget { return nil }
        func Remote() *other.Widget { return nil }
    "#};

    assert!(extract(source)
        .iter()
        .all(|t| t.kind == TagKind::Function && t.receiver_types.is_empty()));
}

#[test]
fn test_receiver_types_render_composites() {
    let source = indoc! {r#"
        package p

        type Handlers map[string]func(a, b int) int
        type Stream chan int

        func (h Handlers) Run() {}
        func (s *Stream) Close() {}
        func (l *List[T]) Push(v T) {}
    "#};

    let receivers: Vec<Vec<String>> = extract(source)
        .into_iter()
        .map(|t| t.receiver_types)
        .collect();
    assert_eq!(
        receivers,
        vec![
            vec!["Handlers".to_string()],
            vec!["*Stream".to_string()],
            vec!["*List[T]".to_string()],
        ]
    );
}

#[test]
fn test_alias_and_grouped_types_register() {
    let source = indoc! {r#"
        package p

        type (
            Point struct{ X, Y int }
            Coord = Point
        )

        func Origin() Point { return Point{} }
        func Home() *Coord { return nil }
    "#};

    let owners: Vec<Vec<String>> = extract(source)
        .into_iter()
        .map(|t| t.receiver_types)
        .collect();
    assert_eq!(
        owners,
        vec![vec!["Point".to_string()], vec!["Coord".to_string()]]
    );
}

#[test]
fn test_registry_carries_over_when_shared() {
    let types = "package p\n\ntype Widget struct{}\n";
    let ctor = "package p\n\nfunc NewWidget() *Widget { return nil }\n";
    let options = ExtractOptions::default();

    let mut shared = TypeRegistry::new();
    extract_source(types, Path::new("types.go"), &mut shared, &options).unwrap();
    let tags = extract_source(ctor, Path::new("ctor.go"), &mut shared, &options).unwrap();
    assert_eq!(tags[0].receiver_types, vec!["Widget"]);

    let mut fresh = TypeRegistry::new();
    let tags = extract_source(ctor, Path::new("ctor.go"), &mut fresh, &options).unwrap();
    assert!(tags[0].receiver_types.is_empty());
}

#[test]
fn test_syntax_error_yields_no_tags() {
    let source = "package p\n\nfunc ok() {}\n\nfunc broken( {\n";
    let result = extract_source(
        source,
        Path::new("broken.go"),
        &mut TypeRegistry::new(),
        &ExtractOptions::default(),
    );
    assert!(matches!(result, Err(gotags::Error::Parse { .. })));
}
