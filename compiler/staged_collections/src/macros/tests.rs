use pretty_assertions::assert_eq;

crate::staged_enum! {
    enum Color {
        Red,
        Green,
        Blue,
    }
}

crate::tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    enum Shape: ShapeTag {
        Circle(f32) => circle_make, circle_get;
        Square(u32) => square_make, square_get;
        Label(String) => label_make, label_get;
    }
}

#[test]
fn test_enum_ordinals_follow_declaration_order() {
    assert_eq!(Color::COUNT, 3);
    assert_eq!(Color::ALL, &[Color::Red, Color::Green, Color::Blue]);
    for (i, color) in Color::ALL.iter().enumerate() {
        assert_eq!(color.ordinal(), i);
        assert_eq!(color.name(), Color::NAMES[i]);
    }
    assert_eq!(Color::NAMES, &["Red", "Green", "Blue"]);
}

#[test]
fn test_tag_enum_is_generated() {
    assert_eq!(ShapeTag::COUNT, 3);
    assert_eq!(ShapeTag::NAMES, &["Circle", "Square", "Label"]);
}

#[test]
fn test_make_sets_tag_and_payload() {
    let circle = Shape::circle_make(1.5);
    assert_eq!(circle.tag(), ShapeTag::Circle);
    assert!((*circle.circle_get() - 1.5).abs() < f32::EPSILON);

    let square = Shape::square_make(4);
    assert_eq!(square.tag(), ShapeTag::Square);
    assert_eq!(*square.square_get(), 4);

    let label = Shape::label_make("hi".to_owned());
    assert_eq!(label.tag(), ShapeTag::Label);
    assert_eq!(label.label_get(), "hi");
    assert_eq!(label.clone(), label);
}

#[test]
#[should_panic(expected = "expected Square but the tag is Circle")]
fn test_wrong_accessor_panics() {
    let circle = Shape::circle_make(2.0);
    let _ = circle.square_get();
}

#[test]
#[should_panic(expected = "tagged union access mismatch")]
fn test_wrong_accessor_on_owned_payload_panics() {
    let square = Shape::square_make(1);
    let _ = square.label_get();
}
