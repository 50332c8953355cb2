use pageview_core::{place_tooltip, Rect, Size, TooltipContent, TooltipState, Viewport};

const GAP: f64 = 5.0;

fn viewport(width: f64) -> Viewport {
    Viewport {
        width,
        scroll_y: 0.0,
    }
}

#[test]
fn centers_over_bar_and_sits_above_it() {
    let bar = Rect::new(100.0, 300.0, 40.0, 120.0);
    let tooltip = Size {
        width: 80.0,
        height: 30.0,
    };

    let placement = place_tooltip(&bar, tooltip, &viewport(1024.0), GAP);

    assert_eq!(placement.left, 80.0);
    assert_eq!(placement.top, 265.0);
    assert_eq!(placement.left_css(), "80px");
    assert_eq!(placement.top_css(), "265px");
}

#[test]
fn accounts_for_vertical_scroll() {
    let bar = Rect::new(100.0, 50.0, 40.0, 120.0);
    let tooltip = Size {
        width: 20.0,
        height: 30.0,
    };
    let viewport = Viewport {
        width: 1024.0,
        scroll_y: 400.0,
    };

    let placement = place_tooltip(&bar, tooltip, &viewport, GAP);

    assert_eq!(placement.top, 415.0);
}

#[test]
fn right_aligns_to_bar_near_right_edge() {
    let bar = Rect::new(960.0, 300.0, 40.0, 100.0);
    let tooltip = Size {
        width: 120.0,
        height: 30.0,
    };

    let placement = place_tooltip(&bar, tooltip, &viewport(1000.0), GAP);

    assert_eq!(placement.left, 880.0);
    assert!(placement.left + tooltip.width <= 1000.0);
}

#[test]
fn left_aligns_to_bar_near_left_edge() {
    let bar = Rect::new(10.0, 300.0, 40.0, 100.0);
    let tooltip = Size {
        width: 120.0,
        height: 30.0,
    };

    let placement = place_tooltip(&bar, tooltip, &viewport(1000.0), GAP);

    assert_eq!(placement.left, 10.0);
}

#[test]
fn never_crosses_viewport_edges() {
    let viewport_width = 320.0;
    let tooltip = Size {
        width: 90.0,
        height: 24.0,
    };

    let mut x = -50.0;
    while x <= 400.0 {
        for width in [1.0, 20.0, 60.0] {
            let bar = Rect::new(x, 200.0, width, 80.0);
            let placement = place_tooltip(&bar, tooltip, &viewport(viewport_width), GAP);
            assert!(placement.left >= 0.0, "left âm với x={x}, width={width}");
            assert!(
                placement.left + tooltip.width <= viewport_width,
                "tràn mép phải với x={x}, width={width}"
            );
        }
        x += 7.5;
    }
}

#[test]
fn tooltip_wider_than_viewport_pins_to_left() {
    let bar = Rect::new(100.0, 200.0, 40.0, 80.0);
    let tooltip = Size {
        width: 500.0,
        height: 24.0,
    };

    let placement = place_tooltip(&bar, tooltip, &viewport(320.0), GAP);

    assert_eq!(placement.left, 0.0);
}

#[test]
fn content_formats_value_with_suffix() {
    let content =
        TooltipContent::from_attributes(Some("05 Mar".to_string()), Some("42".to_string()));

    assert_eq!(content.label_text(), "05 Mar");
    assert_eq!(content.value_text("views"), "42 views");
    assert_eq!(content.value_text(""), "42");
}

#[test]
fn missing_attributes_render_empty() {
    let content = TooltipContent::from_attributes(None, None);

    assert_eq!(content.label_text(), "");
    assert_eq!(content.value_text("views"), "");
}

#[test]
fn hover_shows_and_leave_hides() {
    let mut state = TooltipState::new();
    assert!(!state.is_visible());
    assert_eq!(state.display(), "none");

    let first = TooltipContent::from_attributes(Some("a".to_string()), Some("1".to_string()));
    let placement = place_tooltip(
        &Rect::new(10.0, 10.0, 10.0, 10.0),
        Size::default(),
        &viewport(100.0),
        GAP,
    );
    state.show(first);
    state.place(placement);
    assert!(state.is_visible());
    assert_eq!(state.display(), "flex");

    let second = TooltipContent::from_attributes(Some("b".to_string()), Some("2".to_string()));
    state.show(second.clone());
    assert_eq!(state.content(), &second);
    assert_eq!(state.placement(), placement);

    state.hide();
    assert!(!state.is_visible());
    assert_eq!(state.display(), "none");
}

fn visible_state() -> TooltipState {
    let mut state = TooltipState::new();
    state.show(TooltipContent::from_attributes(
        Some("05 Mar".to_string()),
        Some("42".to_string()),
    ));
    state
}

#[test]
fn click_on_bar_keeps_tooltip_visible() {
    let mut state = visible_state();

    assert!(!state.handle_document_click(true));
    assert!(state.is_visible());
}

#[test]
fn click_off_bar_hides_tooltip() {
    let mut state = visible_state();

    assert!(state.handle_document_click(false));
    assert!(!state.is_visible());
    assert_eq!(state.display(), "none");
}

#[test]
fn click_off_bar_while_hidden_changes_nothing() {
    let mut state = TooltipState::new();
    let before = state.clone();

    assert!(!state.handle_document_click(false));
    assert_eq!(state, before);
}
