//! End-to-end properties of the builder exercised through the public API:
//! id issuance, insertion targeting, removal, export shape and rebuild
//! stability.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

use pagesmith_engine::view::index;
use pagesmith_engine::{
    Cmd, Controller, ElementId, ElementType, Event, InsertionTarget, LayoutKind, RetainedSurface,
    Session, Surface, export_page,
};

fn id(s: &str) -> ElementId {
    ElementId::new(s)
}

/// Every id ever issued is distinct, removal included
#[test]
fn test_ids_never_reissued() {
    let mut session = Session::new();
    let mut seen = HashSet::new();

    for round in 0..5 {
        for ty in ElementType::ALL {
            let (new_id, _) = session.add_element(ty);
            assert!(seen.insert(new_id.clone()), "{new_id} issued twice");
            if round % 2 == 0 {
                session.remove(&new_id);
            }
        }
        for kind in LayoutKind::ALL {
            let (new_id, _) = session.add_layout(kind);
            assert!(seen.insert(new_id.clone()), "{new_id} issued twice");
            session.remove(&new_id);
        }
    }

    assert_eq!(seen.len(), 5 * (ElementType::ALL.len() + LayoutKind::ALL.len()));
}

#[rstest]
#[case(ElementType::Paragraph, "p")]
#[case(ElementType::Heading2, "h2")]
#[case(ElementType::Button, "button")]
fn test_ordinal_counts_removed_nodes(#[case] ty: ElementType, #[case] tag: &str) {
    let mut session = Session::new();
    let (first, _) = session.add_element(ty);
    session.add_element(ty);
    session.remove(&first);
    session.apply(Cmd::RemoveSelected);

    let (third, _) = session.add_element(ty);

    assert_eq!(third, id(&format!("{tag}_3")));
    assert_eq!(session.page().len(), 2);
}

#[rstest]
#[case(LayoutKind::Row, "layout_row_2")]
#[case(LayoutKind::Column, "layout_column_2")]
#[case(LayoutKind::Center, "layout_center_2")]
fn test_layout_ordinals(#[case] kind: LayoutKind, #[case] expected: &str) {
    let mut session = Session::new();
    let (first, _) = session.add_layout(kind);
    session.remove(&first);

    let (second, _) = session.add_layout(kind);

    assert_eq!(second, id(expected));
}

#[test]
fn test_insertion_follows_target_until_background_click() {
    let mut controller = Controller::new();
    let mut surface = RetainedSurface::new();
    controller.attach(&mut surface);

    controller.apply(Cmd::AddLayout(LayoutKind::Column), &mut surface);
    controller.handle(Event::Click(id("layout_column_1")), &mut surface);
    controller.apply(Cmd::AddElement(ElementType::Paragraph), &mut surface);
    controller.apply(Cmd::AddElement(ElementType::Heading1), &mut surface);
    controller.handle(Event::BackgroundClick, &mut surface);
    controller.apply(Cmd::AddElement(ElementType::Span), &mut surface);

    insta::assert_snapshot!(surface.outline(), @r#"
    <div#layout_column_1>
      <p#p_1> "p"
      <h1#h1_1> "h1"
    <span#span_1> "span"
    "#);
}

#[test]
fn test_removed_target_falls_back_to_root() {
    let mut session = Session::new();
    let (row, _) = session.add_layout(LayoutKind::Row);
    session.enter_container(row.clone());
    let (inner, _) = session.add_layout(LayoutKind::Center);
    session.enter_container(inner);

    session.remove(&row);
    let (p, target) = session.add_element(ElementType::Paragraph);

    assert_eq!(target, InsertionTarget::Root);
    assert_eq!(session.current_target(), None);
    assert_eq!(session.page().last().map(|n| &n.id), Some(&p));
}

#[test]
fn test_removal_takes_descendants() {
    let mut session = Session::new();
    let (outer, _) = session.add_layout(LayoutKind::Row);
    session.enter_container(outer.clone());
    let (div, _) = session.add_element(ElementType::Div);
    session.enter_container(div.clone());
    let (button, _) = session.add_element(ElementType::Button);
    session.clear_target();
    let (keep, _) = session.add_element(ElementType::Paragraph);

    let removed = session.remove(&outer);

    assert_eq!(removed, vec![outer.clone(), div.clone(), button.clone()]);
    for gone in [&outer, &div, &button] {
        assert!(session.find(gone).is_none());
    }
    assert!(session.find(&keep).is_some());
    assert!(session.remove(&outer).is_empty());
}

#[test]
fn test_export_shape_for_row_with_paragraph() {
    let mut controller = Controller::new();
    let mut surface = RetainedSurface::new();
    controller.apply(Cmd::AddLayout(LayoutKind::Row), &mut surface);
    controller.apply(Cmd::EnterContainer(id("layout_row_1")), &mut surface);
    controller.apply(Cmd::AddElement(ElementType::Paragraph), &mut surface);
    controller.apply(
        Cmd::SetText {
            id: id("p_1"),
            text: "hello".to_string(),
        },
        &mut surface,
    );

    let page = controller.export(&mut surface);

    assert!(page.markup.contains(concat!(
        "  <div id=\"layout_row_1\" class=\"layout-row\">\n",
        "    <p id=\"p_1\">hello</p>\n",
        "  </div>\n"
    )));
    let row_rule = page
        .stylesheet
        .split("}\n\n")
        .find(|rule| rule.starts_with(".layout-row {"))
        .unwrap();
    assert!(row_rule.contains("  display: flex;\n"));
    assert!(row_rule.contains("  flex-direction: row;\n"));
}

#[test]
fn test_export_of_empty_page_is_valid_document() {
    let page = export_page(&[]);
    assert!(page.markup.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
    assert!(page.markup.contains("<body>\n\n</body>"));
    assert!(page.markup.ends_with("</html>"));
}

#[test]
fn test_text_edit_keeps_identity_and_position() {
    let mut controller = Controller::new();
    let mut surface = RetainedSurface::new();
    for ty in [ElementType::Paragraph, ElementType::Button, ElementType::Span] {
        controller.apply(Cmd::AddElement(ty), &mut surface);
    }

    controller.handle(Event::Click(id("button_1")), &mut surface);
    let buffer = surface.editing_text_mut().unwrap();
    buffer.clear();
    buffer.push_str("Sign up");
    controller.handle(Event::Blur(id("button_1")), &mut surface);

    let page = controller.session().page();
    let order: Vec<_> = page.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["p_1", "button_1", "span_1"]);
    assert_eq!(page[1].text_content, "Sign up");
    assert_eq!(page[1].element_type, ElementType::Button);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut session = Session::new();
    let (row, _) = session.add_layout(LayoutKind::Row);
    session.enter_container(row);
    session.add_element(ElementType::Paragraph);
    session.add_layout(LayoutKind::Center);
    session.clear_target();
    session.add_element(ElementType::Heading2);

    let mut surface = RetainedSurface::new();
    pagesmith_engine::view::render::rebuild(session.page(), &mut surface);
    let first = surface.outline();
    let first_ids: Vec<_> = surface
        .walk()
        .into_iter()
        .map(|(_, h)| surface.element(h).id.clone())
        .collect();

    pagesmith_engine::view::render::rebuild(session.page(), &mut surface);

    assert_eq!(surface.outline(), first);
    let second_ids: Vec<_> = surface
        .walk()
        .into_iter()
        .map(|(_, h)| surface.element(h).id.clone())
        .collect();
    assert_eq!(second_ids, first_ids);
    assert!(surface.lookup(&id("layout_center_1")).is_some());
}

#[test]
fn test_index_mirrors_preorder() {
    let mut session = Session::new();
    let (col, _) = session.add_layout(LayoutKind::Column);
    session.enter_container(col);
    session.add_element(ElementType::Heading1);
    session.clear_target();
    session.add_element(ElementType::Paragraph);

    let listed: Vec<_> = index::entries(session.page())
        .into_iter()
        .map(|e| (e.depth, e.id.to_string()))
        .collect();

    assert_eq!(
        listed,
        vec![
            (0, "layout_column_1".to_string()),
            (1, "h1_1".to_string()),
            (0, "p_1".to_string()),
        ]
    );
}
