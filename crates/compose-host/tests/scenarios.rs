//! End-to-end behaviour: compose frames talking to a host page over JSON

use compose_frame::{
    ComposeFrame, ComposeWindow, FrameElement, MemoryElement, MemoryFrameDom, WindowKind,
};
use compose_host::{HostPage, MemoryContainerDom, OpenOutcome, RegistryEntry};
use compose_ipc::{Envelope, FrameId, HostEvent, RecordingBus, TabId};

type Frame = ComposeFrame<MemoryFrameDom, RecordingBus>;

fn tab() -> TabId {
    TabId::new("tab_1")
}

fn page() -> HostPage<MemoryContainerDom> {
    HostPage::new(
        tab(),
        MemoryContainerDom::new()
            .with_viewport(1440.0, 900.0)
            .with_window_size(640.0, 605.0),
    )
}

fn standalone(id: &str, bus: &RecordingBus) -> Frame {
    let window = ComposeWindow::new(FrameId::new(id), tab(), WindowKind::Standalone);
    let dom = MemoryFrameDom::new()
        .with_element(FrameElement::Body, MemoryElement::sized(640.0, 605.0))
        .with_element(FrameElement::Header, MemoryElement::sized(640.0, 36.0))
        .with_element(FrameElement::IconPopout, MemoryElement::sized(16.0, 16.0));
    ComposeFrame::new(window, dom, bus.clone())
}

/// Deliver everything the frames sent, through the JSON wire format
fn pump(bus: &RecordingBus, page: &mut HostPage<MemoryContainerDom>) {
    for envelope in bus.drain() {
        let json = envelope.to_json().unwrap();
        page.apply(Envelope::from_json(&json).unwrap()).unwrap();
    }
}

fn open(page: &mut HostPage<MemoryContainerDom>, id: &str) {
    page.handle_event(HostEvent::OpenCompose {
        frame_id: FrameId::new(id),
    })
    .unwrap();
}

fn entry<'a>(page: &'a HostPage<MemoryContainerDom>, id: &str) -> &'a RegistryEntry {
    page.registry().get(&FrameId::new(id)).unwrap()
}

fn size(page: &HostPage<MemoryContainerDom>, id: &str) -> (f64, f64) {
    page.dom().offset_size(&FrameId::new(id)).unwrap()
}

#[test]
fn fourth_window_is_rejected() {
    let mut page = page();
    for id in ["a", "b", "c"] {
        open(&mut page, id);
    }
    let before = page.registry().clone();

    let outcome = page.open_compose(FrameId::new("d")).unwrap();
    assert_eq!(outcome, OpenOutcome::Rejected);
    assert_eq!(page.registry(), &before);
    assert!(entry(&page, "c").active);
    let orders: Vec<u32> = ["a", "b", "c"].iter().map(|id| entry(&page, id).order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(page.dom().notices().len(), 1);
    assert!(page.dom().window(&FrameId::new("d")).is_none());
}

#[test]
fn focusing_input_moves_activation() {
    let mut page = page();
    let bus = RecordingBus::new();
    for id in ["a", "b", "c"] {
        open(&mut page, id);
    }
    page.focus_compose(&FrameId::new("a")).unwrap();
    page.focus_compose(&FrameId::new("c")).unwrap();
    assert!(entry(&page, "a").previous_active);
    assert!(entry(&page, "c").active);

    let mut a = standalone("a", &bus);
    a.input_focused();
    pump(&bus, &mut page);

    let (a, b, c) = (entry(&page, "a"), entry(&page, "b"), entry(&page, "c"));
    assert!(a.active && !a.previous_active);
    assert!(!b.active && !b.previous_active);
    assert!(!c.active && c.previous_active);

    let chrome = &page.dom().window(&FrameId::new("c")).unwrap().chrome;
    assert!(chrome.has_class("previous_active"));
    assert!(!chrome.has_class("active"));
}

#[test]
fn closing_first_window_renumbers() {
    let mut page = page();
    let bus = RecordingBus::new();
    for id in ["a", "b", "c"] {
        open(&mut page, id);
    }

    let mut a = standalone("a", &bus);
    a.close_clicked();
    pump(&bus, &mut page);

    assert!(!page.registry().contains(&FrameId::new("a")));
    assert_eq!(entry(&page, "b").order, 1);
    assert_eq!(entry(&page, "c").order, 2);
    let order_attr = page
        .dom()
        .window(&FrameId::new("c"))
        .and_then(|w| w.chrome.attribute("data-order").map(str::to_string));
    assert_eq!(order_attr.as_deref(), Some("2"));
}

#[test]
fn full_screen_twice_restores_size() {
    let mut page = page();
    let bus = RecordingBus::new();
    open(&mut page, "a");
    let mut frame = standalone("a", &bus);
    let original = size(&page, "a");

    frame.popout_clicked().unwrap();
    pump(&bus, &mut page);
    assert_eq!(size(&page, "a"), (1440.0, 900.0));

    frame.popout_clicked().unwrap();
    pump(&bus, &mut page);
    assert_eq!(size(&page, "a"), original);
}

#[test]
fn minimize_twice_restores_height() {
    let mut page = page();
    let bus = RecordingBus::new();
    open(&mut page, "a");
    let mut frame = standalone("a", &bus);
    let (_, original_height) = size(&page, "a");

    frame.minimize_clicked().unwrap();
    pump(&bus, &mut page);
    let (_, minimized_height) = size(&page, "a");
    assert!(minimized_height < original_height);
    assert_eq!(minimized_height, 36.0);

    frame.minimize_clicked().unwrap();
    pump(&bus, &mut page);
    assert_eq!(size(&page, "a").1, original_height);
}

#[test]
fn minimize_from_full_screen_never_holds_both() {
    let mut page = page();
    let bus = RecordingBus::new();
    open(&mut page, "a");
    let mut frame = standalone("a", &bus);

    frame.popout_clicked().unwrap();
    pump(&bus, &mut page);
    frame.minimize_clicked().unwrap();

    let sent: Vec<&str> = bus.pending().iter().map(|e| e.command.name()).collect();
    assert_eq!(sent, vec!["remove_class", "set_css"]);
    pump(&bus, &mut page);

    assert!(frame.window().is_minimized());
    assert!(!frame.window().is_maximized());
    let chrome = &page.dom().window(&FrameId::new("a")).unwrap().chrome;
    assert!(!chrome.has_class("full_window"));
    assert_eq!(chrome.style("height"), Some("36px"));
}

#[test]
fn reply_box_reports_only_real_height_changes() {
    let mut page = page();
    let bus = RecordingBus::new();
    let reply_id = FrameId::new("reply_1");
    page.dom_mut().insert_reply_box(&reply_id);

    let window = ComposeWindow::new(reply_id.clone(), tab(), WindowKind::ReplyBox);
    let dom = MemoryFrameDom::new()
        .with_element(FrameElement::ComposeTable, MemoryElement::sized(600.0, 400.0));
    let mut frame = ComposeFrame::new(window, dom, bus.clone());
    let iframe_height = |page: &HostPage<MemoryContainerDom>| {
        page.dom()
            .window(&FrameId::new("reply_1"))
            .and_then(|w| w.iframe.style("height").map(str::to_string))
    };

    frame.resize_compose_box(0.0, None);
    pump(&bus, &mut page);
    assert_eq!(iframe_height(&page).as_deref(), Some("400px"));

    frame.dom_mut().set_height(FrameElement::ComposeTable, 402.0);
    frame.resize_compose_box(0.0, None);
    assert!(bus.is_empty());

    frame.dom_mut().set_height(FrameElement::ComposeTable, 405.0);
    frame.resize_compose_box(0.0, Some(250.0));
    assert_eq!(bus.len(), 2);
    pump(&bus, &mut page);
    assert_eq!(iframe_height(&page).as_deref(), Some("405px"));
    assert_eq!(page.dom().window(&reply_id).unwrap().scrolled_to, Some(250.0));
}

#[test]
fn commands_for_another_tab_are_not_applied() {
    let mut page = page();
    open(&mut page, "a");
    let bus = RecordingBus::new();
    let window = ComposeWindow::new(FrameId::new("a"), TabId::new("tab_2"), WindowKind::Standalone);
    let mut frame = ComposeFrame::new(
        window,
        MemoryFrameDom::new().with_element(FrameElement::Header, MemoryElement::sized(640.0, 36.0)),
        bus.clone(),
    );

    frame.minimize_clicked().unwrap();
    for envelope in bus.drain() {
        assert!(page.apply(envelope).is_err());
    }
    assert_eq!(size(&page, "a"), (640.0, 605.0));
}
