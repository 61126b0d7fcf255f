//! Driving a compose frame through render, typing and resizing

use compose_frame::{
    ComposeFrame, ComposeWindow, EngineQuirks, FrameConfig, FrameElement, MemoryElement,
    MemoryFrameDom, WindowKind,
};
use compose_ipc::{Envelope, FrameCommand, FrameId, RecordingBus, TabId};

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

fn firefox_dom() -> MemoryFrameDom {
    let mut dom = MemoryFrameDom::new()
        .with_element(FrameElement::Body, MemoryElement::sized(640.0, 605.0))
        .with_element(
            FrameElement::InputText,
            MemoryElement::sized(600.0, 300.0).with_vertical_padding(10.0),
        )
        .with_element(FrameElement::TextContainer, MemoryElement::sized(620.0, 320.0))
        .with_element(FrameElement::AttachmentList, MemoryElement::sized(600.0, 20.0))
        .with_element(FrameElement::TripleDot, MemoryElement::sized(16.0, 16.0));
    dom.push_row(40.0, true);
    dom.push_row(30.0, true);
    dom.push_row(25.0, false);
    dom
}

#[test]
fn manual_height_follows_window_resize() {
    let window = ComposeWindow::with_config(
        FrameId::new("new_1"),
        TabId::new("4"),
        WindowKind::Standalone,
        EngineQuirks::from_user_agent(FIREFOX_UA),
        FrameConfig::default(),
    );
    let bus = RecordingBus::new();
    let mut frame = ComposeFrame::new(window, firefox_dom(), bus.clone());

    frame.on_render(10_000.0);
    // Still inside the grace period: dropped
    assert_eq!(frame.on_window_resize(10_500.0), None);
    assert_eq!(frame.tick(12_000.0), None);
    assert_eq!(frame.dom().style(FrameElement::InputText, "height"), None);

    assert_eq!(frame.on_window_resize(12_000.0), Some(12_050.0));
    frame.tick(12_050.0);

    // 605 - (41 + 31) - 20 - 10 - 16
    assert_eq!(
        frame.dom().style(FrameElement::InputText, "height"),
        Some("487px")
    );
    assert!(bus.is_empty());
}

#[test]
fn typing_in_reply_box_grows_iframe() {
    let window = ComposeWindow::new(FrameId::new("reply_9"), TabId::new("4"), WindowKind::ReplyBox);
    let dom = MemoryFrameDom::new()
        .with_element(FrameElement::ComposeTable, MemoryElement::sized(600.0, 300.0));
    let bus = RecordingBus::new();
    let mut frame = ComposeFrame::new(window, dom, bus.clone());

    frame.on_render(0.0);
    frame.on_keyup(1200.0);
    frame.tick(1400.0);

    frame.dom_mut().set_height(FrameElement::ComposeTable, 360.0);
    let mut wakeup = None;
    for t in [1500.0, 1550.0, 1600.0, 1650.0] {
        wakeup = frame.on_keyup(t);
    }
    assert_eq!(wakeup, Some(1850.0));
    frame.tick(1850.0);

    let heights: Vec<String> = bus
        .drain()
        .into_iter()
        .map(|Envelope { command, .. }| match command {
            FrameCommand::SetCss { css, .. } => css.get("height").unwrap_or_default().to_string(),
            other => panic!("unexpected {}", other.name()),
        })
        .collect();
    assert_eq!(heights, vec!["300px", "360px"]);
}

#[test]
fn config_json_tunes_timing() {
    let config = FrameConfig::from_json(r#"{"render_grace_ms": 0, "slow_tier_ms": 10}"#).unwrap();
    let window = ComposeWindow::with_config(
        FrameId::new("reply_2"),
        TabId::new("4"),
        WindowKind::ReplyBox,
        EngineQuirks::NONE,
        config,
    );
    let dom = MemoryFrameDom::new()
        .with_element(FrameElement::ComposeTable, MemoryElement::sized(600.0, 300.0));
    let bus = RecordingBus::new();
    let mut frame = ComposeFrame::new(window, dom, bus.clone());

    frame.on_render(0.0);
    assert_eq!(frame.on_keyup(5.0), Some(15.0));
    frame.tick(15.0);
    assert_eq!(bus.len(), 1);
}
