//! Demo host: a dashboard of nested panes with a live input line.
//!
//! Builds an inflated, bordered backdrop holding two list boxes, an
//! edge-anchored banner with an editable input field, and a footer row of
//! evenly spread labels. Quit with Ctrl-C (or Ctrl-S via the root hook).

use casement::color::{Base, Color};
use casement::error::Result;
use casement::event::{HookTarget, Key};
use casement::geometry::{Dim, Rect};
use casement::input::Input;
use casement::tree::{Align, BorderConfig, ParentConfig, Pos, TextConfig};
use casement::tui::{Tui, TuiConfig};

/// Feed keys to the input editor stored in the window's data slot.
fn input_window_event(tui: &mut Tui, target: HookTarget, key: Key) -> bool {
    let HookTarget::Window(id) = target else { return false };
    let Some(data) = tui.take_data(id) else { return false };
    let mut editor = match data.downcast::<Input>() {
        Ok(editor) => *editor,
        Err(other) => {
            tui.put_data(id, other);
            return false;
        }
    };
    let consumed = editor.handle_key(tui, key);
    tui.put_data(id, Box::new(editor));
    consumed
}

fn root_event(tui: &mut Tui, _target: HookTarget, key: Key) -> bool {
    if key == Key::CTRL_S {
        tui.set_running(false);
        return true;
    }
    false
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut tui = Tui::new(
        TuiConfig::new()
            .color(Color::new(Base::White, Base::Black))
            .event(root_event),
    )?;

    let backdrop = tui.parent_create(
        ParentConfig::new()
            .name("backdrop")
            .color(Color::new(Base::Magenta, Base::Green))
            .border(BorderConfig::solid(Color::NONE))
            .inflated()
            .padded()
            .pos(Pos::Center),
    );

    let banner = tui.parent_create(
        ParentConfig::new()
            .name("banner")
            .rect(Rect::new().w(Dim::Fill).h(Dim::Fixed(8)).y(-12))
            .color(Color::new(Base::Magenta, Base::Green))
            .border(BorderConfig::solid(Color::NONE))
            .padded()
            .pos(Pos::Center)
            .align(Align::Center),
    );

    let input_window = tui.child_text_create(
        banner,
        TextConfig::new()
            .name("input")
            .string("This is some text")
            .color(Color::new(Base::Black, Base::Cyan))
            .pos(Pos::End)
            .align(Align::Center)
            .event(input_window_event),
    )?;
    let editor = Input::new(100).bind(input_window);
    tui.put_data(input_window, Box::new(editor));

    let footer = tui.parent_create(
        ParentConfig::new()
            .name("footer")
            .rect(Rect::new().h(Dim::Fixed(1)).y(-1))
            .color(Color::new(Base::Magenta, Base::Green))
            .pos(Pos::Center)
            .align(Align::Between),
    );
    for label in ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"] {
        tui.child_text_create(
            footer,
            TextConfig::new()
                .string(label)
                .color(Color::new(Base::Black, Base::White))
                .pos(Pos::Center)
                .align(Align::Center),
        )?;
    }

    let fruit_box = tui.child_parent_create(
        backdrop,
        ParentConfig::new()
            .name("fruit")
            .color(Color::fg(Base::Red))
            .vertical()
            .pos(Pos::End)
            .align(Align::Between),
    )?;
    for line in ["[+] Apple", "[+] Pear\nnewline", "[+] Banana"] {
        tui.child_text_create(
            fruit_box,
            TextConfig::new()
                .string(line)
                .color(Color::bg(Base::Blue))
                .pos(Pos::Center)
                .align(Align::Center),
        )?;
    }

    let gear_box = tui.child_parent_create(
        backdrop,
        ParentConfig::new()
            .name("gear")
            .color(Color::new(Base::Red, Base::White))
            .border(BorderConfig::solid(Color::NONE))
            .vertical()
            .padded()
            .pos(Pos::End),
    )?;
    tui.child_text_create(
        gear_box,
        TextConfig::new()
            .name("gear-title")
            .string("GEAR")
            .rect(Rect::new().w(Dim::Fill).h(Dim::Fixed(1)).x(1).y(0))
            .color(Color::bg(Base::Magenta)),
    )?;
    for line in ["[+] Keyboard", "[+] Mouse", "[+] Computer\nnewline", "[+] Case", "[+] Voltage", "[+] Fan"] {
        tui.child_text_create(
            gear_box,
            TextConfig::new().string(line).color(Color::bg(Base::Blue)).align(Align::Start),
        )?;
    }

    tui.set_focus(Some(input_window));
    tui.run()
}
