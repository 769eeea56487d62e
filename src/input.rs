use crate::forces::{Axis, ForceMode};
use crate::vec2::Vec2;
use crossterm::event::KeyCode;
use std::f32::consts::PI;

/// Every effect the simulation can be asked to perform, decoupled from any
/// particular input encoding. A scripted harness can drive these directly.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Command {
    Push(Vec2),
    Inflate,
    Deflate,
    OscillateRadial,
    Spin(f32),
    SpinWobble,
    Squeeze(Axis),
    Stretch(Axis),
    DragToward(f32),
    Vibrate(f32),
    Wave,
    Poke,
    MultiPoke,
    SetMode(ForceMode),
    ToggleGravity,
    WindEast,
    WindWest,
    ToggleTurbulence,
    CycleTheme,
    ToggleColor,
    ToggleGlow,
    ToggleHighlights,
    Reset,
    Quit,
}

pub(crate) fn map_key(code: KeyCode) -> Option<Command> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    let cmd = match c {
        'w' => Command::Push(Vec2::new(0.0, -2.0)),
        's' => Command::Push(Vec2::new(0.0, 2.0)),
        'a' => Command::Push(Vec2::new(-4.0, 0.0)),
        'd' => Command::Push(Vec2::new(4.0, 0.0)),
        'W' => Command::Push(Vec2::new(-2.0, -2.0)),
        'E' => Command::Push(Vec2::new(2.0, -2.0)),
        'X' => Command::Push(Vec2::new(-2.0, 2.0)),
        'C' => Command::Push(Vec2::new(2.0, 2.0)),
        'p' => Command::Inflate,
        'i' => Command::Deflate,
        'o' => Command::OscillateRadial,
        'l' => Command::Spin(0.8),
        'j' => Command::Spin(-0.8),
        'k' => Command::SpinWobble,
        'h' => Command::Squeeze(Axis::X),
        'v' => Command::Squeeze(Axis::Y),
        'H' => Command::Stretch(Axis::X),
        'V' => Command::Stretch(Axis::Y),
        'u' => Command::DragToward(0.0),
        'y' => Command::DragToward(PI),
        't' => Command::DragToward(PI / 2.0),
        'r' => Command::DragToward(-PI / 2.0),
        'b' => Command::Vibrate(3.0),
        'B' => Command::Vibrate(6.0),
        'n' => Command::Wave,
        ' ' => Command::Poke,
        'm' => Command::MultiPoke,
        '1' => Command::SetMode(ForceMode::Gentle),
        '2' => Command::SetMode(ForceMode::Normal),
        '3' => Command::SetMode(ForceMode::Strong),
        '4' => Command::SetMode(ForceMode::Extreme),
        'g' => Command::ToggleGravity,
        'f' => Command::WindEast,
        'F' => Command::WindWest,
        'T' => Command::ToggleTurbulence,
        'c' => Command::CycleTheme,
        'z' => Command::ToggleColor,
        'x' => Command::ToggleGlow,
        'Z' => Command::ToggleHighlights,
        '0' => Command::Reset,
        'q' => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_pushes() {
        assert!(matches!(
            map_key(KeyCode::Char('d')),
            Some(Command::Push(v)) if v.x == 4.0 && v.y == 0.0
        ));
        assert!(matches!(
            map_key(KeyCode::Char('w')),
            Some(Command::Push(v)) if v.y == -2.0
        ));
    }

    #[test]
    fn mode_keys_select_escalating_modes() {
        assert!(matches!(
            map_key(KeyCode::Char('1')),
            Some(Command::SetMode(ForceMode::Gentle))
        ));
        assert!(matches!(
            map_key(KeyCode::Char('4')),
            Some(Command::SetMode(ForceMode::Extreme))
        ));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert!(map_key(KeyCode::Char('e')).is_none());
        assert!(map_key(KeyCode::Up).is_none());
        assert!(map_key(KeyCode::Esc).is_none());
    }

    #[test]
    fn quit_and_reset_are_bound() {
        assert!(matches!(map_key(KeyCode::Char('q')), Some(Command::Quit)));
        assert!(matches!(map_key(KeyCode::Char('0')), Some(Command::Reset)));
    }
}
