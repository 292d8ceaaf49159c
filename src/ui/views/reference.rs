use crate::ui::card::Card;
use crate::ui::theme::Glyph;
use qcompass::Axis;

fn axis_card(axis: Axis, supports_unicode: bool) -> Card {
    let deg = Glyph::Degree.render(supports_unicode);
    let title = match axis {
        Axis::Qcad => "QCAD angles",
        Axis::Compass => "Compass bearings",
    };

    let mut card = Card::with_title(title);
    card.add_line(format!("0{} = {}, {}", deg, axis.zero(), axis.rotation()));
    card.add_empty();
    for landmark in axis.landmarks() {
        card.add_line(format!(
            "{:>3}{}  {}",
            landmark.degrees, deg, landmark.direction
        ));
    }
    card.add_empty();
    card.add_line(axis.formula());
    card
}

/// Landmark angles and formula reminders for both axes.
pub fn render_reference(supports_color: bool, supports_unicode: bool) -> String {
    Axis::ALL
        .iter()
        .map(|&axis| axis_card(axis, supports_unicode).render(supports_color, supports_unicode))
        .collect::<Vec<_>>()
        .join("\n")
}
