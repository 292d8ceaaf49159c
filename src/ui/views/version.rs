use crate::ui::card::Card;

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut card = Card::with_title(format!("qcompass v{}", version));
    card.add_line("QCAD angle <-> compass bearing converter");
    card.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_renders_with_themed_borders() {
        let rendered = render_version("0.0.0", false, true);
        assert!(rendered.starts_with('╭'));
        assert!(rendered.contains("qcompass v0.0.0"));
    }
}
