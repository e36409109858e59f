//! Plain-text table of a board's properties.

use monopoly_rules::{Board, PropertyKind};

/// Render one line per property: name, archetype, price, and rent schedule.
pub fn render(board: &Board) -> String {
    let rules = board.rent_rules();
    let width = board
        .iter()
        .map(|(_, p)| p.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (id, property) in board.iter() {
        let (kind, rent) = match property.kind() {
            PropertyKind::Street(street) => {
                let rents = street
                    .rents()
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join("/");
                (street.group().to_string(), rents)
            }
            PropertyKind::Railroad => (
                "Railroad".to_string(),
                format!("{} doubling per railroad", rules.railroad_base_rent),
            ),
            PropertyKind::Utility => (
                "Utility".to_string(),
                format!(
                    "{}x or {}x dice",
                    rules.utility_single_factor, rules.utility_monopoly_factor
                ),
            ),
        };
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:<10}  ${:>4}  {}\n",
            id.0,
            property.name(),
            kind,
            property.price(),
            rent,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_standard_board() {
        let output = render(&Board::standard());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 28);
        assert_eq!(output.matches('\n').count(), 28);

        assert!(lines[0].contains("Mediterranean Avenue"));
        assert!(lines[0].contains("Brown"));
        assert!(lines[0].contains("2/10/30/90/160/250"));
        assert!(lines[2].contains("Reading Railroad"));
        assert!(lines[2].contains("25 doubling per railroad"));
        assert!(lines[7].contains("4x or 10x dice"));
        assert!(lines[27].contains("$ 400"));
    }
}
